//! Trampolines that drive the render session before forwarding.

use std::ffi::c_void;

use glproxy_interception::context;
use glproxy_interception::ffi::*;

/// Frame and session start anchor.
#[no_mangle]
pub unsafe extern "system" fn glClear(mask: GLbitfield) {
    let real = real_entry_point!(glClear as unsafe extern "system" fn(GLbitfield));

    context::current().before_clear();
    real(mask)
}

#[no_mangle]
pub unsafe extern "system" fn glTexImage2D(
    target: GLenum,
    level: GLint,
    internal_format: GLint,
    width: GLsizei,
    height: GLsizei,
    border: GLint,
    format: GLenum,
    type_: GLenum,
    pixels: *const c_void,
) {
    let real = real_entry_point!(glTexImage2D as unsafe extern "system" fn(
        GLenum, GLint, GLint, GLsizei, GLsizei, GLint, GLenum, GLenum, *const c_void
    ));

    context::current().before_texture_upload(
        target, level, internal_format, width, height, border, format, type_, pixels,
    );

    real(target, level, internal_format, width, height, border, format, type_, pixels)
}

/// The host presents finished frames through layer swaps; the end-of-frame
/// work has to land on the frame about to be shown.
#[no_mangle]
pub unsafe extern "system" fn wglSwapLayerBuffers(hdc: HDC, planes: UINT) -> BOOL {
    let real = real_entry_point!(wglSwapLayerBuffers as unsafe extern "system" fn(HDC, UINT) -> BOOL);

    context::current().before_present();
    real(hdc, planes)
}

#[no_mangle]
pub unsafe extern "system" fn wglSwapBuffers(hdc: HDC) -> BOOL {
    let real = real_entry_point!(wglSwapBuffers as unsafe extern "system" fn(HDC) -> BOOL);

    context::current().before_present();
    real(hdc)
}

/// Application shutdown or window minimized.
#[no_mangle]
pub unsafe extern "system" fn wglDeleteContext(hglrc: HGLRC) -> BOOL {
    let real = real_entry_point!(wglDeleteContext as unsafe extern "system" fn(HGLRC) -> BOOL);

    context::current().before_context_teardown();
    real(hglrc)
}

#[no_mangle]
pub unsafe extern "system" fn wglGetProcAddress(name: LPCSTR) -> PROC {
    let real = real_entry_point!(wglGetProcAddress as unsafe extern "system" fn(LPCSTR) -> PROC);

    context::current().before_proc_query("wglGetProcAddress", name);
    real(name)
}

// Undocumented and rarely called, logged for completeness.
#[no_mangle]
pub unsafe extern "system" fn wglGetDefaultProcAddress(name: LPCSTR) -> PROC {
    let real = real_entry_point!(wglGetDefaultProcAddress as unsafe extern "system" fn(LPCSTR) -> PROC);

    context::current().before_proc_query("wglGetDefaultProcAddress", name);
    real(name)
}
