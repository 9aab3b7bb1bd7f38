#![allow(dead_code)]

use std::collections::HashMap;
use std::ffi::{c_void, CStr};
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard, OnceLock, PoisonError};

use glproxy_interception::ffi::*;
use glproxy_interception::{context, GlExtensions, ModuleHandle, ModuleLoader, ProxyConfig, ProxyContext};

static CALLS: Mutex<Vec<String>> = Mutex::new(Vec::new());
static LOOKUPS: Mutex<Vec<String>> = Mutex::new(Vec::new());
static SERIAL: Mutex<()> = Mutex::new(());

pub fn record(call: impl Into<String>) {
    CALLS.lock().unwrap_or_else(PoisonError::into_inner).push(call.into());
}

pub fn take_calls() -> Vec<String> {
    std::mem::take(&mut *CALLS.lock().unwrap_or_else(PoisonError::into_inner))
}

pub fn lookups_of(name: &str) -> usize {
    LOOKUPS
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .iter()
        .filter(|n| *n == name)
        .count()
}

pub fn calls_of(context: &ProxyContext, name: &str) -> u64 {
    context
        .registry()
        .snapshot()
        .iter()
        .find(|entry| entry.name() == name)
        .map_or(0, |entry| entry.calls())
}

/// Tests in one binary share the installed context, so they take turns.
pub fn serial() -> MutexGuard<'static, ()> {
    SERIAL.lock().unwrap_or_else(PoisonError::into_inner)
}

extern "system" fn real_gl_clear(mask: GLbitfield) {
    record(format!("glClear({:#x})", mask));
}

extern "system" fn real_gl_draw_arrays(mode: GLenum, first: GLint, count: GLsizei) {
    record(format!("glDrawArrays({}, {}, {})", mode, first, count));
}

extern "system" fn real_gl_get_error() -> GLenum {
    record("glGetError");
    0x0502
}

extern "system" fn real_gl_vertex3f(x: GLfloat, y: GLfloat, z: GLfloat) {
    record(format!("glVertex3f({}, {}, {})", x, y, z));
}

extern "system" fn real_gl_get_integerv(pname: GLenum, params: *mut GLint) {
    // The texture hook asks for the unpack binding on every captured upload.
    if pname == gl::PIXEL_UNPACK_BUFFER_BINDING {
        unsafe { *params = 0 };
        return;
    }

    record(format!("glGetIntegerv({:#x})", pname));
    unsafe { *params = 42 };
}

extern "system" fn real_gl_is_enabled(cap: GLenum) -> GLboolean {
    (cap == 0x0B71) as GLboolean
}

extern "system" fn real_gl_get_string(_name: GLenum) -> *const GLubyte {
    b"Mock Driver\0".as_ptr()
}

extern "system" fn real_gl_tex_image_2d(
    _target: GLenum,
    _level: GLint,
    _internal_format: GLint,
    width: GLsizei,
    height: GLsizei,
    _border: GLint,
    _format: GLenum,
    _type: GLenum,
    _pixels: *const c_void,
) {
    record(format!("glTexImage2D({}x{})", width, height));
}

extern "system" fn real_wgl_swap_buffers(_hdc: HDC) -> BOOL {
    record("wglSwapBuffers");
    1
}

extern "system" fn real_wgl_swap_layer_buffers(_hdc: HDC, planes: UINT) -> BOOL {
    record(format!("wglSwapLayerBuffers({})", planes));
    planes as BOOL
}

extern "system" fn real_wgl_delete_context(hglrc: HGLRC) -> BOOL {
    record("wglDeleteContext");
    (!hglrc.is_null()) as BOOL
}

/// What the mock driver hands out for `glCreateProgram`.
pub extern "system" fn driver_create_program() -> isize {
    0x51
}

unsafe fn proc_of(name: LPCSTR) -> PROC {
    if name.is_null() {
        return None;
    }

    match CStr::from_ptr(name).to_bytes() {
        b"glCreateProgram" => Some(driver_create_program as unsafe extern "system" fn() -> isize),
        _ => None,
    }
}

extern "system" fn real_wgl_get_proc_address(name: LPCSTR) -> PROC {
    unsafe { proc_of(name) }
}

extern "system" fn real_wgl_get_default_proc_address(name: LPCSTR) -> PROC {
    record("wglGetDefaultProcAddress");
    unsafe { proc_of(name) }
}

extern "system" fn never_called() {
    record("unexpected call");
}

/// Stand-in for the system driver, exporting recording functions.
pub struct MockDriver;

impl MockDriver {
    fn export(name: &str) -> Option<usize> {
        let address = match name {
            "glClear" => real_gl_clear as usize,
            "glDrawArrays" => real_gl_draw_arrays as usize,
            "glGetError" => real_gl_get_error as usize,
            "glVertex3f" => real_gl_vertex3f as usize,
            "glGetIntegerv" => real_gl_get_integerv as usize,
            "glIsEnabled" => real_gl_is_enabled as usize,
            "glGetString" => real_gl_get_string as usize,
            "glTexImage2D" => real_gl_tex_image_2d as usize,
            "wglSwapBuffers" => real_wgl_swap_buffers as usize,
            "wglSwapLayerBuffers" => real_wgl_swap_layer_buffers as usize,
            "wglDeleteContext" => real_wgl_delete_context as usize,
            "wglGetProcAddress" => real_wgl_get_proc_address as usize,
            "wglGetDefaultProcAddress" => real_wgl_get_default_proc_address as usize,
            other if GlExtensions::ENTRIES.iter().any(|e| e.name() == other) => never_called as usize,
            _ => return None,
        };

        Some(address)
    }
}

impl ModuleLoader for MockDriver {
    fn system_library_path(&self) -> PathBuf {
        PathBuf::from("C:\\Windows\\System32\\opengl32.dll")
    }

    fn load(&self, _path: &Path) -> Result<ModuleHandle, String> {
        Ok(ModuleHandle(0x1000))
    }

    fn free(&self, _handle: ModuleHandle) {}

    fn symbol(&self, _handle: ModuleHandle, name: &CStr) -> Option<usize> {
        let name = name.to_str().ok()?;
        LOOKUPS
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(name.to_string());

        Self::export(name)
    }

    fn self_handle(&self) -> Option<ModuleHandle> {
        Some(ModuleHandle(0x2000))
    }

    fn module_path(&self, _handle: ModuleHandle) -> Option<PathBuf> {
        None
    }
}

/// Installs the mock-backed context once per test binary.
pub fn install(build: impl FnOnce(ProxyContext) -> ProxyContext) -> &'static ProxyContext {
    static INSTALLED: OnceLock<()> = OnceLock::new();

    INSTALLED.get_or_init(|| {
        context::install(build(ProxyContext::new(Box::new(MockDriver), ProxyConfig::default())));
    });

    context::current()
}
