//! WGL context-management exports that are forwarded untouched.

use std::ffi::c_int;

use glproxy_interception::ffi::*;

gl_entry_points! {
    fn wglChoosePixelFormat(hdc: HDC, pfd: *const PIXELFORMATDESCRIPTOR) -> c_int;
    fn wglCopyContext(hglrc1: HGLRC, hglrc2: HGLRC, flags: UINT) -> BOOL;
    fn wglCreateContext(hdc: HDC) -> HGLRC;
    fn wglCreateLayerContext(hdc: HDC, layer_plane: c_int) -> HGLRC;
    fn wglDescribeLayerPlane(hdc: HDC, pixel_format: c_int, layer_plane: c_int, bytes: UINT, lpd: *mut LAYERPLANEDESCRIPTOR) -> BOOL;
    fn wglDescribePixelFormat(hdc: HDC, pixel_format: c_int, bytes: UINT, pfd: *mut PIXELFORMATDESCRIPTOR) -> c_int;
    fn wglGetCurrentContext() -> HGLRC;
    fn wglGetCurrentDC() -> HDC;
    fn wglGetLayerPaletteEntries(hdc: HDC, layer_plane: c_int, start: c_int, entries: c_int, colors: *mut COLORREF) -> c_int;
    fn wglGetPixelFormat(hdc: HDC) -> c_int;
    fn wglMakeCurrent(hdc: HDC, hglrc: HGLRC) -> BOOL;
    fn wglRealizeLayerPalette(hdc: HDC, layer_plane: c_int, realize: BOOL) -> BOOL;
    fn wglSetLayerPaletteEntries(hdc: HDC, layer_plane: c_int, start: c_int, entries: c_int, colors: *const COLORREF) -> c_int;
    fn wglSetPixelFormat(hdc: HDC, pixel_format: c_int, pfd: *const PIXELFORMATDESCRIPTOR) -> BOOL;
    fn wglShareLists(hglrc1: HGLRC, hglrc2: HGLRC) -> BOOL;
    fn wglSwapMultipleBuffers(count: UINT, swaps: *const WGLSWAP) -> DWORD;
    fn wglUseFontBitmapsA(hdc: HDC, first: DWORD, count: DWORD, list_base: DWORD) -> BOOL;
    fn wglUseFontBitmapsW(hdc: HDC, first: DWORD, count: DWORD, list_base: DWORD) -> BOOL;
    fn wglUseFontOutlinesA(hdc: HDC, first: DWORD, count: DWORD, list_base: DWORD, deviation: f32, extrusion: f32, format: c_int, gmf: *mut GLYPHMETRICSFLOAT) -> BOOL;
    fn wglUseFontOutlinesW(hdc: HDC, first: DWORD, count: DWORD, list_base: DWORD, deviation: f32, extrusion: f32, format: c_int, gmf: *mut GLYPHMETRICSFLOAT) -> BOOL;
}
