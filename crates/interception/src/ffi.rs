//! WGL types and structures, plus the GL types from the `gl` bindings so the
//! trampolines can pull everything from one place.
#![allow(non_camel_case_types, non_snake_case)]

use std::ffi::{c_char, c_void};

pub use gl::types::*;

pub type BOOL = i32;
pub type UINT = u32;
pub type DWORD = u32;
pub type COLORREF = u32;
pub type HDC = *mut c_void;
pub type HGLRC = *mut c_void;
pub type LPCSTR = *const c_char;
pub type PROC = Option<unsafe extern "system" fn() -> isize>;

// Compatibility-profile pixel formats, absent from the core-profile bindings.
pub const COLOR_INDEX: GLenum = 0x1900;
pub const LUMINANCE: GLenum = 0x1909;
pub const LUMINANCE_ALPHA: GLenum = 0x190A;

#[repr(C)]
#[derive(Debug, Clone, Copy, Default)]
pub struct PIXELFORMATDESCRIPTOR {
    pub nSize: u16,
    pub nVersion: u16,
    pub dwFlags: DWORD,
    pub iPixelType: u8,
    pub cColorBits: u8,
    pub cRedBits: u8,
    pub cRedShift: u8,
    pub cGreenBits: u8,
    pub cGreenShift: u8,
    pub cBlueBits: u8,
    pub cBlueShift: u8,
    pub cAlphaBits: u8,
    pub cAlphaShift: u8,
    pub cAccumBits: u8,
    pub cAccumRedBits: u8,
    pub cAccumGreenBits: u8,
    pub cAccumBlueBits: u8,
    pub cAccumAlphaBits: u8,
    pub cDepthBits: u8,
    pub cStencilBits: u8,
    pub cAuxBuffers: u8,
    pub iLayerType: u8,
    pub bReserved: u8,
    pub dwLayerMask: DWORD,
    pub dwVisibleMask: DWORD,
    pub dwDamageMask: DWORD,
}

#[repr(C)]
#[derive(Debug, Clone, Copy, Default)]
pub struct LAYERPLANEDESCRIPTOR {
    pub nSize: u16,
    pub nVersion: u16,
    pub dwFlags: DWORD,
    pub iPixelType: u8,
    pub cColorBits: u8,
    pub cRedBits: u8,
    pub cRedShift: u8,
    pub cGreenBits: u8,
    pub cGreenShift: u8,
    pub cBlueBits: u8,
    pub cBlueShift: u8,
    pub cAlphaBits: u8,
    pub cAlphaShift: u8,
    pub cAccumBits: u8,
    pub cAccumRedBits: u8,
    pub cAccumGreenBits: u8,
    pub cAccumBlueBits: u8,
    pub cAccumAlphaBits: u8,
    pub cDepthBits: u8,
    pub cStencilBits: u8,
    pub cAuxBuffers: u8,
    pub iLayerPlane: u8,
    pub bReserved: u8,
    pub crTransparent: COLORREF,
}

#[repr(C)]
#[derive(Debug, Clone, Copy, Default)]
pub struct POINTFLOAT {
    pub x: f32,
    pub y: f32,
}

#[repr(C)]
#[derive(Debug, Clone, Copy, Default)]
pub struct GLYPHMETRICSFLOAT {
    pub gmfBlackBoxX: f32,
    pub gmfBlackBoxY: f32,
    pub gmfptGlyphOrigin: POINTFLOAT,
    pub gmfCellIncX: f32,
    pub gmfCellIncY: f32,
}

#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct WGLSWAP {
    pub hdc: HDC,
    pub uiFlags: UINT,
}
