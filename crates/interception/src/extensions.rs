//! Second tier of GL functions used by the injected pipeline, obtained through
//! the driver's own `wglGetProcAddress` with a fallback to plain exports.
#![allow(non_snake_case)]

use std::collections::HashMap;
use std::ffi::{c_char, c_void, CStr};
use std::mem;

use log::{debug, warn};

use crate::error::{ProxyError, Result};
use crate::ffi::*;
use crate::library::RealLibrary;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Requirement {
    Required,
    Optional,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExtensionEntry {
    symbol: &'static str,
    pub requirement: Requirement,
}

impl ExtensionEntry {
    pub fn name(&self) -> &'static str {
        self.symbol.trim_end_matches('\0')
    }

    pub fn c_name(&self) -> Option<&'static CStr> {
        CStr::from_bytes_with_nul(self.symbol.as_bytes()).ok()
    }
}

/// Where an extension's address came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Source {
    ProcQuery,
    Export,
}

/// Looks functions up through the API's own query mechanism.
pub trait ProcQuery {
    fn query(&self, name: &CStr) -> Option<usize>;
}

/// The real driver's `wglGetProcAddress`.
pub struct WglProcQuery {
    get_proc_address: Option<unsafe extern "system" fn(LPCSTR) -> PROC>,
}

impl WglProcQuery {
    pub fn new(address: Option<usize>) -> Self {
        let get_proc_address = address.filter(|a| *a != 0).map(|a| unsafe {
            mem::transmute::<usize, unsafe extern "system" fn(LPCSTR) -> PROC>(a)
        });

        Self { get_proc_address }
    }
}

impl ProcQuery for WglProcQuery {
    fn query(&self, name: &CStr) -> Option<usize> {
        let get_proc_address = self.get_proc_address?;
        let address = unsafe { get_proc_address(name.as_ptr() as *const c_char) }? as usize;

        // Some ICDs signal failure with small integers or -1 instead of null.
        match address {
            0..=3 | usize::MAX => None,
            valid => Some(valid),
        }
    }
}

macro_rules! gl_extensions {
    ($( $requirement:ident fn $name:ident ( $($arg:ident : $ty:ty),* ) $(-> $ret:ty)? ; )*) => {
        /// Typed view over the resolved extension table.
        #[derive(Clone, Copy, Default)]
        pub struct GlExtensions {
            $( pub $name: Option<unsafe extern "system" fn($($ty),*) $(-> $ret)?>, )*
        }

        impl GlExtensions {
            pub const ENTRIES: &'static [ExtensionEntry] = &[
                $(
                    ExtensionEntry {
                        symbol: concat!(stringify!($name), "\0"),
                        requirement: Requirement::$requirement,
                    },
                )*
            ];

            fn from_addresses(addresses: &HashMap<&'static str, usize>) -> Self {
                Self {
                    $(
                        $name: addresses.get(stringify!($name)).map(|address| unsafe {
                            mem::transmute::<usize, unsafe extern "system" fn($($ty),*) $(-> $ret)?>(*address)
                        }),
                    )*
                }
            }
        }
    };
}

gl_extensions! {
    Required fn glDisable(cap: GLenum);
    Required fn glEnable(cap: GLenum);
    Required fn glIsEnabled(cap: GLenum) -> GLboolean;
    Required fn glPushAttrib(mask: GLbitfield);
    Required fn glPopAttrib();
    Required fn glPushClientAttrib(mask: GLbitfield);
    Required fn glPopClientAttrib();
    Required fn glGetString(name: GLenum) -> *const GLubyte;
    Required fn glGetError() -> GLenum;
    Required fn glGetIntegerv(pname: GLenum, params: *mut GLint);
    Required fn glViewport(x: GLint, y: GLint, width: GLsizei, height: GLsizei);
    Required fn glScissor(x: GLint, y: GLint, width: GLsizei, height: GLsizei);
    Required fn glReadBuffer(mode: GLenum);
    Required fn glReadPixels(x: GLint, y: GLint, width: GLsizei, height: GLsizei, format: GLenum, type_: GLenum, pixels: *mut c_void);
    Required fn glClear(mask: GLbitfield);
    Required fn glClearColor(red: GLclampf, green: GLclampf, blue: GLclampf, alpha: GLclampf);
    Required fn glBlendFunc(sfactor: GLenum, dfactor: GLenum);
    Required fn glPolygonMode(face: GLenum, mode: GLenum);
    Required fn glMatrixMode(mode: GLenum);
    Required fn glLoadIdentity();
    Required fn glPushMatrix();
    Required fn glPopMatrix();
    Required fn glOrtho(left: GLdouble, right: GLdouble, bottom: GLdouble, top: GLdouble, z_near: GLdouble, z_far: GLdouble);
    Required fn glDrawArrays(mode: GLenum, first: GLint, count: GLsizei);
    Required fn glDrawElements(mode: GLenum, count: GLsizei, type_: GLenum, indices: *const c_void);
    Required fn glEnableClientState(array: GLenum);
    Required fn glDisableClientState(array: GLenum);
    Required fn glVertexPointer(size: GLint, type_: GLenum, stride: GLsizei, pointer: *const c_void);
    Required fn glColorPointer(size: GLint, type_: GLenum, stride: GLsizei, pointer: *const c_void);
    Required fn glTexCoordPointer(size: GLint, type_: GLenum, stride: GLsizei, pointer: *const c_void);
    Required fn glNormalPointer(type_: GLenum, stride: GLsizei, pointer: *const c_void);
    Required fn glBindTexture(target: GLenum, texture: GLuint);
    Required fn glGenTextures(n: GLsizei, textures: *mut GLuint);
    Required fn glDeleteTextures(n: GLsizei, textures: *const GLuint);
    Required fn glTexImage2D(target: GLenum, level: GLint, internal_format: GLint, width: GLsizei, height: GLsizei, border: GLint, format: GLenum, type_: GLenum, pixels: *const c_void);
    Required fn glTexParameteri(target: GLenum, pname: GLenum, param: GLint);
    Required fn glTexParameterf(target: GLenum, pname: GLenum, param: GLfloat);
    Required fn glPixelStorei(pname: GLenum, param: GLint);
    Required fn glGetTexImage(target: GLenum, level: GLint, format: GLenum, type_: GLenum, pixels: *mut c_void);

    Optional fn glActiveTexture(texture: GLenum);
    Optional fn glTexStorage2D(target: GLenum, levels: GLsizei, internal_format: GLenum, width: GLsizei, height: GLsizei);
    Optional fn glGenerateMipmap(target: GLenum);
    Optional fn glBlendEquation(mode: GLenum);
    Optional fn glBlendEquationSeparate(mode_rgb: GLenum, mode_alpha: GLenum);
    Optional fn glBlendFuncSeparate(src_rgb: GLenum, dst_rgb: GLenum, src_alpha: GLenum, dst_alpha: GLenum);

    Optional fn glCreateProgram() -> GLuint;
    Optional fn glCreateShader(type_: GLenum) -> GLuint;
    Optional fn glAttachShader(program: GLuint, shader: GLuint);
    Optional fn glCompileShader(shader: GLuint);
    Optional fn glDeleteProgram(program: GLuint);
    Optional fn glDeleteShader(shader: GLuint);
    Optional fn glDetachShader(program: GLuint, shader: GLuint);
    Optional fn glLinkProgram(program: GLuint);
    Optional fn glProgramParameteri(program: GLuint, pname: GLenum, value: GLint);
    Optional fn glShaderSource(shader: GLuint, count: GLsizei, string: *const *const GLchar, length: *const GLint);
    Optional fn glUseProgram(program: GLuint);
    Optional fn glGetProgramInfoLog(program: GLuint, buf_size: GLsizei, length: *mut GLsizei, info_log: *mut GLchar);
    Optional fn glGetShaderInfoLog(shader: GLuint, buf_size: GLsizei, length: *mut GLsizei, info_log: *mut GLchar);
    Optional fn glGetProgramiv(program: GLuint, pname: GLenum, params: *mut GLint);
    Optional fn glGetShaderiv(shader: GLuint, pname: GLenum, params: *mut GLint);
    Optional fn glGetUniformLocation(program: GLuint, name: *const GLchar) -> GLint;
    Optional fn glGetAttribLocation(program: GLuint, name: *const GLchar) -> GLint;
    Optional fn glUniform1f(location: GLint, v0: GLfloat);
    Optional fn glUniform2f(location: GLint, v0: GLfloat, v1: GLfloat);
    Optional fn glUniform3f(location: GLint, v0: GLfloat, v1: GLfloat, v2: GLfloat);
    Optional fn glUniform4f(location: GLint, v0: GLfloat, v1: GLfloat, v2: GLfloat, v3: GLfloat);
    Optional fn glUniform1i(location: GLint, v0: GLint);
    Optional fn glUniform2i(location: GLint, v0: GLint, v1: GLint);
    Optional fn glUniform3i(location: GLint, v0: GLint, v1: GLint, v2: GLint);
    Optional fn glUniform4i(location: GLint, v0: GLint, v1: GLint, v2: GLint, v3: GLint);
    Optional fn glUniformMatrix3fv(location: GLint, count: GLsizei, transpose: GLboolean, value: *const GLfloat);
    Optional fn glUniformMatrix4fv(location: GLint, count: GLsizei, transpose: GLboolean, value: *const GLfloat);

    Optional fn glIsFramebuffer(framebuffer: GLuint) -> GLboolean;
    Optional fn glBindFramebuffer(target: GLenum, framebuffer: GLuint);
    Optional fn glDeleteFramebuffers(n: GLsizei, framebuffers: *const GLuint);
    Optional fn glGenFramebuffers(n: GLsizei, framebuffers: *mut GLuint);
    Optional fn glCheckFramebufferStatus(target: GLenum) -> GLenum;
    Optional fn glFramebufferTexture2D(target: GLenum, attachment: GLenum, textarget: GLenum, texture: GLuint, level: GLint);
    Optional fn glBlitFramebuffer(src_x0: GLint, src_y0: GLint, src_x1: GLint, src_y1: GLint, dst_x0: GLint, dst_y0: GLint, dst_x1: GLint, dst_y1: GLint, mask: GLbitfield, filter: GLenum);

    Optional fn glBindVertexArray(array: GLuint);
    Optional fn glGenVertexArrays(n: GLsizei, arrays: *mut GLuint);
    Optional fn glDeleteVertexArrays(n: GLsizei, arrays: *const GLuint);
    Optional fn glBindBuffer(target: GLenum, buffer: GLuint);
    Optional fn glGenBuffers(n: GLsizei, buffers: *mut GLuint);
    Optional fn glDeleteBuffers(n: GLsizei, buffers: *const GLuint);
    Optional fn glBufferData(target: GLenum, size: GLsizeiptr, data: *const c_void, usage: GLenum);
    Optional fn glEnableVertexAttribArray(index: GLuint);
    Optional fn glVertexAttribPointer(index: GLuint, size: GLint, type_: GLenum, normalized: GLboolean, stride: GLsizei, pointer: *const c_void);
    Optional fn glDrawElementsBaseVertex(mode: GLenum, count: GLsizei, type_: GLenum, indices: *const c_void, base_vertex: GLint);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolution {
    pub entry: ExtensionEntry,
    pub address: Option<usize>,
    pub source: Option<Source>,
}

/// The resolved extension table, built once per process.
pub struct Extensions {
    resolutions: Vec<Resolution>,
    addresses: HashMap<&'static str, usize>,
    gl: GlExtensions,
}

impl Extensions {
    pub fn gl(&self) -> &GlExtensions {
        &self.gl
    }

    pub fn resolutions(&self) -> &[Resolution] {
        &self.resolutions
    }

    pub fn address_of(&self, name: &str) -> Option<usize> {
        self.addresses.get(name).copied()
    }
}

fn resolve_entry(entry: ExtensionEntry, query: &dyn ProcQuery, library: &RealLibrary) -> Resolution {
    let found = entry.c_name().and_then(|name| {
        query
            .query(name)
            .map(|address| (address, Source::ProcQuery))
            .or_else(|| library.symbol(name).map(|address| (address, Source::Export)))
    });

    match found {
        Some((address, source)) => {
            debug!("Resolved ext func '{}' ({:#010x}) via {:?}", entry.name(), address, source);
            Resolution { entry, address: Some(address), source: Some(source) }
        }
        None => {
            warn!("Failed to load ext func '{}'!", entry.name());
            Resolution { entry, address: None, source: None }
        }
    }
}

/// Resolves every entry of [`GlExtensions::ENTRIES`]. Each entry is looked up
/// on its own; missing optional entries only produce a warning, missing
/// required ones fail the whole table.
pub fn resolve_all(query: &dyn ProcQuery, library: &RealLibrary) -> Result<Extensions> {
    let resolutions: Vec<Resolution> = GlExtensions::ENTRIES
        .iter()
        .map(|entry| resolve_entry(*entry, query, library))
        .collect();

    let missing: Vec<&'static str> = resolutions
        .iter()
        .filter(|r| r.address.is_none() && r.entry.requirement == Requirement::Required)
        .map(|r| r.entry.name())
        .collect();

    if !missing.is_empty() {
        return Err(ProxyError::MissingRequiredExtensions(missing));
    }

    let addresses: HashMap<&'static str, usize> = resolutions
        .iter()
        .filter_map(|r| r.address.map(|address| (r.entry.name(), address)))
        .collect();

    let gl = GlExtensions::from_addresses(&addresses);
    debug!("{} of {} ext funcs resolved", addresses.len(), resolutions.len());

    Ok(Extensions { resolutions, addresses, gl })
}
