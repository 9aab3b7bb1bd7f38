use std::ffi;
use std::path::{Path, PathBuf};

use windows::core::{PCSTR, PCWSTR};
use windows::Win32::Foundation::{HMODULE, MAX_PATH};
use windows::Win32::System::LibraryLoader::{
    DisableThreadLibraryCalls,
    FreeLibrary,
    GetModuleFileNameW,
    GetModuleHandleExW,
    GetProcAddress,
    LoadLibraryW,
    GET_MODULE_HANDLE_EX_FLAG_FROM_ADDRESS,
    GET_MODULE_HANDLE_EX_FLAG_UNCHANGED_REFCOUNT,
};
use windows::Win32::System::SystemInformation::GetSystemDirectoryW;

use crate::string::{from_wide, to_wide};

const FALLBACK_SYSTEM_DIRECTORY: &str = "C:\\Windows\\System32";

/// The OS system directory (`System32` or `SysWOW64` for 32-bit processes).
pub fn system_directory() -> PathBuf {
    let mut buffer = [0_u16; MAX_PATH as usize];
    let length = unsafe { GetSystemDirectoryW(Some(&mut buffer)) } as usize;

    if length == 0 || length > buffer.len() {
        log::warn!(
            "GetSystemDirectory returned an empty path, assuming {}",
            FALLBACK_SYSTEM_DIRECTORY
        );
        return PathBuf::from(FALLBACK_SYSTEM_DIRECTORY);
    }

    PathBuf::from(from_wide(&buffer[..length]))
}

pub fn load_library(path: &Path) -> Result<usize, windows::core::Error> {
    let wide_path = to_wide(path.as_os_str());
    let handle = unsafe { LoadLibraryW(PCWSTR(wide_path.as_ptr())) }?;

    Ok(handle.0 as usize)
}

pub fn free_library(base: usize) {
    unsafe {
        let _ = FreeLibrary(HMODULE(base as isize));
    }
}

/// Looks up an export by its NUL-terminated name.
pub fn get_proc_address(base: usize, name: &ffi::CStr) -> Option<usize> {
    let address = unsafe {
        GetProcAddress(HMODULE(base as isize), PCSTR::from_raw(name.as_ptr() as *const u8))
    };

    address.map(|f| f as usize)
}

/// Handle of the module this code was linked into.
pub fn current_module() -> Option<usize> {
    let mut handle = HMODULE::default();
    let anchor = current_module as *const ();

    unsafe {
        let _ = GetModuleHandleExW(
            GET_MODULE_HANDLE_EX_FLAG_FROM_ADDRESS | GET_MODULE_HANDLE_EX_FLAG_UNCHANGED_REFCOUNT,
            PCWSTR(anchor as *const u16),
            &mut handle as *mut HMODULE,
        );
    }

    match handle.0 {
        0 => None,
        base => Some(base as usize),
    }
}

pub fn module_file_name(base: usize) -> Option<PathBuf> {
    let mut buffer = [0_u16; 1024];
    let length = unsafe { GetModuleFileNameW(HMODULE(base as isize), &mut buffer) } as usize;

    if length == 0 || length >= buffer.len() {
        return None;
    }

    Some(PathBuf::from(from_wide(&buffer[..length])))
}

/// Directory holding the module, used to place logs and configuration next to it.
pub fn module_directory(base: usize) -> Option<PathBuf> {
    module_file_name(base)
        .and_then(|path| path.parent().map(Path::to_path_buf))
}

/// Stops the loader from sending `DLL_THREAD_ATTACH`/`DLL_THREAD_DETACH` to the module.
pub fn disable_thread_library_calls(base: usize) {
    unsafe {
        let _ = DisableThreadLibraryCalls(HMODULE(base as isize));
    }
}
