use std::ffi::CStr;
use std::path::{Path, PathBuf};

use glproxy_microsoft_runtime::module;

use crate::library::{ModuleHandle, ModuleLoader, REAL_LIBRARY_NAME};

/// Win32 module loader. Always points at the system directory copy of the
/// driver so a shim sitting next to the application is never picked up.
pub struct SystemLoader;

impl ModuleLoader for SystemLoader {
    fn system_library_path(&self) -> PathBuf {
        module::system_directory().join(REAL_LIBRARY_NAME)
    }

    fn load(&self, path: &Path) -> Result<ModuleHandle, String> {
        module::load_library(path)
            .map(ModuleHandle)
            .map_err(|e| e.to_string())
    }

    fn free(&self, handle: ModuleHandle) {
        module::free_library(handle.0);
    }

    fn symbol(&self, handle: ModuleHandle, name: &CStr) -> Option<usize> {
        module::get_proc_address(handle.0, name)
    }

    fn self_handle(&self) -> Option<ModuleHandle> {
        module::current_module().map(ModuleHandle)
    }

    fn module_path(&self, handle: ModuleHandle) -> Option<PathBuf> {
        module::module_file_name(handle.0)
    }
}
