use std::ffi::CStr;
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard, PoisonError};

use log::{debug, info, warn};

use crate::error::{ProxyError, Result};

/// File name of the driver library being impersonated.
pub const REAL_LIBRARY_NAME: &str = "opengl32.dll";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ModuleHandle(pub usize);

impl fmt::Display for ModuleHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#010x}", self.0)
    }
}

/// OS module services the real-library loader is built on.
pub trait ModuleLoader: Send + Sync {
    /// Canonical location of the real driver. Never the application directory.
    fn system_library_path(&self) -> PathBuf;

    fn load(&self, path: &Path) -> std::result::Result<ModuleHandle, String>;

    fn free(&self, handle: ModuleHandle);

    fn symbol(&self, handle: ModuleHandle, name: &CStr) -> Option<usize>;

    /// Handle of the interception module itself.
    fn self_handle(&self) -> Option<ModuleHandle>;

    fn module_path(&self, handle: ModuleHandle) -> Option<PathBuf>;
}

struct LoadedModule {
    handle: ModuleHandle,
    path: PathBuf,
}

/// The genuine driver module. One per process, owned by the context.
pub struct RealLibrary {
    loader: Box<dyn ModuleLoader>,
    module: Mutex<Option<LoadedModule>>,
}

impl RealLibrary {
    pub fn new(loader: Box<dyn ModuleLoader>) -> Self {
        Self {
            loader,
            module: Mutex::new(None),
        }
    }

    pub fn load(&self) -> Result<()> {
        let mut module = self.lock();
        if module.is_some() {
            return Err(ProxyError::AlreadyLoaded);
        }

        *module = Some(self.load_module()?);
        Ok(())
    }

    /// Loads on first use; later calls are no-ops.
    pub fn ensure_loaded(&self) -> Result<()> {
        if self.is_loaded() {
            return Ok(());
        }

        match self.load() {
            Err(ProxyError::AlreadyLoaded) => Ok(()),
            result => result,
        }
    }

    pub fn is_loaded(&self) -> bool {
        self.lock().is_some()
    }

    pub fn handle(&self) -> Option<ModuleHandle> {
        self.lock().as_ref().map(|m| m.handle)
    }

    /// Address of an export of the real module, `None` if unloaded or absent.
    pub fn symbol(&self, name: &CStr) -> Option<usize> {
        let handle = match self.handle() {
            Some(handle) => handle,
            None => {
                warn!(
                    "Real {} not loaded. Can't get function {}",
                    REAL_LIBRARY_NAME,
                    name.to_string_lossy()
                );
                return None;
            }
        };

        let address = self.loader.symbol(handle, name);
        if address.is_none() {
            warn!("Unable to find {}", name.to_string_lossy());
        }

        address
    }

    /// Releases the module. Calling it again, or before a load, does nothing.
    pub fn unload(&self) {
        if let Some(module) = self.lock().take() {
            debug!("Unloading real {} ({}, {:?})", REAL_LIBRARY_NAME, module.handle, module.path);
            self.loader.free(module.handle);
        }
    }

    fn load_module(&self) -> Result<LoadedModule> {
        let path = self.loader.system_library_path();
        info!("Trying to load real {} from {:?}...", REAL_LIBRARY_NAME, path);

        let handle = self.loader
            .load(&path)
            .map_err(|reason| ProxyError::LibraryLoad { path: path.clone(), reason })?;

        let own_handle = self.loader.self_handle();
        if own_handle == Some(handle) {
            self.loader.free(handle);
            return Err(ProxyError::SelfLoad { path });
        }

        let path = match self.loader.module_path(handle) {
            Some(resolved) => resolved,
            None => {
                warn!("Unable to get real {} file path", REAL_LIBRARY_NAME);
                path
            }
        };

        info!("--------------------------------------------------------");
        info!("  Real {} is loaded!", REAL_LIBRARY_NAME);
        info!(
            "  OpenGL = {}, GLProxy = {}",
            handle,
            own_handle.map_or_else(|| String::from("unknown"), |h| h.to_string())
        );
        info!("  {} path: {:?}", REAL_LIBRARY_NAME, path);
        info!("--------------------------------------------------------");

        Ok(LoadedModule { handle, path })
    }

    fn lock(&self) -> MutexGuard<'_, Option<LoadedModule>> {
        self.module.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use std::collections::HashMap;
    use std::ffi::CStr;
    use std::path::{Path, PathBuf};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    use crate::error::ProxyError;
    use crate::library::{ModuleHandle, ModuleLoader, RealLibrary};

    /// Loader double with a fixed export table and call counters.
    #[derive(Default)]
    pub(crate) struct FakeLoader {
        pub handle: usize,
        pub own_handle: usize,
        pub fail_load: bool,
        pub exports: HashMap<String, usize>,
        pub loads: Arc<AtomicUsize>,
        pub frees: Arc<AtomicUsize>,
        pub lookups: Arc<AtomicUsize>,
    }

    impl FakeLoader {
        pub(crate) fn with_exports(exports: &[(&str, usize)]) -> Self {
            Self {
                handle: 0x1000,
                own_handle: 0x2000,
                exports: exports.iter().map(|(n, a)| (n.to_string(), *a)).collect(),
                ..Default::default()
            }
        }
    }

    impl ModuleLoader for FakeLoader {
        fn system_library_path(&self) -> PathBuf {
            PathBuf::from("C:\\Windows\\System32\\opengl32.dll")
        }

        fn load(&self, _path: &Path) -> Result<ModuleHandle, String> {
            self.loads.fetch_add(1, Ordering::SeqCst);
            if self.fail_load {
                return Err(String::from("The specified module could not be found."));
            }

            Ok(ModuleHandle(self.handle))
        }

        fn free(&self, _handle: ModuleHandle) {
            self.frees.fetch_add(1, Ordering::SeqCst);
        }

        fn symbol(&self, _handle: ModuleHandle, name: &CStr) -> Option<usize> {
            self.lookups.fetch_add(1, Ordering::SeqCst);
            self.exports.get(name.to_str().ok()?).copied()
        }

        fn self_handle(&self) -> Option<ModuleHandle> {
            Some(ModuleHandle(self.own_handle))
        }

        fn module_path(&self, _handle: ModuleHandle) -> Option<PathBuf> {
            None
        }
    }

    #[test]
    fn load_refuses_to_load_itself() {
        let loader = FakeLoader {
            handle: 0x2000,
            own_handle: 0x2000,
            ..Default::default()
        };
        let frees = loader.frees.clone();
        let library = RealLibrary::new(Box::new(loader));

        let result = library.load();

        assert!(matches!(result, Err(ProxyError::SelfLoad { .. })));
        assert!(!library.is_loaded());
        assert_eq!(frees.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn load_reports_loader_failure() {
        let loader = FakeLoader {
            fail_load: true,
            ..Default::default()
        };
        let library = RealLibrary::new(Box::new(loader));

        assert!(matches!(library.load(), Err(ProxyError::LibraryLoad { .. })));
        assert!(!library.is_loaded());
    }

    #[test]
    fn load_twice_is_an_error() {
        let library = RealLibrary::new(Box::new(FakeLoader::with_exports(&[])));

        library.load().unwrap();

        assert!(matches!(library.load(), Err(ProxyError::AlreadyLoaded)));
    }

    #[test]
    fn ensure_loaded_loads_once() {
        let loader = FakeLoader::with_exports(&[]);
        let loads = loader.loads.clone();
        let library = RealLibrary::new(Box::new(loader));

        library.ensure_loaded().unwrap();
        library.ensure_loaded().unwrap();

        assert_eq!(loads.load(Ordering::SeqCst), 1);
        assert_eq!(library.handle(), Some(ModuleHandle(0x1000)));
    }

    #[test]
    fn ensure_loaded_after_an_explicit_load_keeps_the_module() {
        let loader = FakeLoader::with_exports(&[("glEnable", 0x10)]);
        let loads = loader.loads.clone();
        let library = RealLibrary::new(Box::new(loader));

        library.load().unwrap();
        library.ensure_loaded().unwrap();

        assert_eq!(loads.load(Ordering::SeqCst), 1);
        assert_eq!(library.symbol(c"glEnable"), Some(0x10));
    }

    #[test]
    fn ensure_loaded_surfaces_load_failures() {
        let loader = FakeLoader {
            fail_load: true,
            ..Default::default()
        };
        let library = RealLibrary::new(Box::new(loader));

        assert!(matches!(library.ensure_loaded(), Err(ProxyError::LibraryLoad { .. })));
        assert!(!library.is_loaded());
    }

    #[test]
    fn symbol_is_none_when_not_loaded() {
        let library = RealLibrary::new(Box::new(FakeLoader::with_exports(&[("glEnable", 0x10)])));

        assert_eq!(library.symbol(c"glEnable"), None);
    }

    #[test]
    fn symbol_resolves_exports() {
        let library = RealLibrary::new(Box::new(FakeLoader::with_exports(&[("glEnable", 0x10)])));
        library.load().unwrap();

        assert_eq!(library.symbol(c"glEnable"), Some(0x10));
        assert_eq!(library.symbol(c"glDoesNotExist"), None);
    }

    #[test]
    fn unload_twice_is_a_no_op() {
        let loader = FakeLoader::with_exports(&[]);
        let frees = loader.frees.clone();
        let library = RealLibrary::new(Box::new(loader));
        library.load().unwrap();

        library.unload();
        library.unload();

        assert_eq!(frees.load(Ordering::SeqCst), 1);
        assert!(!library.is_loaded());
    }

    #[test]
    fn unload_before_load_is_a_no_op() {
        let loader = FakeLoader::with_exports(&[]);
        let frees = loader.frees.clone();
        let library = RealLibrary::new(Box::new(loader));

        library.unload();

        assert_eq!(frees.load(Ordering::SeqCst), 0);
    }
}
