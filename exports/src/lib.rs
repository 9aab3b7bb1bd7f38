//! `opengl32.dll` stand-in. Every export forwards to the system driver; a
//! few of them also drive the render session on the way through.
#![allow(non_snake_case, clippy::missing_safety_doc, clippy::too_many_arguments)]

#[macro_use]
mod macros;

pub mod gl11;
pub mod hooked;
pub mod wgl;

pub use glproxy_interception::ffi;

#[cfg(windows)]
mod dll {
    use std::path::PathBuf;

    use log::{info, warn};

    use glproxy_interception::{context, ProxyConfig, ProxyContext};
    use glproxy_microsoft_runtime::module;

    #[glproxy_dll::entrypoint(detach = detach)]
    fn attach(base: usize) -> bool {
        let directory = module::module_directory(base).unwrap_or_else(|| PathBuf::from("."));
        let (config, config_error) = ProxyConfig::load(&directory);

        let log_file = directory.join(&config.log_file);
        if let Err(e) = glproxy_logging::init(&log_file, config.level_filter()) {
            eprintln!("GLProxy: unable to open {:?}: {}", log_file, e);
        }

        if let Some(e) = config_error {
            warn!("Falling back to the default configuration: {}", e);
        }

        module::disable_thread_library_calls(base);

        info!("GLProxy attached from {:?}", directory);
        context::install(ProxyContext::system(&directory, config));
        true
    }

    fn detach(_base: usize, terminating: bool) {
        if let Some(context) = context::try_current() {
            context.shutdown();

            // The driver may already be gone when the whole process exits.
            if !terminating {
                context.unload();
            }
        }

        glproxy_logging::flush();
    }
}
