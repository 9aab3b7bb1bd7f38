pub mod config;
pub mod context;
pub mod entry;
pub mod error;
pub mod extensions;
pub mod fatal;
pub mod ffi;
pub mod library;
pub mod registry;
pub mod report;
pub mod session;
pub mod stats;
pub mod textures;

#[cfg(windows)]
pub mod system;

pub use config::ProxyConfig;
pub use context::ProxyContext;
pub use entry::EntryPoint;
pub use error::{ProxyError, Result};
pub use extensions::{GlExtensions, ProcQuery};
pub use library::{ModuleHandle, ModuleLoader, RealLibrary};
pub use session::{FrameBoundary, RenderPipeline, RenderState, Session};
pub use textures::{TextureSink, TextureUpload};
