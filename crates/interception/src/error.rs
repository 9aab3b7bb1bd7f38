use std::io;
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ProxyError {
    #[error("unable to load the real OpenGL DLL from {path:?}: {reason}")]
    LibraryLoad { path: PathBuf, reason: String },
    #[error("trying to load itself as the real opengl32.dll ({path:?})")]
    SelfLoad { path: PathBuf },
    #[error("the real OpenGL DLL is already loaded")]
    AlreadyLoaded,
    #[error("entry point {0} is missing from the real OpenGL DLL")]
    MissingEntryPoint(String),
    #[error("required GL functions could not be resolved: {}", .0.join(", "))]
    MissingRequiredExtensions(Vec<&'static str>),
    #[error("invalid configuration: {0}")]
    Config(String),
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error("no interception context was installed for this process")]
    NoContext,
}

pub type Result<T> = std::result::Result<T, ProxyError>;
