use log::error;

use crate::error::ProxyError;

const DIALOG_CAPTION: &str = "GLProxy Fatal Error";

/// Logs `error`, tells the user about it and ends the process.
///
/// Used for conditions the host cannot survive, e.g. running without a real
/// driver behind the trampolines.
pub fn terminate(error: &ProxyError) -> ! {
    error!("GLProxy fatal error: {}", error);
    glproxy_logging::flush();

    #[cfg(windows)]
    glproxy_microsoft_runtime::dialog::show_error(DIALOG_CAPTION, &error.to_string());

    #[cfg(not(windows))]
    eprintln!("{}: {}", DIALOG_CAPTION, error);

    std::process::exit(1);
}
