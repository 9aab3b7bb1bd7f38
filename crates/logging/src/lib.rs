use std::path::Path;

use log::*;
use log4rs::*;
use log4rs::append::file::FileAppender;
use log4rs::encode::pattern::PatternEncoder;
use log4rs::append::console::ConsoleAppender;
use log4rs::config::{Appender, Config, Root};

const PATTERN: &str = "GLProxy | {d(%Y-%m-%d %H:%M:%S)} | {({l}):5.5} | {m}{n}";

#[derive(Debug, thiserror::Error)]
pub enum LoggingError {
    #[error("unable to open log file: {0}")]
    File(#[from] std::io::Error),
    #[error("invalid logger configuration: {0}")]
    Config(String),
    #[error("a global logger is already installed")]
    AlreadyInstalled(#[from] SetLoggerError),
}

/// Routes the `log` facade to `file` (truncated) and the console.
pub fn init(file: &Path, level: LevelFilter) -> Result<(), LoggingError> {
    let stdout = ConsoleAppender::builder()
        .encoder(Box::new(PatternEncoder::new(PATTERN)))
        .build();

    let file = FileAppender::builder()
        .encoder(Box::new(PatternEncoder::new(PATTERN)))
        .append(false)
        .build(file)?;

    let config = Config::builder()
        .appender(Appender::builder().build("stdout", Box::new(stdout)))
        .appender(Appender::builder().build("file", Box::new(file)))
        .build(
            Root::builder()
                .appender("stdout")
                .appender("file")
                .build(level),
        )
        .map_err(|e| LoggingError::Config(e.to_string()))?;

    init_config(config)?;

    log_panics::init();

    Ok(())
}

pub fn flush() {
    logger().flush();
}
