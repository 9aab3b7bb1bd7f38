use std::env;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use log::LevelFilter;
use serde::Deserialize;

use crate::error::{ProxyError, Result};

pub const CONFIG_FILE_NAME: &str = "glproxy.toml";
pub const CONFIG_PATH_VAR: &str = "GLPROXY_CONFIG";

/// Debug switches read from `glproxy.toml` next to the shim. The path of the
/// real driver is deliberately not part of it.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ProxyConfig {
    #[serde(default = "default_log_file")]
    pub log_file: String,

    #[serde(default = "default_log_level")]
    pub log_level: String,

    #[serde(default)]
    pub dump_textures: bool,

    #[serde(default = "default_texture_dump_dir")]
    pub texture_dump_dir: String,

    #[serde(default = "default_true")]
    pub report: bool,

    #[serde(default = "default_true")]
    pub log_proc_queries: bool,

    #[serde(default = "default_stats_interval")]
    pub stats_interval: u64,
}

impl Default for ProxyConfig {
    fn default() -> Self {
        Self {
            log_file: default_log_file(),
            log_level: default_log_level(),
            dump_textures: false,
            texture_dump_dir: default_texture_dump_dir(),
            report: true,
            log_proc_queries: true,
            stats_interval: default_stats_interval(),
        }
    }
}

impl ProxyConfig {
    pub fn parse(contents: &str) -> Result<Self> {
        toml::from_str(contents).map_err(|e| ProxyError::Config(e.to_string()))
    }

    pub fn read(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::parse(&contents)
    }

    /// Reads the configuration for a shim living in `base_dir`.
    ///
    /// `GLPROXY_CONFIG` overrides the file location. A missing file yields
    /// defaults; an unreadable or malformed one yields defaults and the error.
    pub fn load(base_dir: &Path) -> (Self, Option<ProxyError>) {
        let path = env::var_os(CONFIG_PATH_VAR)
            .map(PathBuf::from)
            .unwrap_or_else(|| base_dir.join(CONFIG_FILE_NAME));

        if !path.exists() {
            return (Self::default(), None);
        }

        match Self::read(&path) {
            Ok(config) => (config, None),
            Err(e) => (Self::default(), Some(e)),
        }
    }

    /// Unknown level names fall back to `info`.
    pub fn level_filter(&self) -> LevelFilter {
        LevelFilter::from_str(self.log_level.trim()).unwrap_or(LevelFilter::Info)
    }
}

fn default_log_file() -> String {
    "GLProxy.log".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_texture_dump_dir() -> String {
    "TextureDump".to_string()
}

fn default_true() -> bool {
    true
}

fn default_stats_interval() -> u64 {
    600
}

#[cfg(test)]
mod tests {
    use log::LevelFilter;

    use crate::config::ProxyConfig;
    use crate::error::ProxyError;

    #[test]
    fn empty_file_gives_defaults() {
        let config = ProxyConfig::parse("").unwrap();

        assert_eq!(config, ProxyConfig::default());
        assert_eq!(config.log_file, "GLProxy.log");
        assert!(!config.dump_textures);
        assert!(config.report);
        assert_eq!(config.stats_interval, 600);
    }

    #[test]
    fn parses_debug_switches() {
        let config = ProxyConfig::parse(
            r#"
            log_level = "trace"
            dump_textures = true
            texture_dump_dir = "dumps"
            report = false
            stats_interval = 0
            "#,
        )
        .unwrap();

        assert!(config.dump_textures);
        assert_eq!(config.texture_dump_dir, "dumps");
        assert!(!config.report);
        assert_eq!(config.stats_interval, 0);
        assert_eq!(config.level_filter(), LevelFilter::Trace);
    }

    #[test]
    fn malformed_file_is_a_config_error() {
        let result = ProxyConfig::parse("dump_textures = \"maybe\"");

        assert!(matches!(result, Err(ProxyError::Config(_))));
    }

    #[test]
    fn unknown_level_falls_back_to_info() {
        let config = ProxyConfig {
            log_level: "chatty".to_string(),
            ..Default::default()
        };

        assert_eq!(config.level_filter(), LevelFilter::Info);
    }

    #[test]
    fn missing_file_gives_defaults_without_error() {
        let directory = std::env::temp_dir().join("glproxy-config-missing");

        let (config, error) = ProxyConfig::load(&directory);

        assert_eq!(config, ProxyConfig::default());
        assert!(error.is_none());
    }
}
