use serde::Deserialize;
use std::path::PathBuf;

/// Server configuration, read once at startup.
///
/// Loaded from an optional YAML file (path in the `STATICD_CONFIG` env var,
/// `staticd.yaml` by default). A missing file yields the built-in defaults;
/// an unreadable or invalid file is logged and also yields the defaults.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub static_files: StaticFilesConfig,
    pub mime: MimeConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Address the listener binds to.
    pub listen_addr: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StaticFilesConfig {
    /// Directory request targets are resolved against. The target is
    /// appended to this prefix verbatim, with no normalization.
    pub root: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct MimeConfig {
    /// Optional mime.types-style file mapping extensions to MIME types.
    /// Without it every lookup falls back to application/octet-stream.
    pub file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            static_files: StaticFilesConfig::default(),
            mime: MimeConfig::default(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen_addr: "127.0.0.1:6789".to_string(),
        }
    }
}

impl Default for StaticFilesConfig {
    fn default() -> Self {
        Self {
            root: ".".to_string(),
        }
    }
}

impl Default for MimeConfig {
    fn default() -> Self {
        Self { file: None }
    }
}

impl Config {
    pub fn load() -> Self {
        let path = std::env::var("STATICD_CONFIG")
            .unwrap_or_else(|_| "staticd.yaml".to_string());

        let mut cfg = match std::fs::read_to_string(&path) {
            Ok(text) => match serde_yaml::from_str::<Config>(&text) {
                Ok(cfg) => cfg,
                Err(e) => {
                    tracing::warn!("Invalid config file {}: {}, using defaults", path, e);
                    Config::default()
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Config::default(),
            Err(e) => {
                tracing::warn!("Cannot read config file {}: {}, using defaults", path, e);
                Config::default()
            }
        };

        // LISTEN wins over the file
        if let Ok(addr) = std::env::var("LISTEN") {
            cfg.server.listen_addr = addr;
        }

        cfg
    }
}
