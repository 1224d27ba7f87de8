//! Layered service configuration.
//!
//! Values come from `config/default.toml` (optional) overridden by
//! `IMPRINT__`-prefixed environment variables, e.g.
//! `IMPRINT__SERVER__PORT=8080`. Every field has a default, so the service
//! starts with no configuration at all.

use serde::Deserialize;
use std::path::PathBuf;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub server: ServerSettings,
    pub fonts: FontSettings,
    pub outputs: OutputSettings,
    pub fetch: FetchSettings,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FontSettings {
    /// Directory fonts are resolved in, keyed by filename.
    pub directory: PathBuf,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct OutputSettings {
    /// Directory rendered images are written to.
    pub directory: PathBuf,
    /// Base URL under which the output directory is served.
    pub public_base_url: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FetchSettings {
    /// Outbound image fetch timeout, in seconds.
    pub timeout_secs: u64,
    /// User-Agent for the outbound fetch. Some image hosts reject requests
    /// carrying a default client agent.
    pub user_agent: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            server: ServerSettings::default(),
            fonts: FontSettings::default(),
            outputs: OutputSettings::default(),
            fetch: FetchSettings::default(),
        }
    }
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 4000,
        }
    }
}

impl Default for FontSettings {
    fn default() -> Self {
        Self {
            directory: PathBuf::from("assets/fonts"),
        }
    }
}

impl Default for OutputSettings {
    fn default() -> Self {
        Self {
            directory: PathBuf::from("outputs"),
            public_base_url: "http://127.0.0.1:4000/outputs".to_string(),
        }
    }
}

impl Default for FetchSettings {
    fn default() -> Self {
        Self {
            timeout_secs: 10,
            user_agent: "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
                         (KHTML, like Gecko) Chrome/121.0.0.0 Safari/537.36"
                .to_string(),
        }
    }
}

impl Settings {
    /// Load settings from the optional config file and the environment.
    pub fn load() -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::Environment::with_prefix("IMPRINT").separator("__"))
            .build()?
            .try_deserialize()
    }
}
