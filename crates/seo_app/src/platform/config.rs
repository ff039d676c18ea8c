//! Optional RON settings file for seo_app.
//!
//! Every field has a default, so a partial file (or no file) is fine.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

use log::LevelFilter;
use seo_core::DEFAULT_BASE_ADDRESS;
use seo_engine::EngineSettings;
use serde::Deserialize;
use thiserror::Error;

pub const CONFIG_FILENAME: &str = "seo_app.ron";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path:?}: {source}")]
    Read { path: PathBuf, source: io::Error },
    #[error("failed to parse {path:?}: {message}")]
    Parse { path: PathBuf, message: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub base_address: String,
    pub connect_timeout_secs: u64,
    pub request_timeout_secs: Option<u64>,
    pub download_dir: PathBuf,
    pub max_download_bytes: u64,
    pub log_file: PathBuf,
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            base_address: DEFAULT_BASE_ADDRESS.to_string(),
            connect_timeout_secs: 10,
            request_timeout_secs: None,
            download_dir: PathBuf::from("downloads"),
            max_download_bytes: 50 * 1024 * 1024,
            log_file: PathBuf::from("seo_app.log"),
            log_level: "info".to_string(),
        }
    }
}

impl AppConfig {
    /// Unknown level names fall back to `Info`.
    pub fn log_level(&self) -> LevelFilter {
        self.log_level.parse().unwrap_or(LevelFilter::Info)
    }

    pub fn engine_settings(&self, base_address: String) -> EngineSettings {
        EngineSettings {
            connect_timeout: Duration::from_secs(self.connect_timeout_secs),
            request_timeout: self.request_timeout_secs.map(Duration::from_secs),
            max_download_bytes: self.max_download_bytes,
            ..EngineSettings::new(base_address)
        }
    }
}

/// Config path from the first command-line argument, else `./seo_app.ron`.
pub fn config_path_from_args() -> PathBuf {
    std::env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(CONFIG_FILENAME))
}

/// `Ok(None)` when the file does not exist.
pub fn load_config(path: &Path) -> Result<Option<AppConfig>, ConfigError> {
    let content = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(source) => {
            return Err(ConfigError::Read {
                path: path.to_path_buf(),
                source,
            })
        }
    };

    ron::from_str(&content)
        .map(Some)
        .map_err(|err| ConfigError::Parse {
            path: path.to_path_buf(),
            message: err.to_string(),
        })
}
