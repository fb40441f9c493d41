//! # Client Configuration
//!
//! Configuration for the CRM client.
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Environment Variables (highest priority)                           │
//! │     AURUM_API_URL=https://crm.example.com                              │
//! │     AURUM_DATA_DIR=/var/lib/aurum                                      │
//! │                                                                         │
//! │  2. TOML Config File                                                   │
//! │     ~/.config/aurum-crm/config.toml (Linux)                            │
//! │     ~/Library/Application Support/br.Aurum.aurum-crm/… (macOS)         │
//! │                                                                         │
//! │  3. Default Values (lowest priority)                                   │
//! │     http://localhost:8080, platform data dir                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration File Format
//! ```toml
//! # config.toml
//! [api]
//! url = "https://crm.example.com"
//! ```

use std::env;
use std::fs;
use std::path::PathBuf;

use directories::ProjectDirs;
use serde::Deserialize;
use tracing::debug;

use crate::error::{StoreError, StoreResult};

/// Default backend when nothing is configured (local development).
const DEFAULT_API_URL: &str = "http://localhost:8080";

/// Resolved client configuration.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Backend base URL.
    pub api_url: String,

    /// Directory holding the durable client state (the token vault).
    pub data_dir: PathBuf,
}

impl ClientConfig {
    /// Builds a configuration from explicit values (tests, embedding apps).
    pub fn new(api_url: impl Into<String>, data_dir: impl Into<PathBuf>) -> Self {
        ClientConfig {
            api_url: api_url.into(),
            data_dir: data_dir.into(),
        }
    }

    /// Resolves configuration from the environment, then the config file,
    /// then defaults.
    pub fn load() -> StoreResult<Self> {
        let dirs = ProjectDirs::from("br", "Aurum", "aurum-crm")
            .ok_or_else(|| StoreError::Config("diretório de dados indisponível".into()))?;

        let file = read_config_file(dirs.config_dir().join("config.toml"))?;

        let api_url = env::var("AURUM_API_URL")
            .ok()
            .or_else(|| file.api.url.clone())
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());

        let data_dir = env::var("AURUM_DATA_DIR")
            .ok()
            .map(PathBuf::from)
            .unwrap_or_else(|| dirs.data_dir().to_path_buf());

        debug!(api_url = %api_url, data_dir = %data_dir.display(), "configuration resolved");
        Ok(ClientConfig { api_url, data_dir })
    }
}

// =============================================================================
// Config File
// =============================================================================

#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
    #[serde(default)]
    api: ApiSection,
}

#[derive(Debug, Default, Deserialize)]
struct ApiSection {
    url: Option<String>,
}

/// Reads the config file if present. A missing file is fine; a malformed
/// one is an error the operator needs to see, not silently ignore.
fn read_config_file(path: PathBuf) -> StoreResult<ConfigFile> {
    match fs::read_to_string(&path) {
        Ok(text) => parse_config(&text),
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(ConfigFile::default()),
        Err(err) => Err(StoreError::Config(format!(
            "falha ao ler {}: {}",
            path.display(),
            err
        ))),
    }
}

fn parse_config(text: &str) -> StoreResult<ConfigFile> {
    toml::from_str(text).map_err(|err| StoreError::Config(err.to_string()))
}

// =============================================================================
// Unit Tests
// =============================================================================
