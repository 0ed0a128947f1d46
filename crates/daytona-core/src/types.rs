//! Server configuration record

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::constants::*;
use crate::error::{Error, Result};

/// Reverse proxy (frps) settings used to expose workspaces
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrpsConfig {
    pub domain: String,
    pub port: u16,
    pub protocol: String,
}

impl Default for FrpsConfig {
    fn default() -> Self {
        Self {
            domain: DEFAULT_FRPS_DOMAIN.to_string(),
            port: DEFAULT_FRPS_PORT,
            protocol: DEFAULT_FRPS_PROTOCOL.to_string(),
        }
    }
}

/// Process-wide server configuration, persisted as `config.json`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServerConfig {
    /// Unique server id, generated on first run
    pub id: String,
    pub providers_dir: PathBuf,
    pub registry_url: String,
    pub server_download_url: String,
    pub api_port: u16,
    pub headscale_port: u16,
    pub binaries_path: PathBuf,
    /// Where the server writes its own diagnostics
    pub log_file_path: PathBuf,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub frps: Option<FrpsConfig>,
}

impl ServerConfig {
    /// Build the default configuration rooted at a server config directory
    pub fn default_for(config_dir: &Path) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            providers_dir: config_dir.join(PROVIDERS_DIR),
            registry_url: DEFAULT_REGISTRY_URL.to_string(),
            server_download_url: DEFAULT_SERVER_DOWNLOAD_URL.to_string(),
            api_port: DEFAULT_API_PORT,
            headscale_port: DEFAULT_HEADSCALE_PORT,
            binaries_path: config_dir.join(BINARIES_DIR),
            log_file_path: config_dir.join(SERVER_LOG_FILE),
            frps: Some(FrpsConfig::default()),
        }
    }

    /// Check the record before it is persisted
    pub fn validate(&self) -> Result<()> {
        if self.id.trim().is_empty() {
            return Err(Error::config("server id must not be empty"));
        }
        if self.api_port == 0 || self.headscale_port == 0 {
            return Err(Error::config("ports must be non-zero"));
        }
        if self.api_port == self.headscale_port {
            return Err(Error::config(format!(
                "apiPort and headscalePort must differ (both {})",
                self.api_port
            )));
        }
        if let Some(frps) = &self.frps {
            if frps.domain.is_empty() || frps.port == 0 {
                return Err(Error::config("frps requires a domain and a non-zero port"));
            }
        }
        Ok(())
    }
}
