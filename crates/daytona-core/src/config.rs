//! Server configuration store
//!
//! The config lives at `<user-config-dir>/daytona/server/config.json`. The
//! store is constructed once by the process entry point and handed to
//! whoever needs to read or persist the config.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

use crate::constants::{self, CONFIG_DIR_MODE, CONFIG_FILE_MODE};
use crate::error::{Error, Result};
use crate::fs::{create_dir_all_with_mode, write_with_mode};
use crate::types::ServerConfig;

/// Resolve the server config directory from the host's user config directory
pub fn config_dir() -> Result<PathBuf> {
    dirs::config_dir()
        .map(|dir| constants::server_dir_in(&dir))
        .ok_or_else(|| {
            Error::environment("the host did not report a user config directory (is HOME set?)")
        })
}

/// Reads and writes `config.json` inside one server config directory
#[derive(Debug, Clone)]
pub struct ConfigStore {
    dir: PathBuf,
}

impl ConfigStore {
    /// Create a store rooted at an explicit server config directory
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Create a store rooted at the host's default location
    pub fn from_env() -> Result<Self> {
        Ok(Self::new(config_dir()?))
    }

    /// Server config directory
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of `config.json`
    pub fn config_path(&self) -> PathBuf {
        constants::config_file_in(&self.dir)
    }

    /// Root of the workspace log tree
    pub fn logs_dir(&self) -> PathBuf {
        constants::logs_dir_in(&self.dir)
    }

    /// Load the config from disk
    pub fn load(&self) -> Result<ServerConfig> {
        let path = self.config_path();

        match fs::metadata(&path) {
            Ok(_) => {}
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(Error::ConfigNotFound(path));
            }
            Err(e) => return Err(e.into()),
        }

        let content = fs::read(&path)?;
        let config = serde_json::from_slice(&content)
            .map_err(|source| Error::Decode { path: path.clone(), source })?;

        debug!("Loaded server config from {}", path.display());
        Ok(config)
    }

    /// Persist the config, creating the config directory if needed.
    ///
    /// The record is written as given; `ServerConfig::validate` is up to the
    /// caller, so anything `load` returns can be saved back.
    pub fn save(&self, config: &ServerConfig) -> Result<()> {
        let path = self.config_path();
        let content = serde_json::to_vec_pretty(config).map_err(Error::Encode)?;

        create_dir_all_with_mode(&self.dir, CONFIG_DIR_MODE)?;
        write_with_mode(&path, &content, CONFIG_FILE_MODE)?;

        info!("Saved server config to {}", path.display());
        Ok(())
    }

    /// Load the config, writing the default one first if it cannot be loaded.
    ///
    /// Returns the config in effect after the call. An error here means the
    /// server has no usable configuration; the caller should not continue.
    pub fn initialize(&self) -> Result<ServerConfig> {
        match self.load() {
            Ok(config) => return Ok(config),
            Err(e) if e.is_not_found() => {
                info!("No server config found, writing defaults");
            }
            Err(e) => {
                warn!("Replacing unusable server config with defaults: {}", e);
            }
        }

        let config = ServerConfig::default_for(&self.dir);
        self.save(&config)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::FrpsConfig;
    use tempfile::TempDir;

    fn store_in(dir: &TempDir) -> ConfigStore {
        ConfigStore::new(constants::server_dir_in(dir.path()))
    }

    #[test]
    fn test_paths() {
        let store = ConfigStore::new("/cfg/daytona/server");
        assert_eq!(store.dir(), Path::new("/cfg/daytona/server"));
        assert_eq!(
            store.config_path(),
            PathBuf::from("/cfg/daytona/server/config.json")
        );
        assert_eq!(store.logs_dir(), PathBuf::from("/cfg/daytona/server/logs"));
    }

    #[test]
    fn test_config_dir_layout() {
        // Only meaningful where the host reports a config directory
        if let Ok(dir) = config_dir() {
            assert!(dir.ends_with("daytona/server"));
        }
    }

    #[test]
    fn test_load_missing_config() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        let err = store.load().unwrap_err();
        assert!(matches!(err, Error::ConfigNotFound(_)));
        assert!(!store.config_path().exists());
    }

    #[test]
    fn test_save_then_load_round_trip() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        let mut config = ServerConfig::default_for(store.dir());
        config.api_port = 4100;
        config.frps = Some(FrpsConfig {
            domain: "frps.internal".to_string(),
            port: 7100,
            protocol: "https".to_string(),
        });

        store.save(&config).unwrap();
        assert_eq!(store.load().unwrap(), config);
    }

    #[test]
    fn test_save_writes_indented_json() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        let config = ServerConfig::default_for(store.dir());

        store.save(&config).unwrap();

        let content = fs::read_to_string(store.config_path()).unwrap();
        assert!(content.starts_with("{\n  \"id\": "));
        assert!(content.contains("\n  \"apiPort\": 3986,"));
        assert!(content.contains("\n    \"domain\": "));
    }

    #[test]
    fn test_save_overwrites_existing() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        let mut config = ServerConfig::default_for(store.dir());
        store.save(&config).unwrap();

        config.registry_url = "https://registry.example.com".to_string();
        store.save(&config).unwrap();

        assert_eq!(
            store.load().unwrap().registry_url,
            "https://registry.example.com"
        );
    }

    #[test]
    fn test_loaded_config_saves_back() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        let mut config = ServerConfig::default_for(store.dir());
        config.headscale_port = config.api_port;
        fs::create_dir_all(store.dir()).unwrap();
        fs::write(store.config_path(), serde_json::to_vec_pretty(&config).unwrap()).unwrap();

        let loaded = store.initialize().unwrap();
        assert_eq!(loaded, config);
        assert!(loaded.validate().is_err());

        store.save(&loaded).unwrap();
        assert_eq!(store.load().unwrap(), config);
    }

    #[cfg(unix)]
    #[test]
    fn test_save_permissions() {
        use std::os::unix::fs::PermissionsExt;

        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        store.save(&ServerConfig::default_for(store.dir())).unwrap();

        let file_mode = fs::metadata(store.config_path()).unwrap().permissions().mode();
        assert_eq!(file_mode & 0o777, 0o600);

        let dir_mode = fs::metadata(store.dir()).unwrap().permissions().mode();
        assert_eq!(dir_mode & 0o077, 0);
    }

    #[cfg(unix)]
    #[test]
    fn test_save_tightens_existing_file() {
        use std::os::unix::fs::PermissionsExt;

        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        fs::create_dir_all(store.dir()).unwrap();
        fs::write(store.config_path(), "{}").unwrap();
        fs::set_permissions(store.config_path(), fs::Permissions::from_mode(0o644)).unwrap();

        store.save(&ServerConfig::default_for(store.dir())).unwrap();

        let file_mode = fs::metadata(store.config_path()).unwrap().permissions().mode();
        assert_eq!(file_mode & 0o777, 0o600);
    }

    #[test]
    fn test_load_corrupt_config() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        fs::create_dir_all(store.dir()).unwrap();
        fs::write(store.config_path(), "{ not json").unwrap();

        let err = store.load().unwrap_err();
        assert!(matches!(err, Error::Decode { .. }));
    }

    #[test]
    fn test_load_wrong_shape() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        fs::create_dir_all(store.dir()).unwrap();
        fs::write(store.config_path(), r#"{"apiPort": "not a number"}"#).unwrap();

        assert!(matches!(store.load(), Err(Error::Decode { .. })));
    }

    #[test]
    fn test_initialize_writes_defaults() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        let config = store.initialize().unwrap();
        assert_eq!(store.load().unwrap(), config);
        assert_eq!(config.providers_dir, store.dir().join("providers"));
    }

    #[test]
    fn test_initialize_keeps_existing() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        let mut config = ServerConfig::default_for(store.dir());
        config.api_port = 5000;
        store.save(&config).unwrap();

        assert_eq!(store.initialize().unwrap(), config);
    }

    #[test]
    fn test_initialize_replaces_corrupt_config() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        fs::create_dir_all(store.dir()).unwrap();
        fs::write(store.config_path(), "garbage").unwrap();

        let config = store.initialize().unwrap();
        assert_eq!(store.load().unwrap(), config);
    }
}
