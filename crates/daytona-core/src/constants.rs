//! Constants and default values for the Daytona server

use std::path::{Path, PathBuf};

/// Vendor directory under the user config directory
pub const DAYTONA_DIR: &str = "daytona";

/// Server directory under the vendor directory
pub const SERVER_DIR: &str = "server";

/// Config file name
pub const CONFIG_FILE: &str = "config.json";

/// Workspace log directory name
pub const LOGS_DIR: &str = "logs";

/// File name used for every workspace and project log
pub const LOG_FILE: &str = "log";

/// Server diagnostics log file name
pub const SERVER_LOG_FILE: &str = "daytona.log";

/// Providers directory name
pub const PROVIDERS_DIR: &str = "providers";

/// Downloaded binaries directory name
pub const BINARIES_DIR: &str = "binaries";

/// Mode for the config directory (owner only)
pub const CONFIG_DIR_MODE: u32 = 0o700;

/// Mode for the config file (owner read/write)
pub const CONFIG_FILE_MODE: u32 = 0o600;

/// Mode for log directories (owner all, group/other read+execute)
pub const LOG_DIR_MODE: u32 = 0o755;

/// Default API port
pub const DEFAULT_API_PORT: u16 = 3986;

/// Default headscale port
pub const DEFAULT_HEADSCALE_PORT: u16 = 3987;

/// Default provider registry URL
pub const DEFAULT_REGISTRY_URL: &str = "https://download.daytona.io/daytona";

/// Default server install script URL
pub const DEFAULT_SERVER_DOWNLOAD_URL: &str = "https://download.daytona.io/daytona/install.sh";

/// Default reverse proxy domain
pub const DEFAULT_FRPS_DOMAIN: &str = "try-eu.daytona.io";

/// Default reverse proxy port
pub const DEFAULT_FRPS_PORT: u16 = 7000;

/// Default reverse proxy protocol
pub const DEFAULT_FRPS_PROTOCOL: &str = "http";

/// Default log max size in bytes (10MB)
pub const DEFAULT_LOG_MAX_SIZE: u64 = 10 * 1024 * 1024;

/// Default max log files to keep
pub const DEFAULT_LOG_MAX_FILES: usize = 5;

/// Get the server config directory under a user config directory
pub fn server_dir_in(user_config_dir: &Path) -> PathBuf {
    user_config_dir.join(DAYTONA_DIR).join(SERVER_DIR)
}

/// Get the config file path inside a server config directory
pub fn config_file_in(config_dir: &Path) -> PathBuf {
    config_dir.join(CONFIG_FILE)
}

/// Get the workspace logs directory inside a server config directory
pub fn logs_dir_in(config_dir: &Path) -> PathBuf {
    config_dir.join(LOGS_DIR)
}
