//! Init command implementation - reports the initialized server layout

use anyhow::Result;
use daytona_core::{ConfigStore, ServerConfig};
use daytona_logs::LogTree;
use serde::Serialize;
use std::path::PathBuf;
use tracing::{info, warn};

use crate::logging;
use crate::output::{is_json_mode, print_info, print_json, print_success};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Layout {
    id: String,
    config_dir: PathBuf,
    config_file: PathBuf,
    logs_dir: PathBuf,
    server_log: PathBuf,
    api_port: u16,
    workspaces_with_logs: usize,
}

pub fn execute(store: &ConfigStore, config: &ServerConfig, verbose: u8) -> Result<()> {
    let _logging = logging::with_file(verbose, &config.log_file_path)?;

    let tree = LogTree::for_store(store);
    let layout = Layout {
        id: config.id.clone(),
        config_dir: store.dir().to_path_buf(),
        config_file: store.config_path(),
        logs_dir: tree.root().to_path_buf(),
        server_log: config.log_file_path.clone(),
        api_port: config.api_port,
        workspaces_with_logs: tree.workspace_ids()?.len(),
    };

    if let Err(e) = config.validate() {
        warn!("Server config needs attention: {}", e);
    }

    info!(
        "Server {} initialized (config {}, api port {})",
        layout.id,
        layout.config_file.display(),
        layout.api_port
    );

    if is_json_mode() {
        print_json(&layout);
        return Ok(());
    }

    print_success(&format!("Server {} is configured", layout.id));
    print_info(&format!("Config:     {}", layout.config_file.display()));
    print_info(&format!("Logs:       {}", layout.logs_dir.display()));
    print_info(&format!("Server log: {}", layout.server_log.display()));
    print_info(&format!("API port:   {}", layout.api_port));
    print_info(&format!("Workspaces with logs: {}", layout.workspaces_with_logs));
    Ok(())
}
