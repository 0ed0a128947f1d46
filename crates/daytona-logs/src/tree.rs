//! Workspace log tree
//!
//! ```text
//! <config-dir>/logs/
//!   <workspace-id>/
//!     log
//!     <project-id>/
//!       log
//! ```

use daytona_core::constants::{LOG_DIR_MODE, LOG_FILE};
use daytona_core::fs::{create_dir_all_with_mode, validate_id};
use daytona_core::{ConfigStore, Result};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Paths and lifecycle of per-workspace log directories
#[derive(Debug, Clone)]
pub struct LogTree {
    root: PathBuf,
}

impl LogTree {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Log tree under a config store's directory
    pub fn for_store(store: &ConfigStore) -> Self {
        Self::new(store.logs_dir())
    }

    /// Directory holding every workspace's logs
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Directory holding one workspace's logs
    pub fn workspace_dir(&self, workspace_id: &str) -> Result<PathBuf> {
        validate_id(workspace_id)?;
        Ok(self.root.join(workspace_id))
    }

    /// Workspace log path, without touching the filesystem
    pub fn workspace_log_path(&self, workspace_id: &str) -> Result<PathBuf> {
        Ok(self.workspace_dir(workspace_id)?.join(LOG_FILE))
    }

    /// Project log path, without touching the filesystem
    pub fn project_log_path(&self, workspace_id: &str, project_id: &str) -> Result<PathBuf> {
        validate_id(project_id)?;
        Ok(self
            .workspace_dir(workspace_id)?
            .join(project_id)
            .join(LOG_FILE))
    }

    /// Create the parent directories of a log file path
    pub fn ensure_parent(path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.is_dir() {
                create_dir_all_with_mode(parent, LOG_DIR_MODE)?;
                debug!("Created log directory {}", parent.display());
            }
        }
        Ok(())
    }

    /// Workspace log path with its directory created
    pub fn workspace_log_file(&self, workspace_id: &str) -> Result<PathBuf> {
        let path = self.workspace_log_path(workspace_id)?;
        Self::ensure_parent(&path)?;
        Ok(path)
    }

    /// Project log path with its directory created
    pub fn project_log_file(&self, workspace_id: &str, project_id: &str) -> Result<PathBuf> {
        let path = self.project_log_path(workspace_id, project_id)?;
        Self::ensure_parent(&path)?;
        Ok(path)
    }

    /// Remove a workspace's logs, including every project log under it.
    /// Succeeds when there is nothing to remove.
    pub fn delete_workspace_logs(&self, workspace_id: &str) -> Result<()> {
        let dir = self.workspace_dir(workspace_id)?;

        match fs::symlink_metadata(&dir) {
            Ok(_) => {}
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(()),
            Err(e) => return Err(e.into()),
        }

        fs::remove_dir_all(&dir)?;
        info!("Deleted logs for workspace {}", workspace_id);
        Ok(())
    }

    /// Workspace ids that currently have a log directory, sorted
    pub fn workspace_ids(&self) -> Result<Vec<String>> {
        let entries = match fs::read_dir(&self.root) {
            Ok(entries) => entries,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(vec![]),
            Err(e) => return Err(e.into()),
        };

        let mut ids = Vec::new();
        for entry in entries {
            let entry = entry?;
            if entry.file_type()?.is_dir() {
                ids.push(entry.file_name().to_string_lossy().into_owned());
            }
        }
        ids.sort();
        Ok(ids)
    }
}
