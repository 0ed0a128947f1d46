//! Log writer with rotation support

use chrono::Utc;
use daytona_core::constants::{DEFAULT_LOG_MAX_FILES, DEFAULT_LOG_MAX_SIZE, LOG_FILE};
use daytona_core::Result;
use std::fs::{self, File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::tree::LogTree;

/// When a log is rotated and how many rotated copies survive
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RotationConfig {
    /// Size at which `log` is moved to `log.1`
    pub max_size_bytes: u64,
    /// Rotated copies kept; 0 truncates in place
    pub max_files: usize,
}

impl Default for RotationConfig {
    fn default() -> Self {
        Self::new(DEFAULT_LOG_MAX_SIZE, DEFAULT_LOG_MAX_FILES)
    }
}

impl RotationConfig {
    pub fn new(max_size_bytes: u64, max_files: usize) -> Self {
        Self {
            max_size_bytes,
            max_files,
        }
    }
}

/// Appends to a workspace or project log, rotating it by size
pub struct LogWriter {
    path: PathBuf,
    writer: BufWriter<File>,
    config: RotationConfig,
    current_size: u64,
}

impl LogWriter {
    /// Open (or create) a log file for appending
    pub fn new(path: PathBuf, config: RotationConfig) -> Result<Self> {
        LogTree::ensure_parent(&path)?;

        let file = OpenOptions::new().create(true).append(true).open(&path)?;

        let current_size = file.metadata()?.len();
        let writer = BufWriter::new(file);

        Ok(Self {
            path,
            writer,
            config,
            current_size,
        })
    }

    /// Writer for a workspace's own log
    pub fn for_workspace(
        tree: &LogTree,
        workspace_id: &str,
        config: RotationConfig,
    ) -> Result<Self> {
        Self::new(tree.workspace_log_file(workspace_id)?, config)
    }

    /// Writer for a project log inside a workspace
    pub fn for_project(
        tree: &LogTree,
        workspace_id: &str,
        project_id: &str,
        config: RotationConfig,
    ) -> Result<Self> {
        Self::new(tree.project_log_file(workspace_id, project_id)?, config)
    }

    /// Write a timestamped line to the log
    pub fn write_line(&mut self, line: &str) -> Result<()> {
        let timestamp = Utc::now().format("%Y-%m-%d %H:%M:%S");
        let formatted = format!("[{}] {}\n", timestamp, line);
        self.write_raw(formatted.as_bytes())
    }

    /// Write raw bytes (without timestamp)
    pub fn write_raw(&mut self, data: &[u8]) -> Result<()> {
        self.writer.write_all(data)?;
        self.writer.flush()?;
        self.current_size += data.len() as u64;

        if self.current_size >= self.config.max_size_bytes {
            self.rotate()?;
        }

        Ok(())
    }

    /// Rotate the log file: `log` -> `log.1` -> `log.2` ... up to `max_files`
    fn rotate(&mut self) -> Result<()> {
        debug!("Rotating log file: {}", self.path.display());

        self.writer.flush()?;

        if self.config.max_files == 0 {
            // Nothing to keep, start over in place
            return self.reopen(true);
        }

        let oldest = rotated_path(&self.path, self.config.max_files);
        if oldest.exists() {
            fs::remove_file(&oldest)?;
        }

        for i in (1..self.config.max_files).rev() {
            let old_path = rotated_path(&self.path, i);
            if old_path.exists() {
                fs::rename(&old_path, rotated_path(&self.path, i + 1))?;
            }
        }

        if self.path.exists() {
            fs::rename(&self.path, rotated_path(&self.path, 1))?;
        }

        self.reopen(false)
    }

    fn reopen(&mut self, truncate: bool) -> Result<()> {
        let file = OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(truncate)
            .append(!truncate)
            .open(&self.path)?;

        self.writer = BufWriter::new(file);
        self.current_size = 0;
        Ok(())
    }

    /// Get the log file path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get current file size
    pub fn current_size(&self) -> u64 {
        self.current_size
    }
}

/// Get the path for a rotated log file
fn rotated_path(base: &Path, index: usize) -> PathBuf {
    let name = base
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| LOG_FILE.to_string());
    base.with_file_name(format!("{}.{}", name, index))
}
