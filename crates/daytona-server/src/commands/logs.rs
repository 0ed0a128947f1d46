//! Logs command implementation

use anyhow::Result;
use daytona_logs::{LogReader, LogTree, LogWriter, RotationConfig};
use std::path::PathBuf;

use crate::cli::{LogTarget, LogsCommand};
use crate::output::{is_json_mode, print_json, print_lines, print_success_json};

pub fn execute(command: LogsCommand, tree: &LogTree) -> Result<()> {
    match command {
        LogsCommand::Path(target) => {
            let path = log_file(tree, &target)?;
            if is_json_mode() {
                print_json(&path);
            } else {
                println!("{}", path.display());
            }
            Ok(())
        }
        LogsCommand::Tail(args) => {
            let path = log_path(tree, &args.target)?;
            let lines = LogReader::new(path).tail(args.lines)?;
            print_lines(&lines);
            Ok(())
        }
        LogsCommand::Append(args) => {
            let config = RotationConfig::default();
            let target = &args.target;
            let mut writer = match &target.project {
                Some(project) => LogWriter::for_project(tree, &target.workspace, project, config)?,
                None => LogWriter::for_workspace(tree, &target.workspace, config)?,
            };
            writer.write_line(&args.message)?;
            Ok(())
        }
        LogsCommand::List => {
            print_lines(&tree.workspace_ids()?);
            Ok(())
        }
        LogsCommand::Delete { workspace } => {
            tree.delete_workspace_logs(&workspace)?;
            print_success_json::<()>(&format!("Deleted logs for workspace {}", workspace), None);
            Ok(())
        }
    }
}

/// Path of the targeted log with its directory created
fn log_file(tree: &LogTree, target: &LogTarget) -> Result<PathBuf> {
    let path = match &target.project {
        Some(project) => tree.project_log_file(&target.workspace, project)?,
        None => tree.workspace_log_file(&target.workspace)?,
    };
    Ok(path)
}

/// Path of the targeted log; reading must not create directories
fn log_path(tree: &LogTree, target: &LogTarget) -> Result<PathBuf> {
    let path = match &target.project {
        Some(project) => tree.project_log_path(&target.workspace, project)?,
        None => tree.workspace_log_path(&target.workspace)?,
    };
    Ok(path)
}
