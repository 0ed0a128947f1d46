//! Daytona Logs - Workspace log tree, rotation, and tailing

mod reader;
mod tree;
mod writer;

pub use reader::LogReader;
pub use tree::LogTree;
pub use writer::{LogWriter, RotationConfig};
