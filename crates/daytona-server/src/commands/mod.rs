//! Command implementations

pub mod config;
pub mod init;
pub mod logs;
