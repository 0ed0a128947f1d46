//! Log reader for tail operations

use daytona_core::Result;
use std::collections::VecDeque;
use std::fs::File;
use std::io::{BufRead, BufReader, ErrorKind};
use std::path::PathBuf;

/// Reads back a workspace or project log
pub struct LogReader {
    path: PathBuf,
}

impl LogReader {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Read the last N lines from the log file.
    ///
    /// Logs carry raw process output, so invalid UTF-8 is replaced rather
    /// than rejected.
    pub fn tail(&self, n: usize) -> Result<Vec<String>> {
        let file = match File::open(&self.path) {
            Ok(file) => file,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(vec![]),
            Err(e) => return Err(e.into()),
        };

        if n == 0 {
            return Ok(vec![]);
        }

        let mut lines: VecDeque<String> = VecDeque::new();

        for chunk in BufReader::new(file).split(b'\n') {
            let mut bytes = chunk?;
            if bytes.last() == Some(&b'\r') {
                bytes.pop();
            }
            lines.push_back(String::from_utf8_lossy(&bytes).into_owned());
            if lines.len() > n {
                lines.pop_front();
            }
        }

        Ok(lines.into_iter().collect())
    }
}
