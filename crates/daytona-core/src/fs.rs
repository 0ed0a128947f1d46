//! Filesystem helpers shared by the config store and the log tree

use std::fs;
use std::io::Write;
use std::path::Path;

use crate::error::{Error, Result};

/// Create `dir` and all missing parents, applying `mode` to the directories
/// this call creates. Already existing directories are left untouched.
pub fn create_dir_all_with_mode(dir: &Path, mode: u32) -> Result<()> {
    #[cfg(unix)]
    {
        use std::os::unix::fs::DirBuilderExt;
        fs::DirBuilder::new().recursive(true).mode(mode).create(dir)?;
    }

    #[cfg(not(unix))]
    {
        let _ = mode;
        fs::create_dir_all(dir)?;
    }

    Ok(())
}

/// Write `contents` to `path`, creating it with `mode`.
///
/// A file that already existed keeps its inode, so it is narrowed to `mode`
/// before anything is written to it.
pub fn write_with_mode(path: &Path, contents: &[u8], mode: u32) -> Result<()> {
    let mut options = fs::OpenOptions::new();
    options.write(true).create(true).truncate(true);

    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(mode);
    }

    let mut file = options.open(path)?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let current = file.metadata()?.permissions().mode() & 0o777;
        if current != mode {
            file.set_permissions(fs::Permissions::from_mode(mode))?;
        }
    }

    #[cfg(not(unix))]
    let _ = mode;

    file.write_all(contents)?;
    file.sync_all()?;
    Ok(())
}

/// Check that an identifier is usable as a single path component
pub fn validate_id(id: &str) -> Result<()> {
    if id.is_empty() || id == "." || id == ".." || id.contains(['/', '\\']) {
        return Err(Error::InvalidId(id.to_string()));
    }
    Ok(())
}
