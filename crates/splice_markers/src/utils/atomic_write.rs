// crates/splice_markers/src/utils/atomic_write.rs

use anyhow::{Context, Result};
use log::debug;
use std::fs;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

/// Replaces the contents of `path` by writing to a sibling temporary file
/// and renaming it into place. Symlinks are resolved first so the file they
/// point at is the one replaced. The existing file's permissions are carried
/// over. If anything fails before the rename the target is left untouched
/// and the temporary file is removed when it goes out of scope.
pub fn write_atomically(path: &Path, contents: &str) -> Result<()> {
    let target = fs::canonicalize(path)
        .with_context(|| format!("Error resolving {}", path.display()))?;
    let dir = target.parent().unwrap_or_else(|| Path::new("/"));
    let permissions = fs::metadata(&target)
        .with_context(|| format!("Error reading metadata for {}", target.display()))?
        .permissions();

    let mut temp_file = NamedTempFile::new_in(dir)
        .with_context(|| format!("Error creating temporary file in {}", dir.display()))?;
    temp_file
        .write_all(contents.as_bytes())
        .with_context(|| format!("Error writing temporary file {}", temp_file.path().display()))?;
    temp_file
        .as_file()
        .sync_all()
        .with_context(|| format!("Error syncing temporary file {}", temp_file.path().display()))?;
    fs::set_permissions(temp_file.path(), permissions)
        .with_context(|| format!("Error setting permissions on {}", temp_file.path().display()))?;

    debug!("renaming {} over {}", temp_file.path().display(), target.display());
    temp_file
        .persist(&target)
        .with_context(|| format!("Error replacing {}", target.display()))?;
    Ok(())
}
