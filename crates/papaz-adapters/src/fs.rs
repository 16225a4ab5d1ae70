//! Filesystem helpers shared by the file adapters.
//!
//! Writes follow the temp-file protocol:
//! 1. Write the full content to a uniquely named sibling temp file
//! 2. fsync the temp file
//! 3. Rename the temp file over the target
//! 4. fsync the parent directory
//!
//! A concurrent reader sees either the old content or the new content.
//! Overlapping writers never share a temp file.

use std::ffi::OsString;
use std::fs::{self, File};
use std::io::{self, Write};
use std::path::Path;

use tracing::trace;

/// Read a whole file, or `None` if it does not exist.
pub fn read_optional(path: &Path) -> io::Result<Option<Vec<u8>>> {
    match fs::read(path) {
        Ok(bytes) => Ok(Some(bytes)),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(e),
    }
}

/// Atomically replace the content of `path` with `bytes`.
///
/// Missing parent directories are created.
pub fn write_atomic(path: &Path, bytes: &[u8]) -> io::Result<()> {
    let parent = parent_dir(path);
    fs::create_dir_all(parent)?;

    // Removed on drop if anything below fails.
    let mut temp = tempfile::Builder::new()
        .prefix(&temp_prefix(path))
        .suffix(".tmp")
        .tempfile_in(parent)?;
    trace!(path = %path.display(), temp = %temp.path().display(), len = bytes.len(), "atomic write");

    temp.write_all(bytes)?;
    temp.as_file().sync_all()?;
    temp.persist(path)?;

    if let Ok(dir) = File::open(parent) {
        let _ = dir.sync_all();
    }

    Ok(())
}

/// `dir/name` -> `.name.`, the prefix of every temp file for `name`.
fn temp_prefix(path: &Path) -> OsString {
    let mut prefix = OsString::from(".");
    prefix.push(path.file_name().unwrap_or_else(|| path.as_os_str()));
    prefix.push(".");
    prefix
}

fn parent_dir(path: &Path) -> &Path {
    match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    }
}
