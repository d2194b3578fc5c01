use crate::error::SlugError;
use std::fs;
use std::io::{self, Write};
use std::path::Path;
use tempfile::NamedTempFile;

pub const DEFAULT_PATH: &str = "data/products.ts";

/// Read the whole document as UTF-8. A path that is not an existing regular
/// file is reported as `MissingFile` before any I/O is attempted.
pub fn load_document(path: &Path) -> Result<String, SlugError> {
    if !path.is_file() {
        return Err(SlugError::MissingFile { path: path.to_path_buf() });
    }
    fs::read_to_string(path).map_err(|source| SlugError::Read { path: path.to_path_buf(), source })
}

/// Replace the document in one step: the content is staged in a temp file
/// next to the target and then renamed over it. Symlinks are resolved first
/// so the file they point to is the one replaced.
pub fn save_document(path: &Path, content: &str) -> Result<(), SlugError> {
    let write_err = |source| SlugError::Write { path: path.to_path_buf(), source };
    let target = match fs::canonicalize(path) {
        Ok(resolved) => resolved,
        Err(e) if e.kind() == io::ErrorKind::NotFound => path.to_path_buf(),
        Err(e) => return Err(write_err(e)),
    };
    let dir = match target.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    let mut staged = NamedTempFile::new_in(dir).map_err(write_err)?;
    staged.write_all(content.as_bytes()).map_err(write_err)?;
    staged.flush().map_err(write_err)?;
    // Keep the target's mode; temp files are created owner-only.
    if let Ok(md) = fs::metadata(&target) {
        staged.as_file().set_permissions(md.permissions()).map_err(write_err)?;
    }
    staged.persist(&target).map_err(|e| write_err(e.error))?;
    log::debug!("persisted {} bytes to {}", content.len(), target.display());
    Ok(())
}
