//! Modification-time validated cache for package file reads

use crate::error::{LaunchError, Result};
use dashmap::DashMap;
use once_cell::sync::Lazy;
use std::{
    io::ErrorKind,
    path::{Path, PathBuf},
    time::SystemTime,
};

/// Cached file content with modification time
struct CachedFile {
    content: String,
    modified: SystemTime,
}

/// Global file content cache, keyed by absolute path.
static FILE_CACHE: Lazy<DashMap<PathBuf, CachedFile>> = Lazy::new(DashMap::new);

/// Read file with caching and modification time validation.
///
/// A missing file is reported as [`LaunchError::FileNotFound`] so callers see
/// the offending path rather than a bare IO error.
pub(crate) fn read_file_cached(path: &Path) -> Result<String> {
    let metadata = std::fs::metadata(path).map_err(|e| not_found_or_io(path, e))?;
    let modified = metadata.modified()?;

    if let Some(entry) = FILE_CACHE.get(path) {
        if entry.modified == modified {
            log::trace!("File cache hit: {}", path.display());
            return Ok(entry.content.clone());
        }
    }

    log::debug!("File cache miss: {}", path.display());

    let content = std::fs::read_to_string(path).map_err(|e| not_found_or_io(path, e))?;
    FILE_CACHE.insert(
        path.to_path_buf(),
        CachedFile {
            content: content.clone(),
            modified,
        },
    );

    Ok(content)
}

fn not_found_or_io(path: &Path, err: std::io::Error) -> LaunchError {
    if err.kind() == ErrorKind::NotFound {
        LaunchError::FileNotFound(path.display().to_string())
    } else {
        LaunchError::IoError(err)
    }
}
