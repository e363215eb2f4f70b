//! File discovery and scanning

use crate::error::{Flac2mError, Result};
use crate::types::{is_lossless, ScanResult, SourceDirectory};
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use walkdir::WalkDir;

/// Scan root directories for directories holding FLAC files
///
/// Every directory (roots included) whose immediate files contain at least
/// one `.flac` is returned with its complete file listing. Overlapping roots
/// are not deduplicated. Any unreadable directory aborts the scan.
pub fn scan(roots: &[PathBuf]) -> Result<ScanResult> {
    let mut directories = Vec::new();

    for root in roots {
        let root_abs = absolute_root(root)?;
        debug!("Scanning {}", root_abs.display());

        if !root_abs.is_dir() {
            return Err(Flac2mError::scan_error(&root_abs, "not a directory"));
        }

        let walker = WalkDir::new(&root_abs).sort_by_file_name();

        for entry in walker {
            let entry = entry.map_err(|e| {
                let path = e
                    .path()
                    .map(Path::to_path_buf)
                    .unwrap_or_else(|| root_abs.clone());
                Flac2mError::scan_error(path, e.to_string())
            })?;

            if !entry.file_type().is_dir() {
                continue;
            }

            let files = list_files(entry.path())?;
            if files.iter().any(|f| is_lossless(f)) {
                debug!("Music found in {}", entry.path().display());
                directories.push(SourceDirectory::new(entry.path(), files));
            }
        }
    }

    info!("Found {} directories with FLAC files", directories.len());

    Ok(directories)
}

/// Resolve a root against the working directory without touching symlinks
fn absolute_root(root: &Path) -> Result<PathBuf> {
    std::path::absolute(root).map_err(|e| Flac2mError::scan_error(root, e.to_string()))
}

/// Immediate (non-recursive) file names of a directory, sorted
///
/// Names are kept as raw `OsString`s, valid UTF-8 or not. Symlinks count as
/// directories when they resolve to one.
fn list_files(dir: &Path) -> Result<Vec<OsString>> {
    let read_dir = fs::read_dir(dir).map_err(|e| Flac2mError::scan_error(dir, e.to_string()))?;

    let mut files = Vec::new();
    for entry in read_dir {
        let entry = entry.map_err(|e| Flac2mError::scan_error(dir, e.to_string()))?;
        let file_type = entry
            .file_type()
            .map_err(|e| Flac2mError::scan_error(entry.path(), e.to_string()))?;

        let is_dir = if file_type.is_symlink() {
            entry.path().is_dir()
        } else {
            file_type.is_dir()
        };
        if is_dir {
            continue;
        }

        files.push(entry.file_name());
    }

    files.sort();
    Ok(files)
}
