//! Copy-through of auxiliary files (cover art, logs, cue sheets)

use crate::error::{Flac2mError, Result};
use crate::types::PathMapping;
use std::fs;
use tracing::debug;

/// Copy every mapped file unchanged, stopping at the first failure
pub fn copy_files(mapping: &PathMapping) -> Result<usize> {
    for pair in mapping {
        if let Some(dir) = pair.output.parent() {
            fs::create_dir_all(dir).map_err(|e| Flac2mError::output_error(dir, e))?;
        }

        debug!("Copying {} -> {}", pair.input.display(), pair.output.display());
        fs::copy(&pair.input, &pair.output).map_err(|e| Flac2mError::CopyFailed {
            path: pair.input.clone(),
            reason: e.to_string(),
        })?;
    }

    Ok(mapping.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PathPair;
    use tempfile::TempDir;

    #[test]
    fn test_copies_into_new_directories() {
        let tmp = TempDir::new().unwrap();
        let src = tmp.path().join("cover.jpg");
        fs::write(&src, b"jpeg bytes").unwrap();
        let dst = tmp.path().join("out/Album/cover.jpg");

        let copied = copy_files(&vec![PathPair::new(&src, &dst)]).unwrap();

        assert_eq!(copied, 1);
        assert_eq!(fs::read(&dst).unwrap(), b"jpeg bytes");
    }

    #[test]
    fn test_missing_source_fails() {
        let tmp = TempDir::new().unwrap();
        let mapping = vec![PathPair::new(
            tmp.path().join("gone.jpg"),
            tmp.path().join("out/gone.jpg"),
        )];

        let err = copy_files(&mapping).unwrap_err();
        assert!(matches!(err, Flac2mError::CopyFailed { .. }));
    }
}
