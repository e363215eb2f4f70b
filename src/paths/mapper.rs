//! Input to output path mapping

use super::common_root::common_root;
use crate::error::{Flac2mError, Result};
use crate::types::{is_lossless, PathMapping, PathPair, ScanResult, SubstitutionRule};
use std::collections::HashSet;
use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Which files a mapping selects from each source directory
#[derive(Debug, Clone, Copy)]
pub enum MapMode<'a> {
    /// Lossless sources to be converted
    Convert,
    /// Files copied unchanged, matched by exact name
    Copy(&'a [String]),
}

/// Substitution rules shared by both mapping modes
#[derive(Debug, Clone, Default)]
pub struct Substitutions {
    pub file: Option<SubstitutionRule>,
    pub dir: Option<SubstitutionRule>,
}

/// Map every selected file to its place under `output_root`
///
/// The output keeps each directory's path relative to the common root of the
/// whole scan. Pairs follow scan order, then file order within a directory.
pub fn map_paths(
    scan: &ScanResult,
    output_root: &Path,
    subs: &Substitutions,
    mode: MapMode<'_>,
) -> Result<PathMapping> {
    let directories: Vec<PathBuf> = scan.iter().map(|d| d.path.clone()).collect();
    let root = common_root(&directories)?;
    debug!("Common root: {}", root.display());

    let copy_names: HashSet<&OsStr> = match mode {
        MapMode::Convert => HashSet::new(),
        MapMode::Copy(names) => names.iter().map(OsStr::new).collect(),
    };

    let mut mapping = PathMapping::new();

    for dir in scan {
        let stem = relative_stem(&dir.path, &root)?;
        let stem = match &subs.dir {
            Some(rule) => rule.apply_path(stem),
            None => stem.to_path_buf(),
        };

        let selected = dir.files.iter().filter(|f| match mode {
            MapMode::Convert => is_lossless(f),
            MapMode::Copy(_) => copy_names.contains(f.as_os_str()),
        });

        for name in selected {
            let out_name: OsString = match &subs.file {
                Some(rule) => rule.apply_name(name),
                None => name.clone(),
            };

            let mut output = output_root.to_path_buf();
            if !stem.as_os_str().is_empty() {
                output.push(&stem);
            }
            output.push(out_name);

            mapping.push(PathPair::new(dir.path.join(name), output));
        }
    }

    Ok(mapping)
}

/// Directory path with the common root removed
fn relative_stem<'a>(dir: &'a Path, root: &Path) -> Result<&'a Path> {
    dir.strip_prefix(root).map_err(|_| {
        Flac2mError::Internal(format!(
            "'{}' is not under the common root '{}'",
            dir.display(),
            root.display()
        ))
    })
}
