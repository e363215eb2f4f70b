//! Common-root resolution across source directories

use crate::error::{Flac2mError, Result};
use std::path::{Component, Path, PathBuf};

/// Longest path prefix shared by every directory
///
/// With a single directory the result is its parent, so at least one path
/// segment survives under the output root. Segments are compared position by
/// position and comparison never runs past the shortest path, so the result
/// does not depend on input order.
pub fn common_root(directories: &[PathBuf]) -> Result<PathBuf> {
    match directories {
        [] => Err(Flac2mError::NoSourceFiles { roots: Vec::new() }),
        [only] => Ok(only
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| only.clone())),
        [first, rest @ ..] => {
            let mut split: Vec<Vec<Component<'_>>> =
                rest.iter().map(|d| d.components().collect()).collect();
            split.push(first.components().collect());

            let shortest = split.iter().map(Vec::len).min().unwrap_or(0);
            let common: PathBuf = (0..shortest)
                .map_while(|i| {
                    let segment = split[0][i];
                    split
                        .iter()
                        .all(|s| s[i] == segment)
                        .then_some(segment)
                })
                .collect();

            Ok(common)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn paths(list: &[&str]) -> Vec<PathBuf> {
        list.iter().map(PathBuf::from).collect()
    }

    #[test]
    fn test_empty_is_error() {
        assert!(matches!(
            common_root(&[]),
            Err(Flac2mError::NoSourceFiles { .. })
        ));
    }

    #[test]
    fn test_single_directory_returns_parent() {
        let root = common_root(&paths(&["/usr/share/man"])).unwrap();
        assert_eq!(root, PathBuf::from("/usr/share"));

        let root = common_root(&paths(&["/music/Album"])).unwrap();
        assert_eq!(root, PathBuf::from("/music"));
    }

    #[test]
    fn test_siblings() {
        let root = common_root(&paths(&["/usr/bin", "/usr/share"])).unwrap();
        assert_eq!(root, PathBuf::from("/usr"));
    }

    #[test]
    fn test_albums_share_artist() {
        let root = common_root(&paths(&[
            "/music/Artist/AlbumA",
            "/music/Artist/AlbumB",
        ]))
        .unwrap();
        assert_eq!(root, PathBuf::from("/music/Artist"));
    }

    #[test]
    fn test_strict_prefix_bounds_comparison() {
        let root = common_root(&paths(&["/a/b", "/a/b/c"])).unwrap();
        assert_eq!(root, PathBuf::from("/a/b"));

        let root = common_root(&paths(&["/a/b/c", "/a/b"])).unwrap();
        assert_eq!(root, PathBuf::from("/a/b"));
    }

    #[test]
    fn test_segments_compared_whole() {
        // "/a/bc" and "/a/bd" share the string prefix "/a/b" but only the segment "a"
        let root = common_root(&paths(&["/a/bc", "/a/bd"])).unwrap();
        assert_eq!(root, PathBuf::from("/a"));
    }

    #[test]
    fn test_disjoint_trees_share_filesystem_root() {
        let root = common_root(&paths(&["/music/x", "/srv/y"])).unwrap();
        assert_eq!(root, PathBuf::from("/"));
    }

    #[test]
    fn test_order_independent() {
        let inputs = paths(&[
            "/music/Artist/AlbumA/CD1",
            "/music/Artist/AlbumA/CD2",
            "/music/Artist/AlbumB",
            "/music/Other",
        ]);
        let expected = common_root(&inputs).unwrap();
        assert_eq!(expected, PathBuf::from("/music"));

        // Every rotation and the reversal give the same root
        for shift in 0..inputs.len() {
            let mut rotated = inputs.clone();
            rotated.rotate_left(shift);
            assert_eq!(common_root(&rotated).unwrap(), expected);
            rotated.reverse();
            assert_eq!(common_root(&rotated).unwrap(), expected);
        }
    }

    #[test]
    fn test_every_input_is_under_root() {
        let inputs = paths(&["/m/a/b", "/m/a/c/d", "/m/a"]);
        let root = common_root(&inputs).unwrap();
        for dir in &inputs {
            let stem = dir.strip_prefix(&root).unwrap();
            assert_eq!(root.join(stem), *dir);
        }
    }
}
