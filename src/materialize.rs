//! Tree → directories and empty files on disk.

use std::fs::{self, File};
use std::io::Write;
use std::path::{Component, Path};

use tracing::{debug, info};

use crate::error::TreeError;
use crate::tree::{NodeId, Tree};

/// Counts of what a materialization created (or re-created).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    pub directories: usize,
    pub files: usize,
}

/// Create every entry of `tree` under `base`, parents before children.
///
/// Existing directories are reused and existing files are truncated, so
/// running twice is harmless. Progress lines go to `progress`. The first
/// failure, including a failed progress write, aborts; whatever was
/// created before it stays on disk.
pub fn materialize<W: Write>(
    base: &Path,
    tree: &Tree,
    progress: &mut W,
) -> Result<Summary, TreeError> {
    for id in tree.descendants() {
        check_name(tree[id].name())?;
    }

    let mut summary = Summary::default();
    create_children(base, tree, tree.top_level(), progress, &mut summary)?;
    info!(
        base = %base.display(),
        directories = summary.directories,
        files = summary.files,
        "materialized tree"
    );
    Ok(summary)
}

fn create_children<W: Write>(
    dir: &Path,
    tree: &Tree,
    children: &[NodeId],
    progress: &mut W,
    summary: &mut Summary,
) -> Result<(), TreeError> {
    for &id in children {
        let node = &tree[id];
        let full_path = dir.join(node.name());

        if node.is_dir() {
            report(progress, format_args!("Creating directory: {}", full_path.display()))?;
            fs::create_dir_all(&full_path).map_err(|source| TreeError::DirectoryCreate {
                path: full_path.clone(),
                source,
            })?;
            debug!(path = %full_path.display(), "created directory");
            summary.directories += 1;
            create_children(&full_path, tree, node.children(), progress, summary)?;
        } else {
            report(progress, format_args!("Creating file: {}", full_path.display()))?;
            if let Some(parent) = full_path.parent() {
                fs::create_dir_all(parent).map_err(|source| TreeError::DirectoryCreate {
                    path: parent.to_path_buf(),
                    source,
                })?;
            }
            File::create(&full_path).map_err(|source| TreeError::FileCreate {
                path: full_path.clone(),
                source,
            })?;
            debug!(path = %full_path.display(), "created file");
            summary.files += 1;
        }
    }
    Ok(())
}

fn report<W: Write>(progress: &mut W, line: std::fmt::Arguments<'_>) -> Result<(), TreeError> {
    writeln!(progress, "{line}").map_err(|source| TreeError::Progress { source })
}

/// Names must be exactly one normal path component so nothing escapes `base`.
fn check_name(name: &str) -> Result<(), TreeError> {
    let mut components = Path::new(name).components();
    match (components.next(), components.next()) {
        (Some(Component::Normal(_)), None) => Ok(()),
        _ => Err(TreeError::UnsafeName {
            name: name.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_components_are_accepted() {
        assert!(check_name("src").is_ok());
        assert!(check_name(".env").is_ok());
        assert!(check_name("v1.2.3").is_ok());
    }

    #[test]
    fn traversal_and_nested_names_are_rejected() {
        for name in ["..", ".", "/etc", "a/b", "../escape"] {
            assert!(
                matches!(check_name(name), Err(TreeError::UnsafeName { .. })),
                "{name} should be rejected"
            );
        }
    }
}
