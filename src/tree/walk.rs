use globset::{Glob, GlobSet, GlobSetBuilder};
use std::fs;
use std::io;
use std::path::Path;
use tracing::{debug, info, warn};
use walkdir::{DirEntry, WalkDir};

use super::{NodeId, Tree};
use crate::error::TreeError;

const DEFAULT_IGNORES: &[&str] = &[".git", ".gitignore"];

/// Configuration for walking a directory into a tree.
#[derive(Debug, Clone)]
pub struct WalkConfig {
    /// Base names or root-relative paths to leave out. A matching directory
    /// is not descended into.
    pub ignore_patterns: GlobSet,
    /// Directories first, then case-insensitive alpha, dotfiles last.
    /// When unset, entries keep the order the directory read returns.
    pub sort: bool,
}

impl Default for WalkConfig {
    fn default() -> Self {
        WalkConfig {
            ignore_patterns: build_ignore_set(&[]),
            sort: false,
        }
    }
}

/// Build a GlobSet from user patterns plus the default ignore list.
/// Invalid patterns are skipped with a warning.
pub fn build_ignore_set(user_patterns: &[String]) -> GlobSet {
    let defaults = DEFAULT_IGNORES.iter().map(|p| p.to_string());
    let all: Vec<String> = defaults.chain(user_patterns.iter().cloned()).collect();
    build_ignore_set_no_defaults(&all)
}

/// Build a GlobSet from only user patterns (no defaults).
pub fn build_ignore_set_no_defaults(user_patterns: &[String]) -> GlobSet {
    let mut builder = GlobSetBuilder::new();
    let mut invalid = Vec::new();
    for pattern in user_patterns {
        match Glob::new(pattern) {
            Ok(g) => {
                builder.add(g);
            }
            Err(_) => invalid.push(pattern.clone()),
        }
    }
    if !invalid.is_empty() {
        warn!(?invalid, "invalid ignore pattern(s), skipped");
    }
    builder.build().unwrap_or_else(|e| {
        warn!(error = %e, "failed to build ignore set");
        GlobSet::empty()
    })
}

/// Read `root` recursively into a tree of its entries.
///
/// The first unreadable directory aborts the walk; no partial tree is
/// returned. Symbolic links are listed but never followed.
pub fn walk_tree(root: &Path, config: &WalkConfig) -> Result<Tree, TreeError> {
    let mut tree = Tree::new();

    let meta = fs::metadata(root).map_err(|source| TreeError::DirectoryRead {
        path: root.to_path_buf(),
        source,
    })?;
    if !meta.is_dir() {
        return Err(TreeError::DirectoryRead {
            path: root.to_path_buf(),
            source: io::Error::new(io::ErrorKind::InvalidInput, "not a directory"),
        });
    }

    let ignore = &config.ignore_patterns;
    if root.file_name().is_some_and(|name| ignore.is_match(name)) {
        debug!(root = %root.display(), "root itself is ignored");
        return Ok(tree);
    }

    let mut walker = WalkDir::new(root).min_depth(1).follow_links(false);
    if config.sort {
        walker = walker.sort_by(sort_cmp);
    }

    // filter_entry keeps walkdir from descending into ignored directories.
    let iter = walker
        .into_iter()
        .filter_entry(|entry| !is_ignored(ignore, root, entry));

    // ancestors[d] is the directory node at depth d on the current branch.
    let mut ancestors: Vec<NodeId> = Vec::new();
    for entry_result in iter {
        let entry = entry_result.map_err(|e| read_error(e, root))?;
        let depth = entry.depth() - 1;
        ancestors.truncate(depth);
        let parent = ancestors.last().copied().unwrap_or(NodeId::ROOT);

        let name = entry.file_name().to_string_lossy().into_owned();
        let is_dir = entry.file_type().is_dir();
        let id = tree.add_child(parent, name, is_dir);
        if is_dir {
            ancestors.push(id);
        }
    }

    info!(root = %root.display(), entries = tree.len(), "walked directory");
    Ok(tree)
}

/// Patterns match the base name, or the path relative to the root so that
/// e.g. `target/**` works.
fn is_ignored(ignore: &GlobSet, root: &Path, entry: &DirEntry) -> bool {
    if ignore.is_match(entry.file_name()) {
        return true;
    }
    entry
        .path()
        .strip_prefix(root)
        .is_ok_and(|relative| ignore.is_match(relative))
}

fn read_error(err: walkdir::Error, root: &Path) -> TreeError {
    let path = err.path().unwrap_or(root).to_path_buf();
    let message = err.to_string();
    let source = err
        .into_io_error()
        .unwrap_or_else(|| io::Error::new(io::ErrorKind::Other, message));
    TreeError::DirectoryRead { path, source }
}

/// Comparison function for walkdir sorting.
/// Directories first, then case-insensitive alpha, dotfiles last.
fn sort_cmp(a: &DirEntry, b: &DirEntry) -> std::cmp::Ordering {
    let a_is_dir = a.file_type().is_dir();
    let b_is_dir = b.file_type().is_dir();

    // Directories before files
    if a_is_dir != b_is_dir {
        return b_is_dir.cmp(&a_is_dir);
    }

    let a_name = a.file_name().to_string_lossy();
    let b_name = b.file_name().to_string_lossy();

    let a_dot = a_name.starts_with('.');
    let b_dot = b_name.starts_with('.');

    // Dotfiles last
    if a_dot != b_dot {
        return a_dot.cmp(&b_dot);
    }

    a_name.to_lowercase().cmp(&b_name.to_lowercase())
}
