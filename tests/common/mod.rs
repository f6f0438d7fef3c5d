#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use treeforge::tree::{parse_tree, Classifier, ParseOptions, Tree, WalkConfig};

/// Default WalkConfig with standard ignore patterns, unsorted.
pub fn default_walk_config() -> WalkConfig {
    WalkConfig::default()
}

/// WalkConfig with sorting on, so assertions can rely on order.
pub fn sorted_walk_config() -> WalkConfig {
    WalkConfig {
        sort: true,
        ..WalkConfig::default()
    }
}

/// Parse diagram text with the default classifier in lenient mode.
pub fn parse_text(text: &str) -> Tree {
    parse_tree(text.as_bytes(), &Classifier::default(), ParseOptions::default()).unwrap()
}

/// Create a directory structure from a list of relative paths.
/// Paths ending with '/' create directories; others create empty files.
pub fn create_fixture(paths: &[&str]) -> TempDir {
    let tmp = TempDir::new().unwrap();
    for p in paths {
        let full = tmp.path().join(p);
        if p.ends_with('/') {
            fs::create_dir_all(&full).unwrap();
        } else {
            if let Some(parent) = full.parent() {
                fs::create_dir_all(parent).unwrap();
            }
            fs::write(&full, "").unwrap();
        }
    }
    tmp
}

/// Every path under `root` as (relative path, is_dir), sorted.
pub fn disk_entries(root: &Path) -> Vec<(PathBuf, bool)> {
    let mut out: Vec<(PathBuf, bool)> = walkdir::WalkDir::new(root)
        .min_depth(1)
        .into_iter()
        .map(|e| {
            let e = e.unwrap();
            (
                e.path().strip_prefix(root).unwrap().to_path_buf(),
                e.file_type().is_dir(),
            )
        })
        .collect();
    out.sort();
    out
}

/// Tree entries as (relative path, is_dir), sorted.
pub fn tree_entries(tree: &Tree) -> Vec<(PathBuf, bool)> {
    let mut out = tree.entries();
    out.sort();
    out
}

/// Names of the root's direct children, in order.
pub fn top_level_names(tree: &Tree) -> Vec<String> {
    tree.top_level()
        .iter()
        .map(|&id| tree[id].name().to_string())
        .collect()
}
