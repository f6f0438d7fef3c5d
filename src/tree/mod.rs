//! Tree model plus parsing, classification, filesystem walking, and layout.

pub mod classify;
pub(crate) mod layout;
pub mod parse;
pub mod walk;

use std::ops::Index;
use std::path::PathBuf;

pub use classify::Classifier;
pub use parse::{parse_line, parse_tree, parse_tree_file, ParseOptions, TreeBuilder};
pub use walk::{build_ignore_set, build_ignore_set_no_defaults, walk_tree, WalkConfig};

/// Index of a node inside its [`Tree`] arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

impl NodeId {
    /// The synthetic root standing for the base path.
    pub const ROOT: NodeId = NodeId(0);
}

/// A single directory or file entry.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    name: String,
    is_dir: bool,
    depth: usize,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

impl Node {
    /// Base name of the entry (no path separators).
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_dir(&self) -> bool {
        self.is_dir
    }

    /// Nesting level, 0 for direct children of the root.
    /// Meaningless for the root itself.
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Containing node; `None` only for the root.
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    /// Children in insertion order.
    pub fn children(&self) -> &[NodeId] {
        &self.children
    }
}

/// Arena-backed rooted tree. Parent links are indices, so walking upward
/// never needs shared ownership.
#[derive(Debug, Clone, PartialEq)]
pub struct Tree {
    nodes: Vec<Node>,
}

impl Default for Tree {
    fn default() -> Self {
        Self::new()
    }
}

impl Tree {
    /// Create a tree holding only the synthetic root.
    pub fn new() -> Self {
        Tree {
            nodes: vec![Node {
                name: ".".to_string(),
                is_dir: true,
                depth: 0,
                parent: None,
                children: Vec::new(),
            }],
        }
    }

    pub fn root(&self) -> &Node {
        &self.nodes[NodeId::ROOT.0]
    }

    /// Append a child under `parent` and return its id.
    ///
    /// A file cannot own children: if `parent` is currently a file it is
    /// promoted to a directory first.
    pub fn add_child(&mut self, parent: NodeId, name: impl Into<String>, is_dir: bool) -> NodeId {
        let depth = if parent == NodeId::ROOT {
            0
        } else {
            self.nodes[parent.0].depth + 1
        };
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node {
            name: name.into(),
            is_dir,
            depth,
            parent: Some(parent),
            children: Vec::new(),
        });
        let parent_node = &mut self.nodes[parent.0];
        if !parent_node.is_dir {
            tracing::debug!(name = %parent_node.name, "promoting file to directory");
            parent_node.is_dir = true;
        }
        parent_node.children.push(id);
        id
    }

    /// Number of entries, not counting the root.
    pub fn len(&self) -> usize {
        self.nodes.len() - 1
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Top-level entries (children of the root).
    pub fn top_level(&self) -> &[NodeId] {
        &self.root().children
    }

    /// All entries except the root, parents before children.
    pub fn descendants(&self) -> Descendants<'_> {
        let mut stack: Vec<NodeId> = self.top_level().to_vec();
        stack.reverse();
        Descendants { tree: self, stack }
    }

    /// Path of `id` relative to the root.
    pub fn relative_path(&self, id: NodeId) -> PathBuf {
        let mut parts = Vec::new();
        let mut cursor = Some(id);
        while let Some(current) = cursor {
            if current == NodeId::ROOT {
                break;
            }
            let node = &self.nodes[current.0];
            parts.push(node.name.as_str());
            cursor = node.parent;
        }
        parts.iter().rev().collect()
    }

    /// Every entry as `(relative path, is_dir)`, in pre-order.
    pub fn entries(&self) -> Vec<(PathBuf, bool)> {
        self.descendants()
            .map(|id| (self.relative_path(id), self[id].is_dir))
            .collect()
    }
}

impl Index<NodeId> for Tree {
    type Output = Node;

    fn index(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }
}

/// Pre-order iterator over a tree's entries.
pub struct Descendants<'a> {
    tree: &'a Tree,
    stack: Vec<NodeId>,
}

impl Iterator for Descendants<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let id = self.stack.pop()?;
        self.stack
            .extend(self.tree[id].children.iter().rev().copied());
        Some(id)
    }
}
