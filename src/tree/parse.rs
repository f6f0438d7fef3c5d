//! Text diagram → tree.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::{debug, trace, warn};

use super::{Classifier, NodeId, Tree};
use crate::error::TreeError;

/// Glyphs that each open one level of nesting.
const CONNECTORS: [char; 3] = ['\u{2502}', '\u{251c}', '\u{2514}']; // │ ├ └

/// Branch decoration that carries no depth.
const DASHES: [char; 2] = ['-', '\u{2500}']; // - ─

fn is_connector(c: char) -> bool {
    CONNECTORS.contains(&c)
}

fn is_decoration(c: char) -> bool {
    c.is_whitespace() || DASHES.contains(&c)
}

/// Split one diagram line into its nesting depth and entry name.
///
/// Returns `None` for lines that carry no entry: blank lines, `#` comment
/// lines, and lines made only of glyphs. Depth is the number of connector
/// glyphs (`│`, `├`, `└`) before the name; spaces and dashes are cosmetic.
/// An inline `#` starts a comment that is cut from the name.
pub fn parse_line(line: &str) -> Option<(usize, &str)> {
    let line = line.trim_end();
    if line.is_empty() || line.trim_start().starts_with('#') {
        return None;
    }

    let mut depth = 0;
    for (i, c) in line.char_indices() {
        if is_connector(c) {
            depth += 1;
            continue;
        }
        if is_decoration(c) {
            continue;
        }

        let rest = &line[i..];
        let rest = rest.find('#').map_or(rest, |end| &rest[..end]);
        let name = rest.trim_matches(|c: char| is_connector(c) || is_decoration(c));
        return if name.is_empty() {
            None
        } else {
            Some((depth, name))
        };
    }
    None
}

/// Knobs for turning a line stream into a tree.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParseOptions {
    /// Reject an indented first entry and indentation that jumps more than
    /// one level, instead of clamping.
    pub strict: bool,
}

/// Rebuilds parent/child structure from a flat `(depth, name)` stream.
///
/// A deeper line nests under the entry just before it; a shallower line
/// walks back up until the parent's children sit at that line's depth.
pub struct TreeBuilder<'a> {
    tree: Tree,
    classifier: &'a Classifier,
    options: ParseOptions,
    current_parent: NodeId,
    current_depth: usize,
    last: Option<NodeId>,
}

impl<'a> TreeBuilder<'a> {
    pub fn new(classifier: &'a Classifier, options: ParseOptions) -> Self {
        TreeBuilder {
            tree: Tree::new(),
            classifier,
            options,
            current_parent: NodeId::ROOT,
            current_depth: 0,
            last: None,
        }
    }

    /// Attach one entry. `line` is only used for diagnostics.
    ///
    /// A trailing `/` marks the entry as a directory regardless of its name.
    /// Returns `Ok(None)` when the name is empty once the slash is removed.
    pub fn push(
        &mut self,
        line: usize,
        depth: usize,
        name: &str,
    ) -> Result<Option<NodeId>, TreeError> {
        let (name, explicit_dir) = match name.strip_suffix('/') {
            Some(stripped) => (stripped.trim_end_matches('/').trim_end(), true),
            None => (name, false),
        };
        if name.is_empty() {
            if self.options.strict {
                return Err(TreeError::Malformed {
                    line,
                    reason: "entry has no name".to_string(),
                });
            }
            trace!(line, "skipping nameless entry");
            return Ok(None);
        }

        let mut depth = depth;
        if self.last.is_none() && depth > 0 {
            if self.options.strict {
                return Err(TreeError::Malformed {
                    line,
                    reason: format!("first entry is indented {depth} level(s)"),
                });
            }
            warn!(line, depth, "first entry is indented, treating it as top level");
            depth = 0;
        }

        if depth > self.current_depth {
            if self.options.strict && depth > self.current_depth + 1 {
                return Err(TreeError::Malformed {
                    line,
                    reason: format!(
                        "indentation jumps from level {} to {}",
                        self.current_depth, depth
                    ),
                });
            }
            if let Some(previous) = self.last {
                self.current_parent = previous;
            }
        } else if depth < self.current_depth {
            // Climb by stored depth: after a lenient multi-level jump the raw
            // depth overstates how deep current_parent really is.
            while self.current_parent != NodeId::ROOT
                && self.tree[self.current_parent].depth() + 1 > depth
            {
                self.current_parent = self.tree[self.current_parent]
                    .parent()
                    .unwrap_or(NodeId::ROOT);
            }
        }
        self.current_depth = depth;

        let is_dir = explicit_dir || self.classifier.is_dir(name);
        let id = self.tree.add_child(self.current_parent, name, is_dir);
        debug!(line, depth, entry = name, is_dir, "parsed entry");
        self.last = Some(id);
        Ok(Some(id))
    }

    pub fn finish(self) -> Tree {
        self.tree
    }
}

/// Parse a whole diagram from any buffered reader.
pub fn parse_tree<R: BufRead>(
    reader: R,
    classifier: &Classifier,
    options: ParseOptions,
) -> Result<Tree, TreeError> {
    let mut builder = TreeBuilder::new(classifier, options);
    for (index, line) in reader.lines().enumerate() {
        let line_no = index + 1;
        let line = line.map_err(|source| TreeError::Read {
            line: line_no,
            source,
        })?;
        let text = if line_no == 1 {
            line.trim_start_matches('\u{feff}')
        } else {
            line.as_str()
        };
        match parse_line(text) {
            Some((depth, name)) => {
                builder.push(line_no, depth, name)?;
            }
            None => trace!(line = line_no, "no entry on line"),
        }
    }
    Ok(builder.finish())
}

/// Open `path` and parse it. The file is closed when this returns.
pub fn parse_tree_file(
    path: &Path,
    classifier: &Classifier,
    options: ParseOptions,
) -> Result<Tree, TreeError> {
    let file = File::open(path).map_err(|source| TreeError::InputOpen {
        path: path.to_path_buf(),
        source,
    })?;
    parse_tree(BufReader::new(file), classifier, options)
}
