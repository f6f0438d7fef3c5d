//! Tree diagram output.

use crate::tree::layout::compute_prefixes;
use crate::tree::Tree;
use std::io::{self, Write};

/// How branch glyphs are drawn.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum BranchStyle {
    /// `│   ` continuation and `├── ` on every entry. Parses back into the
    /// same tree.
    #[default]
    Uniform,
    /// Conventional `└── ` for last siblings with blank continuation below
    /// them. For display only: blank columns carry no depth when parsed.
    Classic,
}

/// Configuration for the rendering pipeline.
#[derive(Debug, Clone, Copy, Default)]
pub struct RenderConfig {
    pub style: BranchStyle,
}

/// Sanitize control characters to avoid terminal control-sequence injection.
fn sanitize_terminal_text(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c.is_control() => {
                let code = c as u32;
                if code <= 0xFF {
                    out.push_str(&format!("\\x{:02X}", code));
                } else {
                    out.push_str(&format!("\\u{{{:X}}}", code));
                }
            }
            _ => out.push(c),
        }
    }
    out
}

/// One diagram line per entry, parents before children. The root is not
/// printed; directories end in `/`.
pub fn tree_to_lines(tree: &Tree, config: &RenderConfig) -> Vec<String> {
    compute_prefixes(tree, config.style)
        .into_iter()
        .map(|(id, prefix)| {
            let node = &tree[id];
            let name = sanitize_terminal_text(node.name());
            if node.is_dir() {
                format!("{prefix}{name}/")
            } else {
                format!("{prefix}{name}")
            }
        })
        .collect()
}

/// Write the diagram to `out`, one line per entry.
pub fn render_tree<W: Write>(out: &mut W, tree: &Tree, config: &RenderConfig) -> io::Result<()> {
    for line in tree_to_lines(tree, config) {
        writeln!(out, "{line}")?;
    }
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::NodeId;

    #[test]
    fn directories_get_trailing_slash() {
        let mut tree = Tree::new();
        let src = tree.add_child(NodeId::ROOT, "src", true);
        tree.add_child(src, "main.rs", false);
        let lines = tree_to_lines(&tree, &RenderConfig::default());
        assert_eq!(lines, vec!["src/", "├── main.rs"]);
    }

    #[test]
    fn control_characters_are_escaped() {
        assert_eq!(sanitize_terminal_text("a\u{1b}[2Jb"), "a\\x1B[2Jb");
        assert_eq!(sanitize_terminal_text("tab\there"), "tab\\there");
    }
}
