use super::{NodeId, Tree};
use crate::render::BranchStyle;

const CONTINUATION: &str = "\u{2502}   "; // │
const BLANK: &str = "    ";
const TEE: &str = "\u{251c}\u{2500}\u{2500} "; // ├──
const CORNER: &str = "\u{2514}\u{2500}\u{2500} "; // └──

/// Compute the box-drawing prefix of every entry, in pre-order.
pub(crate) fn compute_prefixes(tree: &Tree, style: BranchStyle) -> Vec<(NodeId, String)> {
    let mut rows = Vec::with_capacity(tree.len());
    let mut ancestor_is_last = Vec::new();
    push_rows(tree, tree.top_level(), style, &mut ancestor_is_last, &mut rows);
    rows
}

fn push_rows(
    tree: &Tree,
    siblings: &[NodeId],
    style: BranchStyle,
    ancestor_is_last: &mut Vec<bool>,
    rows: &mut Vec<(NodeId, String)>,
) {
    for (i, &id) in siblings.iter().enumerate() {
        let is_last = i + 1 == siblings.len();
        rows.push((id, prefix_for(style, ancestor_is_last, is_last)));

        let children = tree[id].children();
        if !children.is_empty() {
            ancestor_is_last.push(is_last);
            push_rows(tree, children, style, ancestor_is_last, rows);
            ancestor_is_last.pop();
        }
    }
}

/// `ancestor_is_last[d]` records whether the ancestor at depth `d` was the
/// last of its siblings. Top-level entries get no prefix at all.
fn prefix_for(style: BranchStyle, ancestor_is_last: &[bool], is_last: bool) -> String {
    if ancestor_is_last.is_empty() {
        return String::new();
    }

    let mut prefix = String::new();
    // The top-level ancestor owns no column.
    for &ancestor_last in &ancestor_is_last[1..] {
        match style {
            BranchStyle::Classic if ancestor_last => prefix.push_str(BLANK),
            _ => prefix.push_str(CONTINUATION),
        }
    }
    match style {
        BranchStyle::Classic if is_last => prefix.push_str(CORNER),
        _ => prefix.push_str(TEE),
    }
    prefix
}
