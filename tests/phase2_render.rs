mod common;

use common::parse_text;
use treeforge::render::{render_tree, tree_to_lines, BranchStyle, RenderConfig};
use treeforge::tree::{NodeId, Tree};

fn sample_tree() -> Tree {
    let mut tree = Tree::new();
    let src = tree.add_child(NodeId::ROOT, "src", true);
    tree.add_child(src, "main.rs", false);
    let utils = tree.add_child(src, "utils", true);
    tree.add_child(utils, "helper.rs", false);
    tree.add_child(NodeId::ROOT, "README.md", false);
    tree
}

fn classic() -> RenderConfig {
    RenderConfig {
        style: BranchStyle::Classic,
    }
}

#[test]
fn test_uniform_layout() {
    let lines = tree_to_lines(&sample_tree(), &RenderConfig::default());
    assert_eq!(
        lines,
        vec![
            "src/",
            "\u{251c}\u{2500}\u{2500} main.rs",
            "\u{251c}\u{2500}\u{2500} utils/",
            "\u{2502}   \u{251c}\u{2500}\u{2500} helper.rs",
            "README.md",
        ]
    );
}

#[test]
fn test_uniform_has_no_corners() {
    let lines = tree_to_lines(&sample_tree(), &RenderConfig::default());
    assert!(lines.iter().all(|l| !l.contains('\u{2514}')));
}

#[test]
fn test_classic_layout() {
    let mut tree = Tree::new();
    let a = tree.add_child(NodeId::ROOT, "a", true);
    let b = tree.add_child(a, "b", true);
    tree.add_child(b, "b1.txt", false);
    let c = tree.add_child(a, "c", true);
    tree.add_child(c, "c1.txt", false);

    let lines = tree_to_lines(&tree, &classic());
    assert_eq!(
        lines,
        vec![
            "a/",
            "\u{251c}\u{2500}\u{2500} b/",
            "\u{2502}   \u{2514}\u{2500}\u{2500} b1.txt",
            "\u{2514}\u{2500}\u{2500} c/",
            "    \u{2514}\u{2500}\u{2500} c1.txt",
        ]
    );
}

#[test]
fn test_empty_tree_renders_nothing() {
    let mut buf = Vec::new();
    render_tree(&mut buf, &Tree::new(), &RenderConfig::default()).unwrap();
    assert!(buf.is_empty());
}

#[test]
fn test_render_tree_writes_lines() {
    let mut buf = Vec::new();
    render_tree(&mut buf, &sample_tree(), &RenderConfig::default()).unwrap();
    let text = String::from_utf8(buf).unwrap();
    assert_eq!(text.lines().count(), 5);
    assert!(text.ends_with("README.md\n"));
}

#[test]
fn test_uniform_output_parses_back() {
    let tree = sample_tree();
    let text = tree_to_lines(&tree, &RenderConfig::default()).join("\n");
    let reparsed = parse_text(&text);
    assert_eq!(reparsed.entries(), tree.entries());
}

#[test]
fn test_dotted_directory_survives_reparse() {
    let mut tree = Tree::new();
    let conf = tree.add_child(NodeId::ROOT, "conf.d", true);
    tree.add_child(conf, "app.conf", false);
    let text = tree_to_lines(&tree, &RenderConfig::default()).join("\n");
    let reparsed = parse_text(&text);
    assert_eq!(reparsed.entries(), tree.entries());
}
