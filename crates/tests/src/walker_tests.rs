use skeleton_core::{depth_of, LayoutSnapshot, LayoutTree, NodeKind, Rect, Walker};

use crate::common::*;

// ── Pre-order traversal ─────────────────────────────────────────────

#[test]
fn walker_visits_every_element_once_in_document_order() {
    let tree = report_card();
    let visited: Vec<usize> = Walker::new(&tree, tree.root()).collect();
    assert_eq!(visited.len(), 6);

    let tops: Vec<f64> = visited
        .iter()
        .map(|&id| tree.bounding_rect(id).unwrap().top)
        .collect();
    assert_eq!(tops, vec![40.0, 56.0, 96.0, 130.0, 130.0, 130.0]);
}

#[test]
fn walker_never_yields_text_or_other_nodes() {
    let mut tree = LayoutSnapshot::new(Rect::ZERO);
    let root = tree.root();
    tree.push_text(root);
    tree.push_other(root);
    let el = tree.push_element(root, Rect::ZERO, TRANSPARENT);
    tree.push_text(el);

    let visited: Vec<usize> = Walker::new(&tree, root).collect();
    assert_eq!(visited, vec![el]);
    assert!(visited.iter().all(|&id| tree.kind(id) == NodeKind::Element));
}

#[test]
fn walker_is_deterministic() {
    let tree = report_card();
    let first: Vec<usize> = Walker::new(&tree, tree.root()).collect();
    let second: Vec<usize> = Walker::new(&tree, tree.root()).collect();
    assert_eq!(first, second);
}

// ── Depth ───────────────────────────────────────────────────────────

#[test]
fn direct_child_always_has_depth_zero() {
    let tree = report_card();
    let root = tree.root();
    let card = tree.first_child(root).unwrap();
    assert_eq!(depth_of(&tree, root, card), 0);
}

#[test]
fn depth_equals_ancestors_strictly_between_node_and_container() {
    for levels in 0..6 {
        let mut tree = LayoutSnapshot::new(Rect::new(0.0, 0.0, 10.0, 10.0));
        let label = nested_label(&mut tree, levels, Rect::new(0.0, 0.0, 10.0, 10.0));
        assert_eq!(depth_of(&tree, tree.root(), label), levels);
    }
}
