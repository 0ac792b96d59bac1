use skeleton_core::{LayoutSnapshot, Rect};

use crate::common::*;

fn chain(levels: usize) -> LayoutSnapshot {
    let mut tree = LayoutSnapshot::new(Rect::new(0.0, 0.0, 200.0, 100.0));
    nested_label(&mut tree, levels, Rect::new(10.0, 10.0, 80.0, 20.0));
    tree
}

// ── Upper bound ─────────────────────────────────────────────────────

#[test]
fn max_depth_is_inclusive() {
    let tree = chain(3);
    let result = scan_root(&tree, &depth_only(0, Some(2)));
    let depths: Vec<usize> = result.nodes.iter().map(|n| n.depth).collect();
    assert_eq!(depths, vec![0, 1, 2]);
}

#[test]
fn no_accepted_node_exceeds_max_depth() {
    let tree = report_card();
    for max in 0..4 {
        let result = scan_root(&tree, &depth_only(0, Some(max)));
        assert!(result.nodes.iter().all(|n| n.depth <= max), "max_depth {max}");
    }
}

#[test]
fn unbounded_max_accepts_every_depth() {
    let tree = chain(5);
    let result = scan_root(&tree, &depth_only(0, None));
    assert_eq!(result.nodes.len(), 6);
    assert_eq!(result.nodes.last().map(|n| n.depth), Some(5));
}

// ── Lower bound ─────────────────────────────────────────────────────

#[test]
fn min_depth_is_inclusive() {
    let tree = chain(3);
    let result = scan_root(&tree, &depth_only(2, None));
    let depths: Vec<usize> = result.nodes.iter().map(|n| n.depth).collect();
    assert_eq!(depths, vec![2, 3]);
}

#[test]
fn no_accepted_node_is_shallower_than_min_depth() {
    let tree = report_card();
    for min in 0..4 {
        let result = scan_root(&tree, &depth_only(min, None));
        assert!(result.nodes.iter().all(|n| n.depth >= min), "min_depth {min}");
    }
}

#[test]
fn window_selects_a_single_level() {
    let tree = report_card();
    let result = scan_root(&tree, &depth_only(1, Some(1)));
    // h3, p, and the bare row wrapper.
    assert_eq!(result.nodes.len(), 3);
    assert!(result.nodes.iter().all(|n| n.depth == 1));
}
