use pretty_assertions::assert_eq;
use skeleton_core::{
    AcceptedGeometry, LayoutSnapshot, LayoutTree, Rect, SkeletonConfig, VisibilityFilter, Walker,
};

use crate::common::*;

// ── Reference scenarios ─────────────────────────────────────────────

#[test]
fn single_child_in_200_by_100_container() {
    let mut tree = LayoutSnapshot::new(Rect::new(0.0, 0.0, 200.0, 100.0));
    let root = tree.root();
    push_label(&mut tree, root, Rect::new(10.0, 10.0, 80.0, 20.0));

    let config = SkeletonConfig::default();
    let result = scan_root(&tree, &config.filter());
    assert_eq!(
        result.nodes,
        vec![AcceptedGeometry {
            rect: Rect::new(10.0, 10.0, 80.0, 20.0),
            depth: 0,
        }]
    );
    assert_eq!(overlay_for(&tree, &config).view_box(), "0 0 200 100");
}

#[test]
fn child_at_depth_two_with_max_depth_one_is_empty() {
    let mut tree = LayoutSnapshot::new(Rect::new(0.0, 0.0, 200.0, 100.0));
    nested_label(&mut tree, 2, Rect::new(10.0, 10.0, 80.0, 20.0));

    let config = SkeletonConfig {
        max_depth: Some(1),
        ..SkeletonConfig::default()
    };
    assert!(scan_root(&tree, &config.filter()).nodes.is_empty());

    let graphic = overlay_for(&tree, &config);
    assert!(graphic.is_empty());
    assert_eq!(graphic.view_box(), "0 0 200 100");
}

// ── Invariants ──────────────────────────────────────────────────────

#[test]
fn every_accepted_rect_is_translated_by_container_origin() {
    let tree = report_card();
    let root = tree.root();
    let container = tree.bounding_rect(root).unwrap();
    let filter = depth_only(0, None);
    let result = scan_root(&tree, &filter);

    let absolute: Vec<Rect> = Walker::new(&tree, root)
        .map(|id| tree.bounding_rect(id).unwrap())
        .collect();
    assert_eq!(absolute.len(), result.nodes.len());

    for (raw, accepted) in absolute.iter().zip(&result.nodes) {
        assert_eq!(accepted.rect.top, raw.top - container.top);
        assert_eq!(accepted.rect.left, raw.left - container.left);
        assert_eq!(accepted.rect.width, raw.width);
        assert_eq!(accepted.rect.height, raw.height);
    }
}

#[test]
fn rescanning_unchanged_tree_is_identical() {
    let tree = report_card();
    let filter = VisibilityFilter::default();
    let first = scan_root(&tree, &filter);
    let second = scan_root(&tree, &filter);
    assert_eq!(first, second);
}

#[test]
fn empty_container_produces_empty_overlay() {
    let tree = LayoutSnapshot::new(Rect::new(5.0, 5.0, 64.0, 48.0));
    let graphic = overlay_for(&tree, &SkeletonConfig::default());
    assert!(graphic.is_empty());
    assert_eq!((graphic.width, graphic.height), (64.0, 48.0));
}

#[test]
fn zero_sized_container_degrades_to_zero_sized_overlay() {
    let tree = LayoutSnapshot::detached();
    let graphic = overlay_for(&tree, &SkeletonConfig::default());
    assert_eq!(graphic.view_box(), "0 0 0 0");
    assert!(graphic.is_empty());
}
