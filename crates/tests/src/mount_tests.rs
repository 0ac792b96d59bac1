use skeleton_core::{MountState, SkeletonConfig, SkeletonMount, View};

use crate::common::*;

// ── Measuring -> Ready ──────────────────────────────────────────────

#[test]
fn overlay_shown_only_while_loading_and_ready() {
    let graphic = overlay_for(&report_card(), &SkeletonConfig::default());
    let mut mount = SkeletonMount::new();

    assert_eq!(mount.view(true), View::Measuring);
    assert_eq!(mount.view(false), View::Children);

    assert!(mount.complete(graphic.clone()));
    assert_eq!(mount.view(true), View::Overlay(&graphic));
    assert_eq!(mount.view(false), View::Children);
}

#[test]
fn overlay_is_built_once_per_mount() {
    let first = overlay_for(&report_card(), &SkeletonConfig::default());
    let mut mount = SkeletonMount::new();
    mount.complete(first.clone());

    // A later layout (for example after a resize) must not replace it.
    let mut resized = report_card();
    let root = resized.root();
    push_label(&mut resized, root, skeleton_core::Rect::new(300.0, 100.0, 10.0, 10.0));
    let second = overlay_for(&resized, &SkeletonConfig::default());
    assert_ne!(first, second);

    assert!(!mount.complete(second));
    assert_eq!(mount.state(), &MountState::Ready(first));
}
