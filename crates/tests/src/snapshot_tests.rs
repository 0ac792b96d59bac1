use pretty_assertions::assert_eq;
use skeleton_core::{AcceptedGeometry, LayoutSnapshot, Rect, SkeletonConfig, SkeletonErrorKind};

use crate::common::*;

/// Shape of what the browser capture script returns for a small card.
fn captured_card() -> serde_json::Value {
    serde_json::json!({
        "kind": "element",
        "rect": {"top": 120.5, "left": 32, "width": 240, "height": 90},
        "background_color": "rgba(0, 0, 0, 0)",
        "children": [
            {"kind": "text"},
            {
                "kind": "element",
                "rect": {"top": 128.5, "left": 40, "width": 160, "height": 22},
                "background_color": "rgba(0, 0, 0, 0)",
                "children": [{"kind": "text"}]
            },
            {"kind": "other"},
            {
                "kind": "foreign",
                "rect": {"top": 128.5, "left": 240, "width": 16, "height": 16},
                "background_color": "rgb(0, 0, 0)",
                "children": [{"kind": "foreign", "children": [{"kind": "text"}]}]
            },
            {
                "kind": "element",
                "rect": {"top": 160.5, "left": 40, "width": 224, "height": 40},
                "background_color": "rgba(0, 0, 0, 0)",
                "children": [
                    {
                        "kind": "element",
                        "rect": {"top": 168.5, "left": 48, "width": 64, "height": 24},
                        "background_color": "rgb(232, 232, 232)"
                    }
                ]
            }
        ]
    })
}

#[test]
fn captured_json_scans_like_a_live_tree() {
    let tree = LayoutSnapshot::from_json(&captured_card().to_string()).unwrap();
    let result = scan_root(&tree, &SkeletonConfig::default().filter());
    assert_eq!(result.container, Rect::new(120.5, 32.0, 240.0, 90.0));
    assert_eq!(
        result.nodes,
        vec![
            AcceptedGeometry {
                rect: Rect::new(8.0, 8.0, 160.0, 22.0),
                depth: 0,
            },
            AcceptedGeometry {
                rect: Rect::new(48.0, 16.0, 64.0, 24.0),
                depth: 1,
            },
        ]
    );
}

#[test]
fn missing_container_capture_is_zero_sized() {
    let tree = LayoutSnapshot::from_json("null").unwrap();
    let graphic = overlay_for(&tree, &SkeletonConfig::default());
    assert_eq!((graphic.width, graphic.height), (0.0, 0.0));
}

#[test]
fn malformed_capture_is_snapshot_error() {
    let err = LayoutSnapshot::from_json(r#"{"kind": "element", "rect": "wide"}"#).unwrap_err();
    assert_eq!(err.kind, SkeletonErrorKind::Snapshot);
}
