use dioxus::prelude::*;
use skeleton_core::{LayoutSnapshot, SkeletonError, SnapshotNode};

/// Attribute that marks a skeleton container so the capture script can find it.
pub(crate) const CONTAINER_ATTR: &str = "data-skeleton";

/// Serializes the container's subtree in one synchronous pass: every box and
/// computed style is read before control returns to the event loop.
///
/// Returns `null` when the container is not in the document.
const CAPTURE_SCRIPT: &str = r#"
(function(id) {
    var root = document.querySelector('[data-skeleton="' + id + '"]');
    if (!root) { return null; }
    function rect(el) {
        var r = el.getBoundingClientRect();
        return { top: r.top, left: r.left, width: r.width, height: r.height };
    }
    function capture(node) {
        if (node.nodeType === Node.ELEMENT_NODE) {
            var background = null;
            try {
                background = window.getComputedStyle(node).backgroundColor;
            } catch (e) {}
            var children = [];
            for (var i = 0; i < node.childNodes.length; i++) {
                children.push(capture(node.childNodes[i]));
            }
            return {
                kind: node instanceof HTMLElement ? "element" : "foreign",
                rect: node.isConnected ? rect(node) : null,
                background_color: background,
                children: children
            };
        }
        if (node.nodeType === Node.TEXT_NODE) {
            return { kind: "text" };
        }
        return { kind: "other" };
    }
    return capture(root);
})("__SKELETON_ID__")
"#;

fn capture_script(instance: &str) -> String {
    CAPTURE_SCRIPT.replace("__SKELETON_ID__", instance)
}

/// Snapshot the live subtree of the skeleton container tagged `instance`.
pub async fn capture_snapshot(instance: &str) -> Result<LayoutSnapshot, SkeletonError> {
    let value = document::eval(&format!("return {};", capture_script(instance).trim()))
        .await
        .map_err(|e| SkeletonError::snapshot(e.to_string()))?;
    let root: Option<SnapshotNode> = serde_json::from_value(value)?;
    Ok(LayoutSnapshot::from_value(root))
}
