//! Walk + filter: turn a measured subtree into container-relative geometry.

use serde::{Deserialize, Serialize};

use crate::filter::{Rejection, VisibilityFilter};
use crate::geometry::Rect;
use crate::tree::{LayoutTree, Walker};

/// A placeholder-worthy node, relative to the container's top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AcceptedGeometry {
    pub rect: Rect,
    pub depth: usize,
}

/// Everything the synthesizer needs from one measurement pass.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScanResult {
    /// The container boundary as measured (absolute coordinates).
    pub container: Rect,
    /// Accepted geometry in pre-order traversal order.
    pub nodes: Vec<AcceptedGeometry>,
}

impl ScanResult {
    pub fn width(&self) -> f64 {
        self.container.width
    }

    pub fn height(&self) -> f64 {
        self.container.height
    }
}

/// Scan the subtree under `root` once.
///
/// A container without a measured box is treated as zero-sized at the
/// origin. Nodes that fail the filter are skipped without pruning the walk.
pub fn scan<T: LayoutTree + ?Sized>(
    tree: &T,
    root: T::NodeId,
    filter: &VisibilityFilter,
) -> ScanResult {
    let container = tree.bounding_rect(root).unwrap_or_else(|| {
        tracing::debug!(?root, "container has no measured box, using zero size");
        Rect::ZERO
    });

    let mut nodes = Vec::new();
    let mut visited = 0usize;
    for node in Walker::new(tree, root) {
        visited += 1;
        match filter.inspect(tree, root, node) {
            Ok(candidate) => {
                tracing::debug!(
                    ?node,
                    depth = candidate.depth,
                    text = candidate.has_text_content,
                    background = candidate.has_background,
                    "accepted"
                );
                nodes.push(AcceptedGeometry {
                    rect: candidate.rect.relative_to(&container),
                    depth: candidate.depth,
                });
            }
            Err(Rejection::StyleUnreadable) => {
                tracing::warn!(?node, "computed style unreadable, skipping node");
            }
            Err(reason) => {
                tracing::trace!(?node, ?reason, "rejected");
            }
        }
    }

    tracing::debug!(
        visited,
        accepted = nodes.len(),
        width = container.width,
        height = container.height,
        "layout scan complete"
    );

    ScanResult { container, nodes }
}
