//! Decides which visited nodes get a placeholder shape.

use serde::{Deserialize, Serialize};

use crate::geometry::Rect;
use crate::tree::{depth_of, LayoutTree};

/// Inclusive nesting-depth window. `max: None` is unbounded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DepthBounds {
    pub min: usize,
    pub max: Option<usize>,
}

impl DepthBounds {
    pub const UNBOUNDED: DepthBounds = DepthBounds { min: 0, max: None };

    pub fn new(min: usize, max: Option<usize>) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, depth: usize) -> bool {
        depth >= self.min && self.max.map_or(true, |max| depth <= max)
    }
}

/// Extra requirement applied to nodes that pass the depth window.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Heuristic {
    /// Every element inside the depth window is outlined.
    DepthOnly,
    /// Only elements with a direct text child or a visible background.
    #[default]
    Content,
}

/// A visited element with everything the filter looked at.
#[derive(Debug, Clone, PartialEq)]
pub struct Candidate<Id> {
    pub node: Id,
    pub depth: usize,
    pub rect: Rect,
    pub has_text_content: bool,
    pub has_background: bool,
}

/// Why a node contributed nothing. The walk still descends into it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    OutOfBounds,
    /// Neither a text child nor a visible background.
    NoContent,
    StyleUnreadable,
    Detached,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct VisibilityFilter {
    pub bounds: DepthBounds,
    pub heuristic: Heuristic,
}

impl VisibilityFilter {
    pub fn new(bounds: DepthBounds, heuristic: Heuristic) -> Self {
        Self { bounds, heuristic }
    }

    /// Evaluate one visited node against the depth window and heuristic.
    pub fn inspect<T: LayoutTree + ?Sized>(
        &self,
        tree: &T,
        root: T::NodeId,
        node: T::NodeId,
    ) -> Result<Candidate<T::NodeId>, Rejection> {
        let depth = depth_of(tree, root, node);
        if !self.bounds.contains(depth) {
            return Err(Rejection::OutOfBounds);
        }

        let has_text_content = tree.has_text_child(node);
        let has_background = match self.heuristic {
            Heuristic::DepthOnly => tree
                .computed_style(node)
                .is_some_and(|style| style.has_background()),
            Heuristic::Content => {
                let style = tree
                    .computed_style(node)
                    .ok_or(Rejection::StyleUnreadable)?;
                let has_background = style.has_background();
                if !has_text_content && !has_background {
                    return Err(Rejection::NoContent);
                }
                has_background
            }
        };

        let rect = tree.bounding_rect(node).ok_or(Rejection::Detached)?;

        Ok(Candidate {
            node,
            depth,
            rect,
            has_text_content,
            has_background,
        })
    }
}
