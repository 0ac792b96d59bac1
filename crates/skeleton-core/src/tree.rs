//! Measured layout tree access and pre-order traversal.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::color;
use crate::geometry::Rect;

/// Node categories the walker distinguishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeKind {
    /// An HTML element.
    Element,
    /// An element outside the HTML namespace (SVG, MathML). Walked through
    /// but never outlined.
    Foreign,
    Text,
    /// Comments, processing instructions, and anything else.
    Other,
}

/// The subset of resolved style the filter consumes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComputedStyle {
    pub background_color: String,
}

impl ComputedStyle {
    pub fn new(background_color: impl Into<String>) -> Self {
        Self {
            background_color: background_color.into(),
        }
    }

    /// True unless the resolved background is known to have zero alpha.
    ///
    /// Values whose alpha cannot be read count as a background.
    pub fn has_background(&self) -> bool {
        match color::is_transparent(&self.background_color) {
            Some(transparent) => !transparent,
            None => {
                tracing::debug!(
                    value = %self.background_color,
                    "unparseable background color, treating as opaque"
                );
                true
            }
        }
    }
}

/// A rendered tree whose layout has been committed.
///
/// Any host that can answer these questions (a browser DOM snapshot, a
/// native widget tree, a test fixture) can be scanned.
pub trait LayoutTree {
    type NodeId: Copy + Eq + fmt::Debug;

    fn kind(&self, node: Self::NodeId) -> NodeKind;

    fn parent(&self, node: Self::NodeId) -> Option<Self::NodeId>;

    fn first_child(&self, node: Self::NodeId) -> Option<Self::NodeId>;

    fn next_sibling(&self, node: Self::NodeId) -> Option<Self::NodeId>;

    /// Absolute measured box. `None` when the node is detached.
    fn bounding_rect(&self, node: Self::NodeId) -> Option<Rect>;

    /// Resolved style. `None` when it cannot be read.
    fn computed_style(&self, node: Self::NodeId) -> Option<ComputedStyle>;

    /// Whether `node` has at least one direct text child. Empty text counts.
    fn has_text_child(&self, node: Self::NodeId) -> bool {
        let mut child = self.first_child(node);
        while let Some(id) = child {
            if self.kind(id) == NodeKind::Text {
                return true;
            }
            child = self.next_sibling(id);
        }
        false
    }
}

/// Number of ancestors strictly between `node` and `root`.
///
/// Direct children of `root` are depth 0. A node whose ancestor chain never
/// reaches `root` stops counting when the chain ends.
pub fn depth_of<T: LayoutTree + ?Sized>(tree: &T, root: T::NodeId, node: T::NodeId) -> usize {
    let mut depth = 0;
    let mut parent = tree.parent(node);
    while let Some(id) = parent {
        if id == root {
            break;
        }
        depth += 1;
        parent = tree.parent(id);
    }
    depth
}

#[derive(Debug, Clone, Copy)]
enum Cursor<Id> {
    At(Id),
    Finished,
}

/// Lazy pre-order iterator over the element descendants of a root.
///
/// The root itself is not yielded. Nodes other than HTML elements are
/// stepped over (their descendants are still visited), and once exhausted
/// the walker stays exhausted.
pub struct Walker<'a, T: LayoutTree + ?Sized> {
    tree: &'a T,
    root: T::NodeId,
    cursor: Cursor<T::NodeId>,
}

impl<'a, T: LayoutTree + ?Sized> Walker<'a, T> {
    pub fn new(tree: &'a T, root: T::NodeId) -> Self {
        Self {
            tree,
            root,
            cursor: Cursor::At(root),
        }
    }

    /// Next node in document order after `from`, never leaving the root.
    fn advance(&self, from: T::NodeId) -> Option<T::NodeId> {
        if let Some(child) = self.tree.first_child(from) {
            return Some(child);
        }
        let mut node = from;
        loop {
            if node == self.root {
                return None;
            }
            if let Some(sibling) = self.tree.next_sibling(node) {
                return Some(sibling);
            }
            node = self.tree.parent(node)?;
        }
    }
}

impl<T: LayoutTree + ?Sized> Iterator for Walker<'_, T> {
    type Item = T::NodeId;

    fn next(&mut self) -> Option<T::NodeId> {
        loop {
            let Cursor::At(from) = self.cursor else {
                return None;
            };
            match self.advance(from) {
                Some(node) => {
                    self.cursor = Cursor::At(node);
                    if self.tree.kind(node) == NodeKind::Element {
                        return Some(node);
                    }
                }
                None => {
                    self.cursor = Cursor::Finished;
                    return None;
                }
            }
        }
    }
}

impl<T: LayoutTree + ?Sized> std::iter::FusedIterator for Walker<'_, T> {}
