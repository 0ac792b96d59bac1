//! An owned, serializable copy of a measured subtree.
//!
//! Hosts that cannot hand out live references (a browser reached through a
//! JavaScript bridge, for instance) capture the container's subtree in one
//! synchronous pass and ship it as JSON. The same arena doubles as the test
//! fixture for the scanner.

use serde::{Deserialize, Serialize};

use crate::error::SkeletonError;
use crate::geometry::Rect;
use crate::tree::{ComputedStyle, LayoutTree, NodeKind};

/// Nested wire form of a captured node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SnapshotNode {
    pub kind: NodeKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rect: Option<Rect>,
    /// Resolved `background-color`; absent when the style could not be read.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<SnapshotNode>,
}

#[derive(Debug, Clone, PartialEq)]
struct ArenaNode {
    kind: NodeKind,
    parent: Option<usize>,
    first_child: Option<usize>,
    last_child: Option<usize>,
    next_sibling: Option<usize>,
    rect: Option<Rect>,
    style: Option<ComputedStyle>,
}

/// Flat arena of captured nodes. Index 0 is always the container.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutSnapshot {
    nodes: Vec<ArenaNode>,
}

impl LayoutSnapshot {
    const ROOT: usize = 0;

    /// A snapshot holding only a measured container element.
    pub fn new(container: Rect) -> Self {
        Self::with_root(Some(container))
    }

    /// A snapshot for a container that was missing or unattached when
    /// measured. Scans of it see a zero-sized boundary.
    pub fn detached() -> Self {
        Self::with_root(None)
    }

    fn with_root(rect: Option<Rect>) -> Self {
        Self {
            nodes: vec![ArenaNode {
                kind: NodeKind::Element,
                parent: None,
                first_child: None,
                last_child: None,
                next_sibling: None,
                rect,
                style: None,
            }],
        }
    }

    pub fn root(&self) -> usize {
        Self::ROOT
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.len() == 1
    }

    /// Append a node as the last child of `parent` and return its index.
    ///
    /// Panics if `parent` is not an index previously returned by this arena.
    pub fn push_node(
        &mut self,
        parent: usize,
        kind: NodeKind,
        rect: Option<Rect>,
        style: Option<ComputedStyle>,
    ) -> usize {
        let index = self.nodes.len();
        self.nodes.push(ArenaNode {
            kind,
            parent: Some(parent),
            first_child: None,
            last_child: None,
            next_sibling: None,
            rect,
            style,
        });
        match self.nodes[parent].last_child {
            Some(last) => self.nodes[last].next_sibling = Some(index),
            None => self.nodes[parent].first_child = Some(index),
        }
        self.nodes[parent].last_child = Some(index);
        index
    }

    pub fn push_element(&mut self, parent: usize, rect: Rect, background_color: &str) -> usize {
        self.push_node(
            parent,
            NodeKind::Element,
            Some(rect),
            Some(ComputedStyle::new(background_color)),
        )
    }

    pub fn push_text(&mut self, parent: usize) -> usize {
        self.push_node(parent, NodeKind::Text, None, None)
    }

    pub fn push_other(&mut self, parent: usize) -> usize {
        self.push_node(parent, NodeKind::Other, None, None)
    }

    /// Flatten a nested capture. The capture's root becomes the container.
    pub fn from_node(root: SnapshotNode) -> Self {
        let mut snapshot = Self::with_root(root.rect);
        snapshot.nodes[Self::ROOT].style = root.background_color.map(ComputedStyle::new);

        let mut stack: Vec<(SnapshotNode, usize)> = root
            .children
            .into_iter()
            .rev()
            .map(|child| (child, Self::ROOT))
            .collect();

        while let Some((node, parent)) = stack.pop() {
            let index = snapshot.push_node(
                parent,
                node.kind,
                node.rect,
                node.background_color.map(ComputedStyle::new),
            );
            stack.extend(node.children.into_iter().rev().map(|child| (child, index)));
        }
        snapshot
    }

    /// Decode a capture produced by a host bridge.
    ///
    /// `null` means the container was not found and yields
    /// [`LayoutSnapshot::detached`].
    pub fn from_json(json: &str) -> Result<Self, SkeletonError> {
        let root: Option<SnapshotNode> = serde_json::from_str(json)?;
        Ok(Self::from_value(root))
    }

    pub fn from_value(root: Option<SnapshotNode>) -> Self {
        match root {
            Some(node) => Self::from_node(node),
            None => Self::detached(),
        }
    }
}

impl LayoutTree for LayoutSnapshot {
    type NodeId = usize;

    fn kind(&self, node: usize) -> NodeKind {
        self.nodes[node].kind
    }

    fn parent(&self, node: usize) -> Option<usize> {
        self.nodes[node].parent
    }

    fn first_child(&self, node: usize) -> Option<usize> {
        self.nodes[node].first_child
    }

    fn next_sibling(&self, node: usize) -> Option<usize> {
        self.nodes[node].next_sibling
    }

    fn bounding_rect(&self, node: usize) -> Option<Rect> {
        self.nodes[node].rect
    }

    fn computed_style(&self, node: usize) -> Option<ComputedStyle> {
        self.nodes[node].style.clone()
    }
}
