use skeleton_core::{
    build_overlay, scan, Heuristic, LayoutSnapshot, OverlayGraphic, OverlayIds, Rect, ScanResult,
    SkeletonConfig, VisibilityFilter,
};

pub const TRANSPARENT: &str = "rgba(0, 0, 0, 0)";
pub const WHITE: &str = "rgb(255, 255, 255)";
pub const CHIP: &str = "rgb(232, 232, 232)";

/// Append an element that holds a text node.
pub fn push_label(tree: &mut LayoutSnapshot, parent: usize, rect: Rect) -> usize {
    let node = tree.push_element(parent, rect, TRANSPARENT);
    tree.push_text(node);
    node
}

/// Append a bare wrapper: no text, transparent background.
pub fn push_wrapper(tree: &mut LayoutSnapshot, parent: usize, rect: Rect) -> usize {
    tree.push_element(parent, rect, TRANSPARENT)
}

/// A linear chain of wrappers under the root, `levels` deep, with a text
/// label at the bottom. Returns the label's index (depth == `levels`).
pub fn nested_label(tree: &mut LayoutSnapshot, levels: usize, rect: Rect) -> usize {
    let mut parent = tree.root();
    for _ in 0..levels {
        parent = push_wrapper(tree, parent, rect);
    }
    push_label(tree, parent, rect)
}

/// A report card as a browser would lay it out, offset on the page:
///
/// ```text
/// container top 40, left 100, 320x200
/// └── card, same box, white                        depth 0
///     ├── h3 "Reports"                             depth 1
///     ├── p "Palette: Neutral"                     depth 1
///     └── row, transparent                         depth 1
///         ├── span "Quarterly filings"             depth 2
///         └── span "42 documents", gray chip       depth 2
/// ```
pub fn report_card() -> LayoutSnapshot {
    let mut tree = LayoutSnapshot::new(Rect::new(40.0, 100.0, 320.0, 200.0));
    let root = tree.root();
    let card = tree.push_element(root, Rect::new(40.0, 100.0, 320.0, 200.0), WHITE);
    push_label(&mut tree, card, Rect::new(56.0, 116.0, 288.0, 24.0));
    push_label(&mut tree, card, Rect::new(96.0, 116.0, 288.0, 18.0));
    let row = push_wrapper(&mut tree, card, Rect::new(130.0, 116.0, 288.0, 20.0));
    push_label(&mut tree, row, Rect::new(130.0, 116.0, 120.0, 20.0));
    let chip = tree.push_element(row, Rect::new(130.0, 300.0, 104.0, 20.0), CHIP);
    tree.push_text(chip);
    tree
}

pub fn depth_only(min: usize, max: Option<usize>) -> VisibilityFilter {
    VisibilityFilter::new(skeleton_core::DepthBounds::new(min, max), Heuristic::DepthOnly)
}

pub fn scan_root(tree: &LayoutSnapshot, filter: &VisibilityFilter) -> ScanResult {
    scan(tree, tree.root(), filter)
}

pub fn overlay_for(tree: &LayoutSnapshot, config: &SkeletonConfig) -> OverlayGraphic {
    build_overlay(tree, tree.root(), config, &OverlayIds::new("test"))
}
