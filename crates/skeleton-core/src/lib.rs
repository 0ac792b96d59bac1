pub mod color;
pub mod config;
pub mod error;
pub mod filter;
pub mod geometry;
pub mod mount;
pub mod overlay;
pub mod palette;
pub mod scan;
pub mod snapshot;
pub mod svg;
pub mod tree;

pub use config::*;
pub use error::*;
pub use filter::*;
pub use geometry::*;
pub use mount::*;
pub use overlay::*;
pub use palette::*;
pub use scan::*;
pub use snapshot::*;
pub use tree::*;

/// Scan `root` and synthesize its overlay in one call.
///
/// This is the whole measurement pass: walk, filter, translate, draw.
pub fn build_overlay<T: LayoutTree + ?Sized>(
    tree: &T,
    root: T::NodeId,
    config: &SkeletonConfig,
    ids: &OverlayIds,
) -> OverlayGraphic {
    let result = scan(tree, root, &config.filter());
    synthesize(&result, &config.overlay_style(), ids)
}
