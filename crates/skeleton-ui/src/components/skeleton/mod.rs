mod capture;
mod component;
mod overlay;

pub use capture::capture_snapshot;
pub use component::*;
pub use overlay::*;
