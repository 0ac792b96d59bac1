//! Per-mount lifecycle: measure once, then cache the overlay.

use crate::overlay::OverlayGraphic;

#[derive(Debug, Clone, Default, PartialEq)]
pub enum MountState {
    /// The overlay has not been built yet.
    #[default]
    Measuring,
    /// Built once; kept until unmount.
    Ready(OverlayGraphic),
}

/// What the host should put inside the container right now.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum View<'a> {
    /// Loading and ready: the overlay replaces the children.
    Overlay(&'a OverlayGraphic),
    /// Loading but not measured yet: children are laid out for measurement
    /// but must not be visible.
    Measuring,
    /// Not loading: the real children, whatever the scan state.
    Children,
}

/// Holds the overlay for one mount.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SkeletonMount {
    state: MountState,
}

impl SkeletonMount {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &MountState {
        &self.state
    }

    pub fn is_ready(&self) -> bool {
        matches!(self.state, MountState::Ready(_))
    }

    pub fn graphic(&self) -> Option<&OverlayGraphic> {
        match &self.state {
            MountState::Ready(graphic) => Some(graphic),
            MountState::Measuring => None,
        }
    }

    /// Store the overlay built by the first measurement.
    ///
    /// Returns `false` and keeps the existing overlay if one was already
    /// stored; the overlay is never rebuilt for the same mount.
    pub fn complete(&mut self, graphic: OverlayGraphic) -> bool {
        if self.is_ready() {
            tracing::debug!("overlay already built for this mount, ignoring rebuild");
            return false;
        }
        self.state = MountState::Ready(graphic);
        true
    }

    pub fn view(&self, loading: bool) -> View<'_> {
        if !loading {
            return View::Children;
        }
        match &self.state {
            MountState::Ready(graphic) => View::Overlay(graphic),
            MountState::Measuring => View::Measuring,
        }
    }
}
