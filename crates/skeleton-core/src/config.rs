use serde::{Deserialize, Serialize};

use crate::color::parse_color;
use crate::error::SkeletonError;
use crate::filter::{DepthBounds, Heuristic, VisibilityFilter};
use crate::overlay::{OverlayStyle, OverlayVariant};
use crate::palette::Palette;

pub const DEFAULT_OPACITY: f64 = 0.2;
pub const DEFAULT_SWEEP_RATIO: f64 = 2.0;
pub const DEFAULT_DURATION_SECS: f64 = 1.2;

/// Every knob the scanner and synthesizer read.
///
/// Each field falls back to its default when missing, so a partial
/// `[skeleton]` table (or none at all) is always valid input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SkeletonConfig {
    pub variant: OverlayVariant,
    pub heuristic: Heuristic,
    /// Inclusive lower depth bound.
    pub min_depth: usize,
    /// Inclusive upper depth bound; absent means unbounded.
    pub max_depth: Option<usize>,
    pub palette: Palette,
    /// Overrides the palette's foreground when set.
    pub foreground_color: Option<String>,
    /// Overrides the palette's background when set.
    pub background_color: Option<String>,
    pub should_animate: bool,
    /// Falls back to the variant's own radius when absent.
    pub corner_radius: Option<f64>,
    pub opacity: f64,
    pub sweep_ratio: f64,
    pub duration_secs: f64,
}

impl Default for SkeletonConfig {
    fn default() -> Self {
        Self {
            variant: OverlayVariant::default(),
            heuristic: Heuristic::default(),
            min_depth: 0,
            max_depth: None,
            palette: Palette::default(),
            foreground_color: None,
            background_color: None,
            should_animate: true,
            corner_radius: None,
            opacity: DEFAULT_OPACITY,
            sweep_ratio: DEFAULT_SWEEP_RATIO,
            duration_secs: DEFAULT_DURATION_SECS,
        }
    }
}

/// Top-level config file structure (`skeleton.toml`).
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ConfigFile {
    #[serde(default)]
    pub skeleton: SkeletonConfig,
}

impl SkeletonConfig {
    pub fn foreground(&self) -> &str {
        self.foreground_color
            .as_deref()
            .unwrap_or_else(|| self.palette.foreground())
    }

    pub fn background(&self) -> &str {
        self.background_color
            .as_deref()
            .unwrap_or_else(|| self.palette.background())
    }

    pub fn depth_bounds(&self) -> DepthBounds {
        DepthBounds::new(self.min_depth, self.max_depth)
    }

    pub fn filter(&self) -> VisibilityFilter {
        VisibilityFilter::new(self.depth_bounds(), self.heuristic)
    }

    pub fn overlay_style(&self) -> OverlayStyle {
        OverlayStyle {
            variant: self.variant,
            corner_radius: self
                .corner_radius
                .unwrap_or_else(|| self.variant.default_corner_radius()),
            opacity: self.opacity,
            foreground: self.foreground().to_string(),
            background: self.background().to_string(),
            animate: self.should_animate,
            sweep_ratio: self.sweep_ratio,
            duration_secs: self.duration_secs,
        }
    }

    /// Check values that would produce a broken drawing.
    ///
    /// Components do not call this; props are trusted. Config loaders do,
    /// and fall back to defaults on error.
    pub fn validate(&self) -> Result<(), SkeletonError> {
        parse_color("foreground_color", self.foreground())?;
        parse_color("background_color", self.background())?;

        if !(0.0..=1.0).contains(&self.opacity) {
            return Err(SkeletonError::invalid_config(
                "opacity",
                "must be between 0 and 1",
            ));
        }
        if !self.duration_secs.is_finite() || self.duration_secs <= 0.0 {
            return Err(SkeletonError::invalid_config(
                "duration_secs",
                "must be a positive number of seconds",
            ));
        }
        if !self.sweep_ratio.is_finite() {
            return Err(SkeletonError::invalid_config(
                "sweep_ratio",
                "must be a finite number",
            ));
        }
        if let Some(radius) = self.corner_radius {
            if !radius.is_finite() || radius < 0.0 {
                return Err(SkeletonError::invalid_config(
                    "corner_radius",
                    "must be zero or positive",
                ));
            }
        }
        if let Some(max) = self.max_depth {
            if self.min_depth > max {
                return Err(SkeletonError::invalid_config(
                    "min_depth",
                    format!("min_depth {} exceeds max_depth {}", self.min_depth, max),
                ));
            }
        }
        Ok(())
    }
}
