//! Overlay synthesis: accepted geometry in, one placeholder drawing out.
//!
//! The output is a renderer-neutral description. [`crate::svg::render`]
//! serializes it as a standalone SVG document and the Dioxus component
//! renders the same structure through `rsx!`.

use serde::{Deserialize, Serialize};

use crate::scan::ScanResult;

/// Period of the first shimmer stop, in seconds.
pub const SHIMMER_FAST_SECS: f64 = 2.0;
/// Period of the second shimmer stop, in seconds.
pub const SHIMMER_SLOW_SECS: f64 = 4.0;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OverlayVariant {
    /// Rounded gray rectangles, no animation.
    Flat,
    /// Rectangles filled by a gradient whose stop colors cycle.
    Shimmer,
    /// Rectangles clip a full-size gradient that sweeps sideways.
    #[default]
    Sweep,
}

impl OverlayVariant {
    pub fn default_corner_radius(&self) -> f64 {
        match self {
            OverlayVariant::Flat | OverlayVariant::Shimmer => 10.0,
            OverlayVariant::Sweep => 15.0,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            OverlayVariant::Flat => "flat",
            OverlayVariant::Shimmer => "shimmer",
            OverlayVariant::Sweep => "sweep",
        }
    }
}

/// Resolved appearance parameters. Build one with
/// [`crate::config::SkeletonConfig::overlay_style`].
#[derive(Debug, Clone, PartialEq)]
pub struct OverlayStyle {
    pub variant: OverlayVariant,
    pub corner_radius: f64,
    pub opacity: f64,
    pub foreground: String,
    pub background: String,
    pub animate: bool,
    pub sweep_ratio: f64,
    pub duration_secs: f64,
}

/// Document-unique ids for the clip path and gradient definitions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverlayIds {
    pub clip: String,
    pub gradient: String,
}

impl OverlayIds {
    pub fn new(suffix: &str) -> Self {
        Self {
            clip: format!("clip-{suffix}"),
            gradient: format!("gradient-{suffix}"),
        }
    }
}

/// One rounded rectangle, in overlay coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlaceholderShape {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub radius: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GradientStop {
    pub offset: &'static str,
    pub color: String,
}

/// A `stop-color` animation cycling through `values` every `duration_secs`.
#[derive(Debug, Clone, PartialEq)]
pub struct StopAnimation {
    pub values: [String; 3],
    pub duration_secs: f64,
}

impl StopAnimation {
    pub fn values_attr(&self) -> String {
        self.values.join(";")
    }

    pub fn dur_attr(&self) -> String {
        seconds(self.duration_secs)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ShimmerStop {
    pub stop: GradientStop,
    pub animation: Option<StopAnimation>,
}

/// Linear, infinitely repeating translation of the sweep gradient.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SweepAnimation {
    pub ratio: f64,
    pub duration_secs: f64,
}

impl SweepAnimation {
    /// `-ratio 0; 0 0; ratio 0`
    pub fn values_attr(&self) -> String {
        format!("{} 0; 0 0; {} 0", num(-self.ratio), num(self.ratio))
    }

    pub fn dur_attr(&self) -> String {
        seconds(self.duration_secs)
    }

    pub fn initial_transform(&self) -> String {
        translate(-self.ratio)
    }
}

/// How the placeholder shapes are painted.
#[derive(Debug, Clone, PartialEq)]
pub enum Paint {
    Flat {
        fill: String,
        opacity: f64,
    },
    Shimmer {
        gradient_id: String,
        opacity: f64,
        stops: [ShimmerStop; 2],
    },
    Sweep {
        clip_id: String,
        gradient_id: String,
        stops: [GradientStop; 3],
        animation: Option<SweepAnimation>,
    },
}

impl Paint {
    /// The `gradientTransform` the sweep gradient starts from. Without an
    /// animation it rests untranslated.
    pub fn sweep_transform(animation: Option<&SweepAnimation>) -> String {
        match animation {
            Some(animation) => animation.initial_transform(),
            None => translate(0.0),
        }
    }
}

/// The synthesized placeholder drawing. Sized to the container, never to the
/// union of its shapes.
#[derive(Debug, Clone, PartialEq)]
pub struct OverlayGraphic {
    pub width: f64,
    pub height: f64,
    pub shapes: Vec<PlaceholderShape>,
    pub paint: Paint,
}

impl OverlayGraphic {
    pub fn view_box(&self) -> String {
        format!("0 0 {} {}", num(self.width), num(self.height))
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }
}

/// Build the overlay for one scan. Never fails: an empty scan produces an
/// empty drawing, a zero-sized container a zero-sized one.
pub fn synthesize(scan: &ScanResult, style: &OverlayStyle, ids: &OverlayIds) -> OverlayGraphic {
    let shapes = scan
        .nodes
        .iter()
        .map(|node| PlaceholderShape {
            x: node.rect.left,
            y: node.rect.top,
            width: node.rect.width,
            height: node.rect.height,
            radius: style.corner_radius,
        })
        .collect();

    let paint = match style.variant {
        OverlayVariant::Flat => Paint::Flat {
            fill: style.background.clone(),
            opacity: style.opacity,
        },
        OverlayVariant::Shimmer => {
            let fg = &style.foreground;
            let bg = &style.background;
            let cycle = |from: &String, to: &String, duration_secs: f64| {
                style.animate.then(|| StopAnimation {
                    values: [from.clone(), to.clone(), from.clone()],
                    duration_secs,
                })
            };
            Paint::Shimmer {
                gradient_id: ids.gradient.clone(),
                opacity: style.opacity,
                stops: [
                    ShimmerStop {
                        stop: GradientStop {
                            offset: "0%",
                            color: fg.clone(),
                        },
                        animation: cycle(fg, bg, SHIMMER_FAST_SECS),
                    },
                    ShimmerStop {
                        stop: GradientStop {
                            offset: "100%",
                            color: bg.clone(),
                        },
                        animation: cycle(bg, fg, SHIMMER_SLOW_SECS),
                    },
                ],
            }
        }
        OverlayVariant::Sweep => Paint::Sweep {
            clip_id: ids.clip.clone(),
            gradient_id: ids.gradient.clone(),
            stops: [
                GradientStop {
                    offset: "0%",
                    color: style.background.clone(),
                },
                GradientStop {
                    offset: "50%",
                    color: style.foreground.clone(),
                },
                GradientStop {
                    offset: "100%",
                    color: style.background.clone(),
                },
            ],
            animation: style.animate.then_some(SweepAnimation {
                ratio: style.sweep_ratio,
                duration_secs: style.duration_secs,
            }),
        },
    };

    OverlayGraphic {
        width: scan.width(),
        height: scan.height(),
        shapes,
        paint,
    }
}

/// Format a number the way SVG attributes expect: `200`, `0.2`, `-2`.
pub fn num(value: f64) -> String {
    if value == 0.0 {
        // Avoid "-0".
        return "0".to_string();
    }
    format!("{value}")
}

fn seconds(value: f64) -> String {
    format!("{}s", num(value))
}

fn translate(x: f64) -> String {
    format!("translate({} 0)", num(x))
}
