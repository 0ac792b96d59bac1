use serde::{Deserialize, Serialize};

/// Accent color presets for the placeholder.
///
/// Each palette supplies a foreground (the highlight) and a background (the
/// resting placeholder color). Explicit colors in the config win over these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Palette {
    #[default]
    Neutral,
    /// For dark surfaces.
    Dark,
    /// Low-contrast beige for document-like pages.
    Warm,
}

/// All palettes in display order.
pub const ALL_PALETTES: &[Palette] = &[Palette::Neutral, Palette::Dark, Palette::Warm];

impl Palette {
    /// Internal key used in config files.
    pub fn as_str(&self) -> &'static str {
        match self {
            Palette::Neutral => "neutral",
            Palette::Dark => "dark",
            Palette::Warm => "warm",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Palette::Neutral => "Neutral",
            Palette::Dark => "Dark",
            Palette::Warm => "Warm",
        }
    }

    pub fn foreground(&self) -> &'static str {
        match self {
            Palette::Neutral => "#AAA",
            Palette::Dark => "#4A505C",
            Palette::Warm => "#D9CBB6",
        }
    }

    pub fn background(&self) -> &'static str {
        match self {
            Palette::Neutral => "#CCC",
            Palette::Dark => "#2E323B",
            Palette::Warm => "#EDE3D4",
        }
    }
}
