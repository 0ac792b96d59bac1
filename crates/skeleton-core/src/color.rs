//! Resolved CSS color helpers.
use csscolorparser::Color;

use crate::error::SkeletonError;

/// Parse a CSS `<color>` (named, hex, or functional notation).
///
/// `field` names the config entry the value came from and is only used for
/// the error.
pub fn parse_color(field: &str, input: &str) -> Result<Color, SkeletonError> {
    input
        .trim()
        .parse::<Color>()
        .map_err(|_| SkeletonError::invalid_color(field, input))
}

/// Whether a resolved color is fully transparent (alpha == 0).
///
/// Works for any serialization the host emits (`rgba(0, 0, 0, 0)`,
/// `transparent`, `#0000`, ...). Functional notations the parser does not
/// know, such as `lab(50 0 0 / 0)` or `color(srgb 1 0 0)`, are judged by
/// their alpha component alone. Returns `None` when no alpha can be read.
pub fn is_transparent(input: &str) -> Option<bool> {
    let input = input.trim();
    match input.parse::<Color>() {
        Ok(parsed) => Some(parsed.a <= 0.0),
        Err(_) => functional_alpha(input).map(|alpha| alpha <= 0.0),
    }
}

/// Alpha of `name(c1 c2 c3 [/ alpha])`. Missing alpha means opaque.
fn functional_alpha(input: &str) -> Option<f64> {
    let open = input.find('(')?;
    let name = &input[..open];
    if name.is_empty() || !name.chars().all(|c| c.is_ascii_alphabetic() || c == '-') {
        return None;
    }
    let args = input[open + 1..].strip_suffix(')')?;
    let Some((_, alpha)) = args.rsplit_once('/') else {
        return Some(1.0);
    };
    let alpha = alpha.trim();
    match alpha.strip_suffix('%') {
        Some(percent) => percent.trim().parse::<f64>().ok().map(|p| p / 100.0),
        None => alpha.parse().ok(),
    }
}
