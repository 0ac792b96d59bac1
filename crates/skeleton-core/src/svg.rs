//! Standalone SVG serialization of an [`OverlayGraphic`].

use std::fmt::Write;

use crate::overlay::{num, GradientStop, OverlayGraphic, Paint, PlaceholderShape};

const SVG_NS: &str = "http://www.w3.org/2000/svg";

/// Serialize the overlay as an SVG document.
///
/// `class` is copied onto the root `svg` element when given.
pub fn render(graphic: &OverlayGraphic, class: Option<&str>) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = write_svg(&mut out, graphic, class);
    out
}

fn write_svg(out: &mut String, graphic: &OverlayGraphic, class: Option<&str>) -> std::fmt::Result {
    write!(out, "<svg")?;
    if let Some(class) = class {
        write!(out, r#" class="{}""#, escape(class))?;
    }
    write!(
        out,
        r#" width="{w}" height="{h}" viewBox="{vb}" preserveAspectRatio="none" xmlns="{SVG_NS}">"#,
        w = num(graphic.width),
        h = num(graphic.height),
        vb = graphic.view_box(),
    )?;

    match &graphic.paint {
        Paint::Flat { fill, opacity } => {
            for shape in &graphic.shapes {
                write_shape(out, shape)?;
                write!(
                    out,
                    r#" fill="{}" opacity="{}"/>"#,
                    escape(fill),
                    num(*opacity)
                )?;
            }
        }
        Paint::Shimmer {
            gradient_id,
            opacity,
            stops,
        } => {
            write!(out, r#"<defs><linearGradient id="{}">"#, escape(gradient_id))?;
            for shimmer in stops {
                write_stop_open(out, &shimmer.stop)?;
                match &shimmer.animation {
                    Some(animation) => write!(
                        out,
                        r#"><animate attributeName="stop-color" values="{}" dur="{}" repeatCount="indefinite"/></stop>"#,
                        escape(&animation.values_attr()),
                        animation.dur_attr()
                    )?,
                    None => write!(out, "/>")?,
                }
            }
            write!(out, "</linearGradient></defs>")?;
            for shape in &graphic.shapes {
                write_shape(out, shape)?;
                write!(
                    out,
                    r#" fill="url(#{})" opacity="{}"/>"#,
                    escape(gradient_id),
                    num(*opacity)
                )?;
            }
        }
        Paint::Sweep {
            clip_id,
            gradient_id,
            stops,
            animation,
        } => {
            write!(out, r#"<defs><clipPath id="{}">"#, escape(clip_id))?;
            for shape in &graphic.shapes {
                write_shape(out, shape)?;
                write!(out, "/>")?;
            }
            write!(out, "</clipPath>")?;
            write!(
                out,
                r#"<linearGradient id="{}" gradientTransform="{}">"#,
                escape(gradient_id),
                Paint::sweep_transform(animation.as_ref())
            )?;
            for stop in stops {
                write_stop_open(out, stop)?;
                write!(out, "/>")?;
            }
            if let Some(animation) = animation {
                write!(
                    out,
                    r#"<animateTransform attributeName="gradientTransform" type="translate" values="{}" dur="{}" repeatCount="indefinite"/>"#,
                    animation.values_attr(),
                    animation.dur_attr()
                )?;
            }
            write!(out, "</linearGradient></defs>")?;
            write!(
                out,
                r#"<rect role="presentation" x="0" y="0" width="100%" height="100%" clip-path="url(#{})" style="fill: url(#{})"/>"#,
                escape(clip_id),
                escape(gradient_id)
            )?;
        }
    }

    write!(out, "</svg>")
}

/// Writes an unterminated `<rect ...` so callers can append paint attributes.
fn write_shape(out: &mut String, shape: &PlaceholderShape) -> std::fmt::Result {
    write!(
        out,
        r#"<rect x="{}" y="{}" width="{}" height="{}" rx="{r}" ry="{r}""#,
        num(shape.x),
        num(shape.y),
        num(shape.width),
        num(shape.height),
        r = num(shape.radius),
    )
}

fn write_stop_open(out: &mut String, stop: &GradientStop) -> std::fmt::Result {
    write!(
        out,
        r#"<stop offset="{}" stop-color="{}" stop-opacity="1""#,
        stop.offset,
        escape(&stop.color)
    )
}

fn escape(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}
