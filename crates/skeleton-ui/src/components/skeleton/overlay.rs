use dioxus::prelude::*;
use skeleton_core::{num, OverlayGraphic, Paint};

/// Renders a synthesized overlay as inline SVG.
///
/// Mirrors `skeleton_core::svg::render`, but as live nodes so the browser
/// runs the SMIL animations.
#[component]
pub fn SkeletonOverlay(graphic: OverlayGraphic) -> Element {
    let width = num(graphic.width);
    let height = num(graphic.height);
    let view_box = graphic.view_box();

    rsx! {
        svg {
            class: "skeleton-overlay",
            width: "{width}",
            height: "{height}",
            view_box: "{view_box}",
            "preserveAspectRatio": "none",
            xmlns: "http://www.w3.org/2000/svg",
            {paint_layer(&graphic)}
        }
    }
}

fn paint_layer(graphic: &OverlayGraphic) -> Element {
    match &graphic.paint {
        Paint::Flat { fill, opacity } => {
            let opacity = num(*opacity);
            rsx! {
                for shape in graphic.shapes.iter() {
                    rect {
                        x: num(shape.x),
                        y: num(shape.y),
                        width: num(shape.width),
                        height: num(shape.height),
                        "rx": num(shape.radius),
                        "ry": num(shape.radius),
                        fill: "{fill}",
                        opacity: "{opacity}",
                    }
                }
            }
        }
        Paint::Shimmer {
            gradient_id,
            opacity,
            stops,
        } => {
            let opacity = num(*opacity);
            let fill = format!("url(#{gradient_id})");
            rsx! {
                defs {
                    linearGradient { id: "{gradient_id}",
                        for shimmer in stops.iter() {
                            stop {
                                "offset": shimmer.stop.offset,
                                "stop-color": shimmer.stop.color.clone(),
                                "stop-opacity": "1",
                                if let Some(animation) = &shimmer.animation {
                                    animate {
                                        "attributeName": "stop-color",
                                        "values": animation.values_attr(),
                                        "dur": animation.dur_attr(),
                                        "repeatCount": "indefinite",
                                    }
                                }
                            }
                        }
                    }
                }
                for shape in graphic.shapes.iter() {
                    rect {
                        x: num(shape.x),
                        y: num(shape.y),
                        width: num(shape.width),
                        height: num(shape.height),
                        "rx": num(shape.radius),
                        "ry": num(shape.radius),
                        fill: "{fill}",
                        opacity: "{opacity}",
                    }
                }
            }
        }
        Paint::Sweep {
            clip_id,
            gradient_id,
            stops,
            animation,
        } => {
            let transform = Paint::sweep_transform(animation.as_ref());
            rsx! {
                defs {
                    clipPath { id: "{clip_id}",
                        for shape in graphic.shapes.iter() {
                            rect {
                                x: num(shape.x),
                                y: num(shape.y),
                                width: num(shape.width),
                                height: num(shape.height),
                                "rx": num(shape.radius),
                                "ry": num(shape.radius),
                            }
                        }
                    }
                    linearGradient { id: "{gradient_id}", "gradientTransform": "{transform}",
                        for gradient_stop in stops.iter() {
                            stop {
                                "offset": gradient_stop.offset,
                                "stop-color": gradient_stop.color.clone(),
                                "stop-opacity": "1",
                            }
                        }
                        if let Some(animation) = animation {
                            animateTransform {
                                "attributeName": "gradientTransform",
                                "type": "translate",
                                "values": animation.values_attr(),
                                "dur": animation.dur_attr(),
                                "repeatCount": "indefinite",
                            }
                        }
                    }
                }
                rect {
                    "role": "presentation",
                    x: "0",
                    y: "0",
                    width: "100%",
                    height: "100%",
                    "clip-path": "url(#{clip_id})",
                    style: "fill: url(#{gradient_id})",
                }
            }
        }
    }
}
