use dioxus::prelude::*;
use dioxus::dioxus_core::AttributeValue;
use skeleton_core::{build_overlay, OverlayIds, OverlayVariant, SkeletonConfig, SkeletonMount, View};

use super::capture::{capture_snapshot, CONTAINER_ATTR};
use super::overlay::SkeletonOverlay;

/// A loading placeholder shaped like its own children.
///
/// On mount the children are laid out invisibly, their boxes are measured
/// once, and a matching overlay is built. While `is_loading` is true the
/// overlay replaces the children; afterwards the children are shown. The
/// overlay is never rebuilt for the same mount.
///
/// Appearance defaults come from a [`SkeletonConfig`] in context when one is
/// provided; individual props override it.
#[component]
pub fn Skeleton(
    #[props(default = true)] is_loading: bool,
    /// Inclusive upper bound on the nesting depth of outlined nodes.
    max_depth: Option<usize>,
    /// Inclusive lower bound on the nesting depth of outlined nodes.
    min_depth: Option<usize>,
    foreground_color: Option<String>,
    background_color: Option<String>,
    should_animate: Option<bool>,
    variant: Option<OverlayVariant>,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let instance = use_hook(|| uuid::Uuid::new_v4().simple().to_string());
    let mut mount = use_signal(SkeletonMount::new);

    let mut config = try_use_context::<SkeletonConfig>().unwrap_or_default();
    if max_depth.is_some() {
        config.max_depth = max_depth;
    }
    if let Some(min_depth) = min_depth {
        config.min_depth = min_depth;
    }
    if foreground_color.is_some() {
        config.foreground_color = foreground_color;
    }
    if background_color.is_some() {
        config.background_color = background_color;
    }
    if let Some(should_animate) = should_animate {
        config.should_animate = should_animate;
    }
    if let Some(variant) = variant {
        config.variant = variant;
    }

    let mount_state = mount.read();
    let view = mount_state.view(is_loading);

    let (style, attributes) = container_style(attributes, view == View::Measuring);
    let mut base = vec![
        Attribute::new("class", "skeleton", None, false),
        Attribute::new(CONTAINER_ATTR, instance.clone(), None, false),
    ];
    if let Some(style) = style {
        base.push(Attribute::new("style", style, None, false));
    }
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    let content = match view {
        View::Overlay(graphic) => rsx! {
            SkeletonOverlay { graphic: graphic.clone() }
        },
        View::Measuring | View::Children => children,
    };
    drop(mount_state);

    let onmounted = move |_: MountedEvent| {
        let instance = instance.clone();
        let config = config.clone();
        async move {
            if mount.peek().is_ready() {
                return;
            }
            match capture_snapshot(&instance).await {
                Ok(snapshot) => {
                    let ids = OverlayIds::new(&instance);
                    let graphic = build_overlay(&snapshot, snapshot.root(), &config, &ids);
                    tracing::debug!(
                        instance = %instance,
                        shapes = graphic.shapes.len(),
                        variant = config.variant.as_str(),
                        "skeleton overlay built"
                    );
                    mount.write().complete(graphic);
                }
                Err(err) => {
                    // Leave the mount measuring; the children are shown once
                    // loading finishes.
                    tracing::warn!(instance = %instance, "skeleton measurement failed: {err}");
                }
            }
        }
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div {
            onmounted: onmounted,
            ..merged,
            {content}
        }
    }
}

/// Pull any inline `style` out of the caller's attributes and fold it into a
/// single declaration list, adding `visibility: hidden` while measuring.
///
/// A second raw `style` attribute would replace the whole inline style and
/// could make the children visible before they are measured.
fn container_style(attributes: Vec<Attribute>, measuring: bool) -> (Option<String>, Vec<Attribute>) {
    let (styles, rest): (Vec<_>, Vec<_>) = attributes
        .into_iter()
        .partition(|attr| attr.name == "style" && attr.namespace.is_none());

    let mut declarations: Vec<String> = styles
        .into_iter()
        .filter_map(|attr| match attr.value {
            AttributeValue::Text(text) => Some(text.trim().trim_end_matches(';').trim().to_string()),
            _ => None,
        })
        .filter(|text| !text.is_empty())
        .collect();
    if measuring {
        // Laid out for measurement, but not painted.
        declarations.push("visibility: hidden".to_string());
    }

    let style = (!declarations.is_empty()).then(|| declarations.join("; "));
    (style, rest)
}
