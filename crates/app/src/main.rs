use dioxus::prelude::*;
use skeleton_core::{OverlayVariant, Palette, ALL_PALETTES};
use skeleton_ui::Skeleton;

mod config;

/// Rows shown in the demo report list.
const REPORTS: &[(&str, &str)] = &[
    ("Quarterly filings", "42 documents"),
    ("Pending reviews", "7 items"),
    ("Archived cases", "1,204 records"),
];

fn main() {
    if let Err(e) = dioxus::logger::init(tracing::Level::DEBUG) {
        eprintln!("[logger] already initialized: {e}");
    }
    config::load_config();
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    use_context_provider(|| config::load_config().clone());
    let mut loading = use_signal(|| true);
    let mut variant = use_signal(OverlayVariant::default);
    let mut palette = use_signal(|| config::load_config().palette);
    let key = format!("{}-{}", variant().as_str(), palette().as_str());

    rsx! {
        main { class: "demo",
            div { class: "demo-controls",
                button {
                    onclick: move |_| loading.set(!loading()),
                    if loading() { "Show content" } else { "Show skeleton" }
                }
                for option in [OverlayVariant::Sweep, OverlayVariant::Shimmer, OverlayVariant::Flat] {
                    button {
                        class: if variant() == option { "active" } else { "" },
                        onclick: move |_| variant.set(option),
                        {option.as_str()}
                    }
                }
                for option in ALL_PALETTES.iter().copied() {
                    button {
                        class: if palette() == option { "active" } else { "" },
                        onclick: move |_| palette.set(option),
                        {option.display_name()}
                    }
                }
            }
            // Keyed by the choices so each gets a fresh mount and a fresh
            // measurement.
            Skeleton {
                key: "{key}",
                is_loading: loading(),
                variant: variant(),
                foreground_color: palette().foreground().to_string(),
                background_color: palette().background().to_string(),
                class: "demo-card",
                ReportCard { palette: palette() }
            }
        }
    }
}

#[component]
fn ReportCard(palette: Palette) -> Element {
    let palette = palette.display_name();

    rsx! {
        div { style: "padding: 16px; width: 320px;",
            h3 { "Reports" }
            p { "Palette: {palette}" }
            for (title, detail) in REPORTS.iter() {
                div { style: "display: flex; justify-content: space-between; margin: 8px 0;",
                    span { "{title}" }
                    span { style: "background-color: #e8e8e8; padding: 0 6px;", "{detail}" }
                }
            }
        }
    }
}
