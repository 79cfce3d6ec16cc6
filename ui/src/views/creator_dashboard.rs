use dioxus::prelude::*;

use crate::components::{Card, CardContent, CardHeader, CardTitle};
use crate::core::format::{format_count, format_inr};

/// Creator dashboard. Placeholder screen: static stat cards over sample
/// numbers until campaign management lands.
#[component]
pub fn CreatorDashboard() -> Element {
    let _lang_code: Option<Signal<String>> = try_use_context::<Signal<String>>();
    let _lang_marker = _lang_code.as_ref().map(|s| s()).unwrap_or_default();

    let stats = [
        (crate::t!("creator-stat-campaigns"), "3".to_string()),
        (crate::t!("creator-stat-matches"), format_count(12_500)),
        (crate::t!("creator-stat-spend"), format_inr(84_500.0)),
    ];

    rsx! {
        div { style: "display:none", "{_lang_marker}" }

        section { class: "page dashboard",
            h1 { {crate::t!("creator-title")} }
            p { class: "dashboard__intro", {crate::t!("creator-intro")} }

            div { class: "grid grid--3",
                { stats.iter().map(|(label, value)| {
                    rsx! {
                        Card { key: "{label}", class: "stat-card",
                            CardHeader {
                                CardTitle { "{label}" }
                            }
                            CardContent {
                                span { class: "stat-card__value", "{value}" }
                            }
                        }
                    }
                })}
            }

            p { class: "dashboard__placeholder", {crate::t!("creator-placeholder")} }
        }
    }
}
