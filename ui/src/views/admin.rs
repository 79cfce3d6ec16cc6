use dioxus::prelude::*;

use crate::components::{Card, CardContent, CardHeader, CardTitle};
use crate::core::format::{format_count, format_inr};

/// Admin panel. Placeholder screen: platform totals only.
#[component]
pub fn AdminPanel() -> Element {
    let _lang_code: Option<Signal<String>> = try_use_context::<Signal<String>>();
    let _lang_marker = _lang_code.as_ref().map(|s| s()).unwrap_or_default();

    let stats = [
        (crate::t!("admin-stat-creators"), format_count(1870)),
        (crate::t!("admin-stat-promoters"), format_count(4320)),
        (crate::t!("admin-stat-deals"), format_inr(2_350_000.0)),
    ];

    rsx! {
        div { style: "display:none", "{_lang_marker}" }

        section { class: "page dashboard",
            h1 { {crate::t!("admin-title")} }
            p { class: "dashboard__intro", {crate::t!("admin-intro")} }

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

            p { class: "dashboard__placeholder", {crate::t!("admin-placeholder")} }
        }
    }
}
