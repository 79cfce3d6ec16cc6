use dioxus::prelude::*;

use api::{Niche, PriceQuote, PromoterMetrics, VerificationChallenge, VerificationOutcome};

use crate::components::{Button, ButtonVariant, Card, CardContent, CardHeader, CardTitle};
use crate::core::format::{format_inr, format_pct};

/// Promoter dashboard: the price estimator and the Instagram account
/// verification flow, both backed by `api` server functions.
#[component]
pub fn PromoterDashboard() -> Element {
    let _lang_code: Option<Signal<String>> = try_use_context::<Signal<String>>();
    let _lang_marker = _lang_code.as_ref().map(|s| s()).unwrap_or_default();

    rsx! {
        div { style: "display:none", "{_lang_marker}" }

        section { class: "page dashboard",
            h1 { {crate::t!("promoter-title")} }
            p { class: "dashboard__intro", {crate::t!("promoter-intro")} }

            div { class: "grid grid--2 grid--top",
                PriceEstimator {}
                VerificationPanel {}
            }
        }
    }
}

#[component]
fn PriceEstimator() -> Element {
    let mut followers = use_signal(String::new);
    let mut views = use_signal(String::new);
    let mut interactions = use_signal(String::new);
    let mut new_followers = use_signal(String::new);
    let mut reach = use_signal(String::new);
    let mut niche = use_signal(|| Niche::Fashion.as_str().to_string());

    let mut quote = use_signal(|| Option::<PriceQuote>::None);
    let mut error = use_signal(|| Option::<String>::None);
    let mut busy = use_signal(|| false);

    let on_estimate = move |evt: FormEvent| {
        evt.prevent_default();

        let Some(metrics) = read_metrics(
            &followers(),
            &views(),
            &interactions(),
            &new_followers(),
            &reach(),
            &niche(),
        ) else {
            error.set(Some(crate::t!("estimator-invalid")));
            return;
        };

        busy.set(true);
        spawn(async move {
            match api::predict_price(metrics).await {
                Ok(q) => {
                    error.set(None);
                    quote.set(Some(q));
                }
                Err(err) => error.set(Some(err.to_string())),
            }
            busy.set(false);
        });
    };

    rsx! {
        Card { class: "panel",
            CardHeader {
                CardTitle { {crate::t!("estimator-title")} }
            }
            CardContent {
                form { class: "panel__form", onsubmit: on_estimate,
                    EstimatorField {
                        label: crate::t!("estimator-followers"),
                        value: followers,
                        oninput: move |v| followers.set(v),
                    }
                    EstimatorField {
                        label: crate::t!("estimator-views"),
                        value: views,
                        oninput: move |v| views.set(v),
                    }
                    EstimatorField {
                        label: crate::t!("estimator-interactions"),
                        value: interactions,
                        oninput: move |v| interactions.set(v),
                    }
                    EstimatorField {
                        label: crate::t!("estimator-new-followers"),
                        value: new_followers,
                        oninput: move |v| new_followers.set(v),
                    }
                    EstimatorField {
                        label: crate::t!("estimator-reach"),
                        value: reach,
                        oninput: move |v| reach.set(v),
                    }

                    div { class: "panel__field",
                        label { r#for: "estimator-niche", {crate::t!("estimator-niche")} }
                        select {
                            id: "estimator-niche",
                            value: "{niche}",
                            oninput: move |evt: FormEvent| niche.set(evt.value()),
                            { Niche::ALL.iter().map(|n| {
                                let value = n.as_str();
                                let label = n.display_name();
                                rsx! {
                                    option { key: "{value}", value: "{value}", "{label}" }
                                }
                            })}
                        }
                    }

                    Button { variant: ButtonVariant::Primary, submit: true,
                        if busy() {
                            {crate::t!("estimator-working")}
                        } else {
                            {crate::t!("estimator-submit")}
                        }
                    }
                }

                if let Some(msg) = error() {
                    p { class: "panel__error", "{msg}" }
                }

                if let Some(q) = quote() {
                    QuoteSummary { quote: q }
                }
            }
        }
    }
}

#[component]
fn EstimatorField(
    label: String,
    value: Signal<String>,
    oninput: EventHandler<String>,
) -> Element {
    rsx! {
        div { class: "panel__field",
            label { "{label}" }
            input {
                r#type: "number",
                min: "0",
                required: true,
                value: "{value}",
                oninput: move |evt: FormEvent| oninput.call(evt.value()),
            }
        }
    }
}

#[component]
fn QuoteSummary(quote: PriceQuote) -> Element {
    let range = format!(
        "{} – {}",
        format_inr(quote.range_min_inr),
        format_inr(quote.range_max_inr)
    );

    rsx! {
        div { class: "quote",
            div { class: "quote__row quote__row--headline",
                span { {crate::t!("quote-suggested")} }
                span { class: "quote__price", {format_inr(quote.suggested_inr)} }
            }
            div { class: "quote__row",
                span { {crate::t!("quote-range")} }
                span { "{range}" }
            }
            div { class: "quote__row",
                span { {crate::t!("quote-confidence")} }
                span { {quote.confidence.label()} }
            }
            div { class: "quote__row",
                span { {crate::t!("quote-engagement")} }
                span { {format_pct(quote.engagement_rate_pct)} }
            }
            div { class: "quote__row",
                span { {crate::t!("quote-tier")} }
                span { {quote.tier.label()} }
            }
        }
    }
}

#[component]
fn VerificationPanel() -> Element {
    let mut username = use_signal(String::new);
    let mut challenge = use_signal(|| Option::<VerificationChallenge>::None);
    let mut outcome = use_signal(|| Option::<VerificationOutcome>::None);
    let mut error = use_signal(|| Option::<String>::None);
    let mut busy = use_signal(|| false);

    let on_start = move |_evt: MouseEvent| {
        let raw = username();
        if raw.trim().is_empty() {
            return;
        }
        busy.set(true);
        spawn(async move {
            match api::start_verification(raw).await {
                Ok(c) => {
                    challenge.set(Some(c));
                    outcome.set(None);
                    error.set(None);
                }
                Err(err) => error.set(Some(err.to_string())),
            }
            busy.set(false);
        });
    };

    let on_check = move |_evt: MouseEvent| {
        let Some(c) = challenge() else {
            return;
        };
        busy.set(true);
        spawn(async move {
            match api::check_verification(c.username.clone(), c.token.clone()).await {
                Ok(o) => {
                    outcome.set(Some(o));
                    error.set(None);
                }
                Err(err) => error.set(Some(err.to_string())),
            }
            busy.set(false);
        });
    };

    rsx! {
        Card { class: "panel",
            CardHeader {
                CardTitle { {crate::t!("verify-title")} }
            }
            CardContent {
                div { class: "panel__field",
                    input {
                        r#type: "text",
                        placeholder: crate::t!("verify-username-placeholder"),
                        value: "{username}",
                        oninput: move |evt: FormEvent| username.set(evt.value()),
                    }
                }

                div { class: "panel__actions",
                    Button { variant: ButtonVariant::Outline, onpress: on_start,
                        {crate::t!("verify-start")}
                    }
                    if challenge().is_some() {
                        Button { variant: ButtonVariant::Primary, onpress: on_check,
                            {crate::t!("verify-check")}
                        }
                    }
                }

                if busy() {
                    p { class: "panel__hint", {crate::t!("verify-working")} }
                }

                if let Some(c) = challenge() {
                    div { class: "challenge",
                        p { class: "challenge__token", "{c.token}" }
                        p { class: "panel__hint",
                            {crate::t!("verify-instructions", token = c.token.clone())}
                        }
                        ol { class: "challenge__steps",
                            { c.steps.iter().map(|step| rsx! {
                                li { key: "{step}", "{step}" }
                            })}
                        }
                    }
                }

                if let Some(o) = outcome() {
                    p {
                        class: if o.verified { "panel__result panel__result--ok" } else { "panel__result panel__result--fail" },
                        "{o.message}"
                    }
                }

                if let Some(msg) = error() {
                    p { class: "panel__error", "{msg}" }
                }
            }
        }
    }
}

/// Parse the raw estimator form fields into metrics. `None` when any field
/// is empty or malformed; the caller surfaces that as the invalid-input
/// error without touching the server.
fn read_metrics(
    followers: &str,
    views: &str,
    interactions: &str,
    new_followers: &str,
    reach: &str,
    niche: &str,
) -> Option<PromoterMetrics> {
    Some(PromoterMetrics {
        follower_count: parse_count(followers)?,
        avg_views: parse_count(views)?,
        avg_interactions: parse_count(interactions)?,
        new_followers_rate: parse_count(new_followers)?,
        accounts_reached: parse_count(reach)?,
        niche: Niche::parse(niche)?,
    })
}

/// Lenient whole-number parsing for the estimator inputs.
fn parse_count(raw: &str) -> Option<u32> {
    raw.trim().replace([',', '_'], "").parse().ok()
}
