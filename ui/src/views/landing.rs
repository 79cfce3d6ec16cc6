use dioxus::prelude::*;

use crate::components::{Card, CardContent, CardDescription, CardHeader, CardTitle, NavLink};

/// Landing page: hero, how-it-works, smart features, why-GoViral,
/// testimonials, footer. Everything renders from localized descriptor
/// tables; the only interactivity is navigation via the supplied links.
///
/// The four `NavLink` props name exactly the destinations this screen may
/// emit: button-styled CTAs into the two dashboards, and the footer's plain
/// links to the same places.
#[component]
pub fn Landing(
    cta_creator: NavLink,
    cta_promoter: NavLink,
    link_creators: NavLink,
    link_promoters: NavLink,
) -> Element {
    // Subscribe to the global language code (if provided) so the whole page
    // re-renders on locale change.
    let _lang_code: Option<Signal<String>> = try_use_context::<Signal<String>>();
    let _lang_marker = _lang_code.as_ref().map(|s| s()).unwrap_or_default();

    let steps = [
        (
            "01",
            "👥",
            "card--accent-pink",
            crate::t!("how-step-1-title"),
            crate::t!("how-step-1-desc"),
        ),
        (
            "02",
            "✨",
            "card--accent-purple",
            crate::t!("how-step-2-title"),
            crate::t!("how-step-2-desc"),
        ),
        (
            "03",
            "⚡",
            "card--accent-orange",
            crate::t!("how-step-3-title"),
            crate::t!("how-step-3-desc"),
        ),
    ];

    let values = [
        (
            "🛡️",
            "value--pink",
            crate::t!("why-transparent-title"),
            crate::t!("why-transparent-desc"),
        ),
        (
            "📈",
            "value--purple",
            crate::t!("why-data-title"),
            crate::t!("why-data-desc"),
        ),
        (
            "👥",
            "value--orange",
            crate::t!("why-community-title"),
            crate::t!("why-community-desc"),
        ),
    ];

    let testimonials = [
        (
            "Sarah Johnson",
            "SJ",
            "avatar--pink",
            crate::t!("testimonial-1-role"),
            crate::t!("testimonial-1-quote"),
        ),
        (
            "Mike Chen",
            "MC",
            "avatar--purple",
            crate::t!("testimonial-2-role"),
            crate::t!("testimonial-2-quote"),
        ),
        (
            "Emma Rodriguez",
            "ER",
            "avatar--orange",
            crate::t!("testimonial-3-role"),
            crate::t!("testimonial-3-quote"),
        ),
    ];

    rsx! {
        div { style: "display:none", "{_lang_marker}" }

        // Hero
        section { class: "hero",
            div { class: "hero__glow hero__glow--pink", aria_hidden: "true" }
            div { class: "hero__glow hero__glow--purple", aria_hidden: "true" }
            div { class: "hero__inner",
                div { class: "hero__badge", {crate::t!("hero-badge")} }
                h1 { class: "hero__title", {crate::t!("hero-title")} }
                p { class: "hero__subtitle", {crate::t!("hero-subtitle")} }
                div { class: "hero__actions",
                    {(cta_creator)(&crate::t!("hero-cta-creator"))}
                    {(cta_promoter)(&crate::t!("hero-cta-promoter"))}
                }
            }
        }

        // How it works
        section { id: "how-it-works", class: "section section--tinted",
            div { class: "section__heading",
                h2 { {crate::t!("how-title")} }
                p { {crate::t!("how-subtitle")} }
            }
            div { class: "grid grid--3",
                { steps.iter().map(|(step, icon, accent, title, desc)| {
                    rsx! {
                        Card { key: "{step}", class: "{accent}",
                            CardHeader {
                                div { class: "step-card__icon", "{icon}" }
                                div { class: "step-card__number", "{step}" }
                                CardTitle { "{title}" }
                            }
                            CardContent {
                                CardDescription { "{desc}" }
                            }
                        }
                    }
                })}
            }
        }

        // Smart features
        section { id: "features", class: "section",
            div { class: "section__heading",
                h2 { {crate::t!("features-title")} }
                p { {crate::t!("features-subtitle")} }
            }
            div { class: "grid grid--2",
                Card { class: "feature-card feature-card--pricing",
                    CardHeader {
                        div { class: "step-card__icon", "💰" }
                        CardTitle { {crate::t!("feature-pricing-title")} }
                    }
                    CardContent {
                        p { class: "feature-card__copy", {crate::t!("feature-pricing-desc")} }
                    }
                }
                Card { class: "feature-card feature-card--matching",
                    CardHeader {
                        div { class: "step-card__icon", "🤝" }
                        CardTitle { {crate::t!("feature-matching-title")} }
                    }
                    CardContent {
                        p { class: "feature-card__copy", {crate::t!("feature-matching-desc")} }
                    }
                }
            }
        }

        // Why GoViral
        section { class: "section section--tinted",
            div { class: "section__heading",
                h2 { {crate::t!("why-title")} }
                p { {crate::t!("why-subtitle")} }
            }
            div { class: "grid grid--3",
                { values.iter().map(|(icon, color, title, desc)| {
                    rsx! {
                        div { key: "{title}", class: "value {color}",
                            div { class: "value__icon", "{icon}" }
                            h3 { "{title}" }
                            p { "{desc}" }
                        }
                    }
                })}
            }
        }

        // Testimonials
        section { id: "testimonials", class: "section",
            div { class: "section__heading",
                h2 { {crate::t!("testimonials-title")} }
                p { {crate::t!("testimonials-subtitle")} }
            }
            div { class: "grid grid--3",
                { testimonials.iter().map(|(name, avatar, color, role, quote)| {
                    rsx! {
                        Card { key: "{name}",
                            CardHeader {
                                div { class: "testimonial__byline",
                                    div { class: "testimonial__avatar {color}", "{avatar}" }
                                    div {
                                        CardTitle { "{name}" }
                                        CardDescription { "{role}" }
                                    }
                                }
                            }
                            CardContent {
                                p { class: "testimonial__quote", "{quote}" }
                            }
                        }
                    }
                })}
            }
        }

        // Footer
        footer { class: "footer",
            div { class: "footer__inner",
                div { class: "grid grid--4",
                    div {
                        div { class: "footer__brand",
                            span { class: "navbar__brand-spark", aria_hidden: "true" }
                            span { class: "footer__brand-mark", "GoViral" }
                        }
                        p { class: "footer__blurb", {crate::t!("footer-blurb")} }
                    }
                    div {
                        h4 { {crate::t!("footer-platform")} }
                        ul { class: "footer__links",
                            li { {(link_creators)(&crate::t!("footer-link-creators"))} }
                            li { {(link_promoters)(&crate::t!("footer-link-promoters"))} }
                            li { a { href: "#features", {crate::t!("footer-link-pricing")} } }
                            li { a { href: "#features", {crate::t!("footer-link-features")} } }
                        }
                    }
                    div {
                        h4 { {crate::t!("footer-company")} }
                        ul { class: "footer__links",
                            li { a { href: "#", {crate::t!("footer-link-about")} } }
                            li { a { href: "#", {crate::t!("footer-link-careers")} } }
                            li { a { href: "#", {crate::t!("footer-link-blog")} } }
                            li { a { href: "#", {crate::t!("footer-link-contact")} } }
                        }
                    }
                    div {
                        h4 { {crate::t!("footer-connect")} }
                        div { class: "footer__social",
                            a { href: "#", aria_label: "Instagram", "📸" }
                            a { href: "#", aria_label: "Twitter", "🐦" }
                            a { href: "#", aria_label: "LinkedIn", "💼" }
                            a { href: "#", aria_label: "Email", "✉️" }
                        }
                    }
                }
                div { class: "footer__copyright",
                    p { {crate::t!("footer-copyright")} }
                }
            }
        }
    }
}
