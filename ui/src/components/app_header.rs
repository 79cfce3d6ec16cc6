use crate::i18n::{self};
use crate::t;
use dioxus::prelude::*;
use once_cell::sync::OnceCell;

// Header stylesheet (linked as an asset; inlined for release native builds).
const HEADER_CSS: Asset = asset!("/assets/styling/header.css");
const HEADER_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/assets/styling/header.css"
));

/// A route link builder: receives the localized label and returns a fully
/// constructed `Link` styled as a nav element. Keeping these as plain fn
/// pointers lets `ui` stay ignorant of each platform's `Route` enum, while a
/// screen's props list names exactly the destinations it may emit.
pub type NavLink = fn(label: &str) -> Element;

/// Platform-registered navigation links for the shared header.
///
/// Each platform (web/desktop) defines one closure per destination that
/// constructs a `Link { to: Route::..., class: "navbar__link", ... }` and
/// registers the set once, before rendering the root:
///
/// ```ignore
/// use ui::components::app_header::{register_nav, NavBuilder};
/// register_nav(NavBuilder {
///     brand: nav_brand,
///     admin: nav_admin,
///     login: nav_login,
///     signup: nav_signup,
/// });
/// ```
///
/// The language selector triggers a re-render via a signal; every render
/// pulls fresh localized strings through `t!`.
pub struct NavBuilder {
    /// Brand link back to the landing page; ignores the label and renders
    /// the logo mark itself.
    pub brand: NavLink,
    pub admin: NavLink,
    pub login: NavLink,
    pub signup: NavLink,
}

static NAV_BUILDER: OnceCell<NavBuilder> = OnceCell::new();

pub fn register_nav(builder: NavBuilder) {
    let _ = NAV_BUILDER.set(builder);
}

#[component]
pub fn AppHeader() -> Element {
    i18n::init();

    let mut current_lang = use_signal(|| "en-US".to_string());
    let langs = use_signal(i18n::available_languages);
    let show_switcher = langs().len() > 1;
    // Global language code signal, if the platform provided one.
    let lang_code_ctx: Option<Signal<String>> = try_use_context::<Signal<String>>();
    // Establish a reactive dependency on the global language code.
    let _lang_marker = lang_code_ctx.as_ref().map(|c| c()).unwrap_or_default();

    let on_change = move |evt: dioxus::events::FormEvent| {
        let val = evt.value();
        if i18n::set_language(&val).is_ok() {
            current_lang.set(val.clone());
            if let Some(mut code) = lang_code_ctx {
                code.set(val);
            }
        }
    };

    let tagline = t!("tagline");

    rsx! {
        document::Link { rel: "stylesheet", href: HEADER_CSS }
        if cfg!(all(not(debug_assertions), not(target_arch = "wasm32"))) {
            document::Style { "{HEADER_CSS_INLINE}" }
        }

        header {
            id: "navbar",
            class: "navbar",
            // Hidden marker ensures the header re-renders when the global
            // language signal changes.
            div { style: "display:none", "{_lang_marker}" }
            div { class: "navbar__inner",
                // Brand: logo mark links back to the landing page.
                div { class: "navbar__brand",
                    if let Some(b) = NAV_BUILDER.get() {
                        {(b.brand)("GoViral")}
                    } else {
                        span { class: "navbar__brand-link",
                            span { class: "navbar__brand-spark", aria_hidden: "true" }
                            span { class: "navbar__brand-mark", "GoViral" }
                        }
                    }
                    span { class: "navbar__brand-subtitle", "{tagline}" }
                }

                // Section anchors resolve on the landing page.
                nav { class: "navbar__links",
                    a { class: "navbar__link", href: "/#features", {t!("nav-features")} }
                    a { class: "navbar__link", href: "/#how-it-works", {t!("nav-how")} }
                    a { class: "navbar__link", href: "/#testimonials", {t!("nav-testimonials")} }
                    if let Some(b) = NAV_BUILDER.get() {
                        {(b.admin)(&t!("nav-admin"))}
                    }
                }

                // Auth zone
                if let Some(b) = NAV_BUILDER.get() {
                    div { class: "navbar__auth",
                        {(b.login)(&t!("nav-login"))}
                        {(b.signup)(&t!("nav-signup"))}
                    }
                }

                // Locale switcher
                if show_switcher {
                    div { class: "navbar__locale",
                        label {
                            class: "visually-hidden",
                            r#for: "locale-select",
                            {t!("nav-language-label")}
                        }
                        select {
                            id: "locale-select",
                            value: "{current_lang()}",
                            oninput: on_change,
                            { langs().iter().map(|code| {
                                let c = code.clone();
                                rsx!{
                                    option { key: "{c}", value: "{c}", "{c}" }
                                }
                            })}
                        }
                    }
                }
            }
        }
    }
}
