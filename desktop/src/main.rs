#![cfg_attr(all(windows, not(debug_assertions)), windows_subsystem = "windows")]

#[cfg(feature = "desktop")]
use std::path::PathBuf;

#[cfg(feature = "desktop")]
use dioxus::desktop::{tao::window::WindowBuilder, Config};
use dioxus::prelude::*;

use ui::components::app_header::{register_nav, NavBuilder};
use ui::components::{AppHeader, NavLink};
use ui::views::{AdminPanel, CreatorDashboard, Landing, Login, PromoterDashboard, Signup};

/// Desktop mirror of the web route table: the router path is the only
/// record of which screen is showing.
#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(DesktopHeader)]
    #[route("/")]
    Home {},
    #[route("/creator")]
    Creator {},
    #[route("/promoter")]
    Promoter {},
    #[route("/admin")]
    Admin {},
    #[end_layout]
    #[route("/login")]
    LoginScreen {},
    #[route("/signup")]
    SignupScreen {},
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

// Embedded shared theme (ui/assets/theme/main.css); no separate desktop /assets needed.
const MAIN_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
));
const HEADER_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/styling/header.css"
));

#[cfg(feature = "desktop")]
fn main() {
    let resource_dir = resolve_resource_dir();

    // Maximize window on launch (dioxus-desktop 0.6.x: pass a WindowBuilder value)
    LaunchBuilder::desktop()
        .with_cfg(
            Config::new()
                .with_window(
                    WindowBuilder::new()
                        .with_title(format!("GoViral – v{}", env!("CARGO_PKG_VERSION")))
                        .with_maximized(true),
                )
                .with_resource_directory(resource_dir),
        )
        .launch(App);
}

#[cfg(all(feature = "server", not(feature = "desktop")))]
fn main() {
    LaunchBuilder::server().launch(App);
}

fn nav_brand(_label: &str) -> Element {
    rsx!(Link {
        class: "navbar__brand-link",
        to: Route::Home {},
        span { class: "navbar__brand-spark", aria_hidden: "true" }
        span { class: "navbar__brand-mark", "GoViral" }
    })
}
fn nav_admin(label: &str) -> Element {
    rsx!(Link { class: "navbar__link", to: Route::Admin {}, "{label}" })
}
fn nav_login(label: &str) -> Element {
    rsx!(Link { class: "navbar__link", to: Route::LoginScreen {}, "{label}" })
}
fn nav_signup(label: &str) -> Element {
    rsx!(Link { class: "button button--primary", to: Route::SignupScreen {}, "{label}" })
}

fn cta_creator(label: &str) -> Element {
    rsx!(Link { class: "button button--primary button--lg", to: Route::Creator {}, "{label}" })
}
fn cta_promoter(label: &str) -> Element {
    rsx!(Link { class: "button button--outline button--lg", to: Route::Promoter {}, "{label}" })
}
fn link_creators(label: &str) -> Element {
    rsx!(Link { to: Route::Creator {}, "{label}" })
}
fn link_promoters(label: &str) -> Element {
    rsx!(Link { to: Route::Promoter {}, "{label}" })
}
fn auth_login(label: &str) -> Element {
    rsx!(Link { to: Route::LoginScreen {}, "{label}" })
}
fn auth_signup(label: &str) -> Element {
    rsx!(Link { to: Route::SignupScreen {}, "{label}" })
}

#[component]
fn App() -> Element {
    // Initialize i18n once
    ui::i18n::init();

    // Global reactive language code; the shared header updates it via context
    // on locale selection.
    let lang_code = use_signal(|| "en-US".to_string());
    use_context_provider(|| lang_code);

    register_nav(NavBuilder {
        brand: nav_brand,
        admin: nav_admin,
        login: nav_login,
        signup: nav_signup,
    });

    // Runtime maximize fallback (in case initial builder maximize is ignored by WM)
    #[cfg(feature = "desktop")]
    {
        let win = dioxus::desktop::use_window();
        use_effect(move || {
            win.set_maximized(true);
        });
    }

    rsx! {
        // Always inline embedded CSS (no external file dependency for desktop builds)
        document::Style { "{MAIN_CSS_INLINE}" }
        document::Style { "{HEADER_CSS_INLINE}" }

        // Keyed wrapper forces a full remount on language change; the hidden
        // marker keeps an explicit reactive dependency on the signal.
        div {
            key: "{lang_code()}",
            div { style: "display:none", "{lang_code()}" }
            Router::<Route> { }
        }
    }
}

#[cfg(feature = "desktop")]
fn resolve_resource_dir() -> PathBuf {
    #[cfg(debug_assertions)]
    {
        // During `cargo run` / `dx serve` load directly from the crate.
        PathBuf::from(concat!(env!("CARGO_MANIFEST_DIR"), "/assets"))
    }

    #[cfg(not(debug_assertions))]
    {
        std::env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(|dir| dir.join("assets")))
            .unwrap_or_else(|| PathBuf::from("assets"))
    }
}

/// A desktop-specific layout around the shared header component
/// which allows us to use the desktop-specific `Route` enum.
#[component]
fn DesktopHeader() -> Element {
    rsx! {
        AppHeader { }

        Outlet::<Route> {}
    }
}

#[component]
fn Home() -> Element {
    let cta_c: NavLink = cta_creator;
    let cta_p: NavLink = cta_promoter;
    let link_c: NavLink = link_creators;
    let link_p: NavLink = link_promoters;
    rsx! {
        Landing {
            cta_creator: cta_c,
            cta_promoter: cta_p,
            link_creators: link_c,
            link_promoters: link_p,
        }
    }
}

#[component]
fn Creator() -> Element {
    rsx!(CreatorDashboard {})
}

#[component]
fn Promoter() -> Element {
    rsx!(PromoterDashboard {})
}

#[component]
fn Admin() -> Element {
    rsx!(AdminPanel {})
}

#[component]
fn LoginScreen() -> Element {
    let home: NavLink = nav_brand;
    let signup: NavLink = auth_signup;
    rsx!(Login { home, signup })
}

#[component]
fn SignupScreen() -> Element {
    let home: NavLink = nav_brand;
    let login: NavLink = auth_login;
    rsx!(Signup { home, login })
}

#[component]
fn NotFound(segments: Vec<String>) -> Element {
    let nav = use_navigator();
    use_effect(move || {
        nav.replace(Route::Home {});
    });
    rsx! {
        div { class: "page" }
    }
}
