use dioxus::prelude::*;

use ui::components::app_header::{register_nav, NavBuilder};
use ui::components::AppHeader;
use ui::views::{AdminPanel, CreatorDashboard, Landing, Login, PromoterDashboard, Signup};

/// The single source of truth for which screen is on display. Every screen
/// change goes through the router; there is no parallel "current view" state
/// to drift out of sync.
#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(WebHeader)]
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
    // Anything outside the closed set of paths lands here and is sent home.
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

const FAVICON: Asset = asset!("/assets/favicon.ico");
const MAIN_CSS: Asset = asset!("/assets/main.css");
const THEME_CSS: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
));

fn nav_brand(_label: &str) -> Element {
    rsx!(Link {
        class: "navbar__brand-link",
        to: Route::Home {},
        span { class: "navbar__brand-spark", aria_hidden: "true" }
        span { class: "navbar__brand-mark", "GoViral" }
    })
}
fn nav_admin(label: &str) -> Element {
    rsx!(Link {
        class: "navbar__link",
        to: Route::Admin {},
        "{label}"
    })
}
fn nav_login(label: &str) -> Element {
    rsx!(Link {
        class: "navbar__link",
        to: Route::LoginScreen {},
        "{label}"
    })
}
fn nav_signup(label: &str) -> Element {
    rsx!(Link {
        class: "button button--primary",
        to: Route::SignupScreen {},
        "{label}"
    })
}

// Landing CTAs and footer links.
fn cta_creator(label: &str) -> Element {
    rsx!(Link {
        class: "button button--primary button--lg",
        to: Route::Creator {},
        "{label}"
    })
}
fn cta_promoter(label: &str) -> Element {
    rsx!(Link {
        class: "button button--outline button--lg",
        to: Route::Promoter {},
        "{label}"
    })
}
fn link_creators(label: &str) -> Element {
    rsx!(Link {
        to: Route::Creator {},
        "{label}"
    })
}
fn link_promoters(label: &str) -> Element {
    rsx!(Link {
        to: Route::Promoter {},
        "{label}"
    })
}

// Auth screens link back out via these.
fn auth_login(label: &str) -> Element {
    rsx!(Link {
        to: Route::LoginScreen {},
        "{label}"
    })
}
fn auth_signup(label: &str) -> Element {
    rsx!(Link {
        to: Route::SignupScreen {},
        "{label}"
    })
}

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    {
        ui::i18n::init();
        register_nav(NavBuilder {
            brand: nav_brand,
            admin: nav_admin,
            login: nav_login,
            signup: nav_signup,
        });
    }

    // Global language code; the header writes it, every screen subscribes.
    use_context_provider(|| Signal::new("en-US".to_string()));

    rsx! {
        // Global app resources
        document::Link { rel: "icon", href: FAVICON }
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        document::Style { "{THEME_CSS}" }

        Router::<Route> {}
    }
}

/// A web-specific layout around the shared `AppHeader` component
/// which allows us to use the web-specific `Route` enum.
#[component]
fn WebHeader() -> Element {
    rsx! {
        AppHeader {}
        Outlet::<Route> {}
    }
}

#[component]
fn Home() -> Element {
    let cta_c: ui::components::NavLink = cta_creator;
    let cta_p: ui::components::NavLink = cta_promoter;
    let link_c: ui::components::NavLink = link_creators;
    let link_p: ui::components::NavLink = link_promoters;
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
    let home: ui::components::NavLink = nav_brand;
    let signup: ui::components::NavLink = auth_signup;
    rsx!(Login { home, signup })
}

#[component]
fn SignupScreen() -> Element {
    let home: ui::components::NavLink = nav_brand;
    let login: ui::components::NavLink = auth_login;
    rsx!(Signup { home, login })
}

/// Closed-set fallback: unknown paths redirect to the landing page rather
/// than rendering a dead end.
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

#[cfg(test)]
mod tests {
    use super::Route;

    fn parse(path: &str) -> Route {
        match path.parse::<Route>() {
            Ok(route) => route,
            Err(err) => panic!("{path} failed to parse: {err}"),
        }
    }

    #[test]
    fn known_paths_parse_to_their_screens() {
        assert_eq!(parse("/"), Route::Home {});
        assert_eq!(parse("/creator"), Route::Creator {});
        assert_eq!(parse("/promoter"), Route::Promoter {});
        assert_eq!(parse("/admin"), Route::Admin {});
        assert_eq!(parse("/login"), Route::LoginScreen {});
        assert_eq!(parse("/signup"), Route::SignupScreen {});
    }

    #[test]
    fn routes_render_back_to_their_paths() {
        assert_eq!(Route::Home {}.to_string(), "/");
        assert_eq!(Route::Creator {}.to_string(), "/creator");
        assert_eq!(Route::Promoter {}.to_string(), "/promoter");
        assert_eq!(Route::Admin {}.to_string(), "/admin");
        assert_eq!(Route::LoginScreen {}.to_string(), "/login");
        assert_eq!(Route::SignupScreen {}.to_string(), "/signup");
    }

    #[test]
    fn unknown_paths_fall_through_to_not_found() {
        match parse("/no/such/page") {
            Route::NotFound { segments } => {
                assert_eq!(segments, vec!["no".to_string(), "such".into(), "page".into()]);
            }
            other => panic!("expected NotFound, got {other:?}"),
        }
    }
}
