//! Shared UI crate for GoViral. All screens, primitives, and localized copy
//! live here; the platform crates only supply a `Route` enum and a launcher.

pub mod core;
pub mod i18n;
pub mod views;

pub mod components {
    // Localized application header (components/app_header.rs)
    pub mod app_header;
    pub use app_header::register_nav;
    pub use app_header::AppHeader;
    pub use app_header::NavBuilder;
    pub use app_header::NavLink;

    // Presentational primitives
    pub mod button;
    pub mod card;
    pub use button::{Button, ButtonVariant};
    pub use card::{Card, CardContent, CardDescription, CardHeader, CardTitle};
}
