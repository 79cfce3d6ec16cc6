#![cfg(test)]
/*!
Theme selector lint for the desktop build.

Purpose:
- Ensure that critical CSS selectors required by the desktop UI (the landing
  sections, auth screens and the promoter panels in particular) remain present
  in the unified shared theme: ui/assets/theme/main.css
- Fail fast if a refactor accidentally drops or renames core classes,
  preventing a silent styling regression in packaged (embedded) desktop builds.

How it works:
- We compile‑time embed the unified theme using `include_str!` pointing to the
  shared `ui/` location (mirrors the constant in `desktop/src/main.rs`).
- We assert presence of a curated set of selectors / tokens.
- If you intentionally rename or remove a selector:
    1. Update the component markup.
    2. Adjust this test's REQUIRED_SELECTORS accordingly.

A substring presence check is deliberate: it is an early warning, not a CSS
parser, and it keeps the test dependency-free.
*/

const THEME_CSS: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
));

/// Core selectors / tokens that must exist in the shared theme for desktop.
const REQUIRED_SELECTORS: &[&str] = &[
    // Global / layout
    ":root",
    "body {",
    ".page {",
    ".section {",
    ".grid--2",
    ".grid--3",
    // Buttons & cards
    ".button {",
    ".button--primary",
    ".button--outline",
    ".button--ghost",
    ".card {",
    ".card__title",
    // Landing page sections
    ".hero {",
    ".hero__title",
    ".hero__actions",
    ".step-card__icon",
    ".value__icon",
    ".testimonial__avatar",
    ".footer {",
    ".footer__links",
    // Auth screens
    ".auth {",
    ".auth__card",
    ".auth__form",
    ".auth__switch",
    // Dashboards & promoter panels
    ".stat-card__value",
    ".panel__form",
    ".panel__error",
    ".quote {",
    ".quote__price",
    ".challenge__token",
    // Media query token (sanity check responsive block exists)
    "@media (max-width: 900px)",
];

#[test]
fn unified_theme_contains_required_selectors() {
    let mut missing = Vec::new();
    for sel in REQUIRED_SELECTORS {
        if !THEME_CSS.contains(sel) {
            missing.push(*sel);
        }
    }

    if !missing.is_empty() {
        panic!(
            "Missing {} required CSS selectors/tokens in unified theme:\n{}",
            missing.len(),
            missing.join("\n")
        );
    }
}

#[test]
fn unified_theme_not_trivially_empty() {
    let non_ws_len = THEME_CSS.chars().filter(|c| !c.is_whitespace()).count();
    assert!(
        non_ws_len > 4_000,
        "Embedded theme appears unexpectedly small ({} non-whitespace chars) – \
         did the file get truncated or path change?",
        non_ws_len
    );
}

#[test]
fn quote_block_consistency() {
    // The estimator result rows rely on both row variants being styled.
    let has_row = THEME_CSS.contains(".quote__row");
    let has_headline = THEME_CSS.contains(".quote__row--headline");
    assert!(
        has_row && has_headline,
        "Quote summary sub‑selectors missing (row: {has_row}, headline: {has_headline})"
    );
}
