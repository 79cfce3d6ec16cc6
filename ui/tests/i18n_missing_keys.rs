use std::collections::{BTreeSet, HashSet};

/// Translation completeness test.
/// Ensures every non-fallback locale provides *at least* the keys present
/// in the fallback (en-US) `goviral-ui.ftl`.
///
/// This is a lightweight parser:
/// - Ignores comment lines starting with `#`
/// - Treats any line of the form `key =` or `key=` as a message definition
/// - Skips blank / attribute / continuation lines
///
/// If you add a new locale:
/// 1. Create `ui/i18n/<locale>/goviral-ui.ftl`
/// 2. Copy all keys from `en-US/goviral-ui.ftl`
/// 3. Run `cargo test -p goviral-ui` to confirm completeness.
#[test]
fn all_locales_have_all_fallback_keys() {
    // Embed the FTL sources at compile time.
    // (If you add a new locale, register it here.)
    const EN_US: &str = include_str!("../i18n/en-US/goviral-ui.ftl");
    const ES_ES: &str = include_str!("../i18n/es-ES/goviral-ui.ftl");

    let fallback_keys = extract_keys(EN_US);

    assert!(
        !fallback_keys.is_empty(),
        "Fallback (en-US) contains no keys."
    );
    assert_no_dup_keys(EN_US, "en-US");

    let locales: &[(&str, &str)] = &[
        ("es-ES", ES_ES),
        // Add new locales here.
    ];

    let mut failures = Vec::new();

    for (locale, src) in locales {
        assert_no_dup_keys(src, locale);

        let keys = extract_keys(src);
        let mut missing: BTreeSet<String> = BTreeSet::new();

        for k in &fallback_keys {
            if !keys.contains(k) {
                missing.insert(k.clone());
            }
        }

        if !missing.is_empty() {
            failures.push(format!(
                "locale `{locale}` is missing {} key(s):\n  {}",
                missing.len(),
                missing.into_iter().collect::<Vec<_>>().join("\n  ")
            ));
        }
    }

    assert!(
        failures.is_empty(),
        "incomplete locales:\n{}",
        failures.join("\n")
    );
}

fn extract_keys(src: &str) -> HashSet<String> {
    src.lines().filter_map(parse_key).collect()
}

fn assert_no_dup_keys(src: &str, locale: &str) {
    let mut seen = HashSet::new();
    for key in src.lines().filter_map(parse_key) {
        assert!(
            seen.insert(key.clone()),
            "locale `{locale}` defines key `{key}` more than once"
        );
    }
}

/// Message definitions are `key = value` at column zero; attributes and
/// continuations are indented, comments start with `#`.
fn parse_key(line: &str) -> Option<String> {
    if line.starts_with(['#', ' ', '\t']) {
        return None;
    }
    let (key, _) = line.split_once('=')?;
    let key = key.trim();
    if key.is_empty() {
        return None;
    }
    Some(key.to_string())
}
