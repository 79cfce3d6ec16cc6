//! Instagram account verification.
//!
//! Flow: we hand the promoter a short code, they paste it into their
//! Instagram bio, and we re-read the public profile to confirm it is there.
//! Token generation and the outcome record are server-side; the text
//! scanning helpers are pure so they stay testable everywhere.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Patterns accepted as verification tokens, most specific first. The first
/// pattern that matches wins; matching is case-insensitive and the result is
/// upper-cased.
static TOKEN_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r"GV-\d{6}",
        r"VERIFY-\d{6}",
        r"CODE-\d{6}",
        r"AUTH-\d{6}",
        r"TOKEN-\d{6}",
        r"[A-Z]{2,4}-\d{4,8}",
    ]
    .iter()
    .map(|p| Regex::new(&format!("(?i){p}")).expect("token pattern compiles"))
    .collect()
});

static PROFILE_URL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"instagram\.com/([^/?]+)").expect("profile pattern compiles"));

/// Scan free-form profile text for a verification token.
pub fn find_token_in_text(text: &str) -> Option<String> {
    if text.is_empty() {
        return None;
    }
    TOKEN_PATTERNS
        .iter()
        .find_map(|re| re.find(text))
        .map(|m| m.as_str().to_ascii_uppercase())
}

/// Normalise user input into a bare username: trims whitespace, strips a
/// leading `@`, and accepts full profile URLs.
pub fn clean_username(raw: &str) -> String {
    let trimmed = raw.trim();
    if let Some(caps) = PROFILE_URL.captures(trimmed) {
        return caps[1].to_string();
    }
    trimmed.trim_start_matches('@').to_string()
}

/// Fresh verification token: `GV-` plus six random digits.
#[cfg(feature = "server")]
pub fn generate_token() -> String {
    use rand::Rng;
    format!("GV-{}", rand::thread_rng().gen_range(100_000..=999_999))
}

/// What the promoter is asked to do after requesting verification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VerificationChallenge {
    pub username: String,
    pub token: String,
    pub steps: Vec<String>,
}

impl VerificationChallenge {
    pub fn new(username: String, token: String) -> Self {
        let steps = vec![
            "Go to your Instagram profile".to_string(),
            "Tap 'Edit Profile'".to_string(),
            format!("Add '{token}' to your bio"),
            "Save changes".to_string(),
            "Come back here and click 'Verify Account'".to_string(),
        ];
        Self {
            username,
            token,
            steps,
        }
    }
}

/// Result of a verification check.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VerificationOutcome {
    pub verified: bool,
    pub username: String,
    pub expected_token: String,
    pub found_token: Option<String>,
    pub elapsed_seconds: f64,
    pub message: String,
    pub timestamp: String,
}

#[cfg(feature = "server")]
impl VerificationOutcome {
    pub fn conclude(
        username: String,
        expected_token: String,
        found_token: Option<String>,
        elapsed_seconds: f64,
    ) -> Self {
        let verified = found_token
            .as_deref()
            .is_some_and(|found| found.eq_ignore_ascii_case(&expected_token));

        let message = if verified {
            "Account verified!".to_string()
        } else {
            match &found_token {
                Some(found) => {
                    format!("Token mismatch: expected {expected_token}, found {found}")
                }
                None => format!("Token {expected_token} not found on the profile"),
            }
        };

        let timestamp = time::OffsetDateTime::now_utc()
            .format(&time::format_description::well_known::Rfc3339)
            .unwrap_or_default();

        Self {
            verified,
            username,
            expected_token,
            found_token,
            elapsed_seconds,
            message,
            timestamp,
        }
    }
}
