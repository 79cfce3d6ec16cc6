//! Public Instagram profile scraping for the verification flow.
//!
//! The fetch half is server-only; the HTML extraction helpers are pure
//! string processing and compile everywhere so they can be unit tested
//! without the `server` feature.

use once_cell::sync::Lazy;
use regex::Regex;

static META_DESCRIPTION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"<meta[^>]*name="description"[^>]*content="([^"]*)""#)
        .expect("meta description pattern compiles")
});

static OG_DESCRIPTION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"<meta[^>]*property="og:description"[^>]*content="([^"]*)""#)
        .expect("og description pattern compiles")
});

static SCRIPT_BLOCK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)<script.*?</script>").expect("script pattern compiles"));
static STYLE_BLOCK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)<style.*?</style>").expect("style pattern compiles"));
static TAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^>]+>").expect("tag pattern compiles"));

/// `<meta name="description">` content, the usual home of the bio text.
pub fn meta_description(html: &str) -> Option<String> {
    META_DESCRIPTION
        .captures(html)
        .map(|caps| caps[1].to_string())
}

/// `og:description` content, the fallback when the plain meta tag is absent.
pub fn og_description(html: &str) -> Option<String> {
    OG_DESCRIPTION.captures(html).map(|caps| caps[1].to_string())
}

/// Last resort: strip scripts, styles and tags, leaving visible text.
pub fn visible_text(html: &str) -> String {
    let no_scripts = SCRIPT_BLOCK.replace_all(html, "");
    let no_styles = STYLE_BLOCK.replace_all(&no_scripts, "");
    TAG.replace_all(&no_styles, " ").to_string()
}

/// Fetch the public profile page and scan it for a verification token.
/// Every failure collapses to `None`; a private or blocked profile and a
/// missing token look the same to the caller.
#[cfg(feature = "server")]
pub async fn extract_profile_token(username: &str) -> Option<String> {
    use crate::verify::find_token_in_text;

    let html = fetch_profile_html(username).await?;

    if let Some(bio) = meta_description(&html) {
        if let Some(token) = find_token_in_text(&bio) {
            tracing::debug!(%username, "token found in meta description");
            return Some(token);
        }
    }

    if let Some(bio) = og_description(&html) {
        if let Some(token) = find_token_in_text(&bio) {
            tracing::debug!(%username, "token found in og:description");
            return Some(token);
        }
    }

    let text = visible_text(&html);
    if let Some(token) = find_token_in_text(&text) {
        tracing::debug!(%username, "token found in page text");
        return Some(token);
    }

    tracing::debug!(%username, "no token found on profile");
    None
}

#[cfg(feature = "server")]
const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
     (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

#[cfg(feature = "server")]
async fn fetch_profile_html(username: &str) -> Option<String> {
    use std::time::Duration;

    let client = match reqwest::Client::builder()
        .user_agent(USER_AGENT)
        .timeout(Duration::from_secs(10))
        .build()
    {
        Ok(client) => client,
        Err(err) => {
            tracing::warn!(%err, "could not build http client");
            return None;
        }
    };

    let url = format!("https://www.instagram.com/{username}/");
    let response = match client.get(&url).send().await {
        Ok(resp) => resp,
        Err(err) => {
            tracing::warn!(%username, %err, "profile fetch failed");
            return None;
        }
    };

    if !response.status().is_success() {
        tracing::warn!(%username, status = %response.status(), "profile fetch rejected");
        return None;
    }

    match response.text().await {
        Ok(body) => Some(body),
        Err(err) => {
            tracing::warn!(%username, %err, "profile body unreadable");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"<html><head>
        <meta name="description" content="1,234 Followers. Travel diaries. GV-987654">
        <meta property="og:description" content="og bio AUTH-555666">
        <style>.x { color: red }</style>
        </head><body>
        <script>var state = { token: "GV-000000" };</script>
        <div>visible bio text CODE-123456</div>
        </body></html>"#;

    #[test]
    fn meta_description_is_extracted() {
        let bio = meta_description(SAMPLE).unwrap();
        assert!(bio.contains("GV-987654"));
    }

    #[test]
    fn og_description_is_extracted() {
        let bio = og_description(SAMPLE).unwrap();
        assert!(bio.contains("AUTH-555666"));
    }

    #[test]
    fn missing_meta_tags_yield_none() {
        assert_eq!(meta_description("<html></html>"), None);
        assert_eq!(og_description("<html></html>"), None);
    }

    #[test]
    fn visible_text_drops_scripts_styles_and_tags() {
        let text = visible_text(SAMPLE);
        assert!(text.contains("visible bio text CODE-123456"));
        // Script content (including its decoy token) must not leak through.
        assert!(!text.contains("GV-000000"));
        assert!(!text.contains("color: red"));
        assert!(!text.contains('<'));
    }
}
