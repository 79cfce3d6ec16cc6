//! Shared fullstack API for GoViral. The pricing engine and verification
//! helpers live here so every frontend (web, desktop) talks to the same
//! server functions.

use dioxus::prelude::*;

pub mod pricing;
pub mod scrape;
pub mod verify;

pub use pricing::{
    Confidence, InfluencerTier, MarketTier, Niche, PriceQuote, PromoterMetrics,
};
pub use verify::{VerificationChallenge, VerificationOutcome};

/// Price a promotion from self-reported promoter metrics.
#[server(PredictPrice)]
pub async fn predict_price(metrics: PromoterMetrics) -> Result<PriceQuote, ServerFnError> {
    tracing::info!(
        followers = metrics.follower_count,
        niche = %metrics.niche,
        "price prediction requested"
    );
    pricing::estimate(&metrics).map_err(|err| ServerFnError::new(err.to_string()))
}

/// Begin account verification: returns the token the promoter must place in
/// their Instagram bio, plus the steps to follow.
#[server(StartVerification)]
pub async fn start_verification(username: String) -> Result<VerificationChallenge, ServerFnError> {
    let username = verify::clean_username(&username);
    if username.is_empty() {
        return Err(ServerFnError::new("username is required"));
    }

    let token = verify::generate_token();
    tracing::info!(%username, %token, "verification started");
    Ok(VerificationChallenge::new(username, token))
}

/// Re-read the public profile and check whether the expected token is there.
#[server(CheckVerification)]
pub async fn check_verification(
    username: String,
    token: String,
) -> Result<VerificationOutcome, ServerFnError> {
    let username = verify::clean_username(&username);
    let token = token.trim().to_string();
    if username.is_empty() || token.is_empty() {
        return Err(ServerFnError::new("username and token are required"));
    }

    let started = std::time::Instant::now();
    let found = scrape::extract_profile_token(&username).await;
    let elapsed = started.elapsed().as_secs_f64();

    let outcome = VerificationOutcome::conclude(username, token, found, elapsed);
    tracing::info!(
        username = %outcome.username,
        verified = outcome.verified,
        "verification checked"
    );
    Ok(outcome)
}
