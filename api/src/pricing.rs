//! Promotion pricing engine.
//!
//! Deterministic heuristic behind the "Smart Pricing Engine" marketing copy:
//! a per-thousand-followers base rate scaled by niche demand, engagement
//! quality, and views/reach over-performance, clamped to a sane band.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Base rate in INR per 1000 followers.
const BASE_CPM_INR: f64 = 12.0;

/// Final quotes never leave this band.
const MIN_PRICE_INR: f64 = 500.0;
const MAX_PRICE_INR: f64 = 500_000.0;

/// Half-width of the quoted range, as a fraction of the suggested price.
const RANGE_SPREAD: f64 = 0.12;

/// Quoted range never dips below this floor.
const RANGE_FLOOR_INR: f64 = 300.0;

/// Content niche a promoter operates in. Closed set; each niche carries a
/// demand multiplier applied on top of the base CPM.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Niche {
    Fashion,
    Beauty,
    Fitness,
    Luxury,
    Tech,
    Music,
    Food,
    Travel,
    Business,
    Lifestyle,
    Education,
    Gaming,
    Comedy,
    Pets,
    Memes,
}

impl Niche {
    pub const ALL: [Niche; 15] = [
        Niche::Fashion,
        Niche::Beauty,
        Niche::Fitness,
        Niche::Luxury,
        Niche::Tech,
        Niche::Music,
        Niche::Food,
        Niche::Travel,
        Niche::Business,
        Niche::Lifestyle,
        Niche::Education,
        Niche::Gaming,
        Niche::Comedy,
        Niche::Pets,
        Niche::Memes,
    ];

    /// Demand multiplier applied to the base CPM.
    pub fn multiplier(self) -> f64 {
        match self {
            Niche::Fashion => 1.45,
            Niche::Beauty => 1.50,
            Niche::Fitness => 1.40,
            Niche::Luxury => 1.60,
            Niche::Tech => 1.35,
            Niche::Music => 1.30,
            Niche::Food => 1.25,
            Niche::Travel => 1.35,
            Niche::Business => 1.30,
            Niche::Lifestyle => 1.20,
            Niche::Education => 1.15,
            Niche::Gaming => 1.10,
            Niche::Comedy => 1.05,
            Niche::Pets => 1.08,
            Niche::Memes => 1.00,
        }
    }

    /// Market tier the niche sits in (used for admin/reporting copy).
    pub fn market_tier(self) -> MarketTier {
        match self {
            Niche::Fashion | Niche::Beauty | Niche::Fitness | Niche::Luxury | Niche::Tech => {
                MarketTier::Premium
            }
            Niche::Music | Niche::Food | Niche::Travel | Niche::Business | Niche::Lifestyle => {
                MarketTier::Medium
            }
            Niche::Education | Niche::Gaming | Niche::Comedy | Niche::Pets | Niche::Memes => {
                MarketTier::Standard
            }
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Niche::Fashion => "fashion",
            Niche::Beauty => "beauty",
            Niche::Fitness => "fitness",
            Niche::Luxury => "luxury",
            Niche::Tech => "tech",
            Niche::Music => "music",
            Niche::Food => "food",
            Niche::Travel => "travel",
            Niche::Business => "business",
            Niche::Lifestyle => "lifestyle",
            Niche::Education => "education",
            Niche::Gaming => "gaming",
            Niche::Comedy => "comedy",
            Niche::Pets => "pets",
            Niche::Memes => "memes",
        }
    }

    /// Parse a lowercase niche name; whitespace and case are forgiven.
    pub fn parse(raw: &str) -> Option<Niche> {
        let wanted = raw.trim().to_ascii_lowercase();
        Niche::ALL.into_iter().find(|n| n.as_str() == wanted)
    }

    /// Human-facing label ("fashion" -> "Fashion").
    pub fn display_name(self) -> String {
        let s = self.as_str();
        let mut out = String::with_capacity(s.len());
        let mut chars = s.chars();
        if let Some(first) = chars.next() {
            out.extend(first.to_uppercase());
            out.extend(chars);
        }
        out
    }
}

impl fmt::Display for Niche {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MarketTier {
    Premium,
    Medium,
    Standard,
}

/// Audience-size bracket a promoter falls into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InfluencerTier {
    Nano,
    Micro,
    MidTier,
    Macro,
}

impl InfluencerTier {
    pub fn classify(follower_count: u32) -> Self {
        match follower_count {
            100_000.. => InfluencerTier::Macro,
            50_000.. => InfluencerTier::MidTier,
            10_000.. => InfluencerTier::Micro,
            _ => InfluencerTier::Nano,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            InfluencerTier::Nano => "Nano-Influencer",
            InfluencerTier::Micro => "Micro-Influencer",
            InfluencerTier::MidTier => "Mid-Tier Influencer",
            InfluencerTier::Macro => "Macro-Influencer",
        }
    }
}

/// How much weight to give the quote. Driven purely by audience size: the
/// heuristic was calibrated on mid-size accounts, so small ones get a softer
/// wording rather than a hard number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Confidence {
    High,
    Medium,
    Good,
}

impl Confidence {
    fn for_followers(follower_count: u32) -> Self {
        if follower_count > 50_000 {
            Confidence::High
        } else if follower_count > 10_000 {
            Confidence::Medium
        } else {
            Confidence::Good
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Confidence::High => "High",
            Confidence::Medium => "Medium",
            Confidence::Good => "Good",
        }
    }
}

/// Per-post metrics a promoter reports about their account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PromoterMetrics {
    pub follower_count: u32,
    pub avg_views: u32,
    pub avg_interactions: u32,
    pub new_followers_rate: u32,
    pub accounts_reached: u32,
    pub niche: Niche,
}

impl PromoterMetrics {
    /// Engagement rate as a fraction (interactions / followers).
    pub fn engagement_rate(&self) -> f64 {
        if self.follower_count == 0 {
            return 0.0;
        }
        f64::from(self.avg_interactions) / f64::from(self.follower_count)
    }

    pub fn validate(&self) -> Result<(), MetricsError> {
        if self.follower_count < 1000 {
            return Err(MetricsError::FollowersTooLow);
        }
        if self.avg_views < 100 {
            return Err(MetricsError::ViewsTooLow);
        }
        if self.avg_interactions < 10 {
            return Err(MetricsError::InteractionsTooLow);
        }
        if self.accounts_reached < 100 {
            return Err(MetricsError::ReachTooLow);
        }
        Ok(())
    }
}

/// Why a set of metrics was rejected. Floors mirror the minimum profile a
/// promoter can list with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetricsError {
    FollowersTooLow,
    ViewsTooLow,
    InteractionsTooLow,
    ReachTooLow,
}

impl fmt::Display for MetricsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            MetricsError::FollowersTooLow => "follower count should be at least 1000",
            MetricsError::ViewsTooLow => "average views should be at least 100",
            MetricsError::InteractionsTooLow => "average interactions should be at least 10",
            MetricsError::ReachTooLow => "accounts reached should be at least 100",
        };
        f.write_str(msg)
    }
}

impl std::error::Error for MetricsError {}

/// A priced promotion quote.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceQuote {
    pub suggested_inr: f64,
    pub range_min_inr: f64,
    pub range_max_inr: f64,
    pub confidence: Confidence,
    /// Engagement rate as a percentage (e.g. 3.25 for 3.25%).
    pub engagement_rate_pct: f64,
    pub tier: InfluencerTier,
}

/// Price a promotion for the given metrics.
pub fn estimate(metrics: &PromoterMetrics) -> Result<PriceQuote, MetricsError> {
    metrics.validate()?;

    let followers = f64::from(metrics.follower_count);
    let engagement = metrics.engagement_rate();

    let mut price = followers / 1000.0 * BASE_CPM_INR * metrics.niche.multiplier();
    price *= engagement_bonus(engagement);

    let views_ratio = f64::from(metrics.avg_views) / followers;
    if views_ratio > 1.1 {
        price *= 1.15;
    } else if views_ratio > 0.9 {
        price *= 1.05;
    }

    let reach_ratio = f64::from(metrics.accounts_reached) / followers;
    if reach_ratio > 1.2 {
        price *= 1.1;
    }

    let suggested = round2(price.clamp(MIN_PRICE_INR, MAX_PRICE_INR));
    let spread = suggested * RANGE_SPREAD;

    Ok(PriceQuote {
        suggested_inr: suggested,
        range_min_inr: round2((suggested - spread).max(RANGE_FLOOR_INR)),
        range_max_inr: round2(suggested + spread),
        confidence: Confidence::for_followers(metrics.follower_count),
        engagement_rate_pct: round2(engagement * 100.0),
        tier: InfluencerTier::classify(metrics.follower_count),
    })
}

/// Multiplier rewarding above-average engagement, penalising dead audiences.
fn engagement_bonus(rate: f64) -> f64 {
    if rate > 0.06 {
        1.5
    } else if rate > 0.04 {
        1.3
    } else if rate > 0.02 {
        1.1
    } else {
        0.9
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metrics(followers: u32, views: u32, interactions: u32, reach: u32, niche: Niche) -> PromoterMetrics {
        PromoterMetrics {
            follower_count: followers,
            avg_views: views,
            avg_interactions: interactions,
            new_followers_rate: 50,
            accounts_reached: reach,
            niche,
        }
    }

    #[test]
    fn premium_niches_price_above_standard() {
        let beauty = estimate(&metrics(20_000, 15_000, 500, 18_000, Niche::Beauty)).unwrap();
        let memes = estimate(&metrics(20_000, 15_000, 500, 18_000, Niche::Memes)).unwrap();
        assert!(beauty.suggested_inr > memes.suggested_inr);
    }

    #[test]
    fn engagement_bonus_thresholds() {
        assert_eq!(engagement_bonus(0.07), 1.5);
        assert_eq!(engagement_bonus(0.05), 1.3);
        assert_eq!(engagement_bonus(0.03), 1.1);
        assert_eq!(engagement_bonus(0.01), 0.9);
        // Boundaries are exclusive.
        assert_eq!(engagement_bonus(0.02), 0.9);
    }

    #[test]
    fn tiny_account_hits_price_floor() {
        // 1000 followers * 12/1000 * 1.0 * 0.9 = 10.8 -> clamped up to 500.
        let q = estimate(&metrics(1000, 400, 10, 600, Niche::Memes)).unwrap();
        assert_eq!(q.suggested_inr, MIN_PRICE_INR);
        assert!(q.range_min_inr >= RANGE_FLOOR_INR);
    }

    #[test]
    fn huge_account_hits_price_ceiling() {
        let q = estimate(&metrics(4_000_000, 5_000_000, 300_000, 5_000_000, Niche::Luxury)).unwrap();
        assert_eq!(q.suggested_inr, MAX_PRICE_INR);
        assert_eq!(q.range_max_inr, round2(MAX_PRICE_INR * 1.12));
    }

    #[test]
    fn over_performing_views_and_reach_raise_the_quote() {
        let flat = estimate(&metrics(50_000, 30_000, 1500, 40_000, Niche::Tech)).unwrap();
        let hot = estimate(&metrics(50_000, 60_000, 1500, 70_000, Niche::Tech)).unwrap();
        assert!(hot.suggested_inr > flat.suggested_inr);
    }

    #[test]
    fn range_spreads_twelve_percent_around_suggested() {
        let q = estimate(&metrics(80_000, 70_000, 3000, 90_000, Niche::Fashion)).unwrap();
        assert_eq!(q.range_min_inr, round2(q.suggested_inr * 0.88));
        assert_eq!(q.range_max_inr, round2(q.suggested_inr * 1.12));
    }

    #[test]
    fn confidence_tracks_audience_size() {
        let small = estimate(&metrics(5000, 4000, 200, 4500, Niche::Food)).unwrap();
        let mid = estimate(&metrics(20_000, 15_000, 700, 18_000, Niche::Food)).unwrap();
        let big = estimate(&metrics(90_000, 80_000, 3000, 95_000, Niche::Food)).unwrap();
        assert_eq!(small.confidence, Confidence::Good);
        assert_eq!(mid.confidence, Confidence::Medium);
        assert_eq!(big.confidence, Confidence::High);
    }

    #[test]
    fn tier_boundaries() {
        assert_eq!(InfluencerTier::classify(9999), InfluencerTier::Nano);
        assert_eq!(InfluencerTier::classify(10_000), InfluencerTier::Micro);
        assert_eq!(InfluencerTier::classify(50_000), InfluencerTier::MidTier);
        assert_eq!(InfluencerTier::classify(100_000), InfluencerTier::Macro);
    }

    #[test]
    fn validation_floors() {
        assert_eq!(
            estimate(&metrics(999, 4000, 200, 4500, Niche::Food)).unwrap_err(),
            MetricsError::FollowersTooLow
        );
        assert_eq!(
            estimate(&metrics(5000, 99, 200, 4500, Niche::Food)).unwrap_err(),
            MetricsError::ViewsTooLow
        );
        assert_eq!(
            estimate(&metrics(5000, 4000, 9, 4500, Niche::Food)).unwrap_err(),
            MetricsError::InteractionsTooLow
        );
        assert_eq!(
            estimate(&metrics(5000, 4000, 200, 99, Niche::Food)).unwrap_err(),
            MetricsError::ReachTooLow
        );
    }

    #[test]
    fn niche_parse_roundtrip() {
        for niche in Niche::ALL {
            assert_eq!(Niche::parse(niche.as_str()), Some(niche));
        }
        assert_eq!(Niche::parse("  Fashion "), Some(Niche::Fashion));
        assert_eq!(Niche::parse("crypto"), None);
    }

    #[test]
    fn display_name_is_title_cased() {
        assert_eq!(Niche::Fashion.display_name(), "Fashion");
        assert_eq!(InfluencerTier::MidTier.label(), "Mid-Tier Influencer");
    }
}
