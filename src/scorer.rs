// =============================================================================
// Protocol Health Scorer — fixed-weight composite over seven market signals
// =============================================================================
//
// Pure and deterministic: no state, no I/O, total over finite input. The
// weights and normalizations are fixed constants in this version; only the
// final sum is clamped, so extreme inputs can drive intermediate terms far
// outside [0, 100] before the clamp.
// =============================================================================

use serde::{Deserialize, Serialize};

/// Confidence is a fixed constant until a calibrated model replaces it.
pub const CONFIDENCE: u32 = 85;

// Signal weights. Must sum to 1.00.
const W_TVL: f64 = 0.20;
const W_TVL_CHANGE: f64 = 0.25;
const W_WHALE: f64 = 0.15;
const W_LIQUIDATION: f64 = 0.20;
const W_VOLATILITY: f64 = 0.10;
const W_SENTIMENT: f64 = 0.05;
const W_CODE: f64 = 0.05;

/// TVL saturates here; anything at or above scores the full 100 on that term.
const TVL_SATURATION: f64 = 1e9;

/// A TVL drop steeper than this (percent) is reported as a risk factor.
const TVL_DECLINE_ALERT_PCT: f64 = -5.0;

/// 24h TVL change thresholds for the trend label. Strict inequalities:
/// exactly +/-3 is still `Stable`.
const TREND_UP_PCT: f64 = 3.0;
const TREND_DOWN_PCT: f64 = -3.0;

/// The seven market signals scored per request.
///
/// `whale_activity`, `liquidation_risk`, `social_sentiment` and
/// `code_activity` are expected on a 0-100 scale; `tvl` in raw units;
/// the remaining two as percentages. Out-of-range values are tolerated
/// and simply flow through the arithmetic.
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignalSet {
    pub tvl: f64,
    pub tvl_change_24h: f64,
    pub whale_activity: f64,
    pub liquidation_risk: f64,
    pub price_volatility: f64,
    pub social_sentiment: f64,
    pub code_activity: f64,
}

/// Coarse direction derived solely from the 24h TVL change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Up,
    Down,
    Stable,
}

impl std::fmt::Display for Trend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Up => write!(f, "up"),
            Self::Down => write!(f, "down"),
            Self::Stable => write!(f, "stable"),
        }
    }
}

/// Result of scoring one signal set.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreResult {
    pub health_score: i64,
    pub confidence: u32,
    pub trend: Trend,
    pub risk_factors: Vec<String>,
}

/// Score a signal set into a composite 0-100 health score plus derived
/// trend label and risk factors.
pub fn score(signals: &SignalSet) -> ScoreResult {
    let raw = (signals.tvl / TVL_SATURATION).min(1.0) * 100.0 * W_TVL
        + (50.0 + signals.tvl_change_24h * 2.0) * W_TVL_CHANGE
        + (100.0 - signals.whale_activity) * W_WHALE
        + (100.0 - signals.liquidation_risk) * W_LIQUIDATION
        + (100.0 - signals.price_volatility * 2.0) * W_VOLATILITY
        + signals.social_sentiment * W_SENTIMENT
        + signals.code_activity * W_CODE;

    // Truncate toward zero first (the fraction is discarded, not rounded),
    // then clamp. `as i64` saturates on overflow, so this stays total.
    let health_score = (raw as i64).clamp(0, 100);

    let trend = if signals.tvl_change_24h > TREND_UP_PCT {
        Trend::Up
    } else if signals.tvl_change_24h < TREND_DOWN_PCT {
        Trend::Down
    } else {
        Trend::Stable
    };

    let mut risk_factors = Vec::new();
    if signals.tvl_change_24h < TVL_DECLINE_ALERT_PCT {
        risk_factors.push(format!(
            "TVL declining {:.1}%",
            signals.tvl_change_24h.abs()
        ));
    }

    ScoreResult {
        health_score,
        confidence: CONFIDENCE,
        trend,
        risk_factors,
    }
}
