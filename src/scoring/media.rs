//! Media stability subindex.
//!
//! Raw media reach (`i_media`) is damped by the volatility of the monthly
//! series: `m_stab = i_media / (1 + v_vol)`.

use serde::Serialize;

use super::clamp_score;

/// Share of the reference benchmark below which the monthly mean is noise.
const NOISE_SHARE: f64 = 0.01;

/// Noise threshold when no reference benchmark is known.
const ABSOLUTE_NOISE_FLOOR: f64 = 1.0;

/// Coefficient of variation of the monthly series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Volatility {
    /// `sigma / mu`, never negative
    Ratio(f64),
    /// Mean below the noise threshold; no stable ratio exists
    Indeterminate,
}

impl Volatility {
    pub fn ratio(&self) -> Option<f64> {
        match self {
            Volatility::Ratio(v) => Some(*v),
            Volatility::Indeterminate => None,
        }
    }

    pub fn is_indeterminate(&self) -> bool {
        matches!(self, Volatility::Indeterminate)
    }
}

/// Media reach relative to the industry benchmark, in [0, 100].
pub fn media_index(value: f64, x_ref: f64) -> f64 {
    if x_ref <= 0.0 {
        return 0.0;
    }
    clamp_score(value / x_ref * 100.0)
}

/// Media reach from hand-counted publications, in [0, 100].
///
/// A fully positive year scores 100, a balanced one 50, a fully negative one 0.
pub fn manual_media_index(positive: i64, negative: i64, total: i64) -> f64 {
    if total <= 0 {
        return 0.0;
    }
    let net = (positive - negative) as f64 / total as f64;
    clamp_score((1.0 + net) * 50.0)
}

/// Volatility of the monthly series.
///
/// Uses population statistics (divisor = count). Fewer than two observations
/// count as perfectly stable. With a positive `x_ref` the noise threshold is 1%
/// of it, otherwise 1.
pub fn volatility(monthly: &[f64], x_ref: Option<f64>) -> Volatility {
    if monthly.len() < 2 {
        return Volatility::Ratio(0.0);
    }

    let count = monthly.len() as f64;
    let mean = monthly.iter().sum::<f64>() / count;

    let threshold = match x_ref {
        Some(x) if x > 0.0 => x * NOISE_SHARE,
        _ => ABSOLUTE_NOISE_FLOOR,
    };
    if mean < threshold {
        return Volatility::Indeterminate;
    }

    let variance = monthly.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / count;
    Volatility::Ratio(variance.sqrt() / mean)
}

/// Stability-adjusted media score, in [0, 100].
pub fn media_stability(i_media: f64, volatility: Volatility) -> f64 {
    match volatility {
        Volatility::Ratio(v) => i_media / (1.0 + v),
        Volatility::Indeterminate => 0.0,
    }
}
