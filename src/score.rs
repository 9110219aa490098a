// Cattle Health Assessment 🐄 AGPL-3.0 License

//! Health scoring: metric normalization, fixed weights and status tiers.

use crate::metrics::HealthMetrics;

/// Weight of the body-length sub-score.
pub const WEIGHT_LENGTH: f64 = 0.4;

/// Weight of the topline sub-score.
pub const WEIGHT_TOPLINE: f64 = 0.3;

/// Weight of the detection-confidence sub-score.
pub const WEIGHT_CONFIDENCE: f64 = 0.3;

/// Ideal body-length-ratio range used for scoring.
///
/// Distinct from [`crate::render::LENGTH_DISPLAY_RANGE`], which only affects
/// the progress-bar display.
pub const LENGTH_SCORE_RANGE: (f64, f64) = (2.0, 3.2);

/// Topline deviation (degrees) at which the topline sub-score reaches zero.
pub const TOPLINE_FULL_PENALTY_DEG: f64 = 30.0;

/// Normalize `value` into [0, 1] linearly over `[min, max]`.
#[must_use]
pub fn normalize(value: f64, min: f64, max: f64) -> f64 {
    ((value - min) / (max - min)).clamp(0.0, 1.0)
}

/// Body-length sub-score: linear ramp over the ideal ratio range.
#[must_use]
pub fn length_score(body_length_ratio: f64) -> f64 {
    normalize(body_length_ratio, LENGTH_SCORE_RANGE.0, LENGTH_SCORE_RANGE.1)
}

/// Topline sub-score: 1 at level, 0 at 30° or more of deviation.
#[must_use]
pub fn topline_score(topline_angle: f64) -> f64 {
    1.0 - (topline_angle.abs() / TOPLINE_FULL_PENALTY_DEG).min(1.0)
}

/// Overall health score on a 0–10 scale, rounded to one decimal.
///
/// Weighted sum of the three sub-scores; monotonically non-decreasing in
/// each. Pure and total for finite inputs.
#[must_use]
pub fn calculate_health_score(metrics: &HealthMetrics) -> f64 {
    let raw = WEIGHT_LENGTH * length_score(metrics.body_length_ratio)
        + WEIGHT_TOPLINE * topline_score(metrics.topline_angle)
        + WEIGHT_CONFIDENCE * metrics.confidence;
    (raw * 100.0).round() / 10.0
}

/// Qualitative status tier for a health score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HealthStatus {
    /// Score of 8.5 or higher.
    Excellent,
    /// Score of 7.0 up to 8.5.
    Good,
    /// Everything below 7.0.
    Fair,
}

impl HealthStatus {
    /// Tier for a given score.
    #[must_use]
    pub fn from_score(score: f64) -> Self {
        if score >= 8.5 {
            Self::Excellent
        } else if score >= 7.0 {
            Self::Good
        } else {
            Self::Fair
        }
    }

    /// Status badge text.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Excellent => "Excellent Health",
            Self::Good => "Good Health",
            Self::Fair => "Fair Health",
        }
    }

    /// Frame-proportion assessment text.
    #[must_use]
    pub const fn frame_assessment(self) -> &'static str {
        match self {
            Self::Excellent => "Excellent frame proportions with ideal length-to-width ratio",
            Self::Good => "Good frame proportions with acceptable body measurements",
            Self::Fair => "Frame proportions need attention, body measurements below optimal",
        }
    }

    /// Structural-soundness assessment text.
    #[must_use]
    pub const fn structural_assessment(self) -> &'static str {
        match self {
            Self::Excellent => "Superior structural soundness with level topline",
            Self::Good => "Good structural integrity with minor topline variation",
            Self::Fair => "Structural issues detected, topline shows deviation from ideal",
        }
    }

    /// Management recommendation text.
    #[must_use]
    pub const fn recommendation(self) -> &'static str {
        match self {
            Self::Excellent => {
                "Animal shows exceptional conformation. Continue current management practices. \
                 Consider for breeding program."
            }
            Self::Good => {
                "Animal shows good health indicators. Monitor nutrition and ensure adequate \
                 exercise."
            }
            Self::Fair => {
                "Consider veterinary consultation. Review nutrition program and housing \
                 conditions."
            }
        }
    }
}
