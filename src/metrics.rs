// Cattle Health Assessment 🐄 AGPL-3.0 License

//! Derivation of body metrics from a detected keypoint set.

use std::fmt;

use crate::geometry::{angle, distance, midpoint};
use crate::keypoint::{find_landmark, Keypoint, Landmark};

/// Geometric body metrics for a single analysis run.
#[derive(Debug, Clone, PartialEq)]
pub struct HealthMetrics {
    /// Body length divided by hip width.
    pub body_length_ratio: f64,
    /// Distance between the two hip landmarks, in pixels.
    pub hip_width_px: f64,
    /// Absolute deviation of the topline from horizontal, in degrees.
    pub topline_angle: f64,
    /// Withers-to-hip-midpoint distance in pixels, when measured.
    pub body_length_px: Option<f64>,
    /// Mean detection confidence across all keypoints, in [0, 1].
    pub confidence: f64,
}

/// Placeholder metrics substituted whenever real measurement is impossible.
pub const FALLBACK_METRICS: HealthMetrics = HealthMetrics {
    body_length_ratio: 2.41,
    hip_width_px: 156.0,
    topline_angle: 4.2,
    body_length_px: None,
    confidence: 0.94,
};

/// Why an assessment fell back to placeholder metrics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FallbackReason {
    /// The detection API request failed.
    RequestFailed,
    /// The detection API found no animal in the image.
    NoDetection,
    /// The detection is missing one or more required landmarks.
    MissingLandmarks,
}

impl fmt::Display for FallbackReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RequestFailed => write!(f, "detection request failed"),
            Self::NoDetection => write!(f, "no animal detected"),
            Self::MissingLandmarks => write!(f, "required landmarks missing"),
        }
    }
}

/// Whether metrics were measured from the image or substituted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetricsSource {
    /// Metrics were computed from detected landmarks.
    Measured,
    /// Placeholder metrics were substituted for the given reason.
    Fallback(FallbackReason),
}

/// Derive health metrics from a keypoint set.
///
/// Requires the withers and both hip landmarks. When any of the three is
/// absent the fixed [`FALLBACK_METRICS`] are returned, tagged with
/// [`FallbackReason::MissingLandmarks`] — a degraded-mode contract, not an
/// error. The derivation is pure: an identical keypoint set always yields
/// identical metrics.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn derive_metrics(keypoints: &[Keypoint]) -> (HealthMetrics, MetricsSource) {
    let (Some(withers), Some(hip_left), Some(hip_right)) = (
        find_landmark(keypoints, Landmark::Withers),
        find_landmark(keypoints, Landmark::HipLeft),
        find_landmark(keypoints, Landmark::HipRight),
    ) else {
        return (
            FALLBACK_METRICS,
            MetricsSource::Fallback(FallbackReason::MissingLandmarks),
        );
    };

    let hip_mid = midpoint(hip_left.point(), hip_right.point());
    let hip_width_px = distance(hip_left.point(), hip_right.point());
    let body_length_px = distance(withers.point(), hip_mid);

    // Coincident hip landmarks would divide by zero; use 1 instead so the
    // ratio degenerates to the raw body length.
    let divisor = if hip_width_px == 0.0 { 1.0 } else { hip_width_px };
    let body_length_ratio = body_length_px / divisor;

    let topline_angle = angle(withers.point(), hip_mid).abs();

    // Mean over the whole set, not just the three located landmarks.
    let confidence =
        keypoints.iter().map(|kp| kp.confidence).sum::<f64>() / keypoints.len() as f64;

    (
        HealthMetrics {
            body_length_ratio,
            hip_width_px,
            topline_angle,
            body_length_px: Some(body_length_px),
            confidence,
        },
        MetricsSource::Measured,
    )
}
