// Cattle Health Assessment 🐄 AGPL-3.0 License

//! Assessment container tying detection output to metrics and score.

use crate::error::HealthError;
use crate::keypoint::Keypoint;
use crate::metrics::{
    derive_metrics, FallbackReason, HealthMetrics, MetricsSource, FALLBACK_METRICS,
};
use crate::score::{calculate_health_score, HealthStatus};

/// Complete result of one analysis run.
///
/// Always produced, whether or not detection succeeded: failures collapse
/// into the placeholder-metrics path with the cause recorded on `source`.
/// The rendered output is identical for measured and fallback assessments;
/// only `source` distinguishes them.
#[derive(Debug, Clone)]
pub struct Assessment {
    /// Overall health score on a 0–10 scale, one decimal of precision.
    pub score: f64,
    /// Qualitative status tier for the score.
    pub status: HealthStatus,
    /// Derived (or substituted) body metrics.
    pub metrics: HealthMetrics,
    /// Keypoints used for this run; empty on detection failure.
    pub keypoints: Vec<Keypoint>,
    /// Whether the metrics were measured or substituted, and why.
    pub source: MetricsSource,
}

impl Assessment {
    /// Assess a detected keypoint set.
    #[must_use]
    pub fn from_keypoints(keypoints: Vec<Keypoint>) -> Self {
        let (metrics, source) = derive_metrics(&keypoints);
        Self::build(metrics, source, keypoints)
    }

    /// Assess the outcome of a detection request.
    ///
    /// Transport failures and empty detections both land on the placeholder
    /// metrics; the distinct cause stays observable on `source` for logging
    /// and tests.
    #[must_use]
    pub fn from_detection(outcome: Result<Vec<Keypoint>, HealthError>) -> Self {
        match outcome {
            Ok(keypoints) => Self::from_keypoints(keypoints),
            Err(HealthError::NoDetection) => Self::fallback(FallbackReason::NoDetection),
            Err(_) => Self::fallback(FallbackReason::RequestFailed),
        }
    }

    /// Degraded-mode assessment for a failed detection.
    #[must_use]
    pub fn fallback(reason: FallbackReason) -> Self {
        Self::build(
            FALLBACK_METRICS,
            MetricsSource::Fallback(reason),
            Vec::new(),
        )
    }

    fn build(metrics: HealthMetrics, source: MetricsSource, keypoints: Vec<Keypoint>) -> Self {
        let score = calculate_health_score(&metrics);
        let status = HealthStatus::from_score(score);
        Self {
            score,
            status,
            metrics,
            keypoints,
            source,
        }
    }

    /// Whether the metrics were measured from the image.
    #[must_use]
    pub const fn is_measured(&self) -> bool {
        matches!(self.source, MetricsSource::Measured)
    }
}
