// Cattle Health Assessment 🐄 AGPL-3.0 License

#![allow(clippy::multiple_crate_versions)]

//! # Cattle Health Assessment
//!
//! Assess the physical condition of cattle from a photograph. The image is
//! uploaded to a hosted keypoint-detection model; the returned landmarks are
//! turned into geometric body metrics (body-length ratio, hip width, topline
//! angle), which a fixed weighted formula maps to a 0–10 health score with a
//! qualitative status tier.
//!
//! Detection failures never abort an assessment: transport errors, empty
//! detections and missing landmarks all degrade to a fixed placeholder
//! metric set, so a result view is always produced. The cause stays
//! observable on [`Assessment::source`].
//!
//! ## Quick Start (Library)
//!
//! ```no_run
//! use cattle_health::{Assessment, DetectionClient, DetectionConfig};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = DetectionClient::new(DetectionConfig::default());
//!     let assessment = Assessment::from_detection(client.detect("cow.jpg"));
//!
//!     println!("{:.1}/10 — {}", assessment.score, assessment.status.label());
//!     Ok(())
//! }
//! ```
//!
//! ## CLI Usage
//!
//! ```bash
//! # Assess a photo
//! cattle-health analyze --source cow.jpg
//!
//! # Also write the plain-text report and an annotated image copy
//! cattle-health analyze -s cow.jpg --report --save -o reports/
//! ```
//!
//! ## Module Overview
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`geometry`] | Distance, angle and midpoint math for landmarks |
//! | [`keypoint`] | [`Keypoint`] records and landmark lookup |
//! | [`metrics`] | [`HealthMetrics`] derivation with degraded-mode fallback |
//! | [`score`] | Weighted scoring and [`HealthStatus`] tiers |
//! | [`results`] | [`Assessment`] container and the pure pipeline |
//! | [`client`] | [`DetectionClient`] for the hosted keypoint API |
//! | [`render`] | Terminal result view with progress bars |
//! | [`report`] | Plain-text report export |
//! | [`annotate`] | Keypoint markers on an image copy (feature `annotate`) |
//! | [`error`] | Error types ([`HealthError`], [`Result`]) |

// Modules
#[cfg(feature = "annotate")]
pub mod annotate;
pub mod cli;
pub mod client;
pub mod error;
pub mod geometry;
pub mod keypoint;
pub mod metrics;
pub mod render;
pub mod report;
pub mod results;
pub mod score;

// Re-export main types for convenience
pub use client::{DetectionClient, DetectionConfig};
pub use error::{HealthError, Result};
pub use geometry::Point;
pub use keypoint::{Keypoint, Landmark};
pub use metrics::{
    derive_metrics, FallbackReason, HealthMetrics, MetricsSource, FALLBACK_METRICS,
};
pub use results::Assessment;
pub use score::{calculate_health_score, HealthStatus};

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name.
pub const NAME: &str = env!("CARGO_PKG_NAME");
