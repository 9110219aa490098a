// Cattle Health Assessment 🐄 AGPL-3.0 License

//! Terminal presentation of an assessment: status badge, metric lines,
//! progress bars and keypoint markers.

use colored::Colorize;

use crate::metrics::HealthMetrics;
use crate::results::Assessment;
use crate::score::{normalize, HealthStatus};

/// Body-length-ratio range used for the progress-bar display.
///
/// Intentionally wider than [`crate::score::LENGTH_SCORE_RANGE`]; the two
/// ranges are kept distinct to match the original UI behavior.
pub const LENGTH_DISPLAY_RANGE: (f64, f64) = (1.8, 3.5);

/// Hip width in pixels that fills the hip-width bar.
pub const HIP_WIDTH_FULL_PX: f64 = 200.0;

/// Progress bar width in glyphs.
const BAR_WIDTH: usize = 24;

/// Fill percentage for the body-length bar.
#[must_use]
pub fn length_percent(body_length_ratio: f64) -> f64 {
    normalize(
        body_length_ratio,
        LENGTH_DISPLAY_RANGE.0,
        LENGTH_DISPLAY_RANGE.1,
    ) * 100.0
}

/// Fill percentage for the hip-width bar, capped at 100.
#[must_use]
pub fn hip_width_percent(hip_width_px: f64) -> f64 {
    (hip_width_px / HIP_WIDTH_FULL_PX * 100.0).min(100.0)
}

/// Fill percentage for the topline bar, floored at 20.
#[must_use]
pub fn topline_percent(topline_angle: f64) -> f64 {
    (100.0 - topline_angle * 3.0).max(20.0)
}

/// Fill percentage for the confidence bar.
#[must_use]
pub fn confidence_percent(confidence: f64) -> f64 {
    confidence * 100.0
}

/// Generate a progress bar string.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn generate_bar(percent: f64, width: usize) -> String {
    let progress = (percent / 100.0).clamp(0.0, 1.0);
    let filled = (progress * width as f64) as usize;

    let mut bar = "━".repeat(filled);
    bar.push_str(&"─".repeat(width - filled));
    bar
}

/// Displayed body-length ratio, two decimals.
#[must_use]
pub fn format_ratio(metrics: &HealthMetrics) -> String {
    format!("{:.2}", metrics.body_length_ratio)
}

/// Displayed hip width, rounded to whole pixels.
#[must_use]
pub fn format_hip_width(metrics: &HealthMetrics) -> String {
    format!("{}", metrics.hip_width_px.round())
}

/// Displayed topline angle, one decimal with degree sign.
#[must_use]
pub fn format_topline(metrics: &HealthMetrics) -> String {
    format!("{:.1}°", metrics.topline_angle)
}

/// Displayed confidence as a whole percentage.
#[must_use]
pub fn format_confidence(metrics: &HealthMetrics) -> String {
    format!("{}%", (metrics.confidence * 100.0).round())
}

/// Status badge colored per tier.
#[must_use]
pub fn status_badge(status: HealthStatus) -> String {
    match status {
        HealthStatus::Excellent => status.label().green().bold().to_string(),
        HealthStatus::Good => status.label().cyan().bold().to_string(),
        HealthStatus::Fair => status.label().yellow().bold().to_string(),
    }
}

/// Print the full result view for an assessment.
///
/// Renders identically for measured and fallback assessments.
pub fn print_assessment(assessment: &Assessment) {
    let metrics = &assessment.metrics;

    println!();
    println!(
        "Overall Health Score: {}",
        format!("{:.1}/10", assessment.score).bold()
    );
    println!("Status: {}", status_badge(assessment.status));
    println!();

    print_metric(
        "Body Length Ratio",
        &format_ratio(metrics),
        length_percent(metrics.body_length_ratio),
    );
    print_metric(
        "Hip Width",
        &format!("{} px", format_hip_width(metrics)),
        hip_width_percent(metrics.hip_width_px),
    );
    print_metric(
        "Topline Angle",
        &format_topline(metrics),
        topline_percent(metrics.topline_angle),
    );
    print_metric(
        "Detection Confidence",
        &format_confidence(metrics),
        confidence_percent(metrics.confidence),
    );

    println!();
    println!("Frame:      {}", assessment.status.frame_assessment());
    println!("Structure:  {}", assessment.status.structural_assessment());
    println!("Advice:     {}", assessment.status.recommendation());

    if !assessment.keypoints.is_empty() {
        println!();
        println!("Keypoints:");
        for kp in &assessment.keypoints {
            println!(
                "  • {} ({:.0}, {:.0}) conf {:.2}",
                kp.name, kp.x, kp.y, kp.confidence
            );
        }
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn print_metric(label: &str, value: &str, percent: f64) {
    println!(
        "{label:<21} {value:>8}  {} {:>3}%",
        generate_bar(percent, BAR_WIDTH),
        percent.round() as u32
    );
}
