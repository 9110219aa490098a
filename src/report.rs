// Cattle Health Assessment 🐄 AGPL-3.0 License

//! Plain-text report assembly and export.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::Local;

use crate::error::Result;
use crate::render::{format_confidence, format_hip_width, format_ratio, format_topline};
use crate::results::Assessment;

/// Assemble the report text for an assessment, dated `date`.
///
/// Metric lines use the formatted display values, so the report can never
/// disagree with the rendered result view.
#[must_use]
pub fn render_report(assessment: &Assessment, date: &str) -> String {
    let metrics = &assessment.metrics;
    format!(
        "CATTLE HEALTH ASSESSMENT REPORT\n\
         Generated: {date}\n\
         \n\
         OVERALL HEALTH SCORE: {score:.1}/10\n\
         STATUS: {status}\n\
         \n\
         DETAILED METRICS:\n\
         - Body Length Ratio: {ratio}\n\
         - Hip Width: {hip} pixels\n\
         - Topline Angle: {topline}\n\
         - Detection Confidence: {confidence}\n\
         \n\
         RECOMMENDATIONS:\n\
         {recommendation}\n\
         \n\
         Generated by AI-Powered Cattle Health Assessment System\n",
        score = assessment.score,
        status = assessment.status.label(),
        ratio = format_ratio(metrics),
        hip = format_hip_width(metrics),
        topline = format_topline(metrics),
        confidence = format_confidence(metrics),
        recommendation = assessment.status.recommendation(),
    )
}

/// Report filename for the given ISO date, e.g.
/// `cattle_health_report_2025-07-14.txt`.
#[must_use]
pub fn report_filename(iso_date: &str) -> String {
    format!("cattle_health_report_{iso_date}.txt")
}

/// Write the report for `assessment` into `dir`, dated today.
///
/// # Errors
///
/// Returns an `Io` error when the file cannot be written.
pub fn write_report(assessment: &Assessment, dir: &Path) -> Result<PathBuf> {
    let today = Local::now();
    let iso_date = today.format("%Y-%m-%d").to_string();
    let text = render_report(assessment, &iso_date);

    let path = dir.join(report_filename(&iso_date));
    fs::write(&path, text)?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::FallbackReason;

    #[test]
    fn test_report_filename() {
        assert_eq!(
            report_filename("2025-07-14"),
            "cattle_health_report_2025-07-14.txt"
        );
    }

    #[test]
    fn test_render_report_contents() {
        let assessment = Assessment::fallback(FallbackReason::NoDetection);
        let text = render_report(&assessment, "2025-07-14");

        assert!(text.starts_with("CATTLE HEALTH ASSESSMENT REPORT\n"));
        assert!(text.contains("Generated: 2025-07-14"));
        assert!(text.contains("OVERALL HEALTH SCORE: 6.8/10"));
        assert!(text.contains("STATUS: Fair Health"));
        assert!(text.contains("- Body Length Ratio: 2.41"));
        assert!(text.contains("- Hip Width: 156 pixels"));
        assert!(text.contains("- Topline Angle: 4.2°"));
        assert!(text.contains("- Detection Confidence: 94%"));
        assert!(text.contains("Consider veterinary consultation."));
    }

    #[test]
    fn test_write_report_round_trip() {
        let dir = std::env::temp_dir().join("cattle_health_report_test");
        fs::create_dir_all(&dir).unwrap();

        let assessment = Assessment::fallback(FallbackReason::RequestFailed);
        let path = write_report(&assessment, &dir).unwrap();
        let text = fs::read_to_string(&path).unwrap();
        assert!(text.contains("OVERALL HEALTH SCORE: 6.8/10"));

        let _ = fs::remove_file(path);
    }
}
