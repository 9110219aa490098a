// Cattle Health Assessment 🐄 AGPL-3.0 License

//! Keypoint records produced by the detection API, and landmark lookup.

use crate::geometry::Point;

/// A single named landmark detected in an image.
#[derive(Debug, Clone, PartialEq)]
pub struct Keypoint {
    /// Landmark label as reported by the detector.
    pub name: String,
    /// Horizontal pixel coordinate.
    pub x: f64,
    /// Vertical pixel coordinate.
    pub y: f64,
    /// Detection confidence in [0, 1].
    pub confidence: f64,
}

impl Keypoint {
    /// Create a new keypoint.
    pub fn new(name: impl Into<String>, x: f64, y: f64, confidence: f64) -> Self {
        Self {
            name: name.into(),
            x,
            y,
            confidence,
        }
    }

    /// The keypoint position as a [`Point`].
    #[must_use]
    pub const fn point(&self) -> Point {
        Point::new(self.x, self.y)
    }
}

/// The closed set of landmarks required for metric derivation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Landmark {
    /// Highest point of the back, at the base of the neck.
    Withers,
    /// Left hip bone.
    HipLeft,
    /// Right hip bone.
    HipRight,
}

impl Landmark {
    /// All landmarks that must be present for a measured assessment.
    pub const REQUIRED: [Self; 3] = [Self::Withers, Self::HipLeft, Self::HipRight];

    /// Match key for this landmark.
    ///
    /// A detector label matches when it *contains* this key,
    /// case-insensitively. Containment (rather than equality) accepts label
    /// variants such as `"Withers"`, `"cattle_withers"` or `"HipLeft_kp"`.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Withers => "withers",
            Self::HipLeft => "hipleft",
            Self::HipRight => "hipright",
        }
    }
}

/// Find the first keypoint whose name contains `target`, case-insensitively.
///
/// Ties are broken by sequence order: the first match wins, with no
/// closest-match or confidence-based disambiguation. Returns `None` when no
/// name matches.
#[must_use]
pub fn find_by_name<'a>(keypoints: &'a [Keypoint], target: &str) -> Option<&'a Keypoint> {
    let needle = target.to_lowercase();
    keypoints
        .iter()
        .find(|kp| kp.name.to_lowercase().contains(&needle))
}

/// Find the keypoint for a required landmark.
#[must_use]
pub fn find_landmark(keypoints: &[Keypoint], landmark: Landmark) -> Option<&Keypoint> {
    find_by_name(keypoints, landmark.key())
}
