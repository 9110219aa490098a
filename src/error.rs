// Cattle Health Assessment 🐄 AGPL-3.0 License

//! Error types for the assessment library.

use std::fmt;

/// Result type alias for assessment operations.
pub type Result<T> = std::result::Result<T, HealthError>;

/// Main error type for the assessment library.
#[derive(Debug)]
pub enum HealthError {
    /// The keypoint detection API request failed (transport or non-2xx).
    RequestFailed(String),
    /// The detection API returned an empty predictions list.
    NoDetection,
    /// The detection API response could not be parsed.
    ResponseError(String),
    /// Error reading or decoding an image.
    ImageError(String),
    /// Wrapped `std::io::Error`.
    Io(std::io::Error),
}

impl fmt::Display for HealthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RequestFailed(msg) => write!(f, "Detection request failed: {msg}"),
            Self::NoDetection => write!(f, "No cattle detected in image"),
            Self::ResponseError(msg) => write!(f, "Detection response error: {msg}"),
            Self::ImageError(msg) => write!(f, "Image error: {msg}"),
            Self::Io(err) => write!(f, "IO error: {err}"),
        }
    }
}

impl std::error::Error for HealthError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for HealthError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<image::ImageError> for HealthError {
    fn from(err: image::ImageError) -> Self {
        Self::ImageError(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = HealthError::RequestFailed("HTTP 503".to_string());
        assert_eq!(err.to_string(), "Detection request failed: HTTP 503");

        let err = HealthError::NoDetection;
        assert_eq!(err.to_string(), "No cattle detected in image");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: HealthError = io_err.into();
        assert!(matches!(err, HealthError::Io(_)));
    }
}
