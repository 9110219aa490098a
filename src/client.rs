// Cattle Health Assessment 🐄 AGPL-3.0 License

//! Client for the hosted keypoint-detection API.
//!
//! Uploads an image as multipart form data and parses the returned
//! predictions into [`Keypoint`] records. Only the first prediction is used.

use std::path::Path;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use serde::Deserialize;

use crate::error::{HealthError, Result};
use crate::keypoint::Keypoint;

/// Default detection endpoint (hosted keypoint model).
pub const DEFAULT_ENDPOINT: &str = "https://serverless.roboflow.com/atc-jqhue/2";

/// Default API key for the hosted model.
pub const DEFAULT_API_KEY: &str = "uzkuNWY0Fg8F6oMZzaX9";

/// Connection timeout in seconds.
const CONNECT_TIMEOUT: u64 = 30;

/// Read timeout in seconds.
const READ_TIMEOUT: u64 = 120;

/// Detection API connection settings.
#[derive(Debug, Clone)]
pub struct DetectionConfig {
    /// Model inference endpoint URL.
    pub endpoint: String,
    /// API key sent as a query parameter.
    pub api_key: String,
}

impl Default for DetectionConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            api_key: DEFAULT_API_KEY.to_string(),
        }
    }
}

/// Blocking client for the keypoint-detection API.
pub struct DetectionClient {
    agent: ureq::Agent,
    config: DetectionConfig,
}

#[derive(Debug, Deserialize)]
struct DetectResponse {
    #[serde(default)]
    predictions: Vec<Prediction>,
}

#[derive(Debug, Deserialize)]
struct Prediction {
    /// Keypoint models report `keypoints`; some model versions use `points`.
    #[serde(default, alias = "points")]
    keypoints: Vec<RawKeypoint>,
}

#[derive(Debug, Deserialize)]
struct RawKeypoint {
    /// The landmark label arrives as `class`; older payloads use `name`.
    #[serde(default, alias = "name")]
    class: String,
    x: f64,
    y: f64,
    #[serde(default)]
    confidence: f64,
}

impl DetectionClient {
    /// Create a client with connect/read timeouts applied.
    #[must_use]
    pub fn new(config: DetectionConfig) -> Self {
        let agent_config = ureq::Agent::config_builder()
            .timeout_connect(Some(Duration::from_secs(CONNECT_TIMEOUT)))
            .timeout_recv_body(Some(Duration::from_secs(READ_TIMEOUT)))
            .build();
        Self {
            agent: ureq::Agent::new_with_config(agent_config),
            config,
        }
    }

    /// Upload the image at `image_path` and return the detected keypoints.
    ///
    /// # Errors
    ///
    /// `Io` when the file cannot be read, `RequestFailed` on transport
    /// errors or a non-2xx status, `NoDetection` when the predictions list
    /// is empty, `ResponseError` on a malformed payload.
    pub fn detect<P: AsRef<Path>>(&self, image_path: P) -> Result<Vec<Keypoint>> {
        let path = image_path.as_ref();
        let bytes = std::fs::read(path)?;
        let filename = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("image.jpg");
        self.detect_bytes(&bytes, filename)
    }

    /// Upload raw image bytes under the given filename.
    ///
    /// # Errors
    ///
    /// Same failure modes as [`DetectionClient::detect`], minus file IO.
    pub fn detect_bytes(&self, image: &[u8], filename: &str) -> Result<Vec<Keypoint>> {
        let url = format!("{}?api_key={}", self.config.endpoint, self.config.api_key);
        let (content_type, body) = multipart_body(image, filename);

        let mut response = self
            .agent
            .post(&url)
            .header("Content-Type", content_type.as_str())
            .send(&body[..])
            .map_err(|e| {
                let msg = match &e {
                    ureq::Error::StatusCode(code) => {
                        format!("detection API returned HTTP {code}")
                    }
                    ureq::Error::Timeout(_) => "detection API request timed out".to_string(),
                    ureq::Error::Io(io_err) => {
                        format!("network error reaching detection API: {io_err}")
                    }
                    _ => format!("{e}"),
                };
                HealthError::RequestFailed(msg)
            })?;

        let parsed: DetectResponse = response
            .body_mut()
            .read_json()
            .map_err(|e| HealthError::ResponseError(format!("unexpected payload: {e}")))?;

        let first = parsed
            .predictions
            .into_iter()
            .next()
            .ok_or(HealthError::NoDetection)?;

        Ok(first
            .keypoints
            .into_iter()
            .map(|kp| Keypoint::new(kp.class, kp.x, kp.y, kp.confidence))
            .collect())
    }
}

/// Build a single-field `multipart/form-data` body carrying the image bytes
/// under the form name `file`.
fn multipart_body(image: &[u8], filename: &str) -> (String, Vec<u8>) {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos())
        .unwrap_or(0);
    let boundary = format!("----cattle-health-{nanos:032x}");

    let mut body = Vec::with_capacity(image.len() + 256);
    body.extend_from_slice(format!("--{boundary}\r\n").as_bytes());
    body.extend_from_slice(
        format!("Content-Disposition: form-data; name=\"file\"; filename=\"{filename}\"\r\n")
            .as_bytes(),
    );
    body.extend_from_slice(b"Content-Type: application/octet-stream\r\n\r\n");
    body.extend_from_slice(image);
    body.extend_from_slice(format!("\r\n--{boundary}--\r\n").as_bytes());

    (format!("multipart/form-data; boundary={boundary}"), body)
}
