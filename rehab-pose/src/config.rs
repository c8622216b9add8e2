//! Tunable tracking parameters
//!
//! Defaults were tuned empirically against ~30 fps MediaPipe output. They
//! stay configurable so they can be re-validated against real sensor traces.

use serde::{Deserialize, Serialize};

use crate::error::{Result, TrackerError};

/// Landmark EMA factor (lower = smoother, slower to respond)
pub const DEFAULT_LANDMARK_ALPHA: f64 = 0.3;

/// Angle EMA factor applied after landmark smoothing
pub const DEFAULT_ANGLE_ALPHA: f64 = 0.3;

/// Minimum per-landmark visibility for a limb to be trusted.
/// Stricter than the usual 0.3 "detected" cut because rep counting is
/// sensitive to noise near thresholds.
pub const DEFAULT_VISIBILITY_THRESHOLD: f64 = 0.65;

/// Consecutive no-pose frames before angles and history are dropped
pub const DEFAULT_NO_DETECTION_GRACE_FRAMES: u32 = 10;

/// Shortest bone segment accepted by the angle calculation
pub const DEFAULT_MIN_SEGMENT_LENGTH: f64 = 1e-6;

/// Per-session tracking parameters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrackerConfig {
    /// EMA factor for raw landmark positions
    pub landmark_alpha: f64,
    /// EMA factor for derived joint angles
    pub angle_alpha: f64,
    /// Visibility every landmark of a limb must exceed
    pub visibility_threshold: f64,
    /// No-pose frames tolerated before the reset
    pub no_detection_grace_frames: u32,
    /// Degenerate-geometry guard for angle computation
    pub min_segment_length: f64,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            landmark_alpha: DEFAULT_LANDMARK_ALPHA,
            angle_alpha: DEFAULT_ANGLE_ALPHA,
            visibility_threshold: DEFAULT_VISIBILITY_THRESHOLD,
            no_detection_grace_frames: DEFAULT_NO_DETECTION_GRACE_FRAMES,
            min_segment_length: DEFAULT_MIN_SEGMENT_LENGTH,
        }
    }
}

impl TrackerConfig {
    /// Parse a JSON document; missing fields take their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`TrackerError::ConfigParse`] for malformed JSON and
    /// [`TrackerError::InvalidConfig`] for out-of-range values.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check every parameter against its valid range.
    ///
    /// # Errors
    ///
    /// Returns [`TrackerError::InvalidConfig`] naming the first bad field.
    pub fn validate(&self) -> Result<()> {
        if !valid_alpha(self.landmark_alpha) {
            return Err(TrackerError::InvalidConfig(format!(
                "landmark_alpha must be in (0, 1], got {}",
                self.landmark_alpha
            )));
        }
        if !valid_alpha(self.angle_alpha) {
            return Err(TrackerError::InvalidConfig(format!(
                "angle_alpha must be in (0, 1], got {}",
                self.angle_alpha
            )));
        }
        if !(0.0..=1.0).contains(&self.visibility_threshold) {
            return Err(TrackerError::InvalidConfig(format!(
                "visibility_threshold must be in [0, 1], got {}",
                self.visibility_threshold
            )));
        }
        if self.no_detection_grace_frames == 0 {
            return Err(TrackerError::InvalidConfig(
                "no_detection_grace_frames must be at least 1".to_string(),
            ));
        }
        if self.min_segment_length.is_nan() || self.min_segment_length <= 0.0 {
            return Err(TrackerError::InvalidConfig(format!(
                "min_segment_length must be positive, got {}",
                self.min_segment_length
            )));
        }
        Ok(())
    }
}

fn valid_alpha(alpha: f64) -> bool {
    alpha > 0.0 && alpha <= 1.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = TrackerConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.no_detection_grace_frames, 10);
        assert_eq!(config.visibility_threshold, 0.65);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config = TrackerConfig::from_json(r#"{ "landmark_alpha": 0.5 }"#).unwrap();
        assert_eq!(config.landmark_alpha, 0.5);
        assert_eq!(config.angle_alpha, DEFAULT_ANGLE_ALPHA);
    }

    #[test]
    fn test_rejects_zero_alpha() {
        let err = TrackerConfig::from_json(r#"{ "angle_alpha": 0.0 }"#).unwrap_err();
        assert!(matches!(err, TrackerError::InvalidConfig(_)));
    }

    #[test]
    fn test_rejects_zero_grace() {
        let err = TrackerConfig::from_json(r#"{ "no_detection_grace_frames": 0 }"#).unwrap_err();
        assert!(matches!(err, TrackerError::InvalidConfig(_)));
    }

    #[test]
    fn test_malformed_json() {
        let err = TrackerConfig::from_json("{ not json").unwrap_err();
        assert!(matches!(err, TrackerError::ConfigParse(_)));
    }
}
