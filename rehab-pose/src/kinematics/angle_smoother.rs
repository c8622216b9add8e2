//! Angle Smoother - second-stage EMA over derived joint angles
//!
//! Runs after landmark smoothing to damp angle-computation sensitivity near
//! extreme joint configurations. A sentinel raw angle passes straight
//! through: the output never blends toward zero.

use super::state::{is_measurable, JointAngleSet, SENTINEL_ANGLE};
use crate::config::{DEFAULT_ANGLE_ALPHA, DEFAULT_NO_DETECTION_GRACE_FRAMES};

/// EMA over the six joint angles
#[derive(Debug, Clone)]
pub struct AngleSmoother {
    alpha: f64,
    previous: JointAngleSet,
}

impl AngleSmoother {
    pub fn new(alpha: f64) -> Self {
        Self {
            alpha,
            previous: JointAngleSet::undetermined(),
        }
    }

    /// Smooth one set of raw angles
    ///
    /// Per joint:
    /// - raw is sentinel → sentinel
    /// - no measurable previous value → raw
    /// - otherwise → `previous * (1 - α) + raw * α`
    pub fn update(&mut self, raw: &JointAngleSet) -> JointAngleSet {
        let prev = self.previous.values();
        let cur = raw.values();
        let mut out = [SENTINEL_ANGLE; 6];

        for (i, value) in out.iter_mut().enumerate() {
            *value = if !is_measurable(cur[i]) {
                SENTINEL_ANGLE
            } else if !is_measurable(prev[i]) {
                cur[i]
            } else {
                prev[i] * (1.0 - self.alpha) + cur[i] * self.alpha
            };
        }

        let smoothed = JointAngleSet {
            left_knee: out[0],
            right_knee: out[1],
            left_ankle: out[2],
            right_ankle: out[3],
            left_hip: out[4],
            right_hip: out[5],
        };
        self.previous = smoothed;
        smoothed
    }

    /// Last smoothed output
    pub fn current(&self) -> &JointAngleSet {
        &self.previous
    }

    /// Force every angle to the sentinel
    pub fn reset(&mut self) {
        self.previous = JointAngleSet::undetermined();
    }
}

impl Default for AngleSmoother {
    fn default() -> Self {
        Self::new(DEFAULT_ANGLE_ALPHA)
    }
}

/// Outcome of a frame with no detected pose
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetectionGap {
    /// Still inside the grace period; keep the last angles
    Holding,
    /// Grace period over; angles and smoothing history must be dropped
    Expired,
}

/// Consecutive frames without a detected pose
#[derive(Debug, Clone, Copy)]
pub struct NoDetectionCounter {
    count: u32,
    grace_frames: u32,
}

impl NoDetectionCounter {
    pub fn new(grace_frames: u32) -> Self {
        Self {
            count: 0,
            grace_frames,
        }
    }

    /// Record a frame with zero poses
    pub fn record_miss(&mut self) -> DetectionGap {
        self.count = self.count.saturating_add(1);
        if self.count >= self.grace_frames {
            DetectionGap::Expired
        } else {
            DetectionGap::Holding
        }
    }

    /// Any valid detection clears the count
    pub fn record_detection(&mut self) {
        self.count = 0;
    }

    pub fn count(&self) -> u32 {
        self.count
    }
}

impl Default for NoDetectionCounter {
    fn default() -> Self {
        Self::new(DEFAULT_NO_DETECTION_GRACE_FRAMES)
    }
}
