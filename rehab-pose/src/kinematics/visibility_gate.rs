//! Visibility Gate - per-limb confidence thresholding
//!
//! A limb is trusted only when every landmark it depends on exceeds the
//! threshold. Angles from partially trusted limbs are never computed.

use super::state::{Joint, Side};
use crate::config::DEFAULT_VISIBILITY_THRESHOLD;
use crate::landmarks::PoseFrame;

/// Visibility gate shared by all joints of a session
#[derive(Debug, Clone, Copy)]
pub struct VisibilityGate {
    /// Minimum visibility every landmark must exceed
    threshold: f64,
}

impl VisibilityGate {
    pub fn new() -> Self {
        Self {
            threshold: DEFAULT_VISIBILITY_THRESHOLD,
        }
    }

    pub fn with_threshold(threshold: f64) -> Self {
        Self { threshold }
    }

    /// Set confidence threshold
    pub fn set_threshold(&mut self, threshold: f64) {
        self.threshold = threshold;
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// True if all three landmarks of the joint's limb are visible and
    /// have finite coordinates.
    ///
    /// `Side::Both` requires both limbs.
    pub fn is_visible(&self, frame: &PoseFrame, joint: Joint, side: Side) -> bool {
        match side {
            Side::Both => {
                self.is_visible(frame, joint, Side::Left)
                    && self.is_visible(frame, joint, Side::Right)
            }
            _ => {
                let (a, b, c) = joint.landmarks(side);
                [a, b, c]
                    .iter()
                    .all(|&index| {
                        let landmark = &frame[index];
                        landmark.is_finite() && landmark.visibility > self.threshold
                    })
            }
        }
    }
}

impl Default for VisibilityGate {
    fn default() -> Self {
        Self::new()
    }
}
