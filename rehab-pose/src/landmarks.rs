//! Pose landmark data model
//!
//! Frames arrive from the upstream pose model (MediaPipe Pose, 33 landmarks)
//! and are never mutated by the core; smoothing produces new frames.

use std::ops::Index;

use serde::{Deserialize, Serialize};

use crate::error::{Result, TrackerError};

// ============================================================================
// LANDMARK INDICES (MediaPipe Pose - 33 total)
// ============================================================================

pub const LANDMARK_COUNT: usize = 33;

/// Values per landmark in a flat buffer: x, y, z, visibility
pub const VALUES_PER_LANDMARK: usize = 4;

pub const NOSE: usize = 0;
pub const LEFT_EYE_INNER: usize = 1;
pub const LEFT_EYE: usize = 2;
pub const LEFT_EYE_OUTER: usize = 3;
pub const RIGHT_EYE_INNER: usize = 4;
pub const RIGHT_EYE: usize = 5;
pub const RIGHT_EYE_OUTER: usize = 6;
pub const LEFT_EAR: usize = 7;
pub const RIGHT_EAR: usize = 8;
pub const MOUTH_LEFT: usize = 9;
pub const MOUTH_RIGHT: usize = 10;
pub const LEFT_SHOULDER: usize = 11;
pub const RIGHT_SHOULDER: usize = 12;
pub const LEFT_ELBOW: usize = 13;
pub const RIGHT_ELBOW: usize = 14;
pub const LEFT_WRIST: usize = 15;
pub const RIGHT_WRIST: usize = 16;
pub const LEFT_PINKY: usize = 17;
pub const RIGHT_PINKY: usize = 18;
pub const LEFT_INDEX: usize = 19;
pub const RIGHT_INDEX: usize = 20;
pub const LEFT_THUMB: usize = 21;
pub const RIGHT_THUMB: usize = 22;
pub const LEFT_HIP: usize = 23;
pub const RIGHT_HIP: usize = 24;
pub const LEFT_KNEE: usize = 25;
pub const RIGHT_KNEE: usize = 26;
pub const LEFT_ANKLE: usize = 27;
pub const RIGHT_ANKLE: usize = 28;
pub const LEFT_HEEL: usize = 29;
pub const RIGHT_HEEL: usize = 30;
pub const LEFT_FOOT_INDEX: usize = 31;
pub const RIGHT_FOOT_INDEX: usize = 32;

// ============================================================================
// LANDMARK DATA STRUCTURES
// ============================================================================

/// A single tracked body point
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Landmark {
    pub x: f64, // 0-1 normalized
    pub y: f64, // 0-1 normalized
    pub z: f64, // Relative depth
    /// Detection confidence in [0, 1]
    pub visibility: f64,
}

impl Landmark {
    pub fn new(x: f64, y: f64, z: f64, visibility: f64) -> Self {
        Self { x, y, z, visibility }
    }

    /// True if x, y and z are all finite numbers
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }
}

/// One detected pose: 33 landmarks indexed by anatomical role
#[derive(Debug, Clone, PartialEq)]
pub struct PoseFrame {
    landmarks: [Landmark; LANDMARK_COUNT],
}

impl PoseFrame {
    pub fn new(landmarks: [Landmark; LANDMARK_COUNT]) -> Self {
        Self { landmarks }
    }

    /// Build a frame from a flat buffer of 132 values
    /// (33 landmarks × x, y, z, visibility), as handed over by JavaScript.
    ///
    /// # Errors
    ///
    /// Returns [`TrackerError::InvalidFrameLength`] if the buffer size is wrong.
    pub fn from_flat(data: &[f64]) -> Result<Self> {
        let expected = LANDMARK_COUNT * VALUES_PER_LANDMARK;
        if data.len() != expected {
            return Err(TrackerError::InvalidFrameLength {
                expected,
                actual: data.len(),
            });
        }

        let mut landmarks = [Landmark::default(); LANDMARK_COUNT];
        for (landmark, chunk) in landmarks
            .iter_mut()
            .zip(data.chunks_exact(VALUES_PER_LANDMARK))
        {
            *landmark = Landmark::new(chunk[0], chunk[1], chunk[2], chunk[3]);
        }
        Ok(Self { landmarks })
    }

    pub fn landmarks(&self) -> &[Landmark; LANDMARK_COUNT] {
        &self.landmarks
    }

    pub fn iter(&self) -> impl Iterator<Item = &Landmark> {
        self.landmarks.iter()
    }
}

impl Index<usize> for PoseFrame {
    type Output = Landmark;

    fn index(&self, index: usize) -> &Self::Output {
        &self.landmarks[index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_flat() {
        let mut data = vec![0.0; LANDMARK_COUNT * VALUES_PER_LANDMARK];
        let base = LEFT_KNEE * VALUES_PER_LANDMARK;
        data[base..base + 4].copy_from_slice(&[0.4, 0.6, -0.1, 0.9]);

        let frame = PoseFrame::from_flat(&data).unwrap();
        assert_eq!(frame[LEFT_KNEE], Landmark::new(0.4, 0.6, -0.1, 0.9));
        assert_eq!(frame[RIGHT_KNEE], Landmark::default());
    }

    #[test]
    fn test_from_flat_rejects_xyz_only_buffer() {
        // 99 values is the x/y/z-only layout without visibility
        let data = vec![0.0; 99];
        match PoseFrame::from_flat(&data) {
            Err(TrackerError::InvalidFrameLength { expected, actual }) => {
                assert_eq!(expected, 132);
                assert_eq!(actual, 99);
            }
            other => panic!("expected length error, got {other:?}"),
        }
    }
}
