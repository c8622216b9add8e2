//! Landmark Smoother - exponential moving average over raw positions
//!
//! First smoothing stage. Suppresses camera/model jitter on x, y, z while
//! staying responsive enough for rep counting at ~30 fps. Visibility is
//! passed through untouched: it describes the current detection, not a blend.
//!
//! A landmark with a non-finite coordinate never enters the history. It is
//! emitted with zero visibility so the gate drops it for that frame.

use crate::config::DEFAULT_LANDMARK_ALPHA;
use crate::landmarks::{Landmark, PoseFrame, LANDMARK_COUNT};

/// Per-coordinate EMA: `smoothed = previous * (1 - α) + current * α`
#[derive(Debug, Clone)]
pub struct LandmarkSmoother {
    /// Smoothing factor - lower = smoother, slower to respond
    alpha: f64,

    // State
    previous: Option<PoseFrame>,
}

impl LandmarkSmoother {
    pub fn new(alpha: f64) -> Self {
        Self {
            alpha,
            previous: None,
        }
    }

    /// Smooth one frame
    ///
    /// The first frame (or the first after [`reset`](Self::reset)) is
    /// returned unchanged.
    pub fn smooth(&mut self, raw: &PoseFrame) -> PoseFrame {
        let smoothed = match &self.previous {
            None => {
                let mut landmarks = *raw.landmarks();
                for out in landmarks.iter_mut().filter(|l| !l.is_finite()) {
                    out.visibility = 0.0;
                }
                PoseFrame::new(landmarks)
            }
            Some(previous) => {
                let mut landmarks = [Landmark::default(); LANDMARK_COUNT];
                for (i, out) in landmarks.iter_mut().enumerate() {
                    let prev = &previous[i];
                    let cur = &raw[i];
                    *out = if !cur.is_finite() {
                        Landmark {
                            visibility: 0.0,
                            ..*prev
                        }
                    } else if !prev.is_finite() {
                        *cur
                    } else {
                        Landmark {
                            x: self.blend(prev.x, cur.x),
                            y: self.blend(prev.y, cur.y),
                            z: self.blend(prev.z, cur.z),
                            visibility: cur.visibility,
                        }
                    };
                }
                PoseFrame::new(landmarks)
            }
        };

        self.previous = Some(smoothed.clone());
        smoothed
    }

    fn blend(&self, previous: f64, current: f64) -> f64 {
        previous * (1.0 - self.alpha) + current * self.alpha
    }

    /// Drop history so the next frame passes through unblended
    pub fn reset(&mut self) {
        self.previous = None;
    }

    pub fn has_history(&self) -> bool {
        self.previous.is_some()
    }
}

impl Default for LandmarkSmoother {
    fn default() -> Self {
        Self::new(DEFAULT_LANDMARK_ALPHA)
    }
}
