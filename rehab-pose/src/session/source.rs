//! Upstream pose source seam
//!
//! The pose-estimation model is an external collaborator. It yields at most
//! one frame per video frame, each with zero or one detected pose.

use std::collections::VecDeque;
use std::sync::mpsc::Receiver;

use crate::landmarks::PoseFrame;

/// One video frame's worth of pose output
#[derive(Debug, Clone, PartialEq)]
pub struct PoseSample {
    /// Host frame timestamp in milliseconds
    pub timestamp_ms: f64,
    /// `None` when the model found no pose in this frame
    pub pose: Option<PoseFrame>,
}

impl PoseSample {
    pub fn detected(timestamp_ms: f64, pose: PoseFrame) -> Self {
        Self {
            timestamp_ms,
            pose: Some(pose),
        }
    }

    pub fn missing(timestamp_ms: f64) -> Self {
        Self {
            timestamp_ms,
            pose: None,
        }
    }
}

/// Anything that can hand over the next available frame without blocking
pub trait PoseSource {
    /// Next frame, or `None` if the model has not produced one yet
    fn poll_frame(&mut self) -> Option<PoseSample>;
}

/// Frames pushed from another thread (e.g. an inference worker)
impl PoseSource for Receiver<PoseSample> {
    fn poll_frame(&mut self) -> Option<PoseSample> {
        self.try_recv().ok()
    }
}

/// Pre-recorded frames, replayed in order
impl PoseSource for VecDeque<PoseSample> {
    fn poll_frame(&mut self) -> Option<PoseSample> {
        self.pop_front()
    }
}
