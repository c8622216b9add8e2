//! Tracking session - the per-frame pipeline
//!
//! raw landmarks → landmark EMA → gated joint angles → angle EMA →
//! {form validation, rep counting} → [`FrameOutput`]
//!
//! A session owns all of its history exclusively. Frames must arrive in
//! timestamp order; anything at or before the last processed timestamp is
//! dropped.

use serde::{Deserialize, Serialize};
use tracing::{debug, info, trace, warn};

use super::source::PoseSample;
use crate::config::TrackerConfig;
use crate::error::Result;
use crate::exercise::{validate, ExerciseAngleConfig, FormValidation, RepCompleted, RepState};
use crate::kinematics::{
    compute_joint_angles, AngleSmoother, DetectionGap, JointAngleSet, LandmarkSmoother,
    NoDetectionCounter, VisibilityGate,
};
use crate::landmarks::PoseFrame;

pub const NO_POSE_FEEDBACK: &str = "No pose detected - check your positioning";

/// Published once per processed frame
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FrameOutput {
    pub timestamp_ms: f64,
    pub pose_detected: bool,
    /// Smoothed angles, sentinel-aware
    pub angles: JointAngleSet,
    pub feedback: String,
    pub rep_count: u32,
    /// Present when the session tracks an exercise and a pose was seen
    pub validation: Option<FormValidation>,
    /// Present on the frame a repetition completes
    pub rep_completed: Option<RepCompleted>,
}

/// Final result handed to the completion callback
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionSummary {
    pub rep_count: u32,
    pub duration_seconds: u64,
}

/// State of one tracking session
pub struct TrackingSession {
    exercise: Option<&'static ExerciseAngleConfig>,
    config: TrackerConfig,

    // Pipeline stages
    gate: VisibilityGate,
    landmark_smoother: LandmarkSmoother,
    angle_smoother: AngleSmoother,
    no_detection: NoDetectionCounter,
    reps: RepState,

    // Lifecycle
    started_at_ms: f64,
    last_timestamp_ms: Option<f64>,
    frames_processed: u64,
}

impl TrackingSession {
    /// Start a session; `exercise = None` tracks angles only.
    ///
    /// # Errors
    ///
    /// Returns [`crate::TrackerError::InvalidConfig`] if `config` fails validation.
    pub fn start(
        exercise: Option<&'static ExerciseAngleConfig>,
        config: TrackerConfig,
        started_at_ms: f64,
    ) -> Result<Self> {
        config.validate()?;
        info!(
            exercise = exercise.map_or("none", |e| e.id),
            "Tracking session started"
        );

        Ok(Self {
            exercise,
            config,
            gate: VisibilityGate::with_threshold(config.visibility_threshold),
            landmark_smoother: LandmarkSmoother::new(config.landmark_alpha),
            angle_smoother: AngleSmoother::new(config.angle_alpha),
            no_detection: NoDetectionCounter::new(config.no_detection_grace_frames),
            reps: RepState::new(),
            started_at_ms,
            last_timestamp_ms: None,
            frames_processed: 0,
        })
    }

    /// Run one frame through the pipeline
    ///
    /// Returns `None` only for frames rejected as duplicate, out of order
    /// or carrying a non-finite timestamp.
    pub fn process(&mut self, sample: &PoseSample) -> Option<FrameOutput> {
        if !sample.timestamp_ms.is_finite() {
            warn!(
                timestamp_ms = sample.timestamp_ms,
                "Dropping frame with non-finite timestamp"
            );
            return None;
        }
        if let Some(last) = self.last_timestamp_ms {
            if sample.timestamp_ms <= last {
                warn!(
                    timestamp_ms = sample.timestamp_ms,
                    last_timestamp_ms = last,
                    "Dropping duplicate or out-of-order frame"
                );
                return None;
            }
        }
        self.last_timestamp_ms = Some(sample.timestamp_ms);
        self.frames_processed += 1;

        let output = match &sample.pose {
            Some(pose) => self.on_pose(pose, sample.timestamp_ms),
            None => self.on_missing_pose(sample.timestamp_ms),
        };

        trace!(
            timestamp_ms = output.timestamp_ms,
            pose_detected = output.pose_detected,
            rep_count = output.rep_count,
            "Frame processed"
        );
        Some(output)
    }

    fn on_pose(&mut self, pose: &PoseFrame, timestamp_ms: f64) -> FrameOutput {
        self.no_detection.record_detection();

        let smoothed = self.landmark_smoother.smooth(pose);
        let raw = compute_joint_angles(&smoothed, &self.gate, self.config.min_segment_length);
        let angles = self.angle_smoother.update(&raw);

        let validation = self.exercise.map(|exercise| validate(exercise, &angles));
        let rep_completed = self
            .exercise
            .and_then(|exercise| exercise.rep_counting)
            .and_then(|rule| self.reps.advance(&rule, &angles, timestamp_ms));

        if let Some(event) = rep_completed {
            debug!(rep_count = event.rep_count, timestamp_ms, "Repetition completed");
        }

        FrameOutput {
            timestamp_ms,
            pose_detected: true,
            angles,
            feedback: validation
                .as_ref()
                .map(|v| v.feedback.clone())
                .unwrap_or_default(),
            rep_count: self.reps.rep_count,
            validation,
            rep_completed,
        }
    }

    fn on_missing_pose(&mut self, timestamp_ms: f64) -> FrameOutput {
        if self.no_detection.record_miss() == DetectionGap::Expired
            && (self.landmark_smoother.has_history()
                || !self.angle_smoother.current().is_undetermined())
        {
            debug!(
                frames = self.no_detection.count(),
                "No pose detected past grace period, dropping angle history"
            );
            self.landmark_smoother.reset();
            self.angle_smoother.reset();
        }

        FrameOutput {
            timestamp_ms,
            pose_detected: false,
            angles: *self.angle_smoother.current(),
            feedback: NO_POSE_FEEDBACK.to_string(),
            rep_count: self.reps.rep_count,
            validation: None,
            rep_completed: None,
        }
    }

    /// End the session, releasing all per-session state
    pub fn finish(self, stopped_at_ms: f64) -> SessionSummary {
        let elapsed_ms = (stopped_at_ms - self.started_at_ms).max(0.0);
        let summary = SessionSummary {
            rep_count: self.reps.rep_count,
            duration_seconds: (elapsed_ms / 1000.0).floor() as u64,
        };
        info!(
            rep_count = summary.rep_count,
            duration_seconds = summary.duration_seconds,
            frames = self.frames_processed,
            "Tracking session stopped"
        );
        summary
    }

    pub fn exercise(&self) -> Option<&'static ExerciseAngleConfig> {
        self.exercise
    }

    pub fn rep_count(&self) -> u32 {
        self.reps.rep_count
    }

    pub fn rep_state(&self) -> &RepState {
        &self.reps
    }

    pub fn angles(&self) -> &JointAngleSet {
        self.angle_smoother.current()
    }

    pub fn frames_processed(&self) -> u64 {
        self.frames_processed
    }
}
