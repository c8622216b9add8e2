//! Rehab Pose - joint angles and rep counting from pose landmarks
//!
//! Turns a noisy per-frame stream of MediaPipe Pose landmarks into stable
//! knee/ankle/hip angles, form feedback and a repetition count for
//! rehabilitation exercises.
//!
//! Per frame:
//! - landmark EMA smoothing (`kinematics::LandmarkSmoother`)
//! - visibility-gated joint angles (`kinematics::compute_joint_angles`)
//! - angle EMA smoothing with a no-detection reset (`kinematics::AngleSmoother`)
//! - form validation and rep counting (`exercise`)
//!
//! `session::FrameLoopDriver` owns the start/stop lifecycle. With the `wasm`
//! feature, `session::WasmTracker` exposes the same pipeline to JavaScript.
//!
//! Logging goes through `tracing`; install a subscriber in the host to see it.

pub mod config;
pub mod error;
pub mod exercise;
pub mod kinematics;
pub mod landmarks;
pub mod session;

pub use config::TrackerConfig;
pub use error::{Result, TrackerError};
pub use exercise::{resolve, validate, ExerciseAngleConfig, FormValidation, RepState, EXERCISES};
pub use kinematics::{Joint, JointAngleSet, Side, SENTINEL_ANGLE};
pub use landmarks::{Landmark, PoseFrame};
pub use session::{FrameLoopDriver, FrameOutput, PoseSample, PoseSource, SessionSummary, TrackingSession};
