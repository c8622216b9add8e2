//! Kinematics module - landmark smoothing, gating and joint angles
//!
//! Re-exports only. All logic in submodules.

mod state;
mod angles;
mod landmark_smoother;
mod visibility_gate;
mod angle_smoother;

pub use state::{Joint, JointAngleSet, Side, SENTINEL_ANGLE, is_measurable};
pub use angles::{
    angle_at_vertex, checked_angle_at_vertex, knee_angle, ankle_angle, hip_angle,
    compute_joint_angles,
};
pub use landmark_smoother::LandmarkSmoother;
pub use visibility_gate::VisibilityGate;
pub use angle_smoother::{AngleSmoother, NoDetectionCounter, DetectionGap};
