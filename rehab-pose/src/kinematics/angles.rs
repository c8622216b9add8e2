//! Joint angle calculation using dot product
//!
//! Calculates the angle at a vertex landmark from the 3D vectors
//! vertex→a and vertex→c.

use nalgebra::Vector3;

use super::state::{Joint, JointAngleSet, Side, SENTINEL_ANGLE};
use super::visibility_gate::VisibilityGate;
use crate::landmarks::{Landmark, PoseFrame};

fn position(landmark: &Landmark) -> Vector3<f64> {
    Vector3::new(landmark.x, landmark.y, landmark.z)
}

/// Calculate the angle ∠abc in degrees, `b` being the vertex
///
/// Uses dot product formula: cos(θ) = (ba · bc) / (|ba| × |bc|)
///
/// Returns angle in degrees:
/// - 90° = right angle
/// - 180° = straight line
///
/// Coincident points give a meaningless result; use
/// [`checked_angle_at_vertex`] where the input is not already gated.
pub fn angle_at_vertex(a: &Landmark, b: &Landmark, c: &Landmark) -> f64 {
    let ba = position(a) - position(b);
    let bc = position(c) - position(b);

    // cos(angle) = dot / (mag1 * mag2)
    let cos_angle = (ba.dot(&bc) / (ba.norm() * bc.norm())).clamp(-1.0, 1.0);

    cos_angle.acos().to_degrees()
}

/// Like [`angle_at_vertex`], but `None` when either segment is shorter than
/// `min_length`
pub fn checked_angle_at_vertex(
    a: &Landmark,
    b: &Landmark,
    c: &Landmark,
    min_length: f64,
) -> Option<f64> {
    let ba = position(a) - position(b);
    let bc = position(c) - position(b);

    // Handle degenerate case
    if ba.norm() < min_length || bc.norm() < min_length {
        return None;
    }

    Some(angle_at_vertex(a, b, c))
}

/// Knee flexion: hip → knee → ankle (180° = leg straight)
pub fn knee_angle(hip: &Landmark, knee: &Landmark, ankle: &Landmark) -> f64 {
    angle_at_vertex(hip, knee, ankle)
}

/// Ankle angle: knee → ankle → foot index
pub fn ankle_angle(knee: &Landmark, ankle: &Landmark, foot_index: &Landmark) -> f64 {
    angle_at_vertex(knee, ankle, foot_index)
}

/// Hip angle: shoulder → hip → knee (180° = trunk and thigh aligned)
pub fn hip_angle(shoulder: &Landmark, hip: &Landmark, knee: &Landmark) -> f64 {
    angle_at_vertex(shoulder, hip, knee)
}

/// Measure all six joint angles from one (smoothed) frame
///
/// A joint whose limb fails the visibility gate, or whose geometry is
/// degenerate, reads as the sentinel. Other joints are unaffected.
pub fn compute_joint_angles(
    frame: &PoseFrame,
    gate: &VisibilityGate,
    min_segment_length: f64,
) -> JointAngleSet {
    let mut angles = JointAngleSet::undetermined();

    for joint in Joint::ALL {
        for side in [Side::Left, Side::Right] {
            let angle = if gate.is_visible(frame, joint, side) {
                let (a, b, c) = joint.landmarks(side);
                checked_angle_at_vertex(&frame[a], &frame[b], &frame[c], min_segment_length)
                    .unwrap_or(SENTINEL_ANGLE)
            } else {
                SENTINEL_ANGLE
            };
            angles.set(joint, side, angle);
        }
    }

    angles
}
