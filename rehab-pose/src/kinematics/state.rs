//! Joint angle state - shared data structure for the angle pipeline

use serde::{Deserialize, Serialize};

use crate::landmarks::{
    LEFT_ANKLE, LEFT_FOOT_INDEX, LEFT_HIP, LEFT_KNEE, LEFT_SHOULDER, RIGHT_ANKLE,
    RIGHT_FOOT_INDEX, RIGHT_HIP, RIGHT_KNEE, RIGHT_SHOULDER,
};

/// Angle value meaning "not currently measurable".
///
/// Every configured range starts at 15° or more, so a genuine 0° reading
/// never occurs for the tracked joints.
pub const SENTINEL_ANGLE: f64 = 0.0;

/// True when an angle holds a real measurement rather than the sentinel
pub fn is_measurable(angle: f64) -> bool {
    angle > SENTINEL_ANGLE
}

/// Tracked joints
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Joint {
    Knee,
    Ankle,
    Hip,
}

impl Joint {
    pub const ALL: [Joint; 3] = [Joint::Knee, Joint::Ankle, Joint::Hip];

    /// Landmark triple `(a, vertex, c)` defining this joint's angle
    ///
    /// - Knee: hip → knee → ankle
    /// - Ankle: knee → ankle → foot index
    /// - Hip: shoulder → hip → knee
    ///
    /// `Side::Both` has no single triple. Callers split it into left and
    /// right before asking; debug builds panic if they don't.
    pub fn landmarks(&self, side: Side) -> (usize, usize, usize) {
        debug_assert!(side != Side::Both, "split Side::Both before looking up landmarks");
        let left = side == Side::Left;
        match (self, left) {
            (Joint::Knee, true) => (LEFT_HIP, LEFT_KNEE, LEFT_ANKLE),
            (Joint::Knee, false) => (RIGHT_HIP, RIGHT_KNEE, RIGHT_ANKLE),
            (Joint::Ankle, true) => (LEFT_KNEE, LEFT_ANKLE, LEFT_FOOT_INDEX),
            (Joint::Ankle, false) => (RIGHT_KNEE, RIGHT_ANKLE, RIGHT_FOOT_INDEX),
            (Joint::Hip, true) => (LEFT_SHOULDER, LEFT_HIP, LEFT_KNEE),
            (Joint::Hip, false) => (RIGHT_SHOULDER, RIGHT_HIP, RIGHT_KNEE),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Joint::Knee => "knee",
            Joint::Ankle => "ankle",
            Joint::Hip => "hip",
        }
    }
}

/// Which side of the body an angle is read from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Left,
    Right,
    /// Average of the measurable sides
    Both,
}

/// Six joint angles in degrees, `0` meaning undetermined
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JointAngleSet {
    pub left_knee: f64,
    pub right_knee: f64,
    pub left_ankle: f64,
    pub right_ankle: f64,
    pub left_hip: f64,
    pub right_hip: f64,
}

impl JointAngleSet {
    /// All angles undetermined
    pub fn undetermined() -> Self {
        Self::default()
    }

    /// Read one angle. `Side::Both` averages whichever sides are measurable
    /// and is the sentinel only when neither side is.
    pub fn get(&self, joint: Joint, side: Side) -> f64 {
        match side {
            Side::Left => *self.slot(joint, true),
            Side::Right => *self.slot(joint, false),
            Side::Both => {
                let left = *self.slot(joint, true);
                let right = *self.slot(joint, false);
                match (is_measurable(left), is_measurable(right)) {
                    (true, true) => (left + right) / 2.0,
                    (true, false) => left,
                    (false, true) => right,
                    (false, false) => SENTINEL_ANGLE,
                }
            }
        }
    }

    /// Write one angle; `Side::Both` writes both sides.
    pub fn set(&mut self, joint: Joint, side: Side, angle: f64) {
        match side {
            Side::Left => *self.slot_mut(joint, true) = angle,
            Side::Right => *self.slot_mut(joint, false) = angle,
            Side::Both => {
                *self.slot_mut(joint, true) = angle;
                *self.slot_mut(joint, false) = angle;
            }
        }
    }

    /// True if no angle is measurable
    pub fn is_undetermined(&self) -> bool {
        self.values().iter().all(|a| !is_measurable(*a))
    }

    /// Angles in fixed order: left/right knee, left/right ankle, left/right hip
    pub fn values(&self) -> [f64; 6] {
        [
            self.left_knee,
            self.right_knee,
            self.left_ankle,
            self.right_ankle,
            self.left_hip,
            self.right_hip,
        ]
    }

    fn slot(&self, joint: Joint, left: bool) -> &f64 {
        match (joint, left) {
            (Joint::Knee, true) => &self.left_knee,
            (Joint::Knee, false) => &self.right_knee,
            (Joint::Ankle, true) => &self.left_ankle,
            (Joint::Ankle, false) => &self.right_ankle,
            (Joint::Hip, true) => &self.left_hip,
            (Joint::Hip, false) => &self.right_hip,
        }
    }

    fn slot_mut(&mut self, joint: Joint, left: bool) -> &mut f64 {
        match (joint, left) {
            (Joint::Knee, true) => &mut self.left_knee,
            (Joint::Knee, false) => &mut self.right_knee,
            (Joint::Ankle, true) => &mut self.left_ankle,
            (Joint::Ankle, false) => &mut self.right_ankle,
            (Joint::Hip, true) => &mut self.left_hip,
            (Joint::Hip, false) => &mut self.right_hip,
        }
    }
}
