//! Form validation against per-joint angle ranges
//!
//! Requirements are checked in declared order; the first failing one picks
//! the feedback message.

use serde::Serialize;

use super::config::{AngleRequirement, ExerciseAngleConfig};
use crate::kinematics::{is_measurable, Joint, JointAngleSet, Side};

pub const DEFAULT_GOOD_FEEDBACK: &str = "Good form!";
pub const DEFAULT_TOO_SHALLOW_FEEDBACK: &str = "Angle is below the target range";
pub const DEFAULT_TOO_DEEP_FEEDBACK: &str = "Angle is above the target range";
pub const CHECK_POSITION_FEEDBACK: &str = "Check your positioning - keep your legs in view";

/// Outcome of a single requirement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum RequirementStatus {
    Pass,
    /// Below the minimum
    TooShallow,
    /// Above the maximum
    TooDeep,
    /// Angle is the sentinel this frame
    Undetermined,
}

/// Per-requirement detail
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RequirementResult {
    pub joint: Joint,
    pub side: Side,
    pub description: &'static str,
    pub angle: f64,
    pub status: RequirementStatus,
}

impl RequirementResult {
    pub fn passed(&self) -> bool {
        self.status == RequirementStatus::Pass
    }
}

/// Result of validating one frame's angles
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormValidation {
    pub valid: bool,
    pub feedback: String,
    pub details: Vec<RequirementResult>,
}

fn check(requirement: &AngleRequirement, angles: &JointAngleSet) -> RequirementResult {
    let angle = angles.get(requirement.joint, requirement.side);
    let (min, max) = requirement.bounds();

    let status = if !is_measurable(angle) {
        RequirementStatus::Undetermined
    } else if min.is_some_and(|min| angle < min) {
        RequirementStatus::TooShallow
    } else if max.is_some_and(|max| angle > max) {
        RequirementStatus::TooDeep
    } else {
        RequirementStatus::Pass
    };

    RequirementResult {
        joint: requirement.joint,
        side: requirement.side,
        description: requirement.description,
        angle,
        status,
    }
}

/// Validate smoothed angles against every requirement of an exercise
pub fn validate(config: &ExerciseAngleConfig, angles: &JointAngleSet) -> FormValidation {
    let details: Vec<RequirementResult> = config
        .requirements
        .iter()
        .map(|req| check(req, angles))
        .collect();

    let first_failure = details.iter().find(|d| !d.passed());
    let feedback = match first_failure.map(|d| d.status) {
        None | Some(RequirementStatus::Pass) => {
            config.feedback.good.unwrap_or(DEFAULT_GOOD_FEEDBACK)
        }
        Some(RequirementStatus::TooShallow) => config
            .feedback
            .too_shallow
            .unwrap_or(DEFAULT_TOO_SHALLOW_FEEDBACK),
        Some(RequirementStatus::TooDeep) => {
            config.feedback.too_deep.unwrap_or(DEFAULT_TOO_DEEP_FEEDBACK)
        }
        Some(RequirementStatus::Undetermined) => CHECK_POSITION_FEEDBACK,
    };

    FormValidation {
        valid: first_failure.is_none(),
        feedback: feedback.to_string(),
        details,
    }
}
