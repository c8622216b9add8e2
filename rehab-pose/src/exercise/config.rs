//! Declarative exercise configuration types
//!
//! Instances are compiled-in statics (see `registry`) and never mutated.

use serde::Serialize;

use crate::kinematics::{Joint, JointAngleSet, Side};

/// Which way an angle must cross a threshold
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Above,
    Below,
}

/// Suggested camera placement for an exercise
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CameraPosition {
    Side,
    Front,
}

/// Valid angle range for one joint during an exercise
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AngleRequirement {
    pub joint: Joint,
    pub side: Side,
    pub min: Option<f64>,
    pub max: Option<f64>,
    /// Ideal angle; with `tolerance` it stands in for missing bounds
    pub target: Option<f64>,
    pub tolerance: Option<f64>,
    pub description: &'static str,
}

impl AngleRequirement {
    /// Effective `(min, max)` bounds
    ///
    /// Explicit bounds win. A missing bound falls back to
    /// `target ∓ tolerance` when both are configured.
    pub fn bounds(&self) -> (Option<f64>, Option<f64>) {
        let window = match (self.target, self.tolerance) {
            (Some(target), Some(tolerance)) => Some((target - tolerance, target + tolerance)),
            _ => None,
        };
        (
            self.min.or(window.map(|(lo, _)| lo)),
            self.max.or(window.map(|(_, hi)| hi)),
        )
    }
}

/// One side of a rep-counting rule
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AngleCondition {
    pub joint: Joint,
    pub side: Side,
    pub threshold: f64,
    pub direction: Direction,
}

impl AngleCondition {
    /// Strict comparison against the threshold
    pub fn is_met(&self, angle: f64) -> bool {
        match self.direction {
            Direction::Above => angle > self.threshold,
            Direction::Below => angle < self.threshold,
        }
    }

    /// The angle this condition reads from a full set
    pub fn angle(&self, angles: &JointAngleSet) -> f64 {
        angles.get(self.joint, self.side)
    }
}

/// Start/end positions bounding a repetition
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RepCountingRule {
    pub start: AngleCondition,
    pub end: AngleCondition,
}

/// Feedback templates; `None` falls back to generic text
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackMessages {
    pub good: Option<&'static str>,
    /// Shown when an angle is below its minimum
    pub too_shallow: Option<&'static str>,
    /// Shown when an angle is above its maximum
    pub too_deep: Option<&'static str>,
}

/// Everything the core needs to track one exercise
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExerciseAngleConfig {
    /// Registry key
    pub id: &'static str,
    /// Display name, also used for fuzzy lookup
    pub name: &'static str,
    pub camera_position: CameraPosition,
    pub requirements: &'static [AngleRequirement],
    pub rep_counting: Option<RepCountingRule>,
    pub feedback: FeedbackMessages,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn requirement(
        min: Option<f64>,
        max: Option<f64>,
        target: Option<f64>,
        tolerance: Option<f64>,
    ) -> AngleRequirement {
        AngleRequirement {
            joint: Joint::Knee,
            side: Side::Both,
            min,
            max,
            target,
            tolerance,
            description: "test",
        }
    }

    #[test]
    fn test_bounds_from_target() {
        let req = requirement(None, None, Some(90.0), Some(15.0));
        assert_eq!(req.bounds(), (Some(75.0), Some(105.0)));
    }

    #[test]
    fn test_explicit_bounds_win() {
        let req = requirement(Some(80.0), None, Some(90.0), Some(15.0));
        assert_eq!(req.bounds(), (Some(80.0), Some(105.0)));

        let open = requirement(Some(80.0), None, Some(90.0), None);
        assert_eq!(open.bounds(), (Some(80.0), None));
    }

    #[test]
    fn test_condition_is_strict() {
        let cond = AngleCondition {
            joint: Joint::Knee,
            side: Side::Both,
            threshold: 160.0,
            direction: Direction::Above,
        };
        assert!(!cond.is_met(160.0));
        assert!(cond.is_met(160.1));

        let below = AngleCondition { direction: Direction::Below, ..cond };
        assert!(!below.is_met(160.0));
        assert!(below.is_met(159.9));
    }
}
