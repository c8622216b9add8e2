//! Repetition-counting state machine
//!
//! A rep is one full start → end → start cycle. Start and end are
//! level-sensitive conditions evaluated every frame, start first; the end
//! check always runs. `has_reached_end_position` is what stops threshold
//! jitter around the start position from counting extra reps.
//!
//! The end position only arms once the start position has been entered,
//! so a session that begins at the end of the range cannot count a rep.
//! Smoothed angles take several frames to travel from start to end, so the
//! arming is not tied to the frame the start position was left.

use serde::{Deserialize, Serialize};

use super::config::RepCountingRule;
use crate::kinematics::{is_measurable, JointAngleSet};

/// Emitted on the frame a repetition completes
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RepCompleted {
    pub rep_count: u32,
    pub timestamp_ms: f64,
}

/// Per-session counter state
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RepState {
    pub rep_count: u32,
    pub is_in_start_position: bool,
    pub has_reached_end_position: bool,
    /// Start position seen at least once this session
    #[serde(default)]
    pub has_entered_start_position: bool,
    /// Frame timestamp of the last completed rep
    pub last_rep_timestamp_ms: Option<f64>,
}

impl RepState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance one frame using the rule's joints from a smoothed angle set
    ///
    /// Frames where either condition's angle is undetermined leave the
    /// state untouched.
    pub fn advance(
        &mut self,
        rule: &RepCountingRule,
        angles: &JointAngleSet,
        timestamp_ms: f64,
    ) -> Option<RepCompleted> {
        let start_angle = rule.start.angle(angles);
        let end_angle = rule.end.angle(angles);
        if !is_measurable(start_angle) || !is_measurable(end_angle) {
            return None;
        }
        self.step(
            rule.start.is_met(start_angle),
            rule.end.is_met(end_angle),
            timestamp_ms,
        )
    }

    /// Apply one frame of already-evaluated conditions
    pub fn step(&mut self, start_met: bool, end_met: bool, timestamp_ms: f64) -> Option<RepCompleted> {
        let mut completed = None;

        // 1. Start position
        if start_met {
            self.has_entered_start_position = true;
            if !self.is_in_start_position && self.has_reached_end_position {
                self.rep_count += 1;
                self.is_in_start_position = true;
                self.has_reached_end_position = false;
                self.last_rep_timestamp_ms = Some(timestamp_ms);
                completed = Some(RepCompleted {
                    rep_count: self.rep_count,
                    timestamp_ms,
                });
            } else if !self.has_reached_end_position {
                self.is_in_start_position = true;
            }
        } else {
            self.is_in_start_position = false;
        }

        // 2. End position, evaluated even if step 1 changed state
        if end_met && self.has_entered_start_position {
            self.has_reached_end_position = true;
        }

        completed
    }
}
