//! Exercise module - per-exercise angle rules, form checks and rep counting
//!
//! Re-exports only. All logic in submodules.

mod config;
mod registry;
mod resolver;
mod validator;
mod reps;

pub use config::{
    AngleCondition, AngleRequirement, CameraPosition, Direction, ExerciseAngleConfig,
    FeedbackMessages, RepCountingRule,
};
pub use registry::EXERCISES;
pub use resolver::{normalize_name, resolve, resolve_in};
pub use validator::{
    validate, FormValidation, RequirementResult, RequirementStatus, CHECK_POSITION_FEEDBACK,
    DEFAULT_GOOD_FEEDBACK, DEFAULT_TOO_DEEP_FEEDBACK, DEFAULT_TOO_SHALLOW_FEEDBACK,
};
pub use reps::{RepCompleted, RepState};
