//! Compiled-in exercise registry
//!
//! Knee and ankle rehabilitation exercises. Thresholds are in degrees of the
//! joint angle (180° = straight), so "below min" means bent further than the
//! range allows.

use super::config::{
    AngleCondition, AngleRequirement, CameraPosition, Direction, ExerciseAngleConfig,
    FeedbackMessages, RepCountingRule,
};
use crate::kinematics::{Joint, Side};

const fn range(
    joint: Joint,
    min: Option<f64>,
    max: Option<f64>,
    description: &'static str,
) -> AngleRequirement {
    AngleRequirement {
        joint,
        side: Side::Both,
        min,
        max,
        target: None,
        tolerance: None,
        description,
    }
}

const fn around(joint: Joint, target: f64, tolerance: f64, description: &'static str) -> AngleRequirement {
    AngleRequirement {
        joint,
        side: Side::Both,
        min: None,
        max: None,
        target: Some(target),
        tolerance: Some(tolerance),
        description,
    }
}

const fn when(joint: Joint, direction: Direction, threshold: f64) -> AngleCondition {
    AngleCondition {
        joint,
        side: Side::Both,
        threshold,
        direction,
    }
}

const fn reps(start: AngleCondition, end: AngleCondition) -> Option<RepCountingRule> {
    Some(RepCountingRule { start, end })
}

pub static EXERCISES: &[ExerciseAngleConfig] = &[
    ExerciseAngleConfig {
        id: "heel-slide",
        name: "Heel Slide",
        camera_position: CameraPosition::Side,
        requirements: &[range(
            Joint::Knee,
            Some(60.0),
            None,
            "Bend the knee no further than 120° of flexion",
        )],
        rep_counting: reps(
            when(Joint::Knee, Direction::Above, 160.0),
            when(Joint::Knee, Direction::Below, 120.0),
        ),
        feedback: FeedbackMessages {
            good: Some("Nice smooth slide!"),
            too_shallow: Some("Don't force the bend - slide only as far as is comfortable"),
            too_deep: None,
        },
    },
    ExerciseAngleConfig {
        id: "straight-leg-raise",
        name: "Straight Leg Raise",
        camera_position: CameraPosition::Side,
        requirements: &[
            range(Joint::Knee, Some(155.0), None, "Keep the lifted knee straight"),
            range(Joint::Hip, Some(110.0), None, "Lift the leg no higher than about 70°"),
        ],
        rep_counting: reps(
            when(Joint::Hip, Direction::Above, 165.0),
            when(Joint::Hip, Direction::Below, 140.0),
        ),
        feedback: FeedbackMessages {
            good: Some("Great control - keep the leg straight"),
            too_shallow: Some("Lock your knee straight and don't lift too high"),
            too_deep: None,
        },
    },
    ExerciseAngleConfig {
        id: "mini-squat",
        name: "Mini Squat",
        camera_position: CameraPosition::Side,
        requirements: &[range(
            Joint::Knee,
            Some(100.0),
            Some(180.0),
            "Bend the knees only partway, to about 45°",
        )],
        rep_counting: reps(
            when(Joint::Knee, Direction::Above, 160.0),
            when(Joint::Knee, Direction::Below, 130.0),
        ),
        feedback: FeedbackMessages {
            good: Some("Good depth!"),
            too_shallow: Some("Too deep - mini squats stop well above a full squat"),
            too_deep: None,
        },
    },
    ExerciseAngleConfig {
        id: "wall-sit",
        name: "Wall Sit",
        camera_position: CameraPosition::Side,
        requirements: &[
            around(Joint::Knee, 90.0, 15.0, "Hold the knees at about 90°"),
            around(Joint::Hip, 90.0, 20.0, "Keep your back flat against the wall"),
        ],
        rep_counting: None,
        feedback: FeedbackMessages {
            good: Some("Hold it there!"),
            too_shallow: Some("Slide up slightly - your knees are bent past 90°"),
            too_deep: Some("Slide lower until your knees reach about 90°"),
        },
    },
    ExerciseAngleConfig {
        id: "seated-knee-extension",
        name: "Seated Knee Extension",
        camera_position: CameraPosition::Side,
        requirements: &[range(
            Joint::Hip,
            Some(60.0),
            Some(125.0),
            "Stay seated upright while extending",
        )],
        rep_counting: reps(
            when(Joint::Knee, Direction::Below, 110.0),
            when(Joint::Knee, Direction::Above, 155.0),
        ),
        feedback: FeedbackMessages {
            good: Some("Good extension!"),
            too_shallow: Some("Don't lean forward - sit tall"),
            too_deep: Some("Don't lean back - sit tall"),
        },
    },
    ExerciseAngleConfig {
        id: "ankle-pumps",
        name: "Ankle Pumps",
        camera_position: CameraPosition::Side,
        requirements: &[range(
            Joint::Ankle,
            Some(60.0),
            Some(160.0),
            "Move the foot through a comfortable range",
        )],
        rep_counting: reps(
            when(Joint::Ankle, Direction::Below, 110.0),
            when(Joint::Ankle, Direction::Above, 130.0),
        ),
        feedback: FeedbackMessages {
            good: Some("Keep pumping!"),
            too_shallow: Some("Ease off - don't pull the toes back so hard"),
            too_deep: Some("Ease off - don't point the toes so hard"),
        },
    },
    ExerciseAngleConfig {
        id: "calf-raises",
        name: "Calf Raises",
        camera_position: CameraPosition::Side,
        requirements: &[range(Joint::Knee, Some(160.0), None, "Keep the knees straight")],
        rep_counting: reps(
            when(Joint::Ankle, Direction::Below, 115.0),
            when(Joint::Ankle, Direction::Above, 130.0),
        ),
        feedback: FeedbackMessages {
            good: Some("Nice and tall!"),
            too_shallow: Some("Straighten your knees as you rise"),
            too_deep: None,
        },
    },
    ExerciseAngleConfig {
        id: "sit-to-stand",
        name: "Sit to Stand",
        camera_position: CameraPosition::Side,
        requirements: &[range(
            Joint::Knee,
            Some(70.0),
            None,
            "Start from a chair at knee height",
        )],
        rep_counting: reps(
            when(Joint::Knee, Direction::Below, 100.0),
            when(Joint::Knee, Direction::Above, 160.0),
        ),
        feedback: FeedbackMessages {
            good: Some("Strong stand!"),
            too_shallow: Some("Use a higher chair - your knees are bending too far"),
            too_deep: None,
        },
    },
    ExerciseAngleConfig {
        id: "quad-sets",
        name: "Quad Sets",
        camera_position: CameraPosition::Side,
        requirements: &[range(
            Joint::Knee,
            Some(165.0),
            None,
            "Press the back of the knee down flat",
        )],
        rep_counting: None,
        feedback: FeedbackMessages {
            good: Some("Squeeze and hold!"),
            too_shallow: Some("Press your knee flat into the floor"),
            too_deep: None,
        },
    },
];
