//! Registry lookup and form validation

use rehab_pose::exercise::{RequirementStatus, CHECK_POSITION_FEEDBACK};
use rehab_pose::{resolve, validate, Joint, JointAngleSet, Side, EXERCISES};

fn angles(knee: f64, hip: f64) -> JointAngleSet {
    let mut angles = JointAngleSet::undetermined();
    angles.set(Joint::Knee, Side::Both, knee);
    angles.set(Joint::Hip, Side::Both, hip);
    angles
}

#[test]
fn name_variants_resolve_to_same_entry() {
    let entries: Vec<_> = ["Heel Slide", "heel-slide", "HEEL SLIDE", "heel_slide "]
        .iter()
        .map(|q| resolve(q).map(|e| e.id))
        .collect();
    assert!(entries.iter().all(|id| *id == Some("heel-slide")));
}

#[test]
fn unknown_exercise_is_not_found() {
    assert!(resolve("Deadlift").is_none());
    assert!(resolve("!!!").is_none());
}

#[test]
fn every_registry_entry_resolves_by_name_and_id() {
    for exercise in EXERCISES {
        assert_eq!(resolve(exercise.id).unwrap().id, exercise.id);
        assert_eq!(resolve(exercise.name).unwrap().id, exercise.id);
    }
}

#[test]
fn in_range_angles_get_good_message() {
    let wall_sit = resolve("Wall Sit").unwrap();
    let result = validate(wall_sit, &angles(92.0, 85.0));
    assert!(result.valid);
    assert_eq!(result.feedback, "Hold it there!");
    assert_eq!(result.details.len(), 2);
}

#[test]
fn first_failing_requirement_picks_message() {
    let wall_sit = resolve("Wall Sit").unwrap();

    // Knee below its minimum is declared before the hip, which is above max
    let result = validate(wall_sit, &angles(60.0, 130.0));
    assert!(!result.valid);
    assert_eq!(result.details[0].status, RequirementStatus::TooShallow);
    assert_eq!(result.details[1].status, RequirementStatus::TooDeep);
    assert_eq!(result.feedback, wall_sit.feedback.too_shallow.unwrap());

    // Only the hip fails
    let result = validate(wall_sit, &angles(90.0, 130.0));
    assert_eq!(result.feedback, wall_sit.feedback.too_deep.unwrap());
}

#[test]
fn unmeasured_joint_asks_for_repositioning() {
    let quad_sets = resolve("quad sets").unwrap();
    let result = validate(quad_sets, &JointAngleSet::undetermined());
    assert!(!result.valid);
    assert_eq!(result.feedback, CHECK_POSITION_FEEDBACK);
}
