//! Rep-counting state machine driven through the public API

use rehab_pose::exercise::{AngleCondition, Direction, RepCountingRule};
use rehab_pose::{Joint, JointAngleSet, RepState, Side};

fn rule() -> RepCountingRule {
    RepCountingRule {
        start: AngleCondition {
            joint: Joint::Knee,
            side: Side::Both,
            threshold: 160.0,
            direction: Direction::Above,
        },
        end: AngleCondition {
            joint: Joint::Knee,
            side: Side::Both,
            threshold: 120.0,
            direction: Direction::Below,
        },
    }
}

fn knees(angle: f64) -> JointAngleSet {
    let mut angles = JointAngleSet::undetermined();
    angles.set(Joint::Knee, Side::Both, angle);
    angles
}

/// Rep count after each frame
fn counts(sequence: &[f64]) -> Vec<u32> {
    let rule = rule();
    let mut state = RepState::new();
    sequence
        .iter()
        .enumerate()
        .map(|(i, angle)| {
            state.advance(&rule, &knees(*angle), i as f64 * 33.0);
            state.rep_count
        })
        .collect()
}

#[test]
fn one_rep_on_recrossing_start() {
    assert_eq!(
        counts(&[180.0, 170.0, 110.0, 90.0, 130.0, 170.0, 185.0]),
        vec![0, 0, 0, 0, 0, 1, 1]
    );
}

#[test]
fn oscillation_above_end_threshold_never_counts() {
    let sequence: Vec<f64> = std::iter::repeat([170.0, 165.0, 159.0, 161.0])
        .take(25)
        .flatten()
        .collect();
    assert!(counts(&sequence).iter().all(|&c| c == 0));
}

#[test]
fn lingering_at_end_counts_once() {
    assert_eq!(
        counts(&[170.0, 100.0, 95.0, 100.0, 90.0, 170.0, 175.0, 170.0]),
        vec![0, 0, 0, 0, 0, 1, 1, 1]
    );
}

#[test]
fn one_sided_rule_reads_its_own_side() {
    let mut rule = rule();
    rule.start.side = Side::Left;
    rule.end.side = Side::Left;

    let mut state = RepState::new();
    let frame = |left: f64, right: f64| JointAngleSet {
        left_knee: left,
        right_knee: right,
        ..JointAngleSet::undetermined()
    };

    state.advance(&rule, &frame(170.0, 100.0), 0.0);
    state.advance(&rule, &frame(100.0, 170.0), 33.0);
    let event = state.advance(&rule, &frame(170.0, 100.0), 66.0).unwrap();
    assert_eq!(event.rep_count, 1);
    assert_eq!(event.timestamp_ms, 66.0);
}

#[test]
fn sentinel_frames_are_skipped() {
    let rule = rule();
    let mut state = RepState::new();
    state.advance(&rule, &knees(170.0), 0.0);
    state.advance(&rule, &knees(100.0), 33.0);
    for i in 0..10 {
        assert!(state.advance(&rule, &knees(0.0), 66.0 + i as f64).is_none());
    }
    assert!(state.has_reached_end_position);
    assert_eq!(state.rep_count, 0);
}
