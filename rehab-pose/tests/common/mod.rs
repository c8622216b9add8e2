//! Synthetic pose builders shared by the integration tests

#![allow(dead_code)]

use rehab_pose::landmarks::*;
use rehab_pose::{Landmark, PoseFrame, PoseSample};

pub const FRAME_MS: f64 = 33.0;

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Both legs drawn in the image plane with the given knee angle.
/// Thigh points straight up from the knee; the shin swings around it.
pub fn legs_with_knee_angle(knee_deg: f64) -> PoseFrame {
    let mut landmarks = [Landmark::new(0.5, 0.5, 0.0, 0.95); LANDMARK_COUNT];
    let theta = knee_deg.to_radians();

    for (shoulder, hip, knee, ankle, foot, x) in [
        (LEFT_SHOULDER, LEFT_HIP, LEFT_KNEE, LEFT_ANKLE, LEFT_FOOT_INDEX, 0.4),
        (RIGHT_SHOULDER, RIGHT_HIP, RIGHT_KNEE, RIGHT_ANKLE, RIGHT_FOOT_INDEX, 0.6),
    ] {
        let ankle_x = x + 0.2 * theta.sin();
        let ankle_y = 0.7 - 0.2 * theta.cos();
        landmarks[shoulder] = Landmark::new(x, 0.2, 0.0, 0.95);
        landmarks[hip] = Landmark::new(x, 0.5, 0.0, 0.95);
        landmarks[knee] = Landmark::new(x, 0.7, 0.0, 0.95);
        landmarks[ankle] = Landmark::new(ankle_x, ankle_y, 0.0, 0.95);
        landmarks[foot] = Landmark::new(ankle_x + 0.08, ankle_y, 0.0, 0.95);
    }

    PoseFrame::new(landmarks)
}

/// Same as [`legs_with_knee_angle`] with one landmark's visibility replaced
pub fn with_visibility(frame: &PoseFrame, index: usize, visibility: f64) -> PoseFrame {
    let mut landmarks = *frame.landmarks();
    landmarks[index].visibility = visibility;
    PoseFrame::new(landmarks)
}

/// Samples holding each angle for `frames` frames, starting at `start_ms`
pub fn hold_sequence(angles: &[f64], frames: usize, start_ms: f64) -> Vec<PoseSample> {
    angles
        .iter()
        .flat_map(|angle| std::iter::repeat(*angle).take(frames))
        .enumerate()
        .map(|(i, angle)| {
            PoseSample::detected(start_ms + i as f64 * FRAME_MS, legs_with_knee_angle(angle))
        })
        .collect()
}
