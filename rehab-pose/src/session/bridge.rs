//! Browser bridge - JS ↔ Rust communication
//!
//! MediaPipe runs in JavaScript and hands each frame over as a flat
//! Float64Array of 132 values (33 landmarks × x, y, z, visibility).
//! Output goes back as JSON so the UI can render angles, feedback and reps.

use wasm_bindgen::prelude::*;

use super::source::PoseSample;
use super::tracker::{FrameOutput, TrackingSession};
use crate::config::TrackerConfig;
use crate::error::TrackerError;
use crate::exercise::resolve;
use crate::landmarks::PoseFrame;

/// Called automatically when WASM module loads
#[wasm_bindgen(start)]
pub fn init_panic_hook() {
    console_error_panic_hook::set_once();
}

fn to_js(err: TrackerError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

/// One tracking session driven from the browser's frame loop
#[wasm_bindgen]
pub struct WasmTracker {
    session: Option<TrackingSession>,
    last_output: Option<FrameOutput>,
}

#[wasm_bindgen]
impl WasmTracker {
    /// Start tracking an exercise by id or display name
    #[wasm_bindgen(constructor)]
    pub fn new(exercise: &str, now_ms: f64) -> Result<WasmTracker, JsValue> {
        let config = resolve(exercise)
            .ok_or_else(|| to_js(TrackerError::ExerciseNotFound(exercise.to_string())))?;
        let session =
            TrackingSession::start(Some(config), TrackerConfig::default(), now_ms).map_err(to_js)?;
        Ok(Self {
            session: Some(session),
            last_output: None,
        })
    }

    /// Start tracking with tuned parameters (JSON, missing fields default)
    pub fn with_config(
        exercise: &str,
        config_json: &str,
        now_ms: f64,
    ) -> Result<WasmTracker, JsValue> {
        let config = TrackerConfig::from_json(config_json).map_err(to_js)?;
        let exercise_config = resolve(exercise)
            .ok_or_else(|| to_js(TrackerError::ExerciseNotFound(exercise.to_string())))?;
        let session = TrackingSession::start(Some(exercise_config), config, now_ms).map_err(to_js)?;
        Ok(Self {
            session: Some(session),
            last_output: None,
        })
    }

    /// Feed one detected pose. Returns false if the frame was not processed.
    pub fn push_landmarks(&mut self, data: &[f64], timestamp_ms: f64) -> bool {
        let pose = match PoseFrame::from_flat(data) {
            Ok(pose) => pose,
            Err(err) => {
                web_sys::console::warn_1(&err.to_string().into());
                return false;
            }
        };
        self.push(PoseSample::detected(timestamp_ms, pose))
    }

    /// Feed a frame in which MediaPipe found no pose
    pub fn push_no_pose(&mut self, timestamp_ms: f64) -> bool {
        self.push(PoseSample::missing(timestamp_ms))
    }

    pub fn rep_count(&self) -> u32 {
        self.last_output.as_ref().map_or(0, |o| o.rep_count)
    }

    pub fn feedback(&self) -> String {
        self.last_output
            .as_ref()
            .map(|o| o.feedback.clone())
            .unwrap_or_default()
    }

    /// Smoothed angles: left/right knee, left/right ankle, left/right hip
    pub fn angles(&self) -> Vec<f64> {
        self.last_output
            .as_ref()
            .map(|o| o.angles.values().to_vec())
            .unwrap_or_else(|| vec![0.0; 6])
    }

    /// Latest frame output as JSON
    pub fn output_json(&self) -> Option<String> {
        let output = self.last_output.as_ref()?;
        serde_json::to_string(output).ok()
    }

    /// Stop tracking; returns `{ repCount, durationSeconds }` as JSON
    pub fn stop(&mut self, now_ms: f64) -> Option<String> {
        let summary = self.session.take()?.finish(now_ms);
        serde_json::to_string(&summary).ok()
    }
}

impl WasmTracker {
    fn push(&mut self, sample: PoseSample) -> bool {
        let Some(session) = self.session.as_mut() else {
            return false;
        };
        match session.process(&sample) {
            Some(output) => {
                self.last_output = Some(output);
                true
            }
            None => false,
        }
    }
}
