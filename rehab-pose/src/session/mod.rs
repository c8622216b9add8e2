//! Session module - per-frame pipeline and its start/stop lifecycle
//!
//! Re-exports only. All logic in submodules.

mod source;
mod tracker;
mod driver;
#[cfg(feature = "wasm")]
mod bridge;

pub use source::{PoseSample, PoseSource};
pub use tracker::{FrameOutput, SessionSummary, TrackingSession, NO_POSE_FEEDBACK};
pub use driver::FrameLoopDriver;
#[cfg(feature = "wasm")]
pub use bridge::WasmTracker;
