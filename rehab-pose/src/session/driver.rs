//! Frame loop driver - pulls frames from the pose source and owns the
//! session lifecycle
//!
//! Call [`FrameLoopDriver::tick`] once per rendered video frame. No frames
//! are pulled while stopped, and stopping only happens between frames.

use tracing::warn;

use super::source::PoseSource;
use super::tracker::{FrameOutput, SessionSummary, TrackingSession};
use crate::config::TrackerConfig;
use crate::error::{Result, TrackerError};
use crate::exercise::{resolve, ExerciseAngleConfig};

pub struct FrameLoopDriver<S> {
    source: S,
    config: TrackerConfig,
    session: Option<TrackingSession>,
}

impl<S: PoseSource> FrameLoopDriver<S> {
    /// # Errors
    ///
    /// Returns [`TrackerError::InvalidConfig`] if `config` fails validation.
    pub fn new(source: S, config: TrackerConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            source,
            config,
            session: None,
        })
    }

    /// Start a session, replacing (and discarding) any running one
    ///
    /// # Errors
    ///
    /// Propagates config validation failures from [`TrackingSession::start`].
    pub fn start(
        &mut self,
        exercise: Option<&'static ExerciseAngleConfig>,
        now_ms: f64,
    ) -> Result<()> {
        if self.session.is_some() {
            warn!("Session already running, restarting");
        }
        self.session = Some(TrackingSession::start(exercise, self.config, now_ms)?);
        Ok(())
    }

    /// Start a session for an exercise looked up by id or name
    ///
    /// # Errors
    ///
    /// Returns [`TrackerError::ExerciseNotFound`] when nothing matches; no
    /// default exercise is substituted.
    pub fn start_exercise(&mut self, id_or_name: &str, now_ms: f64) -> Result<()> {
        let exercise = resolve(id_or_name)
            .ok_or_else(|| TrackerError::ExerciseNotFound(id_or_name.to_string()))?;
        self.start(Some(exercise), now_ms)
    }

    /// Process at most one frame
    ///
    /// `None` when stopped, when the source has nothing yet, or when the
    /// frame was rejected as out of order.
    pub fn tick(&mut self) -> Option<FrameOutput> {
        let session = self.session.as_mut()?;
        let sample = self.source.poll_frame()?;
        session.process(&sample)
    }

    /// Drain every frame the source currently has, in arrival order
    pub fn drain(&mut self) -> Vec<FrameOutput> {
        let mut outputs = Vec::new();
        let Some(session) = self.session.as_mut() else {
            return outputs;
        };
        while let Some(sample) = self.source.poll_frame() {
            if let Some(output) = session.process(&sample) {
                outputs.push(output);
            }
        }
        outputs
    }

    /// Stop the running session, freezing its rep count
    pub fn stop(&mut self, now_ms: f64) -> Option<SessionSummary> {
        self.session.take().map(|session| session.finish(now_ms))
    }

    pub fn is_running(&self) -> bool {
        self.session.is_some()
    }

    pub fn session(&self) -> Option<&TrackingSession> {
        self.session.as_ref()
    }

    pub fn source_mut(&mut self) -> &mut S {
        &mut self.source
    }
}
