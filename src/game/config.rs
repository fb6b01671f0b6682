//! Tunables of one game session.
use serde::{Deserialize, Serialize};

use crate::game::animator::Jitter;
use crate::game::error::ConfigError;

pub const DEFAULT_SEQUENCE_LENGTH: usize = 3;

// Cadences, in fixed-timestep frames
pub const VIBRATION_CADENCE_FRAMES: u32 = 4;
pub const MAIN_CADENCE_FRAMES: u32 = 3 * 60;

// Offset per axis is k * JITTER_STEP_SIZE with k in 0..JITTER_STEPS
pub const JITTER_STEPS: u32 = 10;
pub const JITTER_STEP_SIZE: f32 = 1.0 / 20.0;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Number of colors to remember.
    pub sequence_length: usize,
    /// Frames between two vibration steps of the active note.
    pub vibration_interval: u32,
    /// Frames between two state machine steps.
    pub main_interval: u32,
    pub jitter: Jitter,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            sequence_length: DEFAULT_SEQUENCE_LENGTH,
            vibration_interval: VIBRATION_CADENCE_FRAMES,
            main_interval: MAIN_CADENCE_FRAMES,
            jitter: Jitter::default(),
        }
    }
}

impl SessionConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.sequence_length == 0 {
            return Err(ConfigError::Invalid(
                "session.sequence_length must be at least 1".into(),
            ));
        }
        if self.vibration_interval == 0 || self.main_interval == 0 {
            return Err(ConfigError::Invalid(
                "session intervals must be at least 1 frame".into(),
            ));
        }
        if self.jitter.steps == 0 {
            return Err(ConfigError::Invalid(
                "session.jitter.steps must be at least 1".into(),
            ));
        }
        if !self.jitter.step_size.is_finite() || self.jitter.step_size < 0.0 {
            return Err(ConfigError::Invalid(format!(
                "session.jitter.step_size must be a finite, non-negative number (got {})",
                self.jitter.step_size
            )));
        }
        Ok(())
    }
}
