//! Error types of the game core.
use std::path::PathBuf;

use thiserror::Error;

use crate::game::colors::ColorName;

/// Reasons a session cannot start. None of them is fatal: the session stays IDLE.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SetupError {
    #[error("not enough music notes, needs at least {required} (found {found})")]
    NotEnoughTargets { found: usize, required: usize },
    #[error("two music notes share the color `{0}`")]
    DuplicateColor(ColorName),
    #[error("the sequence must contain at least one color")]
    EmptySequence,
    #[error("sequence color `{0}` has no matching music note")]
    UnknownColor(ColorName),
}

/// A numeric state value outside of the known game states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("invalid game state code {0}")]
pub struct InvalidStateCode(pub u8);

/// Failures while loading the game configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
}
