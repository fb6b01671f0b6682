//! Engine-independent core of the music notes game.

pub mod animator;
pub mod clock;
pub mod colors;
pub mod config;
pub mod error;
pub mod input;
pub mod machine;
pub mod sequence;
pub mod target;

pub use animator::{Jitter, TargetAnimator};
pub use clock::{Cadence, FrameClock, FrameTicks};
pub use colors::{ColorCatalog, ColorName};
pub use config::SessionConfig;
pub use error::{ConfigError, InvalidStateCode, SetupError};
pub use input::{Activation, ClickFlags};
pub use machine::{GameSession, GameState};
pub use sequence::Sequence;
pub use target::{Target, TargetSet, Translatable};
