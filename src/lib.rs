//! Music notes: a "Simon Says" memory game.
//!
//! `game` is the engine-independent state machine, `utils` and `plugins` wire it into Bevy.

/// Sequence, clock, animator, input resolution and the session state machine
pub mod game;

/// Various utility functions, constants, and objects
pub mod utils {
    pub mod config;
    pub mod constants;
    pub mod inputs;
    pub mod macros;
    pub mod objects;
    pub mod setup;
    pub mod systems_logic;
}

pub mod plugins {
    pub mod music_notes_plugin;
}
