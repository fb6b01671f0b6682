//! This file defines the various objects, resources, and components used in the game.
use bevy::prelude::*;
use rand_chacha::ChaCha8Rng;
use rand_chacha::rand_core::SeedableRng;

use crate::game::{ClickFlags, ColorName, GameSession, Translatable};
use crate::utils::constants::game_constants::SEED;

/// Random number generator
#[derive(Resource)]
pub struct RandomGen {
    pub random_gen: ChaCha8Rng,
}

impl RandomGen {
    pub fn from_seed(seed: u64) -> Self {
        Self {
            random_gen: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Different sequence on every run
    pub fn from_entropy() -> Self {
        Self {
            random_gen: ChaCha8Rng::from_rng(&mut rand::rng()),
        }
    }
}

impl Default for RandomGen {
    fn default() -> Self {
        Self::from_seed(SEED)
    }
}

/// Mirror of a note entity's translation, moved by the session and copied back
/// onto the `Transform`.
#[derive(Clone, Debug)]
pub struct NoteHandle {
    pub entity: Entity,
    pub translation: Vec3,
}

impl Translatable for NoteHandle {
    fn position(&self) -> Vec3 {
        self.translation
    }

    fn set_position(&mut self, position: Vec3) {
        self.translation = position;
    }
}

/// The running game session
#[derive(Resource)]
pub struct MusicNotesGame(pub GameSession<NoteHandle>);

/// Notes clicked since the session last cleared them
#[derive(Resource, Default)]
pub struct PendingClicks(pub ClickFlags);

/// Restart requested from the keyboard
#[derive(Resource, Default)]
pub struct PendingRestart(pub bool);

/// A component that marks an entity as a clickable music note.
#[derive(Component)]
pub struct MusicNote {
    pub color: ColorName,
}

/// A component that marks the text showing the game state
#[derive(Component)]
pub struct StatusText;
