// Constants used in the game, structured into modules.

/// 3D camera
pub mod camera_3d_constants {
    pub const CAMERA_3D_INITIAL_X: f32 = 0.0;
    pub const CAMERA_3D_INITIAL_Y: f32 = 6.0;
    pub const CAMERA_3D_INITIAL_Z: f32 = 12.0;
}

/// Game objects
pub mod object_constants {
    // Y position from the ground plane.
    pub const GROUND_Y: f32 = 0.0;
    pub const GROUND_SIZE: f32 = 30.0;

    pub const POINT_LIGHT_INTENSITY: f32 = 2_000_000.0;
}

/// Music notes (the clickable spheres)
pub mod note_constants {
    use bevy::prelude::Color;

    // Object names, the color is whatever follows the "MusicNote" prefix
    pub const NOTES: [(&str, Color); 4] = [
        ("MusicNoteRed", Color::srgb(1.0, 0.2, 0.2)),
        ("MusicNoteBlue", Color::srgb(0.2, 0.5, 1.0)),
        ("MusicNoteGreen", Color::srgb(0.2, 1.0, 0.3)),
        ("MusicNoteYellow", Color::srgb(1.0, 0.9, 0.2)),
    ];

    pub const NOTE_RADIUS: f32 = 0.8;
    // Distance between the centers of two neighbouring notes on the x axis
    pub const NOTE_SPACING: f32 = 2.5;
    pub const NOTE_Y: f32 = 1.5;
}

/// Vibration of the active note
pub mod jitter_constants {
    pub use crate::game::config::{JITTER_STEP_SIZE, JITTER_STEPS};
}

/// Generic game constants
pub mod game_constants {
    pub const REFRESH_RATE_HZ: f64 = 60.0; // Hz

    // Seed for the random number generator.
    pub const SEED: u64 = 69;

    pub use crate::game::config::{
        DEFAULT_SEQUENCE_LENGTH, MAIN_CADENCE_FRAMES, VIBRATION_CADENCE_FRAMES,
    };

    pub const CONFIG_FILE: &str = "music_notes.toml";
}
