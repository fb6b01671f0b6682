//! Start-up for the music notes game, with window, plugins, and resources.
use std::path::PathBuf;

use bevy::prelude::*;

use music_notes::plugins::music_notes_plugin::MusicNotesPlugin;
use music_notes::utils::constants::game_constants::CONFIG_FILE;

/// Main application function
fn main() {
    // First argument overrides the config file location
    let config_path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(CONFIG_FILE));

    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Music Notes".into(),
                fit_canvas_to_parent: true,
                ..default()
            }),
            ..default()
        }))
        .add_plugins(MusicNotesPlugin { config_path })
        .run();
}
