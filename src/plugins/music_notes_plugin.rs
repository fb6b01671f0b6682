use std::path::PathBuf;

use bevy::prelude::*;

use crate::utils::config::GameConfig;
use crate::utils::objects::RandomGen;
use crate::utils::systems_logic::SystemsLogicPlugin;

/// Plugins
/// Everything the game needs on top of `DefaultPlugins`: config, fixed timestep
/// rate, seeded RNG and systems.
/// Add it after `DefaultPlugins` so config problems reach the log.
pub struct MusicNotesPlugin {
    pub config_path: PathBuf,
}

impl Plugin for MusicNotesPlugin {
    fn build(&self, app: &mut App) {
        let config = GameConfig::load_or_default(&self.config_path);
        let random_gen = match config.seed {
            Some(seed) => RandomGen::from_seed(seed),
            None => RandomGen::from_entropy(),
        };
        info!(
            "Music notes: {} notes to remember, step every {} frames at {} Hz",
            config.session.sequence_length, config.session.main_interval, config.refresh_rate_hz
        );

        app.insert_resource(Time::<Fixed>::from_hz(config.refresh_rate_hz))
            .insert_resource(random_gen)
            .insert_resource(config)
            .add_plugins(SystemsLogicPlugin);
    }
}
