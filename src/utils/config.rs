//! Run-time configuration, read from a TOML file next to the binary.
use std::path::Path;

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::game::{ConfigError, SessionConfig};
use crate::utils::constants::game_constants::REFRESH_RATE_HZ;

#[derive(Resource, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Seed of the game's random generator, `None` seeds it from OS entropy.
    pub seed: Option<u64>,
    /// Rate of the fixed timestep that drives the session, in Hz.
    pub refresh_rate_hz: f64,
    pub session: SessionConfig,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            seed: None,
            refresh_rate_hz: REFRESH_RATE_HZ,
            session: SessionConfig::default(),
        }
    }
}

impl GameConfig {
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    /// Defaults when the file does not exist or cannot be used.
    pub fn load_or_default(path: &Path) -> Self {
        if !path.exists() {
            info!("No config at {}, using defaults", path.display());
            return Self::default();
        }
        match Self::load(path) {
            Ok(config) => config,
            Err(err) => {
                warn!("{err}, using defaults");
                Self::default()
            }
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.refresh_rate_hz.is_finite() && self.refresh_rate_hz > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "refresh_rate_hz must be positive (got {})",
                self.refresh_rate_hz
            )));
        }
        self.session.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Jitter;

    #[test]
    fn full_file_is_read() {
        let config = GameConfig::from_toml_str(
            r#"
            seed = 69
            refresh_rate_hz = 30.0

            [session]
            sequence_length = 5
            vibration_interval = 2
            main_interval = 90

            [session.jitter]
            steps = 4
            step_size = 0.1
            "#,
        )
        .expect("valid config");

        assert_eq!(config.seed, Some(69));
        assert_eq!(config.refresh_rate_hz, 30.0);
        assert_eq!(config.session.sequence_length, 5);
        assert_eq!(config.session.vibration_interval, 2);
        assert_eq!(config.session.main_interval, 90);
        assert_eq!(
            config.session.jitter,
            Jitter {
                steps: 4,
                step_size: 0.1
            }
        );
    }

    #[test]
    fn missing_keys_fall_back_to_defaults() {
        let config =
            GameConfig::from_toml_str("[session]\nsequence_length = 4\n").expect("valid config");
        assert_eq!(config.seed, None);
        assert_eq!(config.refresh_rate_hz, REFRESH_RATE_HZ);
        assert_eq!(config.session.sequence_length, 4);
        assert_eq!(config.session.main_interval, 180);
        assert_eq!(config.session.jitter, Jitter::default());
    }

    #[test]
    fn bad_values_are_reported() {
        assert!(matches!(
            GameConfig::from_toml_str("refresh_rate_hz = 0.0"),
            Err(ConfigError::Invalid(_))
        ));
        assert!(matches!(
            GameConfig::from_toml_str("[session]\nsequence_length = 0"),
            Err(ConfigError::Invalid(_))
        ));
        assert!(matches!(
            GameConfig::from_toml_str("seed = \"sixty-nine\""),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn missing_file_gives_defaults() {
        let config = GameConfig::load_or_default(Path::new("definitely/not/here/music_notes.toml"));
        assert_eq!(config, GameConfig::default());
        assert!(matches!(
            GameConfig::load(Path::new("definitely/not/here/music_notes.toml")),
            Err(ConfigError::Io { .. })
        ));
    }
}
