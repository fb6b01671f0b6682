//! Note colors and the catalog of colors available in a session.
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::game::error::SetupError;
use crate::game::target::{Target, Translatable};

/// Prefix of note object names, the rest of the name is the color.
pub const NOTE_NAME_PREFIX: &str = "MusicNote";

/// Opaque color identifier of a note (`"Red"`, `"Blue"`, ...).
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ColorName(String);

impl ColorName {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// `MusicNoteRed` -> `Red`. Names without the prefix are kept whole.
    pub fn from_note_name(name: &str) -> Self {
        Self::new(name.strip_prefix(NOTE_NAME_PREFIX).unwrap_or(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ColorName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Distinct colors of the session's targets, in target order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ColorCatalog {
    colors: Vec<ColorName>,
}

impl ColorCatalog {
    /// Fewer choices than this and the game is not playable.
    pub const MIN_COLORS: usize = 2;

    pub fn from_targets<H: Translatable>(targets: &[Target<H>]) -> Result<Self, SetupError> {
        if targets.len() < Self::MIN_COLORS {
            return Err(SetupError::NotEnoughTargets {
                found: targets.len(),
                required: Self::MIN_COLORS,
            });
        }

        let mut colors: Vec<ColorName> = Vec::with_capacity(targets.len());
        for target in targets {
            if colors.contains(target.color()) {
                return Err(SetupError::DuplicateColor(target.color().clone()));
            }
            colors.push(target.color().clone());
        }

        Ok(Self { colors })
    }

    pub fn colors(&self) -> &[ColorName] {
        &self.colors
    }

    pub fn contains(&self, color: &ColorName) -> bool {
        self.colors.contains(color)
    }
}
