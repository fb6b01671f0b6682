//! Random color sequence the player has to repeat.
use std::fmt;

use log::debug;
use rand::Rng;
use rand::seq::IndexedRandom;

use crate::game::colors::{ColorCatalog, ColorName};

/// Ordered, immutable list of colors. Colors may repeat.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Sequence(Vec<ColorName>);

impl Sequence {
    /// `length` independent draws, each uniform over the catalog.
    pub fn generate<R: Rng + ?Sized>(length: usize, catalog: &ColorCatalog, rng: &mut R) -> Self {
        debug!("Generating sequence...");
        let colors = (0..length)
            .filter_map(|_| catalog.colors().choose(rng).cloned())
            .collect();
        Self(colors)
    }

    /// A fixed sequence, for scripted sessions.
    pub fn from_colors(colors: Vec<ColorName>) -> Self {
        Self(colors)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&ColorName> {
        self.0.get(index)
    }

    pub fn colors(&self) -> &[ColorName] {
        &self.0
    }

    /// Index of the final element.
    pub fn last_index(&self) -> usize {
        self.0.len().saturating_sub(1)
    }
}

/// Space-joined colors: `Red Blue Red`.
impl fmt::Display for Sequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, color) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{color}")?;
        }
        Ok(())
    }
}
