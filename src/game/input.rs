//! Click flags and their resolution into a single answer.
use std::collections::BTreeSet;

use crate::game::colors::ColorName;
use crate::game::target::{TargetSet, Translatable};

/// Per-note "clicked since last clear" flags, keyed by color.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ClickFlags {
    clicked: BTreeSet<ColorName>,
}

impl ClickFlags {
    pub fn press(&mut self, color: ColorName) {
        self.clicked.insert(color);
    }

    pub fn is_pressed(&self, color: &ColorName) -> bool {
        self.clicked.contains(color)
    }

    pub fn clear_all(&mut self) {
        self.clicked.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.clicked.is_empty()
    }
}

/// Outcome of one input resolution.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Activation {
    /// Nothing clicked yet.
    None,
    Single(ColorName),
    /// Several notes clicked in the same tick, never a valid answer.
    Ambiguous,
}

/// Which note was clicked, considering only the session's targets.
pub fn which_activated<H: Translatable>(targets: &TargetSet<H>, clicks: &ClickFlags) -> Activation {
    let mut clicked = targets
        .iter()
        .map(|target| target.color())
        .filter(|color| clicks.is_pressed(color));

    match (clicked.next(), clicked.next()) {
        (None, _) => Activation::None,
        (Some(color), None) => Activation::Single(color.clone()),
        (Some(_), Some(_)) => Activation::Ambiguous,
    }
}

/// Clears every click flag, so stale clicks never leak into the next tick.
pub fn reset_all(clicks: &mut ClickFlags) {
    clicks.clear_all();
}
