//! Vibration of the active note.
use bevy::math::Vec3;
use log::{debug, warn};
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::game::colors::ColorName;
use crate::game::target::{TargetSet, Translatable};
use crate::game::config::{JITTER_STEP_SIZE, JITTER_STEPS};

/// Horizontal jitter pattern: each axis moves by `k * step_size`, `k` in `0..steps`,
/// with a random sign.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Jitter {
    pub steps: u32,
    pub step_size: f32,
}

impl Default for Jitter {
    fn default() -> Self {
        Self {
            steps: JITTER_STEPS,
            step_size: JITTER_STEP_SIZE,
        }
    }
}

impl Jitter {
    /// Largest offset along x or z.
    pub fn max_offset(&self) -> f32 {
        self.steps.saturating_sub(1) as f32 * self.step_size
    }

    /// Random offset in the xz-plane, y is always 0.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec3 {
        if self.steps == 0 {
            return Vec3::ZERO;
        }
        let mut axis = || {
            let magnitude = rng.random_range(0..self.steps) as f32 * self.step_size;
            // Go the other way half of the time
            if rng.random_bool(0.5) { -magnitude } else { magnitude }
        };
        let dx = axis();
        let dz = axis();
        Vec3::new(dx, 0.0, dz)
    }
}

/// Keeps track of the single vibrating note.
#[derive(Clone, Debug, Default)]
pub struct TargetAnimator {
    active: Option<ColorName>,
    jitter: Jitter,
}

impl TargetAnimator {
    pub fn new(jitter: Jitter) -> Self {
        Self {
            active: None,
            jitter,
        }
    }

    pub fn active(&self) -> Option<&ColorName> {
        self.active.as_ref()
    }

    pub fn is_active(&self) -> bool {
        self.active.is_some()
    }

    /// Marks `color` as the vibrating note. A note still vibrating is put back first.
    pub fn start_vibrating<H: Translatable>(
        &mut self,
        targets: &mut TargetSet<H>,
        color: &ColorName,
    ) {
        if let Some(previous) = self.active.as_ref().filter(|c| *c != color) {
            warn!("{previous} still vibrating while starting {color}, stopping it");
        }
        self.stop_vibrating(targets);
        if targets.get(color).is_none() {
            warn!("no music note for color {color}, nothing to vibrate");
            return;
        }
        debug!("vibrating {color}");
        self.active = Some(color.clone());
    }

    /// Puts the vibrating note back at rest. No-op when nothing vibrates.
    pub fn stop_vibrating<H: Translatable>(&mut self, targets: &mut TargetSet<H>) {
        let Some(color) = self.active.take() else {
            return;
        };
        if let Some(target) = targets.get_mut(&color) {
            target.restore();
        }
    }

    /// Moves the vibrating note to a new random spot around its rest position.
    pub fn vibrate<H: Translatable, R: Rng + ?Sized>(
        &mut self,
        targets: &mut TargetSet<H>,
        rng: &mut R,
    ) {
        let Some(color) = self.active.as_ref() else {
            return;
        };
        if let Some(target) = targets.get_mut(color) {
            target.displace(self.jitter.sample(rng));
        }
    }
}
