//! Clickable targets ("music notes") and the capability to move them.
use bevy::math::Vec3;

use crate::game::colors::ColorName;

/// Anything whose live position the game can read and overwrite.
/// The engine side provides the implementation, the core never sees a scene graph.
pub trait Translatable {
    fn position(&self) -> Vec3;
    fn set_position(&mut self, position: Vec3);
}

impl Translatable for Vec3 {
    fn position(&self) -> Vec3 {
        *self
    }

    fn set_position(&mut self, position: Vec3) {
        *self = position;
    }
}

/// One clickable note with the position it was created at.
#[derive(Clone, Debug)]
pub struct Target<H> {
    color: ColorName,
    rest_position: Vec3,
    handle: H,
}

impl<H: Translatable> Target<H> {
    /// Captures the handle's current position as the rest position.
    pub fn new(color: ColorName, handle: H) -> Self {
        Self {
            color,
            rest_position: handle.position(),
            handle,
        }
    }

    /// Builds a target from an object name such as `MusicNoteRed`.
    pub fn from_note_name(name: &str, handle: H) -> Self {
        Self::new(ColorName::from_note_name(name), handle)
    }

    pub fn color(&self) -> &ColorName {
        &self.color
    }

    pub fn rest_position(&self) -> Vec3 {
        self.rest_position
    }

    pub fn handle(&self) -> &H {
        &self.handle
    }

    /// Live position of the handle.
    pub fn position(&self) -> Vec3 {
        self.handle.position()
    }

    pub(crate) fn displace(&mut self, offset: Vec3) {
        self.handle.set_position(self.rest_position + offset);
    }

    pub(crate) fn restore(&mut self) {
        self.handle.set_position(self.rest_position);
    }
}

/// The targets of a session, in creation order.
#[derive(Clone, Debug)]
pub struct TargetSet<H> {
    targets: Vec<Target<H>>,
}

impl<H> Default for TargetSet<H> {
    fn default() -> Self {
        Self {
            targets: Vec::new(),
        }
    }
}

impl<H: Translatable> TargetSet<H> {
    pub fn new(targets: Vec<Target<H>>) -> Self {
        Self { targets }
    }

    pub(crate) fn len(&self) -> usize {
        self.targets.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Target<H>> {
        self.targets.iter()
    }

    pub fn as_slice(&self) -> &[Target<H>] {
        &self.targets
    }

    /// Target at `index` in creation order.
    pub fn nth(&self, index: usize) -> Option<&Target<H>> {
        self.targets.get(index)
    }

    pub fn get(&self, color: &ColorName) -> Option<&Target<H>> {
        self.targets.iter().find(|t| t.color() == color)
    }

    pub(crate) fn get_mut(&mut self, color: &ColorName) -> Option<&mut Target<H>> {
        self.targets.iter_mut().find(|t| t.color() == color)
    }
}
