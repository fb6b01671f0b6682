//! Turns mouse clicks and keys into note click flags.
use bevy::prelude::*;
use bevy::window::PrimaryWindow;

use crate::utils::constants::note_constants::NOTE_RADIUS;
use crate::utils::objects::{MusicNote, MusicNotesGame, PendingClicks, PendingRestart};

/// Number keys selecting the notes, in spawn order.
const NOTE_KEYS: [KeyCode; 9] = [
    KeyCode::Digit1,
    KeyCode::Digit2,
    KeyCode::Digit3,
    KeyCode::Digit4,
    KeyCode::Digit5,
    KeyCode::Digit6,
    KeyCode::Digit7,
    KeyCode::Digit8,
    KeyCode::Digit9,
];

/// Distance along the ray to the first hit with the sphere, if any.
/// `direction` must be normalized.
pub fn ray_sphere_distance(
    origin: Vec3,
    direction: Vec3,
    center: Vec3,
    radius: f32,
) -> Option<f32> {
    let to_center = center - origin;
    let along = to_center.dot(direction);
    let closest_sq = to_center.length_squared() - along * along;
    let radius_sq = radius * radius;
    if closest_sq > radius_sq {
        return None;
    }
    let half_chord = (radius_sq - closest_sq).sqrt();
    let near = along - half_chord;
    let far = along + half_chord;
    if far < 0.0 {
        // Sphere is behind the ray
        return None;
    }
    Some(if near >= 0.0 { near } else { far })
}

/// Number keys click notes, R asks for a new sequence.
pub fn handle_keyboard_input(
    keyboard: Res<ButtonInput<KeyCode>>,
    game: Option<Res<MusicNotesGame>>,
    mut clicks: ResMut<PendingClicks>,
    mut restart: ResMut<PendingRestart>,
) {
    if keyboard.just_pressed(KeyCode::KeyR) {
        restart.0 = true;
    }

    let Some(game) = game else { return };
    for (index, key) in NOTE_KEYS.iter().enumerate() {
        if !keyboard.just_pressed(*key) {
            continue;
        }
        if let Some(target) = game.0.targets().nth(index) {
            debug!("key {:?} clicked {}", key, target.color());
            clicks.0.press(target.color().clone());
        }
    }
}

/// Left click on a note sets its flag. The nearest note under the cursor wins.
pub fn handle_mouse_click(
    mouse: Res<ButtonInput<MouseButton>>,
    windows: Query<&Window, With<PrimaryWindow>>,
    camera_query: Query<(&Camera, &GlobalTransform), With<Camera3d>>,
    notes: Query<(&MusicNote, &GlobalTransform)>,
    mut clicks: ResMut<PendingClicks>,
) {
    if !mouse.just_pressed(MouseButton::Left) {
        return;
    }
    let Ok(window) = windows.single() else {
        return;
    };
    let Some(cursor) = window.cursor_position() else {
        return;
    };
    let Ok((camera, camera_transform)) = camera_query.single() else {
        return;
    };
    let Ok(ray) = camera.viewport_to_world(camera_transform, cursor) else {
        return;
    };

    let hit = notes
        .iter()
        .filter_map(|(note, transform)| {
            ray_sphere_distance(ray.origin, *ray.direction, transform.translation(), NOTE_RADIUS)
                .map(|distance| (distance, note))
        })
        .min_by(|a, b| a.0.total_cmp(&b.0));

    if let Some((_, note)) = hit {
        debug!("mouse clicked {}", note.color);
        clicks.0.press(note.color.clone());
    }
}
