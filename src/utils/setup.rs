//! Setup logic for the music notes game: the scene and the session.
use bevy::prelude::*;

use crate::game::{GameSession, Target};
use crate::log;
use crate::utils::config::GameConfig;
use crate::utils::constants::{
    camera_3d_constants::{CAMERA_3D_INITIAL_X, CAMERA_3D_INITIAL_Y, CAMERA_3D_INITIAL_Z},
    note_constants::{NOTE_RADIUS, NOTE_SPACING, NOTE_Y, NOTES},
    object_constants::{GROUND_SIZE, GROUND_Y, POINT_LIGHT_INTENSITY},
};
use crate::utils::objects::*;

/// Camera, ground and lights.
pub fn setup_environment(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    commands.spawn((
        Camera3d::default(),
        Transform::from_xyz(CAMERA_3D_INITIAL_X, CAMERA_3D_INITIAL_Y, CAMERA_3D_INITIAL_Z)
            .looking_at(Vec3::new(0.0, NOTE_Y, 0.0), Vec3::Y),
    ));

    // Ground Plane
    commands.spawn((
        Mesh3d(meshes.add(Plane3d::default().mesh().size(GROUND_SIZE, GROUND_SIZE))),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: Color::srgb(0.1, 0.1, 0.1),
            perceptual_roughness: 0.8,
            ..default()
        })),
        Transform::from_xyz(0.0, GROUND_Y, 0.0),
    ));

    commands.spawn((
        PointLight {
            intensity: POINT_LIGHT_INTENSITY,
            shadows_enabled: true,
            ..default()
        },
        Transform::from_xyz(0.0, 8.0, 4.0),
    ));

    // Status line, filled in by the systems logic
    commands.spawn((
        Text::new(""),
        TextFont {
            font_size: 24.0,
            ..default()
        },
        TextColor(Color::WHITE),
        Node {
            position_type: PositionType::Absolute,
            top: Val::Px(10.0),
            left: Val::Px(10.0),
            ..default()
        },
        StatusText,
    ));

    log!("🌍 Environment Setup Complete");
}

/// X coordinate of note `index` out of `count`, centered on the origin.
pub fn note_x(index: usize, count: usize) -> f32 {
    (index as f32 - (count.saturating_sub(1)) as f32 / 2.0) * NOTE_SPACING
}

/// Spawns the notes in a row and starts a session over them.
pub fn setup_round(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    mut random_gen: ResMut<RandomGen>,
    config: Res<GameConfig>,
) {
    let note_mesh = meshes.add(Sphere::new(NOTE_RADIUS));

    let mut targets = Vec::with_capacity(NOTES.len());
    for (index, (name, color)) in NOTES.iter().enumerate() {
        let translation = Vec3::new(note_x(index, NOTES.len()), NOTE_Y, 0.0);
        let entity = commands
            .spawn((
                Mesh3d(note_mesh.clone()),
                MeshMaterial3d(materials.add(StandardMaterial {
                    base_color: *color,
                    ..default()
                })),
                Transform::from_translation(translation),
                Name::new(*name),
            ))
            .id();

        let target = Target::from_note_name(name, NoteHandle { entity, translation });
        commands.entity(entity).insert(MusicNote {
            color: target.color().clone(),
        });
        targets.push(target);
    }

    let session = GameSession::initialize(targets, &config.session, &mut random_gen.random_gen);
    log!(
        "🎮 Round Started! state={}, notes={}, sequence length={}",
        session.state(),
        session.targets().len(),
        session.sequence().len()
    );
    commands.insert_resource(MusicNotesGame(session));
}
