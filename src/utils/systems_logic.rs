//! Systems logic: drives the session on the fixed timestep and shows its state.
use bevy::prelude::*;

use crate::game::{GameSession, GameState};
use crate::utils::inputs::{handle_keyboard_input, handle_mouse_click};
use crate::utils::objects::{
    MusicNote, MusicNotesGame, NoteHandle, PendingClicks, PendingRestart, RandomGen, StatusText,
};
use crate::utils::setup::{setup_environment, setup_round};

// Plugin for managing all the game systems.
pub struct SystemsLogicPlugin;

impl Plugin for SystemsLogicPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<PendingClicks>()
            .init_resource::<PendingRestart>()
            .add_systems(Startup, (setup_environment, setup_round).chain())
            // Inputs are collected every rendered frame and kept until the session reads them
            .add_systems(
                Update,
                (
                    handle_keyboard_input,
                    handle_mouse_click,
                    handle_restart,
                    update_status_text,
                )
                    .chain(),
            )
            // One session frame per fixed timestep
            .add_systems(FixedUpdate, (advance_game, sync_note_transforms).chain());
    }
}

/// Advances the session by one frame with the clicks gathered so far.
fn advance_game(
    game: Option<ResMut<MusicNotesGame>>,
    mut clicks: ResMut<PendingClicks>,
    mut random_gen: ResMut<RandomGen>,
) {
    let Some(mut game) = game else { return };
    let before = game.0.state();
    let after = game.0.advance_frame(&mut clicks.0, &mut random_gen.random_gen);
    if before != after && after.is_terminal() {
        info!("Game over: {}", after);
    }
}

/// Copies the mirrored note positions onto the entities.
fn sync_note_transforms(
    game: Option<Res<MusicNotesGame>>,
    mut notes: Query<&mut Transform, With<MusicNote>>,
) {
    let Some(game) = game else { return };
    for target in game.0.targets().iter() {
        let handle: &NoteHandle = target.handle();
        if let Ok(mut transform) = notes.get_mut(handle.entity) {
            if transform.translation != handle.translation {
                transform.translation = handle.translation;
            }
        }
    }
}

fn handle_restart(
    mut restart: ResMut<PendingRestart>,
    game: Option<ResMut<MusicNotesGame>>,
    mut clicks: ResMut<PendingClicks>,
    mut random_gen: ResMut<RandomGen>,
) {
    if !restart.0 {
        return;
    }
    restart.0 = false;

    let Some(mut game) = game else { return };
    clicks.0.clear_all();
    game.0.restart(&mut random_gen.random_gen);
    info!("Restart requested, new sequence of {} notes", game.0.sequence().len());
}

/// One line describing where the session is.
pub fn status_line<H: crate::game::Translatable>(session: &GameSession<H>) -> String {
    if let Some(err) = session.setup_error() {
        return format!("Cannot start: {err}");
    }
    let progress = format!("{}/{}", session.cursor() + 1, session.sequence().len());
    match session.state() {
        GameState::Idle => "Waiting...".to_string(),
        GameState::Show | GameState::WaitShow => format!("Watch the notes! {progress}"),
        GameState::Play | GameState::WaitPlay => {
            format!("Your turn: click the notes in order (1-9 or mouse) {progress}")
        }
        GameState::Win => "CONGRATULATIONS! YOU WIN!\nPress R to play again".to_string(),
        GameState::Loss => "Wrong note, you lose!\nPress R to play again".to_string(),
    }
}

fn update_status_text(
    game: Option<Res<MusicNotesGame>>,
    mut texts: Query<&mut Text, With<StatusText>>,
) {
    let Some(game) = game else { return };
    if !game.is_changed() {
        return;
    }
    let line = status_line(&game.0);
    for mut text in texts.iter_mut() {
        if text.0 != line {
            text.0 = line.clone();
        }
    }
}
