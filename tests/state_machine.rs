//! Scripted play-throughs of a session.

use bevy::math::Vec3;
use music_notes::game::{
    ClickFlags, ColorName, GameSession, GameState, Sequence, SessionConfig, Target,
};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn notes() -> Vec<Target<Vec3>> {
    ["MusicNoteRed", "MusicNoteBlue", "MusicNoteGreen"]
        .iter()
        .enumerate()
        .map(|(i, name)| Target::from_note_name(name, Vec3::new(i as f32 * 2.5, 1.5, 0.0)))
        .collect()
}

fn colors(names: &[&str]) -> Sequence {
    Sequence::from_colors(names.iter().map(|n| ColorName::new(*n)).collect())
}

/// Every frame is both a vibration and a main tick.
fn every_frame() -> SessionConfig {
    SessionConfig {
        main_interval: 1,
        vibration_interval: 1,
        ..Default::default()
    }
}

struct Harness {
    session: GameSession<Vec3>,
    clicks: ClickFlags,
    rng: ChaCha8Rng,
    /// State before each advanced frame.
    trace: Vec<GameState>,
}

impl Harness {
    fn new(sequence: &[&str]) -> Self {
        Self {
            session: GameSession::with_sequence(notes(), &every_frame(), colors(sequence)),
            clicks: ClickFlags::default(),
            rng: ChaCha8Rng::seed_from_u64(69),
            trace: Vec::new(),
        }
    }

    fn frame(&mut self) -> GameState {
        self.trace.push(self.session.state());
        self.session.advance_frame(&mut self.clicks, &mut self.rng)
    }

    fn click(&mut self, color: &str) -> GameState {
        self.clicks.press(ColorName::new(color));
        self.frame()
    }

    fn run_until(&mut self, state: GameState, max_frames: usize) {
        for _ in 0..max_frames {
            if self.session.state() == state {
                return;
            }
            self.frame();
        }
        assert_eq!(self.session.state(), state, "not reached within {max_frames} frames");
    }

    fn count(&self, state: GameState) -> usize {
        self.trace.iter().filter(|s| **s == state).count()
    }

    fn assert_all_at_rest(&self) {
        for target in self.session.targets().iter() {
            assert_eq!(target.position(), target.rest_position(), "{} displaced", target.color());
        }
    }
}

#[test]
fn correct_answers_win() {
    let mut h = Harness::new(&["Red", "Blue", "Red"]);
    assert_eq!(h.session.state(), GameState::Show);

    h.run_until(GameState::Play, 20);
    assert_eq!(h.count(GameState::Show), 3);
    assert_eq!(h.count(GameState::WaitShow), 3);
    assert_eq!(h.session.cursor(), 0);
    h.assert_all_at_rest();

    // No click: nothing happens
    assert_eq!(h.frame(), GameState::Play);

    assert_eq!(h.click("Red"), GameState::WaitPlay);
    assert_eq!(h.session.active_color(), Some(&ColorName::new("Red")));
    assert_eq!(h.frame(), GameState::Play);
    assert_eq!(h.session.cursor(), 1);

    assert_eq!(h.click("Blue"), GameState::WaitPlay);
    assert_eq!(h.frame(), GameState::Play);
    assert_eq!(h.session.cursor(), 2);

    assert_eq!(h.click("Red"), GameState::WaitPlay);
    assert_eq!(h.frame(), GameState::Win);

    // Three PLAY ticks resolved a click, plus the one idle PLAY tick
    assert_eq!(h.count(GameState::Play), 4);
    assert_eq!(h.count(GameState::WaitPlay), 3);
    assert!(h.session.active_color().is_none());
    h.assert_all_at_rest();

    for _ in 0..10 {
        assert_eq!(h.click("Green"), GameState::Win);
    }
}

#[test]
fn wrong_answer_loses_for_good() {
    let mut h = Harness::new(&["Red", "Blue"]);
    h.run_until(GameState::Play, 20);

    assert_eq!(h.click("Green"), GameState::Loss);
    assert!(h.clicks.is_empty());

    for _ in 0..10 {
        assert_eq!(h.click("Red"), GameState::Loss);
    }
    assert_eq!(h.session.cursor(), 0);
}

#[test]
fn wrong_answer_late_in_the_sequence_loses() {
    let mut h = Harness::new(&["Red", "Blue"]);
    h.run_until(GameState::Play, 20);

    assert_eq!(h.click("Red"), GameState::WaitPlay);
    assert_eq!(h.frame(), GameState::Play);
    assert_eq!(h.click("Red"), GameState::Loss);
}

#[test]
fn simultaneous_clicks_are_ignored_and_cleared() {
    let mut h = Harness::new(&["Red", "Blue"]);
    h.run_until(GameState::Play, 20);

    h.clicks.press(ColorName::new("Red"));
    h.clicks.press(ColorName::new("Blue"));
    assert_eq!(h.frame(), GameState::Play);
    assert!(h.clicks.is_empty());

    assert_eq!(h.click("Red"), GameState::WaitPlay);
}

#[test]
fn click_during_wait_show_resolves_on_first_play_tick() {
    let mut h = Harness::new(&["Red", "Blue"]);
    assert_eq!(h.frame(), GameState::WaitShow);

    // Clicked while the sequence is still being shown
    h.clicks.press(ColorName::new("Red"));
    h.run_until(GameState::Play, 20);
    assert!(h.clicks.is_pressed(&ColorName::new("Red")));

    assert_eq!(h.frame(), GameState::WaitPlay);
    assert!(h.clicks.is_empty());
    assert_eq!(h.session.active_color(), Some(&ColorName::new("Red")));
    assert_eq!(h.frame(), GameState::Play);
    assert_eq!(h.session.cursor(), 1);
}

#[test]
fn clicks_during_wait_play_are_dropped() {
    let mut h = Harness::new(&["Red", "Blue"]);
    h.run_until(GameState::Play, 20);

    assert_eq!(h.click("Red"), GameState::WaitPlay);
    // Clicked while the feedback vibration runs
    assert_eq!(h.click("Blue"), GameState::Play);
    assert!(h.clicks.is_empty());
    assert_eq!(h.frame(), GameState::Play);
}

#[test]
fn revealed_note_vibrates_then_returns_to_rest() {
    let mut h = Harness::new(&["Blue", "Red"]);
    let blue_rest = Vec3::new(2.5, 1.5, 0.0);
    let max = SessionConfig::default().jitter.max_offset() + 1e-5;

    assert_eq!(h.frame(), GameState::WaitShow);
    assert_eq!(h.session.active_color(), Some(&ColorName::new("Blue")));

    // WAIT_SHOW tick: vibrates once more, then stops
    assert_eq!(h.frame(), GameState::Show);
    let blue = h
        .session
        .targets()
        .get(&ColorName::new("Blue"))
        .map(|t| t.position());
    assert_eq!(blue, Some(blue_rest));

    // SHOW of Red; the next frame vibrates it before WAIT_SHOW stops it again
    let mut rng = ChaCha8Rng::seed_from_u64(0);
    let mut moved = Vec3::ZERO;
    let mut session = GameSession::with_sequence(
        notes(),
        &SessionConfig {
            main_interval: 50,
            vibration_interval: 1,
            ..Default::default()
        },
        colors(&["Red"]),
    );
    let mut clicks = ClickFlags::default();
    session.advance_frame(&mut clicks, &mut rng);
    for _ in 0..40 {
        session.advance_frame(&mut clicks, &mut rng);
        let red = session
            .targets()
            .get(&ColorName::new("Red"))
            .map(|t| (t.position(), t.rest_position()));
        let Some((pos, rest)) = red else {
            panic!("red note missing")
        };
        let offset = pos - rest;
        assert!(offset.x.abs() <= max && offset.z.abs() <= max, "{offset:?}");
        assert_eq!(offset.y, 0.0);
        moved = moved.max(offset.abs());
    }
    assert!(moved.x > 0.0 || moved.z > 0.0);
}

#[test]
fn default_cadence_steps_every_180_frames() {
    let mut rng = ChaCha8Rng::seed_from_u64(69);
    let mut clicks = ClickFlags::default();
    let mut session = GameSession::initialize(notes(), &SessionConfig::default(), &mut rng);
    assert_eq!(session.state(), GameState::Show);

    // Fires on the very first frame
    assert_eq!(session.advance_frame(&mut clicks, &mut rng), GameState::WaitShow);
    for _ in 2..=180 {
        assert_eq!(session.advance_frame(&mut clicks, &mut rng), GameState::WaitShow);
    }
    assert_eq!(session.advance_frame(&mut clicks, &mut rng), GameState::Show);
    assert_eq!(session.cursor(), 1);
    assert_eq!(session.frame(), 181);
}

#[test]
fn too_few_notes_stay_idle() {
    for count in 0..2 {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let mut clicks = ClickFlags::default();
        let targets: Vec<Target<Vec3>> = notes().into_iter().take(count).collect();
        let mut session = GameSession::initialize(targets, &every_frame(), &mut rng);

        for _ in 0..20 {
            clicks.press(ColorName::new("Red"));
            assert_eq!(session.advance_frame(&mut clicks, &mut rng), GameState::Idle);
        }
        assert!(session.sequence().is_empty());
        assert!(session.setup_error().is_some());
    }
}
