//! The game's timed state machine.
//!
//! A session reveals its sequence one note at a time (SHOW / WAIT_SHOW), then
//! waits for the player to click the notes back in order (PLAY / WAIT_PLAY)
//! until it ends in WIN or LOSS. Transitions only happen on main-cadence
//! ticks of the frame clock; the active note vibrates on the faster
//! vibration cadence in between.
use std::fmt;

use log::{debug, error, info, warn};
use rand::Rng;

use crate::game::animator::TargetAnimator;
use crate::game::clock::FrameClock;
use crate::game::colors::{ColorCatalog, ColorName};
use crate::game::config::SessionConfig;
use crate::game::error::{InvalidStateCode, SetupError};
use crate::game::input::{Activation, ClickFlags, reset_all, which_activated};
use crate::game::sequence::Sequence;
use crate::game::target::{Target, TargetSet, Translatable};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum GameState {
    #[default]
    Idle,
    WaitShow,
    Show,
    WaitPlay,
    Play,
    Loss,
    Win,
}

impl GameState {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Idle => "IDLE",
            Self::WaitShow => "WAIT_SHOW",
            Self::Show => "SHOW",
            Self::WaitPlay => "WAIT_PLAY",
            Self::Play => "PLAY",
            Self::Loss => "LOSS",
            Self::Win => "WIN",
        }
    }

    /// LOSS and WIN end the session.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Loss | Self::Win)
    }

    pub fn code(&self) -> u8 {
        *self as u8
    }
}

impl fmt::Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl TryFrom<u8> for GameState {
    type Error = InvalidStateCode;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(Self::Idle),
            1 => Ok(Self::WaitShow),
            2 => Ok(Self::Show),
            3 => Ok(Self::WaitPlay),
            4 => Ok(Self::Play),
            5 => Ok(Self::Loss),
            6 => Ok(Self::Win),
            other => Err(InvalidStateCode(other)),
        }
    }
}

/// One play-through, from sequence generation to WIN or LOSS.
#[derive(Clone, Debug)]
pub struct GameSession<H> {
    state: GameState,
    sequence: Sequence,
    cursor: usize,
    sequence_length: usize,
    targets: TargetSet<H>,
    catalog: Option<ColorCatalog>,
    animator: TargetAnimator,
    clock: FrameClock,
    setup_error: Option<SetupError>,
}

impl<H: Translatable> GameSession<H> {
    /// IDLE session that has not been set up yet.
    fn inert(targets: Vec<Target<H>>, config: &SessionConfig) -> Self {
        Self {
            state: GameState::Idle,
            sequence: Sequence::default(),
            cursor: 0,
            sequence_length: config.sequence_length,
            targets: TargetSet::new(targets),
            catalog: None,
            animator: TargetAnimator::new(config.jitter),
            clock: FrameClock::new(config.vibration_interval, config.main_interval),
            setup_error: None,
        }
    }

    /// Generates a random sequence over the targets' colors and starts showing it.
    ///
    /// If the targets cannot make a game (fewer than two, or a repeated color),
    /// the error is logged and the session stays IDLE for good.
    pub fn initialize<R: Rng + ?Sized>(
        targets: Vec<Target<H>>,
        config: &SessionConfig,
        rng: &mut R,
    ) -> Self {
        let mut session = Self::inert(targets, config);
        let started = ColorCatalog::from_targets(session.targets.as_slice()).and_then(|catalog| {
            let sequence = Sequence::generate(config.sequence_length, &catalog, rng);
            session.begin(catalog, sequence)
        });
        if let Err(err) = started {
            session.fail_setup(err);
        }
        session
    }

    /// Like [`GameSession::initialize`], with a fixed sequence.
    pub fn with_sequence(
        targets: Vec<Target<H>>,
        config: &SessionConfig,
        sequence: Sequence,
    ) -> Self {
        let mut session = Self::inert(targets, config);
        let started = ColorCatalog::from_targets(session.targets.as_slice())
            .and_then(|catalog| session.begin(catalog, sequence));
        if let Err(err) = started {
            session.fail_setup(err);
        }
        session
    }

    fn begin(&mut self, catalog: ColorCatalog, sequence: Sequence) -> Result<(), SetupError> {
        if sequence.is_empty() {
            return Err(SetupError::EmptySequence);
        }
        if let Some(unknown) = sequence.colors().iter().find(|c| !catalog.contains(c)) {
            return Err(SetupError::UnknownColor(unknown.clone()));
        }
        self.sequence_length = sequence.len();
        self.sequence = sequence;
        self.catalog = Some(catalog);
        self.setup_error = None;
        self.start_game_mode(GameState::Show);
        Ok(())
    }

    fn fail_setup(&mut self, err: SetupError) {
        error!("cannot start the game: {err}");
        self.setup_error = Some(err);
        self.start_game_mode(GameState::Idle);
    }

    /// Draws a fresh sequence and shows it from the start.
    pub fn restart<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let Some(catalog) = self.catalog.clone() else {
            warn!("restart ignored, the game was never set up");
            return;
        };
        let sequence = Sequence::generate(self.sequence_length, &catalog, rng);
        self.clock.reset();
        if let Err(err) = self.begin(catalog, sequence) {
            self.fail_setup(err);
        }
    }

    /// Advances one frame. Returns the state after the frame.
    pub fn advance_frame<R: Rng + ?Sized>(
        &mut self,
        clicks: &mut ClickFlags,
        rng: &mut R,
    ) -> GameState {
        let ticks = self.clock.advance();
        if ticks.vibrate {
            self.animator.vibrate(&mut self.targets, rng);
        }
        if ticks.main {
            self.step(clicks);
        }
        self.state
    }

    /// Sets the state from its numeric code; unknown codes reset to IDLE.
    ///
    /// A session that failed setup only ever goes back to IDLE, and a
    /// finished session (LOSS or WIN) keeps its result.
    pub fn restore_state_code(&mut self, code: u8) {
        match GameState::try_from(code) {
            Ok(state) if self.setup_error.is_some() => {
                error!("{state} restored on a game that was never set up: this is a bug.");
                self.start_game_mode(GameState::Idle);
            }
            Ok(state) if self.state.is_terminal() && state != self.state => {
                warn!("game already ended in {}, ignoring {state}", self.state);
            }
            Ok(state) => self.set_state(state),
            Err(err) => {
                error!("{err}: invalid game state! this is a bug.");
                self.start_game_mode(GameState::Idle);
            }
        }
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn sequence(&self) -> &Sequence {
        &self.sequence
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn active_color(&self) -> Option<&ColorName> {
        self.animator.active()
    }

    pub fn frame(&self) -> u64 {
        self.clock.frame()
    }

    pub fn targets(&self) -> &TargetSet<H> {
        &self.targets
    }

    pub fn setup_error(&self) -> Option<&SetupError> {
        self.setup_error.as_ref()
    }

    fn start_game_mode(&mut self, state: GameState) {
        self.cursor = 0;
        self.animator.stop_vibrating(&mut self.targets);
        info!("Start mode: {state}");
        self.state = state;
    }

    fn set_state(&mut self, state: GameState) {
        info!("Next state: {state}");
        self.state = state;
    }

    fn step(&mut self, clicks: &mut ClickFlags) {
        match self.state {
            GameState::Idle | GameState::Loss | GameState::Win => {}
            GameState::Show => self.update_show(),
            GameState::WaitShow => self.update_wait_show(),
            GameState::Play => self.update_play(clicks),
            GameState::WaitPlay => self.update_wait_play(clicks),
        }
    }

    fn is_last(&self) -> bool {
        self.cursor == self.sequence.last_index()
    }

    fn cursor_out_of_range(&mut self) {
        error!(
            "cursor {} outside a sequence of {} colors: invalid game state! this is a bug.",
            self.cursor,
            self.sequence.len()
        );
        self.start_game_mode(GameState::Idle);
    }

    fn update_show(&mut self) {
        self.animator.stop_vibrating(&mut self.targets);
        let Some(color) = self.sequence.get(self.cursor).cloned() else {
            self.cursor_out_of_range();
            return;
        };
        self.set_state(GameState::WaitShow);
        self.animator.start_vibrating(&mut self.targets, &color);
        info!(
            "show sequence: {}/{} color={} [{}]",
            self.cursor + 1,
            self.sequence.len(),
            color,
            self.sequence
        );
    }

    fn update_wait_show(&mut self) {
        self.animator.stop_vibrating(&mut self.targets);
        if self.is_last() {
            self.start_game_mode(GameState::Play);
        } else {
            self.cursor += 1;
            self.set_state(GameState::Show);
        }
    }

    fn update_play(&mut self, clicks: &mut ClickFlags) {
        let activation = which_activated(&self.targets, clicks);
        reset_all(clicks);

        let clicked = match activation {
            Activation::None => return,
            Activation::Ambiguous => {
                debug!("several notes clicked at once, waiting for a single one");
                return;
            }
            Activation::Single(color) => color,
        };

        let Some(expected) = self.sequence.get(self.cursor).cloned() else {
            self.cursor_out_of_range();
            return;
        };
        info!(
            "play sequence: {}/{} color={} clicked={} [{}]",
            self.cursor + 1,
            self.sequence.len(),
            expected,
            clicked,
            self.sequence
        );

        if clicked == expected {
            self.set_state(GameState::WaitPlay);
            self.animator.start_vibrating(&mut self.targets, &expected);
            info!("going to PLAY-vibrate: {expected}");
        } else {
            self.set_state(GameState::Loss);
        }
    }

    fn update_wait_play(&mut self, clicks: &mut ClickFlags) {
        self.animator.stop_vibrating(&mut self.targets);
        if self.is_last() {
            self.start_game_mode(GameState::Win);
        } else {
            self.cursor += 1;
            reset_all(clicks);
            self.set_state(GameState::Play);
        }
    }
}
