//! Frame clock: turns one "advance" call per frame into cadence ticks.

/// True on the first frame (counter 0) and on every multiple of `interval`.
pub fn is_interval_boundary(counter: u64, interval: u32) -> bool {
    counter == 0 || counter % u64::from(interval.max(1)) == 0
}

/// One cadence with its own frame counter.
///
/// Fires immediately, then every `interval` calls to [`Cadence::tick`].
/// With `reset_on_fire` the counter goes back to zero whenever it fires,
/// which keeps it bounded; the firing pattern is the same either way.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Cadence {
    interval: u32,
    counter: u64,
    reset_on_fire: bool,
}

impl Cadence {
    pub fn every(interval: u32, reset_on_fire: bool) -> Self {
        Self {
            interval: interval.max(1),
            counter: 0,
            reset_on_fire,
        }
    }

    pub fn tick(&mut self) -> bool {
        let fired = is_interval_boundary(self.counter, self.interval);
        if fired && self.reset_on_fire {
            self.counter = 0;
        }
        self.counter = self.counter.wrapping_add(1);
        fired
    }

    /// Start over, next tick fires.
    pub fn reset(&mut self) {
        self.counter = 0;
    }
}

/// Which cadences fired during one frame.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FrameTicks {
    pub vibrate: bool,
    pub main: bool,
}

/// Vibration and main-loop cadences, each with an independent counter.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrameClock {
    frame: u64,
    vibration: Cadence,
    main: Cadence,
}

impl FrameClock {
    pub fn new(vibration_interval: u32, main_interval: u32) -> Self {
        Self {
            frame: 0,
            vibration: Cadence::every(vibration_interval, false),
            main: Cadence::every(main_interval, true),
        }
    }

    /// Frames advanced so far.
    pub fn frame(&self) -> u64 {
        self.frame
    }

    pub fn advance(&mut self) -> FrameTicks {
        self.frame = self.frame.wrapping_add(1);
        FrameTicks {
            vibrate: self.vibration.tick(),
            main: self.main.tick(),
        }
    }

    pub fn reset(&mut self) {
        self.frame = 0;
        self.vibration.reset();
        self.main.reset();
    }
}
