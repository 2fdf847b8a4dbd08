//! Blind timer core: the countdown/blind state machine and its derived values.
//!
//! Everything here is pure so the browser side only has to dispatch
//! [`Command`]s and render what comes back.

use log::{debug, info};

pub mod chips;
pub mod snapshot;

/// Default timer parameters
pub mod defaults {
    pub const DURATION_MINUTES: u32 = 25;
    pub const MIN_DURATION_MINUTES: u32 = 1;
    pub const MAX_DURATION_MINUTES: u32 = 120;
    pub const STARTING_LEVEL: u32 = 1;
    pub const STARTING_SMALL_BLIND: u64 = 1;
}

/// Everything that can happen to the timer, either from the 1-second
/// interval or from the controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Tick,
    ToggleRunning,
    Reset,
    /// Raw minutes from the duration field; clamped on application.
    SetDuration(i64),
    BlindsUp,
    BlindsDown,
}

/// What a command did to the state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    Unchanged,
    Changed,
    /// The countdown ran out: blinds went up and the clock stopped.
    LevelComplete,
}

/// Timer and blind state for one tournament.
///
/// The big blind is never stored; it is always twice the small blind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimerState {
    pub(crate) time_remaining: u32,
    pub(crate) timer_duration: u32,
    pub(crate) is_running: bool,
    pub(crate) current_level: u32,
    pub(crate) small_blind: u64,
}

impl Default for TimerState {
    fn default() -> Self {
        Self::with_duration(defaults::DURATION_MINUTES)
    }
}

impl TimerState {
    /// Fresh level-1 state for the given (already clamped) duration.
    fn with_duration(minutes: u32) -> Self {
        Self {
            time_remaining: minutes * 60,
            timer_duration: minutes,
            is_running: false,
            current_level: defaults::STARTING_LEVEL,
            small_blind: defaults::STARTING_SMALL_BLIND,
        }
    }

    pub fn time_remaining(&self) -> u32 {
        self.time_remaining
    }

    pub fn timer_duration(&self) -> u32 {
        self.timer_duration
    }

    pub fn is_running(&self) -> bool {
        self.is_running
    }

    pub fn current_level(&self) -> u32 {
        self.current_level
    }

    pub fn small_blind(&self) -> u64 {
        self.small_blind
    }

    #[inline]
    pub fn big_blind(&self) -> u64 {
        self.small_blind * 2
    }

    /// Length of one level in seconds.
    #[inline]
    pub fn duration_seconds(&self) -> u32 {
        self.timer_duration * 60
    }

    /// Share of the level still left on the clock, in percent (0-100).
    pub fn burn_percentage(&self) -> f64 {
        let total = self.duration_seconds();
        if total == 0 {
            return 0.0;
        }
        (self.time_remaining as f64 / total as f64 * 100.0).clamp(0.0, 100.0)
    }

    /// Apply a single command and report what happened.
    pub fn apply(&mut self, command: Command) -> Transition {
        match command {
            Command::Tick => self.tick(),
            Command::ToggleRunning => self.toggle_running(),
            Command::Reset => self.reset(),
            Command::SetDuration(minutes) => self.set_duration(minutes),
            Command::BlindsUp => self.blinds_up(),
            Command::BlindsDown => self.blinds_down(),
        }
    }

    /// One second of countdown. The level completes on the tick that takes
    /// the clock from 1 to 0.
    pub fn tick(&mut self) -> Transition {
        if !self.is_running {
            return Transition::Unchanged;
        }
        if self.time_remaining > 1 {
            self.time_remaining -= 1;
            return Transition::Changed;
        }

        if !self.raise_blinds() {
            debug!("Blinds at {} cannot double any further", self.small_blind);
        }
        self.time_remaining = self.duration_seconds();
        self.is_running = false;
        info!(
            "Level complete: now level {} at {}/{}",
            self.current_level,
            self.small_blind,
            self.big_blind()
        );
        Transition::LevelComplete
    }

    pub fn toggle_running(&mut self) -> Transition {
        self.is_running = !self.is_running;
        Transition::Changed
    }

    /// Back to level 1 with a full clock, keeping the configured duration.
    pub fn reset(&mut self) -> Transition {
        let fresh = Self::with_duration(self.timer_duration);
        if *self == fresh {
            return Transition::Unchanged;
        }
        *self = fresh;
        info!("Timer reset to level {}", self.current_level);
        Transition::Changed
    }

    /// Change the level length. While paused the clock restarts at the new
    /// length; while running it only applies from the next level (the clock
    /// is capped so it never exceeds the new length).
    pub fn set_duration(&mut self, minutes: i64) -> Transition {
        let minutes = clamp_duration(minutes);
        let before = (self.timer_duration, self.time_remaining);
        self.timer_duration = minutes;
        if self.is_running {
            self.time_remaining = self.time_remaining.min(self.duration_seconds());
        } else {
            self.time_remaining = self.duration_seconds();
        }
        if before == (self.timer_duration, self.time_remaining) {
            Transition::Unchanged
        } else {
            Transition::Changed
        }
    }

    pub fn blinds_up(&mut self) -> Transition {
        if self.raise_blinds() {
            Transition::Changed
        } else {
            Transition::Unchanged
        }
    }

    /// Halve the blinds and drop a level. Not allowed on level 1.
    pub fn blinds_down(&mut self) -> Transition {
        if self.current_level <= 1 || self.small_blind < 2 {
            return Transition::Unchanged;
        }
        self.small_blind /= 2;
        self.current_level -= 1;
        Transition::Changed
    }

    /// Double both blinds and advance a level, unless the big blind would
    /// overflow.
    fn raise_blinds(&mut self) -> bool {
        if self.small_blind.checked_mul(4).is_none() {
            return false;
        }
        self.small_blind *= 2;
        self.current_level += 1;
        true
    }
}

/// Clamp a requested duration into the allowed minute range.
pub fn clamp_duration(minutes: i64) -> u32 {
    minutes.clamp(
        defaults::MIN_DURATION_MINUTES as i64,
        defaults::MAX_DURATION_MINUTES as i64,
    ) as u32
}

/// Format seconds as `M:SS` (minutes are not padded).
pub fn format_time(seconds: u32) -> String {
    format!("{}:{:02}", seconds / 60, seconds % 60)
}
