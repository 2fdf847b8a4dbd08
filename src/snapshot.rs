//! Persisted form of [`TimerState`].
//!
//! The running flag is deliberately left out so a reloaded page always
//! comes back paused.

use crate::{defaults, TimerState};
use log::warn;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    pub time_remaining: u32,
    pub timer_duration: u32,
    pub current_level: u32,
    pub small_blind: u64,
    pub big_blind: u64,
}

/// Reasons a stored snapshot is refused.
#[derive(Debug)]
pub enum SnapshotError {
    Malformed(String),
    Encode(String),
    DurationOutOfRange(u32),
    TimeOutOfRange { remaining: u32, limit: u32 },
    InvalidLevel,
    InvalidBlinds { small: u64, big: u64 },
}

impl fmt::Display for SnapshotError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SnapshotError::Malformed(err) => write!(f, "Malformed snapshot: {}", err),
            SnapshotError::Encode(err) => write!(f, "Could not encode snapshot: {}", err),
            SnapshotError::DurationOutOfRange(minutes) => write!(
                f,
                "Duration of {} minutes is outside {}-{}",
                minutes,
                defaults::MIN_DURATION_MINUTES,
                defaults::MAX_DURATION_MINUTES
            ),
            SnapshotError::TimeOutOfRange { remaining, limit } => write!(
                f,
                "Time remaining {}s exceeds the level length of {}s",
                remaining, limit
            ),
            SnapshotError::InvalidLevel => write!(f, "Level must be at least 1"),
            SnapshotError::InvalidBlinds { small, big } => write!(
                f,
                "Blinds {}/{} are not a positive small blind with a double big blind",
                small, big
            ),
        }
    }
}

impl std::error::Error for SnapshotError {}

impl From<&TimerState> for Snapshot {
    fn from(state: &TimerState) -> Self {
        Self {
            time_remaining: state.time_remaining,
            timer_duration: state.timer_duration,
            current_level: state.current_level,
            small_blind: state.small_blind,
            big_blind: state.big_blind(),
        }
    }
}

impl Snapshot {
    pub fn to_json(&self) -> Result<String, SnapshotError> {
        serde_json::to_string(self).map_err(|e| SnapshotError::Encode(e.to_string()))
    }

    pub fn from_json(raw: &str) -> Result<Self, SnapshotError> {
        serde_json::from_str(raw).map_err(|e| SnapshotError::Malformed(e.to_string()))
    }

    /// Rebuild a paused [`TimerState`], refusing anything that breaks the
    /// timer's invariants.
    pub fn into_state(self) -> Result<TimerState, SnapshotError> {
        if !(defaults::MIN_DURATION_MINUTES..=defaults::MAX_DURATION_MINUTES)
            .contains(&self.timer_duration)
        {
            return Err(SnapshotError::DurationOutOfRange(self.timer_duration));
        }
        let limit = self.timer_duration * 60;
        if self.time_remaining > limit {
            return Err(SnapshotError::TimeOutOfRange {
                remaining: self.time_remaining,
                limit,
            });
        }
        if self.current_level < 1 {
            return Err(SnapshotError::InvalidLevel);
        }
        if self.small_blind == 0 || self.small_blind.checked_mul(2) != Some(self.big_blind) {
            return Err(SnapshotError::InvalidBlinds {
                small: self.small_blind,
                big: self.big_blind,
            });
        }

        Ok(TimerState {
            time_remaining: self.time_remaining,
            timer_duration: self.timer_duration,
            is_running: false,
            current_level: self.current_level,
            small_blind: self.small_blind,
        })
    }
}

/// Startup state: the stored snapshot when it is usable, defaults otherwise.
pub fn restore(raw: Option<&str>) -> TimerState {
    let Some(raw) = raw else {
        return TimerState::default();
    };
    match Snapshot::from_json(raw).and_then(Snapshot::into_state) {
        Ok(state) => state,
        Err(e) => {
            warn!("Error loading saved state: {}", e);
            TimerState::default()
        }
    }
}
