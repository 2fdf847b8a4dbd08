//! Application-level configuration constants.

// Persistence
pub const STORAGE_KEY: &str = "pokerTimerState";

// Countdown cadence
pub const TICK_MS: u32 = 1_000;

// Level alert tone
pub const TONE_FREQUENCY_HZ: f32 = 800.0;
pub const TONE_START_GAIN: f32 = 0.3;
pub const TONE_END_GAIN: f32 = 0.01;
pub const TONE_SECONDS: f64 = 0.5;
