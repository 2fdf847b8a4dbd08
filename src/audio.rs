//! Level alert tone through the Web Audio API.

use crate::config::{TONE_END_GAIN, TONE_FREQUENCY_HZ, TONE_SECONDS, TONE_START_GAIN};
use log::warn;
use std::cell::RefCell;
use std::fmt;
use wasm_bindgen::JsValue;
use web_sys::{AudioContext, OscillatorType};

#[derive(Debug)]
pub struct AudioError(String);

impl fmt::Display for AudioError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Web Audio error: {}", self.0)
    }
}

impl std::error::Error for AudioError {}

impl From<JsValue> for AudioError {
    fn from(value: JsValue) -> Self {
        AudioError(format!("{:?}", value))
    }
}

thread_local! {
    /// Shared by every beep on the page.
    static AUDIO_CONTEXT: RefCell<Option<AudioContext>> = RefCell::new(None);
}

/// Return the value in `slot`, creating and storing it on first use.
/// A failed creation leaves the slot empty so the next call retries.
fn reuse_or_create<T: Clone, E>(
    slot: &RefCell<Option<T>>,
    create: impl FnOnce() -> Result<T, E>,
) -> Result<T, E> {
    let mut slot = slot.borrow_mut();
    if let Some(existing) = slot.as_ref() {
        return Ok(existing.clone());
    }
    let created = create()?;
    *slot = Some(created.clone());
    Ok(created)
}

fn audio_context() -> Result<AudioContext, AudioError> {
    AUDIO_CONTEXT.with(|slot| {
        reuse_or_create(slot, || AudioContext::new().map_err(AudioError::from))
    })
}

/// Play the short square-wave beep. Never fails the caller; a browser
/// without audio just stays silent.
pub fn play_beep() {
    if let Err(e) = schedule_beep() {
        warn!("Could not play level alert: {}", e);
    }
}

fn schedule_beep() -> Result<(), AudioError> {
    let ctx = audio_context()?;
    let oscillator = ctx.create_oscillator()?;
    let gain = ctx.create_gain()?;

    oscillator.connect_with_audio_node(&gain)?;
    gain.connect_with_audio_node(&ctx.destination())?;

    oscillator.set_type(OscillatorType::Square);
    oscillator.frequency().set_value(TONE_FREQUENCY_HZ);

    let now = ctx.current_time();
    let end = now + TONE_SECONDS;
    gain.gain().set_value_at_time(TONE_START_GAIN, now)?;
    gain.gain().exponential_ramp_to_value_at_time(TONE_END_GAIN, end)?;

    oscillator.start_with_when(now)?;
    oscillator.stop_with_when(end)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn creates_once_then_reuses() {
        let slot = RefCell::new(None);
        let mut created = 0;

        for _ in 0..3 {
            let value = reuse_or_create(&slot, || {
                created += 1;
                Ok::<_, ()>(7)
            });
            assert_eq!(value, Ok(7));
        }
        assert_eq!(created, 1);
    }

    #[test]
    fn failed_creation_is_retried() {
        let slot: RefCell<Option<u32>> = RefCell::new(None);
        assert_eq!(reuse_or_create(&slot, || Err("no audio")), Err("no audio"));
        assert!(slot.borrow().is_none());
        assert_eq!(reuse_or_create(&slot, || Ok::<_, &str>(3)), Ok(3));
        assert_eq!(*slot.borrow(), Some(3));
    }
}
