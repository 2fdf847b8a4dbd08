use blind_timer::{Command, TimerState, Transition};
use std::rc::Rc;
use yew::prelude::*;

/// Reducer state for the widget: the timer plus a counter of completed
/// levels, which drives the alert effect.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct WidgetState {
    pub timer: TimerState,
    pub chime: u64,
}

impl WidgetState {
    pub fn new(timer: TimerState) -> Self {
        Self { timer, chime: 0 }
    }
}

impl Reducible for WidgetState {
    type Action = Command;

    fn reduce(self: Rc<Self>, action: Command) -> Rc<Self> {
        let mut timer = self.timer.clone();
        match timer.apply(action) {
            Transition::Unchanged => self,
            Transition::Changed => Rc::new(Self {
                timer,
                chime: self.chime,
            }),
            Transition::LevelComplete => Rc::new(Self {
                timer,
                chime: self.chime.wrapping_add(1),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use blind_timer::snapshot::restore;

    #[test]
    fn chime_counts_level_completions() {
        let raw = r#"{"timeRemaining":2,"timerDuration":1,"currentLevel":1,"smallBlind":1,"bigBlind":2}"#;
        let mut state = Rc::new(WidgetState::new(restore(Some(raw))));

        state = state.reduce(Command::ToggleRunning);
        state = state.reduce(Command::Tick);
        assert_eq!(state.chime, 0);

        state = state.reduce(Command::Tick);
        assert_eq!(state.chime, 1);
        assert_eq!(state.timer.current_level(), 2);
        assert!(!state.timer.is_running());

        // Paused: stray ticks are ignored and do not chime again.
        state = state.reduce(Command::Tick);
        assert_eq!(state.chime, 1);
    }

    #[test]
    fn unchanged_commands_keep_the_same_allocation() {
        let state = Rc::new(WidgetState::default());
        let next = state.clone().reduce(Command::BlindsDown);
        assert!(Rc::ptr_eq(&state, &next));
    }
}
