use gloo_timers::callback::Interval;
use yew::prelude::*;

/// Custom hook that fires `on_tick` every `period_ms` while `active` is true.
///
/// The interval is created when `active` turns on and dropped (which cancels
/// it) when it turns off or the component unmounts.
#[hook]
pub fn use_interval(active: bool, period_ms: u32, on_tick: Callback<()>) {
    use_effect_with(active, move |&active| {
        let interval = active.then(|| Interval::new(period_ms, move || on_tick.emit(())));
        move || drop(interval)
    });
}
