//! Main module for the Poker Blind Timer application using Yew.
//! Wires UI components, state hooks, and side-effect logic.

use blind_timer::{format_time, snapshot, snapshot::Snapshot, Command};
use log::{info, warn};
use web_sys::HtmlInputElement;
use yew::prelude::*;

mod audio;
mod components;
mod config;
mod hooks;
mod state;
mod storage;
mod utils;

use components::{BlindInfo, BurnBar, ChipLegend};
use config::TICK_MS;
use hooks::use_interval;
use state::WidgetState;
use utils::parse_duration_input;

// ──────────────────────────────────────────────────────────────────────────────
// Helper functions

/// Read the saved snapshot once at startup, falling back to defaults.
fn initial_state() -> WidgetState {
    let raw = storage::load().unwrap_or_else(|e| {
        warn!("Error loading saved state: {}", e);
        None
    });
    WidgetState::new(snapshot::restore(raw.as_deref()))
}

// ──────────────────────────────────────────────────────────────────────────────

/// Primary timer component wiring state, effects, and UI elements.
#[function_component(TimerWidget)]
fn timer_widget() -> Html {
    let state = use_reducer(initial_state);
    let timer = &state.timer;

    // Countdown: one tick per second while running
    {
        let dispatcher = state.dispatcher();
        use_interval(
            timer.is_running(),
            TICK_MS,
            Callback::from(move |_| dispatcher.dispatch(Command::Tick)),
        );
    }

    // Persist after every change to the stored fields
    use_effect_with(Snapshot::from(timer), |snapshot| {
        if let Err(e) = storage::save(snapshot) {
            warn!("Could not save timer state: {}", e);
        }
    });

    // Audio alert once per completed level
    use_effect_with(state.chime, |&chime| {
        if chime > 0 {
            audio::play_beep();
        }
    });

    let on_start_pause = {
        let dispatcher = state.dispatcher();
        Callback::from(move |_: MouseEvent| dispatcher.dispatch(Command::ToggleRunning))
    };

    let on_reset = {
        let dispatcher = state.dispatcher();
        Callback::from(move |_: MouseEvent| {
            if let Err(e) = storage::clear() {
                warn!("Could not clear saved state: {}", e);
            }
            info!("Resetting blind timer");
            dispatcher.dispatch(Command::Reset);
        })
    };

    let on_duration_input = {
        let dispatcher = state.dispatcher();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            if let Some(minutes) = parse_duration_input(&input.value()) {
                dispatcher.dispatch(Command::SetDuration(minutes));
            }
        })
    };

    let on_blinds_up = {
        let dispatcher = state.dispatcher();
        Callback::from(move |_: MouseEvent| dispatcher.dispatch(Command::BlindsUp))
    };

    let on_blinds_down = {
        let dispatcher = state.dispatcher();
        Callback::from(move |_: MouseEvent| dispatcher.dispatch(Command::BlindsDown))
    };

    html! {
        <div class="app">
            <header class="header">
                <h1>{ "♠ POKER BLIND TIMER ♣" }</h1>
            </header>

            // Timer display section
            <section class="timer-section">
                <div class="level-display">{ format!("LEVEL {}", timer.current_level()) }</div>
                <div class="timer-display">{ format_time(timer.time_remaining()) }</div>
                <BurnBar percent={timer.burn_percentage()} />

                <div class="controls">
                    <button class="btn" onclick={on_start_pause}>
                        { if timer.is_running() { "PAUSE" } else { "START" } }
                    </button>
                    <button class="btn" onclick={on_reset}>{ "RESET" }</button>
                </div>

                <div class="duration-config">
                    <label for="timer_duration_input">{ "Timer Duration (minutes):" }</label>
                    <input
                        type="number"
                        id="timer_duration_input"
                        class="input"
                        min="1"
                        max="120"
                        value={timer.timer_duration().to_string()}
                        disabled={timer.is_running()}
                        oninput={on_duration_input}
                    />
                </div>
            </section>

            // Blinds section
            <section class="blinds-section">
                <BlindInfo label="SMALL BLIND" amount={timer.small_blind()} />
                <BlindInfo label="BIG BLIND" amount={timer.big_blind()} />

                <div class="controls">
                    <button class="btn" onclick={on_blinds_up}>{ "DOUBLE" }</button>
                    <button
                        class="btn"
                        onclick={on_blinds_down}
                        disabled={timer.current_level() <= 1}
                    >
                        { "HALVE" }
                    </button>
                </div>
            </section>

            <ChipLegend />
        </div>
    }
}

/// App wrapper hosting the single timer widget.
#[function_component]
pub fn App() -> Html {
    html! { <TimerWidget /> }
}

/// Entry point: installs logging and renders the App component.
fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());
    yew::Renderer::<App>::new().render();
}
