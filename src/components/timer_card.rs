//! Timer Card Component
//!
//! One timer: clock, progress bar and its actions.

use leptos::prelude::*;

use crate::components::DeleteConfirmButton;
use crate::context::use_timers;
use crate::format::format_clock;
use crate::models::{Timer, TimerId};
use crate::ui_store::{open_dialog, use_ui_store, Dialog};

fn card_class(timer: &Timer) -> &'static str {
    if timer.is_running {
        "timer-card running"
    } else if timer.is_finished() {
        "timer-card finished"
    } else {
        "timer-card"
    }
}

fn toggle_label(timer: &Timer) -> &'static str {
    if timer.is_running { "Pause" } else { "Start" }
}

fn progress_style(timer: &Timer) -> String {
    format!("width: {:.1}%", timer.progress() * 100.0)
}

/// Card for the timer with `id`.
///
/// The markup is built once; only the fields that change per tick are
/// reactive, so local state such as the delete prompt survives ticks.
#[component]
pub fn TimerCard(id: TimerId) -> impl IntoView {
    let ctx = use_timers();
    let ui = use_ui_store();

    let lookup_id = id.clone();
    let timer = Memo::new(move |_| ctx.timer(&lookup_id));
    let id = StoredValue::new(id);

    // Read a field of the current snapshot, or a fallback once the timer is gone
    let field = move |read: fn(&Timer) -> String| {
        move || timer.with(|t| t.as_ref().map(read).unwrap_or_default())
    };

    view! {
        <div class=move || timer.with(|t| t.as_ref().map(card_class).unwrap_or("timer-card"))>
            <div class="timer-header">
                <span class="timer-title">{field(|t| t.title.clone())}</span>
                {move || {
                    timer
                        .with(|t| t.as_ref().and_then(|t| t.description.clone()))
                        .map(|d| view! { <span class="timer-description">{d}</span> })
                }}
            </div>
            <div class="timer-clock">{field(|t| format_clock(t.remaining_time))}</div>
            <div class="timer-progress">
                <div class="timer-progress-fill" style=field(progress_style)></div>
            </div>
            <div class="timer-actions">
                <button
                    class="timer-btn toggle"
                    disabled=move || timer.with(|t| t.as_ref().map_or(true, Timer::is_finished))
                    on:click=move |_| ctx.toggle(&id.get_value())
                >
                    {move || timer.with(|t| t.as_ref().map(toggle_label).unwrap_or("Start"))}
                </button>
                <button class="timer-btn restart" on:click=move |_| ctx.restart(&id.get_value())>
                    "Restart"
                </button>
                <button
                    class="timer-btn edit"
                    on:click=move |_| open_dialog(&ui, Dialog::EditTimer(id.get_value()))
                >
                    "Edit"
                </button>
                <DeleteConfirmButton on_confirm=move || { ctx.delete(&id.get_value()) } />
            </div>
        </div>
    }
}
