//! Timer Form Component
//!
//! Modal dialog for creating a timer or editing an existing one.

use leptos::ev::MouseEvent;
use leptos::prelude::*;

use crate::components::ModalButtons;
use crate::context::use_timers;
use crate::format::{parse_duration, split_minutes};
use crate::models::{NewTimer, TimerUpdates};
use crate::ui_store::{close_dialog, use_ui_store, Dialog};

const DEFAULT_MINUTES: u32 = 5;

/// A form can be submitted with a non-blank title and a positive duration
pub fn form_is_valid(title: &str, duration: Option<u32>) -> bool {
    !title.trim().is_empty() && duration.is_some_and(|d| d > 0)
}

#[component]
pub fn TimerForm(mode: Dialog) -> impl IntoView {
    let ctx = use_timers();
    let ui = use_ui_store();

    let existing = match &mode {
        Dialog::EditTimer(id) => ctx.timer_untracked(id),
        Dialog::NewTimer => None,
    };
    let initial_duration = existing.as_ref().map(|t| t.duration);
    let (start_minutes, start_seconds) = initial_duration
        .map(split_minutes)
        .unwrap_or((DEFAULT_MINUTES, 0));

    let (title, set_title) = signal(existing.as_ref().map(|t| t.title.clone()).unwrap_or_default());
    let (description, set_description) = signal(
        existing.as_ref().and_then(|t| t.description.clone()).unwrap_or_default(),
    );
    let (minutes, set_minutes) = signal(start_minutes.to_string());
    let (seconds, set_seconds) = signal(start_seconds.to_string());

    let duration = move || parse_duration(&minutes.get(), &seconds.get());
    let is_invalid = Signal::derive(move || !form_is_valid(&title.get(), duration()));

    let (heading, submit_label) = match &mode {
        Dialog::NewTimer => ("New Timer", "Add Timer"),
        Dialog::EditTimer(_) => ("Edit Timer", "Save Changes"),
    };

    let on_submit = move |_ev: MouseEvent| {
        let title = title.get_untracked().trim().to_string();
        let description = description.get_untracked().trim().to_string();
        let duration = parse_duration(&minutes.get_untracked(), &seconds.get_untracked());
        if !form_is_valid(&title, duration) {
            return;
        }
        let Some(duration) = duration else { return };

        match &mode {
            Dialog::NewTimer => ctx.add(NewTimer {
                description: (!description.is_empty()).then_some(description),
                ..NewTimer::new(title, duration)
            }),
            Dialog::EditTimer(id) => ctx.edit(
                id,
                TimerUpdates {
                    title: Some(title),
                    description: Some(description),
                    duration: (initial_duration != Some(duration)).then_some(duration),
                    ..Default::default()
                },
            ),
        }
        close_dialog(&ui);
    };

    view! {
        <div class="modal-backdrop">
            <div class="modal">
                <h2 class="modal-title">{heading}</h2>
                <label class="form-field">
                    <span>"Title"</span>
                    <input
                        type="text"
                        placeholder="Tea, laundry, pomodoro..."
                        prop:value=move || title.get()
                        on:input=move |ev| set_title.set(event_target_value(&ev))
                    />
                </label>
                <label class="form-field">
                    <span>"Description"</span>
                    <input
                        type="text"
                        prop:value=move || description.get()
                        on:input=move |ev| set_description.set(event_target_value(&ev))
                    />
                </label>
                <div class="form-row">
                    <label class="form-field">
                        <span>"Minutes"</span>
                        <input
                            type="number"
                            min="0"
                            prop:value=move || minutes.get()
                            on:input=move |ev| set_minutes.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="form-field">
                        <span>"Seconds"</span>
                        <input
                            type="number"
                            min="0"
                            max="59"
                            prop:value=move || seconds.get()
                            on:input=move |ev| set_seconds.set(event_target_value(&ev))
                        />
                    </label>
                </div>
                <ModalButtons
                    on_close=move || close_dialog(&ui)
                    on_submit=on_submit
                    submit_label=submit_label
                    submit_disabled=is_invalid
                />
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_form_validity() {
        assert!(form_is_valid("Tea", Some(180)));
        assert!(!form_is_valid("   ", Some(180)));
        assert!(!form_is_valid("Tea", Some(0)));
        assert!(!form_is_valid("Tea", None));
    }
}
