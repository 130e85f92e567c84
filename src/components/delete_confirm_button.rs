//! Delete Confirm Button Component
//!
//! Inline delete with a confirm/cancel step.

use leptos::prelude::*;

/// Shows "Delete" first; once clicked, asks "Delete?" with ✓/✗.
#[component]
pub fn DeleteConfirmButton(
    #[prop(into)] on_confirm: Callback<()>,
) -> impl IntoView {
    let (confirming, set_confirming) = signal(false);

    view! {
        <Show
            when=move || confirming.get()
            fallback=move || view! {
                <button class="timer-btn delete" on:click=move |_| set_confirming.set(true)>
                    "Delete"
                </button>
            }
        >
            <span class="delete-confirm">
                <span class="delete-confirm-text">"Delete?"</span>
                <button
                    class="confirm-btn"
                    on:click=move |_| {
                        set_confirming.set(false);
                        on_confirm.run(());
                    }
                >
                    "✓"
                </button>
                <button class="cancel-btn" on:click=move |_| set_confirming.set(false)>
                    "✗"
                </button>
            </span>
        </Show>
    }
}
