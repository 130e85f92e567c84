//! Timer List Component

use leptos::prelude::*;

use crate::components::TimerCard;
use crate::context::use_timers;

/// All timers in insertion order, keyed by id
#[component]
pub fn TimerList() -> impl IntoView {
    let ctx = use_timers();

    view! {
        <Show
            when=move || !ctx.is_empty()
            fallback=|| view! { <p class="empty-state">"No timers yet. Add one to get started."</p> }
        >
            <div class="timer-list">
                <For
                    each=move || ctx.timer_ids()
                    key=|id| id.clone()
                    children=move |id| view! { <TimerCard id=id /> }
                />
            </div>
        </Show>
    }
}
