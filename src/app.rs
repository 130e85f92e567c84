//! Timer Board App
//!
//! Root component: builds the store, provides contexts, starts the tick driver.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{TimerForm, TimerList};
use crate::config::AppConfig;
use crate::context::TimerContext;
use crate::storage::BrowserStorage;
use crate::store::TimerStore;
use crate::ticker::spawn_ticker;
use crate::ui_store::{current_dialog, open_dialog, Dialog, UiState, UiStore};

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    let storage = BrowserStorage::new(config.storage_key.clone());
    log::debug!("loading timers from localStorage key {:?}", storage.key());
    let ctx = TimerContext::new(TimerStore::load(storage));
    let ui: UiStore = Store::new(UiState::default());

    // Provide context to all children
    provide_context(ctx);
    provide_context(ui);

    spawn_ticker(ctx, config.tick_interval_ms);

    view! {
        <div class="app-layout">
            <header class="app-header">
                <h1>"Timers"</h1>
                <button class="new-timer-btn" on:click=move |_| open_dialog(&ui, Dialog::NewTimer)>
                    "+ New Timer"
                </button>
            </header>

            <main class="main-content">
                <TimerList />
                <p class="timer-count">{move || format!("{} timers", ctx.count())}</p>
            </main>

            {move || current_dialog(&ui).map(|mode| view! { <TimerForm mode=mode /> })}
        </div>
    }
}
