//! Application Context
//!
//! Reactive handle to the timer store, provided via Leptos Context API.

use leptos::prelude::*;

use crate::models::{NewTimer, Timer, TimerId, TimerUpdates};
use crate::storage::BrowserStorage;
use crate::store::TimerStore;

/// Timer store wrapped in a signal; every mutation notifies readers
#[derive(Clone, Copy)]
pub struct TimerContext {
    store: RwSignal<TimerStore<BrowserStorage>>,
}

impl TimerContext {
    pub fn new(store: TimerStore<BrowserStorage>) -> Self {
        Self { store: RwSignal::new(store) }
    }

    /// Ids in display order (tracked)
    pub fn timer_ids(&self) -> Vec<TimerId> {
        self.store.with(|s| s.timers().iter().map(|t| t.id.clone()).collect())
    }

    /// Snapshot of one timer (tracked)
    pub fn timer(&self, id: &str) -> Option<Timer> {
        self.store.with(|s| s.get(id).cloned())
    }

    pub fn timer_untracked(&self, id: &str) -> Option<Timer> {
        self.store.with_untracked(|s| s.get(id).cloned())
    }

    pub fn count(&self) -> usize {
        self.store.with(|s| s.timers().len())
    }

    pub fn is_empty(&self) -> bool {
        self.store.with(|s| s.is_empty())
    }

    /// Running ids without subscribing; for the tick driver
    pub fn running_ids_untracked(&self) -> Vec<TimerId> {
        self.store.with_untracked(|s| s.running_ids())
    }

    pub fn add(&self, new: NewTimer) {
        self.store.update(|s| {
            let id = s.add_timer(new);
            log::info!("added timer {}", id);
        });
    }

    pub fn delete(&self, id: &str) {
        self.store.update(|s| s.delete_timer(id));
    }

    pub fn toggle(&self, id: &str) {
        self.store.update(|s| s.toggle_timer(id));
    }

    pub fn tick(&self, id: &str) {
        self.store.update(|s| s.tick(id));
    }

    pub fn restart(&self, id: &str) {
        self.store.update(|s| s.restart_timer(id));
    }

    pub fn edit(&self, id: &str, updates: TimerUpdates) {
        self.store.update(|s| s.edit_timer(id, updates));
    }
}

pub fn use_timers() -> TimerContext {
    use_context::<TimerContext>().expect("TimerContext should be provided")
}
