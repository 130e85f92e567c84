//! Timer Store
//!
//! Owns the timer list and its persistence lifecycle. Every operation runs
//! the reducer and then writes the full list through the injected storage.

use std::collections::HashSet;

use crate::models::{NewTimer, Timer, TimerId, TimerUpdates};
use crate::reducer::{reduce, TimerAction};
use crate::storage::{read_timers, write_timers, StorageError, TimerStorage};

/// Timer list plus the storage it mirrors to
#[derive(Debug, Clone)]
pub struct TimerStore<S> {
    timers: Vec<Timer>,
    storage: S,
}

impl<S: TimerStorage> TimerStore<S> {
    /// Load the stored list, falling back to an empty one on any failure
    pub fn load(storage: S) -> Self {
        let timers = match read_timers(&storage) {
            Ok(Some(timers)) => dedup_by_id(timers),
            Ok(None) => {
                log::info!("no stored timers, starting empty");
                Vec::new()
            }
            Err(e) => {
                log::error!("Failed to load timers: {}", e);
                Vec::new()
            }
        };
        log::debug!("loaded {} timers", timers.len());
        Self { timers, storage }
    }

    pub fn timers(&self) -> &[Timer] {
        &self.timers
    }

    pub fn is_empty(&self) -> bool {
        self.timers.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Timer> {
        self.timers.iter().find(|t| t.id == id)
    }

    pub fn running_ids(&self) -> Vec<TimerId> {
        self.timers.iter().filter(|t| t.is_running).map(|t| t.id.clone()).collect()
    }

    #[cfg(test)]
    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Append a stopped timer with a fresh id and the current time
    pub fn add_timer(&mut self, new: NewTimer) -> TimerId {
        let id = uuid::Uuid::new_v4().to_string();
        let created_at = chrono::Utc::now().timestamp_millis();
        self.dispatch(TimerAction::Add(Timer::from_new(new, id.clone(), created_at)));
        id
    }

    pub fn delete_timer(&mut self, id: &str) {
        self.dispatch(TimerAction::Delete(id.to_string()));
    }

    pub fn toggle_timer(&mut self, id: &str) {
        self.dispatch(TimerAction::Toggle(id.to_string()));
    }

    /// One-second countdown step; called by an external periodic driver
    pub fn tick(&mut self, id: &str) {
        self.dispatch(TimerAction::Tick(id.to_string()));
    }

    pub fn restart_timer(&mut self, id: &str) {
        self.dispatch(TimerAction::Restart(id.to_string()));
    }

    pub fn edit_timer(&mut self, id: &str, updates: TimerUpdates) {
        self.dispatch(TimerAction::Edit { id: id.to_string(), updates });
    }

    /// Reduce, then persist. Persists even when the action changed nothing.
    pub fn dispatch(&mut self, action: TimerAction) {
        reduce(&mut self.timers, action);
        if let Err(e) = self.persist() {
            log::error!("Failed to save timers: {}", e);
        }
    }

    fn persist(&self) -> Result<(), StorageError> {
        write_timers(&self.storage, &self.timers)
    }
}

/// Keep the first record for each id
fn dedup_by_id(timers: Vec<Timer>) -> Vec<Timer> {
    let mut seen = HashSet::new();
    let before = timers.len();
    let kept: Vec<Timer> = timers.into_iter().filter(|t| seen.insert(t.id.clone())).collect();
    if kept.len() != before {
        log::warn!("dropped {} stored timers with duplicate ids", before - kept.len());
    }
    kept
}
