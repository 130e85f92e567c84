//! Timer Models
//!
//! Timer records and the payloads used to create and edit them.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Opaque timer identifier (v4 UUID string)
pub type TimerId = String;

/// JSON keys owned by [`Timer`]; caller extras may not reuse them
const RESERVED_KEYS: &[&str] = &[
    "id",
    "createdAt",
    "title",
    "description",
    "duration",
    "remainingTime",
    "isRunning",
];

/// Drop extras that would serialize as a second copy of a declared key
fn without_reserved(extra: Map<String, Value>) -> Map<String, Value> {
    extra
        .into_iter()
        .filter(|(key, _)| {
            let reserved = RESERVED_KEYS.contains(&key.as_str());
            if reserved {
                log::warn!("ignoring extra timer field {:?}", key);
            }
            !reserved
        })
        .collect()
}

/// A single countdown, stored as one element of the persisted JSON array
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Timer {
    pub id: TimerId,
    /// Unix milliseconds
    pub created_at: i64,
    #[serde(default)]
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Configured length in seconds
    pub duration: u32,
    /// Seconds left
    pub remaining_time: u32,
    pub is_running: bool,
    /// Caller fields the store does not interpret
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Timer {
    /// Build a stopped, full timer from a caller payload
    pub fn from_new(new: NewTimer, id: TimerId, created_at: i64) -> Self {
        Self {
            id,
            created_at,
            title: new.title,
            description: new.description,
            duration: new.duration,
            remaining_time: new.duration,
            is_running: false,
            extra: without_reserved(new.extra),
        }
    }

    /// Fraction of the duration still left, in `0.0..=1.0`
    pub fn progress(&self) -> f64 {
        if self.duration == 0 {
            return 0.0;
        }
        (self.remaining_time as f64 / self.duration as f64).clamp(0.0, 1.0)
    }

    pub fn is_finished(&self) -> bool {
        self.remaining_time == 0
    }
}

/// Payload for adding a timer. Id and creation time are assigned by the store.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NewTimer {
    pub title: String,
    pub description: Option<String>,
    pub duration: u32,
    pub extra: Map<String, Value>,
}

impl NewTimer {
    pub fn new(title: impl Into<String>, duration: u32) -> Self {
        Self {
            title: title.into(),
            duration,
            ..Default::default()
        }
    }
}

/// Partial update for an existing timer; `None` leaves a field unchanged
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TimerUpdates {
    pub title: Option<String>,
    pub description: Option<String>,
    pub duration: Option<u32>,
    pub extra: Map<String, Value>,
}

impl TimerUpdates {
    pub fn duration(duration: u32) -> Self {
        Self {
            duration: Some(duration),
            ..Default::default()
        }
    }

    /// Merge into `timer`. Duration handling is left to the caller.
    pub fn merge_fields(self, timer: &mut Timer) {
        if let Some(title) = self.title {
            timer.title = title;
        }
        if let Some(description) = self.description {
            timer.description = if description.is_empty() { None } else { Some(description) };
        }
        for (key, value) in without_reserved(self.extra) {
            timer.extra.insert(key, value);
        }
    }
}
