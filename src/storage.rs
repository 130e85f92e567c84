//! Timer Persistence
//!
//! The storage port the store writes through, and its browser implementation.
//! The whole timer list lives under one key as a JSON array.

use crate::models::Timer;

pub type StorageResult<T> = Result<T, StorageError>;

/// Storage-level errors
#[derive(Debug, Clone, PartialEq)]
pub enum StorageError {
    /// No storage backend (no window, or localStorage disabled)
    Unavailable(String),
    Read(String),
    Write(String),
    Parse(String),
}

impl std::fmt::Display for StorageError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StorageError::Unavailable(msg) => write!(f, "Storage unavailable: {}", msg),
            StorageError::Read(msg) => write!(f, "Read failed: {}", msg),
            StorageError::Write(msg) => write!(f, "Write failed: {}", msg),
            StorageError::Parse(msg) => write!(f, "Parse failed: {}", msg),
        }
    }
}

impl std::error::Error for StorageError {}

/// Durable key-value slot holding the serialized timer list
pub trait TimerStorage {
    /// Raw stored payload, `None` when nothing has been written yet
    fn read(&self) -> StorageResult<Option<String>>;

    /// Overwrite the stored payload
    fn write(&self, payload: &str) -> StorageResult<()>;
}

/// Read and decode the stored list
pub fn read_timers<S: TimerStorage + ?Sized>(storage: &S) -> StorageResult<Option<Vec<Timer>>> {
    match storage.read()? {
        Some(raw) => serde_json::from_str(&raw)
            .map(Some)
            .map_err(|e| StorageError::Parse(e.to_string())),
        None => Ok(None),
    }
}

/// Encode and write the whole list
pub fn write_timers<S: TimerStorage + ?Sized>(storage: &S, timers: &[Timer]) -> StorageResult<()> {
    let payload = serde_json::to_string(timers).map_err(|e| StorageError::Write(e.to_string()))?;
    storage.write(&payload)
}

/// `window.localStorage` under a fixed key.
///
/// The handle is looked up on every access, so the type holds no JS objects.
#[derive(Debug, Clone)]
pub struct BrowserStorage {
    key: String,
}

impl BrowserStorage {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    fn local_storage(&self) -> StorageResult<web_sys::Storage> {
        let window = web_sys::window().ok_or_else(|| StorageError::Unavailable("no window".to_string()))?;
        window
            .local_storage()
            .map_err(|e| StorageError::Unavailable(format!("{:?}", e)))?
            .ok_or_else(|| StorageError::Unavailable("localStorage disabled".to_string()))
    }
}

impl TimerStorage for BrowserStorage {
    fn read(&self) -> StorageResult<Option<String>> {
        self.local_storage()?
            .get_item(&self.key)
            .map_err(|e| StorageError::Read(format!("{:?}", e)))
    }

    fn write(&self, payload: &str) -> StorageResult<()> {
        self.local_storage()?
            .set_item(&self.key, payload)
            .map_err(|e| StorageError::Write(format!("{:?}", e)))
    }
}

/// In-memory slot for tests, shareable so a test can inspect what was written
#[cfg(test)]
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    slot: std::sync::Arc<std::sync::Mutex<Option<String>>>,
    fail_writes: std::sync::Arc<std::sync::atomic::AtomicBool>,
    writes: std::sync::Arc<std::sync::atomic::AtomicUsize>,
}

#[cfg(test)]
impl MemoryStorage {
    pub fn with_payload(payload: &str) -> Self {
        let storage = Self::default();
        *storage.slot.lock().unwrap() = Some(payload.to_string());
        storage
    }

    pub fn payload(&self) -> Option<String> {
        self.slot.lock().unwrap().clone()
    }

    pub fn write_count(&self) -> usize {
        self.writes.load(std::sync::atomic::Ordering::SeqCst)
    }

    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, std::sync::atomic::Ordering::SeqCst);
    }
}

#[cfg(test)]
impl TimerStorage for MemoryStorage {
    fn read(&self) -> StorageResult<Option<String>> {
        Ok(self.payload())
    }

    fn write(&self, payload: &str) -> StorageResult<()> {
        use std::sync::atomic::Ordering;
        self.writes.fetch_add(1, Ordering::SeqCst);
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(StorageError::Write("quota exceeded".to_string()));
        }
        *self.slot.lock().unwrap() = Some(payload.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::NewTimer;

    #[test]
    fn test_read_empty_slot() {
        let storage = MemoryStorage::default();
        assert_eq!(read_timers(&storage), Ok(None));
    }

    #[test]
    fn test_read_malformed_payload() {
        let storage = MemoryStorage::with_payload("{not json");
        assert!(matches!(read_timers(&storage), Err(StorageError::Parse(_))));
    }

    #[test]
    fn test_write_then_read_reproduces_list() {
        let storage = MemoryStorage::default();
        let timers = vec![
            Timer::from_new(NewTimer::new("Eggs", 300), "a".to_string(), 1),
            Timer::from_new(NewTimer::new("Rice", 900), "b".to_string(), 2),
        ];

        write_timers(&storage, &timers).unwrap();
        assert_eq!(read_timers(&storage), Ok(Some(timers)));
    }

    #[test]
    fn test_failed_write_surfaces_error() {
        let storage = MemoryStorage::default();
        storage.set_fail_writes(true);
        assert!(matches!(write_timers(&storage, &[]), Err(StorageError::Write(_))));
        assert_eq!(storage.payload(), None);
    }

    #[test]
    fn test_error_display() {
        let err = StorageError::Parse("eof".to_string());
        assert_eq!(err.to_string(), "Parse failed: eof");
    }
}
