//! App Configuration

/// Startup settings for the store, tick driver and logger
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// localStorage key holding the timer list
    pub storage_key: String,
    /// Milliseconds between ticks of running timers
    pub tick_interval_ms: u32,
    pub log_level: log::Level,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            storage_key: "timers".to_string(),
            tick_interval_ms: 1_000,
            log_level: if cfg!(debug_assertions) {
                log::Level::Debug
            } else {
                log::Level::Info
            },
        }
    }
}
