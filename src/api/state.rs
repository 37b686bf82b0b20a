//! Application State
//!
//! Shared state accessible by all handlers.
//! Wrapped in Arc for thread-safe sharing across async tasks.

use std::sync::Arc;
use std::time::Instant;

use crate::loader::AppointmentSource;

/// Shared application state for all handlers
#[derive(Clone)]
pub struct AppState {
    /// Where each mount loads its appointments from
    pub source: Arc<dyn AppointmentSource>,
    /// Server start time for uptime tracking
    pub start_time: Instant,
}

impl AppState {
    pub fn new(source: Arc<dyn AppointmentSource>) -> Self {
        Self {
            source,
            start_time: Instant::now(),
        }
    }

    /// Get server uptime in seconds
    pub fn uptime_seconds(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }
}
