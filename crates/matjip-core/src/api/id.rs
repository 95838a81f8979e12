//! Client-side id assignment.

use std::cell::Cell;

/// Time-derived ids, strictly increasing within a session
#[derive(Debug, Default)]
pub struct IdSequence {
    last: Cell<i64>,
}

impl IdSequence {
    pub fn new() -> Self {
        Self::default()
    }

    /// Next id from the current wall clock in milliseconds
    pub fn next(&self) -> crate::domain::PlaceId {
        self.next_from(chrono::Utc::now().timestamp_millis())
    }

    /// Next id given `now_ms`; never repeats or goes backwards
    pub fn next_from(&self, now_ms: i64) -> crate::domain::PlaceId {
        let id = now_ms.max(self.last.get() + 1);
        self.last.set(id);
        crate::domain::PlaceId(id)
    }
}
