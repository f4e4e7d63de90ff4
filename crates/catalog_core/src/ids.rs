use chrono::Utc;
use shared::{domain::ProductId, error::CatalogError};
use storage::RecordStore;

pub trait Clock {
    fn now_millis(&self) -> i64;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_millis(&self) -> i64 {
        Utc::now().timestamp_millis()
    }
}

/// Hands out time-derived listing ids that never repeat within a session.
///
/// Each id is the current time in milliseconds, bumped when needed so it is
/// strictly greater than the previous allocation and every id in the store.
#[derive(Debug, Clone, Default)]
pub struct IdAllocator<C = SystemClock> {
    clock: C,
    last: i64,
}

impl IdAllocator<SystemClock> {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<C: Clock> IdAllocator<C> {
    pub fn with_clock(clock: C) -> Self {
        Self { clock, last: 0 }
    }

    /// Fails once the id space above the largest known id is used up.
    pub fn next(&mut self, store: &impl RecordStore) -> Result<ProductId, CatalogError> {
        let floor = store.max_id().map_or(self.last, |id| id.0.max(self.last));
        let above = floor
            .checked_add(1)
            .ok_or_else(|| CatalogError::internal(format!("no listing ids left above {floor}")))?;
        let id = self.clock.now_millis().max(above);
        self.last = id;
        Ok(ProductId(id))
    }
}
