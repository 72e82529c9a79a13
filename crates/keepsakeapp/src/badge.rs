//! Pending-work badge counter.
//!
//! Moderation dashboards show a badge with the number of reports awaiting
//! review. The counter is adjusted by the command layer as records enter and
//! leave the pending state, and is floored at zero: decrementing an empty
//! badge is a no-op, never an underflow.

use serde::Serialize;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Badge(u32);

impl Badge {
    pub fn new(count: u32) -> Self {
        Self(count)
    }

    pub fn count(&self) -> u32 {
        self.0
    }

    pub fn increment(&mut self) {
        self.0 = self.0.saturating_add(1);
    }

    /// Floored at zero.
    pub fn decrement(&mut self) {
        self.0 = self.0.saturating_sub(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decrement_floors_at_zero() {
        let mut badge = Badge::new(1);
        badge.decrement();
        assert_eq!(badge.count(), 0);
        badge.decrement();
        assert_eq!(badge.count(), 0);
    }

    #[test]
    fn increment_and_decrement_track_count() {
        let mut badge = Badge::default();
        badge.increment();
        badge.increment();
        assert_eq!(badge.count(), 2);
        badge.decrement();
        assert_eq!(badge.count(), 1);
    }
}
