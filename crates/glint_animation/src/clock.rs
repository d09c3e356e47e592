//! Virtual clock for deterministic timing.
//!
//! The clock never reads wall time. Its owner moves it forward explicitly,
//! which keeps every timer decision reproducible.

use glint_core::Timestamp;

/// A monotonic clock that only moves when advanced.
#[derive(Debug, Default, Clone)]
pub struct VirtualClock {
    /// Current virtual time position.
    position: Timestamp,
}

impl VirtualClock {
    /// Create a clock positioned at session start.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the current virtual time position.
    pub fn now(&self) -> Timestamp {
        self.position
    }

    /// Move forward to `target`.
    ///
    /// Targets in the past are ignored; the clock is monotonic.
    pub fn advance_to(&mut self, target: Timestamp) -> Timestamp {
        if target > self.position {
            self.position = target;
        }
        self.position
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clock_starts_at_zero() {
        let clock = VirtualClock::new();
        assert_eq!(clock.now(), Timestamp::zero());
    }

    #[test]
    fn test_advance_to() {
        let mut clock = VirtualClock::new();
        let now = clock.advance_to(Timestamp::from_millis(120));
        assert_eq!(now, Timestamp::from_millis(120));
        clock.advance_to(Timestamp::from_millis(200));
        assert_eq!(clock.now(), Timestamp::from_millis(200));
    }

    #[test]
    fn test_advance_to_is_monotonic() {
        let mut clock = VirtualClock::new();
        clock.advance_to(Timestamp::from_millis(300));
        clock.advance_to(Timestamp::from_millis(100));
        assert_eq!(clock.now(), Timestamp::from_millis(300));
    }
}
