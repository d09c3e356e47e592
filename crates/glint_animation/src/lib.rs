//! Glint Animation Timing
//!
//! Deterministic timing primitives for UI transitions.
//!
//! # Features
//!
//! - **Easing**: CSS-compatible easing curves for progress values
//! - **Virtual clock**: Session time that only moves when the host advances it
//! - **Timers**: One-shot timers with owned, cancellable handles that fire in
//!   deadline order

pub mod clock;
pub mod easing;
pub mod scheduler;

pub use clock::VirtualClock;
pub use easing::Easing;
pub use scheduler::{FiredTimer, TimerId, TimerScheduler};
