//! Glint Core
//!
//! Foundational value types shared by the Glint crates:
//!
//! - [`Color`]: RGBA color with hex conversion and interpolation
//! - [`Timestamp`]: monotonic session time used by the timer scheduler

pub mod color;
pub mod time;

pub use color::Color;
pub use time::Timestamp;
