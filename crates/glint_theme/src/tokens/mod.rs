//! Design tokens for theming
//!
//! The engine carries only the tokens its transition overlay needs; page
//! components style themselves from the root attribute instead.

mod color;

pub use color::*;
