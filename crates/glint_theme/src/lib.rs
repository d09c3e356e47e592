//! Glint Theme Engine
//!
//! Light/dark theme resolution, animated toggling, and document sync for a
//! themed site.
//!
//! # Overview
//!
//! - **Resolution**: persisted choice, then OS preference, then a fallback
//! - **Toggling**: a two-phase transition (commit, then settle) driven by
//!   explicit session time
//! - **Persistence**: best-effort; storage faults never reach the caller
//! - **Document sync**: the committed theme is published as `data-theme` on
//!   the root node
//! - **Geometry**: static reveal/glow/particle parameters per origin corner
//!
//! # Quick Start
//!
//! ```rust
//! use std::time::Duration;
//! use glint_theme::{
//!     DocumentRoot, FixedColorScheme, MemoryStore, Theme, ThemeConfig, ThemeEngine,
//!     ThemeProvider,
//! };
//!
//! let root = DocumentRoot::new();
//! let engine = ThemeEngine::new(
//!     ThemeConfig::default(),
//!     Box::new(MemoryStore::new()),
//!     &FixedColorScheme::prefers(Theme::Light),
//!     Box::new(root.clone()),
//! )?;
//! let provider = ThemeProvider::new(engine);
//!
//! // Views only see `theme()` and `toggle_theme()`
//! let theme = provider.root_scope().use_theme();
//! theme.toggle_theme();
//!
//! // The host event loop drives time
//! provider.advance(Duration::from_millis(500));
//! assert_eq!(theme.theme(), Theme::Dark);
//! assert_eq!(root.theme().as_deref(), Some("dark"));
//! # Ok::<(), glint_theme::ThemeError>(())
//! ```

pub mod config;
pub mod dom;
pub mod engine;
pub mod environment;
pub mod error;
pub mod geometry;
pub mod provider;
pub mod resolver;
pub mod storage;
pub mod theme;
pub mod tokens;
pub mod transition;

// Re-export commonly used types
pub use config::{ThemeConfig, ThemeSettings, TransitionConfig};
pub use dom::{DocumentRoot, DomSynchronizer, RootNode, THEME_ATTRIBUTE};
pub use engine::{css_rule, ThemeEngine};
#[cfg(feature = "system-scheme")]
pub use environment::SystemColorScheme;
pub use environment::{ColorSchemeQuery, FixedColorScheme};
pub use error::{ConfigError, Result, ThemeError};
pub use geometry::{lookup, AnchorOffset, ClipCircle, Corner, GeometrySpec, ParticleRing};
pub use provider::{CommitListener, ThemeContext, ThemeProvider, ViewScope};
pub use resolver::{PreferenceResolver, Resolution, ThemeSource};
pub use storage::{FileStore, MemoryStore, PreferenceStore, StorageError};
pub use theme::Theme;
pub use tokens::*;
pub use transition::{
    TransitionController, TransitionEffect, TransitionPhase, TransitionSnapshot, TransitionState,
};

pub use glint_animation::Easing;
