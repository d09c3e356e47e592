//! Theme provider and consumer scope
//!
//! The engine is injected at the root of the view tree through a
//! [`ThemeProvider`]. Views reach it through their [`ViewScope`] and see only
//! the consumer surface, [`ThemeContext`]: the committed theme and a toggle.
//!
//! Reading the theme from a scope with no provider is a wiring bug and panics
//! with a descriptive message; [`ViewScope::try_use_theme`] is the fallible
//! form.
//!
//! Commit listeners run after the engine lock is released, so a redraw hook
//! may read the theme through its own [`ThemeContext`].

use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;

use crate::engine::ThemeEngine;
use crate::error::{Result, ThemeError};
use crate::theme::Theme;
use crate::tokens::ColorTokens;

/// Called once per commit with the newly committed theme
pub type CommitListener = Box<dyn FnMut(Theme) + Send>;

/// Owner of the session's [`ThemeEngine`]
#[derive(Clone)]
pub struct ThemeProvider {
    engine: Arc<Mutex<ThemeEngine>>,
    listeners: Arc<Mutex<Vec<CommitListener>>>,
}

impl ThemeProvider {
    pub fn new(engine: ThemeEngine) -> Self {
        Self {
            engine: Arc::new(Mutex::new(engine)),
            listeners: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Register a listener run once per commit, e.g. a redraw hook
    pub fn on_commit(&self, listener: impl FnMut(Theme) + Send + 'static) {
        self.listeners.lock().push(Box::new(listener));
    }

    /// Root scope for the view tree
    pub fn root_scope(&self) -> ViewScope {
        ViewScope {
            provider: Some(self.clone()),
        }
    }

    /// Advance session time; called by the host event loop
    pub fn advance(&self, elapsed: Duration) {
        let committed = self.engine.lock().advance(elapsed);
        if committed.is_empty() {
            return;
        }

        // Listeners may register more listeners; those join after this round
        let mut running = std::mem::take(&mut *self.listeners.lock());
        for theme in committed {
            for listener in &mut running {
                listener(theme);
            }
        }
        let mut listeners = self.listeners.lock();
        running.append(&mut listeners);
        *listeners = running;
    }

    /// Run `f` with exclusive access to the engine
    pub fn with_engine<R>(&self, f: impl FnOnce(&mut ThemeEngine) -> R) -> R {
        f(&mut self.engine.lock())
    }
}

/// A position in the view tree
#[derive(Clone, Default)]
pub struct ViewScope {
    provider: Option<ThemeProvider>,
}

impl ViewScope {
    /// Scope outside any provider
    pub fn detached() -> Self {
        Self::default()
    }

    /// Scope for a child view; inherits the parent's provider
    pub fn child(&self) -> Self {
        self.clone()
    }

    pub fn has_provider(&self) -> bool {
        self.provider.is_some()
    }

    /// Consumer handle, or [`ThemeError::OutsideProvider`]
    pub fn try_use_theme(&self) -> Result<ThemeContext> {
        self.provider
            .as_ref()
            .map(|provider| ThemeContext {
                engine: Arc::clone(&provider.engine),
            })
            .ok_or(ThemeError::OutsideProvider)
    }

    /// Consumer handle.
    ///
    /// # Panics
    ///
    /// Panics when the scope has no provider.
    pub fn use_theme(&self) -> ThemeContext {
        match self.try_use_theme() {
            Ok(context) => context,
            Err(err) => panic!("{err}"),
        }
    }
}

/// Consumer surface of the theme engine
#[derive(Clone)]
pub struct ThemeContext {
    engine: Arc<Mutex<ThemeEngine>>,
}

impl ThemeContext {
    /// The committed theme
    pub fn theme(&self) -> Theme {
        self.engine.lock().theme()
    }

    /// Request a theme flip
    pub fn toggle_theme(&self) {
        self.engine.lock().toggle();
    }

    /// Color tokens of the committed theme
    pub fn colors(&self) -> ColorTokens {
        self.engine.lock().colors()
    }
}
