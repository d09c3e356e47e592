//! Theme store
//!
//! [`ThemeEngine`] is the single source of truth for the committed theme. It
//! is constructed once per session from its collaborators (storage, OS
//! preference, document root), resolves the starting theme, and owns the
//! transition controller for the rest of the session.
//!
//! Time is explicit: the host calls [`ThemeEngine::advance`] from its event
//! loop with the elapsed time, and due timers fire inside that call. The
//! themes committed during the call are returned so the caller can notify
//! its own listeners once it no longer holds the engine.

use std::time::Duration;

use glint_core::Timestamp;
use smallvec::SmallVec;

use crate::config::ThemeConfig;
use crate::dom::{DomSynchronizer, RootNode};
use crate::environment::ColorSchemeQuery;
use crate::error::Result;
use crate::geometry::{self, GeometrySpec};
use crate::resolver::{PreferenceResolver, Resolution};
use crate::storage::PreferenceStore;
use crate::theme::Theme;
use crate::tokens::ColorTokens;
use crate::transition::{
    TransitionController, TransitionEffect, TransitionPhase, TransitionSnapshot, TransitionState,
};

/// Owned theme state for one UI session
pub struct ThemeEngine {
    config: ThemeConfig,
    storage: Box<dyn PreferenceStore>,
    dom: DomSynchronizer,
    controller: TransitionController,
    resolution: Resolution,
    commits: u64,
}

impl ThemeEngine {
    /// Resolve the initial theme and publish it on the root node.
    ///
    /// The configuration is validated first; an invalid one is rejected
    /// before storage or the root node is touched.
    pub fn new(
        config: ThemeConfig,
        storage: Box<dyn PreferenceStore>,
        env: &dyn ColorSchemeQuery,
        root: Box<dyn RootNode>,
    ) -> Result<Self> {
        config.validate()?;
        let resolution = PreferenceResolver::new(&config.theme.storage_key, config.theme.fallback)
            .resolve_with_source(storage.as_ref(), env);
        tracing::debug!(
            theme = %resolution.theme,
            source = ?resolution.source,
            "initial theme resolved"
        );

        let controller = TransitionController::new(resolution.theme, &config.transition)?;

        let mut dom = DomSynchronizer::new(root);
        dom.apply(resolution.theme);

        Ok(Self {
            config,
            storage,
            dom,
            controller,
            resolution,
            commits: 0,
        })
    }

    // ========== Theme Access ==========

    /// The committed theme
    pub fn theme(&self) -> Theme {
        self.controller.state().committed
    }

    /// How the session's starting theme was chosen
    pub fn initial_resolution(&self) -> Resolution {
        self.resolution
    }

    pub fn config(&self) -> &ThemeConfig {
        &self.config
    }

    /// Color tokens of the committed theme
    pub fn colors(&self) -> ColorTokens {
        ColorTokens::for_theme(self.theme())
    }

    /// Geometry for the configured transition corner
    pub fn geometry(&self) -> &'static GeometrySpec {
        geometry::lookup(self.config.theme.corner)
    }

    /// Stylesheet rule binding the committed theme's tokens to CSS variables
    pub fn css_rule(&self) -> String {
        css_rule(self.theme())
    }

    /// Number of commits so far this session
    pub fn commit_count(&self) -> u64 {
        self.commits
    }

    // ========== Toggling ==========

    /// Flip the theme.
    ///
    /// Returns immediately; the commit happens on a later [`advance`](Self::advance).
    pub fn toggle(&mut self) {
        self.controller.toggle();
    }

    /// Advance session time by `elapsed`, firing due timers in order.
    ///
    /// Returns the themes committed during the call, oldest first.
    pub fn advance(&mut self, elapsed: Duration) -> SmallVec<[Theme; 2]> {
        let until = self.controller.now() + elapsed;
        let mut committed = SmallVec::new();
        while let Some(effect) = self.controller.poll(until) {
            match effect {
                TransitionEffect::Commit(theme) => {
                    self.commit(theme);
                    committed.push(theme);
                }
                TransitionEffect::Settled(theme) => {
                    tracing::trace!(%theme, "engine idle");
                }
            }
        }
        self.controller.finish_advance(until);
        committed
    }

    fn commit(&mut self, theme: Theme) {
        let key = self.config.theme.storage_key.as_str();
        if let Err(err) = self.storage.set(key, theme.as_str()) {
            tracing::warn!(key, %theme, "failed to persist theme: {err}");
        }
        self.dom.apply(theme);
        self.commits += 1;
    }

    // ========== Transition State ==========

    pub fn state(&self) -> TransitionState {
        self.controller.state()
    }

    pub fn phase(&self) -> TransitionPhase {
        self.controller.phase()
    }

    pub fn is_animating(&self) -> bool {
        self.controller.state().animating
    }

    pub fn snapshot(&self) -> TransitionSnapshot {
        self.controller.snapshot()
    }

    /// Current session time
    pub fn now(&self) -> Timestamp {
        self.controller.now()
    }

    /// Time until the next timer fires; `None` when nothing is scheduled
    pub fn time_until_next_timer(&self) -> Option<Duration> {
        self.controller.time_until_next_timer()
    }
}

/// `:root[data-theme="<theme>"] { --name: value; ... }` for `theme`
pub fn css_rule(theme: Theme) -> String {
    let body = ColorTokens::for_theme(theme)
        .css_variables()
        .iter()
        .map(|(name, value)| format!("  --{name}: {value};"))
        .collect::<Vec<_>>()
        .join("\n");
    format!(
        ":root[{}=\"{theme}\"] {{\n{body}\n}}",
        crate::dom::THEME_ATTRIBUTE
    )
}
