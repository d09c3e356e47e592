//! Event loop driving the theme engine's timers
//!
//! The engine keeps virtual session time; this loop feeds it the real
//! elapsed time measured on the tokio clock, sleeping until the next timer
//! is due.

use std::time::Duration;

use glint_theme::ThemeProvider;
use tokio::time::{sleep, Instant};

/// Run until no timer is pending. Returns the time spent.
pub async fn run_until_idle(provider: &ThemeProvider) -> Duration {
    let started = Instant::now();
    let mut last = started;
    while let Some(wait) = provider.with_engine(|engine| engine.time_until_next_timer()) {
        sleep(wait).await;
        let now = Instant::now();
        provider.advance(now - last);
        last = now;
    }
    last - started
}

/// Run for `span`, firing whatever comes due in the meantime
pub async fn run_for(provider: &ThemeProvider, span: Duration) {
    let deadline = Instant::now() + span;
    let mut last = Instant::now();
    while last < deadline {
        let remaining = deadline - last;
        let wait = provider
            .with_engine(|engine| engine.time_until_next_timer())
            .map_or(remaining, |next| next.min(remaining));
        sleep(wait).await;
        let now = Instant::now();
        provider.advance(now - last);
        last = now;
    }
}
