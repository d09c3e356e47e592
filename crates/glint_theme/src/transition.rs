//! Theme transition controller
//!
//! Two-phase state machine driving a theme toggle:
//!
//! ```text
//!            toggle                 commit timer          settle timer
//!   Idle ───────────────▶ Animating ─────────────▶ Animating ─────────────▶ Idle
//!                          (pending)   (committed)                (pending == committed)
//! ```
//!
//! A toggle schedules a commit timer and a settle timer, both measured from
//! the toggle. The committed theme does not change until the commit timer
//! fires; between commit and settle only the decorative overlay moves.
//!
//! A toggle while animating restarts the sequence. Each toggle takes a new
//! sequence number; the previous pair of timers is cancelled, and a timer
//! whose sequence is no longer the latest is ignored when it fires.

use std::time::Duration;

use glint_animation::{TimerId, TimerScheduler};
use glint_core::Timestamp;

use crate::config::TransitionConfig;
use crate::error::ConfigError;
use crate::theme::Theme;

/// Controller phase
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TransitionPhase {
    Idle,
    Animating,
}

/// Committed and pending theme plus the animating flag.
///
/// `pending == committed` whenever `animating` is false.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TransitionState {
    pub committed: Theme,
    pub pending: Theme,
    pub animating: bool,
}

impl TransitionState {
    pub fn idle(theme: Theme) -> Self {
        Self {
            committed: theme,
            pending: theme,
            animating: false,
        }
    }

    pub fn phase(&self) -> TransitionPhase {
        if self.animating {
            TransitionPhase::Animating
        } else {
            TransitionPhase::Idle
        }
    }
}

/// Point-in-time view for an overlay renderer
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TransitionSnapshot {
    pub committed: Theme,
    pub pending: Theme,
    pub animating: bool,
    /// Progress through the settle window in `0.0..=1.0`; `0.0` when idle
    pub progress: f32,
}

/// Something the owner must act on after a timer fired
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TransitionEffect {
    /// `theme` just became the committed theme
    Commit(Theme),
    /// The transition ended
    Settled(Theme),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum TransitionTimer {
    Commit { seq: u64 },
    Settle { seq: u64 },
}

impl TransitionTimer {
    fn seq(self) -> u64 {
        match self {
            TransitionTimer::Commit { seq } | TransitionTimer::Settle { seq } => seq,
        }
    }
}

struct InFlight {
    started_at: Timestamp,
    commit: TimerId,
    settle: TimerId,
}

/// Owns the transition state and its timers
pub struct TransitionController {
    state: TransitionState,
    timers: TimerScheduler<TransitionTimer>,
    commit_delay: Duration,
    settle_delay: Duration,
    seq: u64,
    in_flight: Option<InFlight>,
}

impl TransitionController {
    /// Fails with [`ConfigError::DelayOrder`] unless the commit delay is
    /// shorter than the settle delay.
    pub fn new(initial: Theme, config: &TransitionConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            state: TransitionState::idle(initial),
            timers: TimerScheduler::new(),
            commit_delay: config.commit_delay(),
            settle_delay: config.settle_delay(),
            seq: 0,
            in_flight: None,
        })
    }

    pub fn state(&self) -> TransitionState {
        self.state
    }

    pub fn phase(&self) -> TransitionPhase {
        self.state.phase()
    }

    pub fn now(&self) -> Timestamp {
        self.timers.now()
    }

    /// Sequence number of the latest toggle, `0` before the first
    pub fn sequence(&self) -> u64 {
        self.seq
    }

    /// Start (or restart) a transition toward the opposite of the committed
    /// theme. Returns the new pending theme.
    pub fn toggle(&mut self) -> Theme {
        self.seq += 1;
        let seq = self.seq;

        if let Some(prev) = self.in_flight.take() {
            self.timers.cancel(prev.commit);
            self.timers.cancel(prev.settle);
            tracing::debug!(seq, "interrupting in-flight transition");
        }

        let target = self.state.committed.toggle();
        self.state.pending = target;
        self.state.animating = true;

        let commit = self
            .timers
            .schedule(self.commit_delay, TransitionTimer::Commit { seq });
        let settle = self
            .timers
            .schedule(self.settle_delay, TransitionTimer::Settle { seq });
        self.in_flight = Some(InFlight {
            started_at: self.timers.now(),
            commit,
            settle,
        });

        tracing::debug!(
            seq,
            from = %self.state.committed,
            to = %target,
            "transition started"
        );
        target
    }

    /// Fire the next timer due at or before `until` and apply it.
    ///
    /// Returns `None` once nothing more is due; the owner then calls
    /// [`finish_advance`](Self::finish_advance) with the same target.
    pub fn poll(&mut self, until: Timestamp) -> Option<TransitionEffect> {
        while let Some(fired) = self.timers.pop_due(until) {
            let timer = fired.payload;
            if timer.seq() != self.seq {
                tracing::trace!(stale = timer.seq(), latest = self.seq, "ignoring stale timer");
                continue;
            }

            match timer {
                TransitionTimer::Commit { seq } => {
                    self.state.committed = self.state.pending;
                    tracing::debug!(seq, theme = %self.state.committed, "transition committed");
                    return Some(TransitionEffect::Commit(self.state.committed));
                }
                TransitionTimer::Settle { seq } => {
                    self.in_flight = None;
                    self.state.pending = self.state.committed;
                    self.state.animating = false;
                    tracing::debug!(seq, theme = %self.state.committed, "transition settled");
                    return Some(TransitionEffect::Settled(self.state.committed));
                }
            }
        }
        None
    }

    /// Move the clock to `until` once [`poll`](Self::poll) is drained
    pub fn finish_advance(&mut self, until: Timestamp) {
        self.timers.advance_clock_to(until);
    }

    /// Time until the next timer fires, `None` when idle
    pub fn time_until_next_timer(&self) -> Option<Duration> {
        self.timers
            .next_deadline()
            .map(|deadline| deadline.saturating_since(self.timers.now()))
    }

    pub fn snapshot(&self) -> TransitionSnapshot {
        let progress = match &self.in_flight {
            Some(flight) if self.state.animating => {
                let elapsed = self.timers.now().saturating_since(flight.started_at);
                let window = self.settle_delay.as_secs_f32();
                if window > 0.0 {
                    (elapsed.as_secs_f32() / window).clamp(0.0, 1.0)
                } else {
                    1.0
                }
            }
            _ => 0.0,
        };
        TransitionSnapshot {
            committed: self.state.committed,
            pending: self.state.pending,
            animating: self.state.animating,
            progress,
        }
    }

    /// Drop any in-flight transition without applying it.
    ///
    /// State is left as it was: an uncommitted toggle never commits.
    pub fn dispose(&mut self) {
        if self.in_flight.take().is_some() {
            tracing::debug!(seq = self.seq, "disposing in-flight transition");
        }
        self.timers.clear();
    }
}

impl Drop for TransitionController {
    fn drop(&mut self) {
        self.dispose();
    }
}
