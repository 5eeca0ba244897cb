use std::time::{Duration, Instant};

use crate::config::TimingConfig;
use crate::timer::{TimerEvent, Timers};

use super::state::{NavigationState, Phase};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransitionTiming {
    pub commit_delay: Duration,
    pub settle_delay: Duration,
}

impl From<&TimingConfig> for TransitionTiming {
    fn from(config: &TimingConfig) -> Self {
        Self {
            commit_delay: config.transition_commit(),
            settle_delay: config.transition_settle(),
        }
    }
}

impl Default for TransitionTiming {
    fn default() -> Self {
        Self::from(&TimingConfig::default())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectReason {
    Transitioning,
    OutOfRange,
    SameSlide,
}

impl RejectReason {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Transitioning => "transitioning",
            Self::OutOfRange => "out-of-range",
            Self::SameSlide => "same-slide",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavOutcome {
    Accepted { from: usize, to: usize },
    Rejected(RejectReason),
}

impl NavOutcome {
    pub fn is_accepted(self) -> bool {
        matches!(self, Self::Accepted { .. })
    }
}

/// Two-phase slide transition state machine.
///
/// An accepted `go_to` locks the navigator and schedules a commit; the
/// commit moves the index and schedules the settle; the settle unlocks.
/// Nothing reaches the navigator between those steps except rejected
/// intents, so a transition can never be interrupted mid-way.
#[derive(Debug, Clone)]
pub struct Navigator {
    state: NavigationState,
    timing: TransitionTiming,
}

impl Navigator {
    pub fn new(total_slides: usize, timing: TransitionTiming) -> Self {
        Self {
            state: NavigationState::new(total_slides),
            timing,
        }
    }

    pub fn state(&self) -> &NavigationState {
        &self.state
    }

    pub fn go_to(&mut self, target: i64, now: Instant, timers: &mut Timers) -> NavOutcome {
        if self.state.is_transitioning() {
            return NavOutcome::Rejected(RejectReason::Transitioning);
        }
        let Some(target) = usize::try_from(target)
            .ok()
            .filter(|target| *target < self.state.total_slides)
        else {
            return NavOutcome::Rejected(RejectReason::OutOfRange);
        };
        if target == self.state.current_index {
            return NavOutcome::Rejected(RejectReason::SameSlide);
        }

        let from = self.state.current_index;
        self.state.previous_index = Some(from);
        self.state.phase = Phase::Transitioning { target };
        timers.schedule(
            now + self.timing.commit_delay,
            TimerEvent::CommitTransition { target },
        );
        NavOutcome::Accepted { from, to: target }
    }

    pub fn next(&mut self, now: Instant, timers: &mut Timers) -> NavOutcome {
        let target = self.current_as_i64().saturating_add(1);
        self.go_to(target, now, timers)
    }

    pub fn previous(&mut self, now: Instant, timers: &mut Timers) -> NavOutcome {
        let target = self.current_as_i64().saturating_sub(1);
        self.go_to(target, now, timers)
    }

    pub fn reset(&mut self, now: Instant, timers: &mut Timers) -> NavOutcome {
        self.go_to(0, now, timers)
    }

    pub fn last(&mut self, now: Instant, timers: &mut Timers) -> NavOutcome {
        let target = self.state.last_index().map_or(-1, |last| last as i64);
        self.go_to(target, now, timers)
    }

    /// Moves the index to the pending target. Returns the outgoing and
    /// incoming slides, or `None` when no transition is pending for `target`.
    pub fn commit(
        &mut self,
        target: usize,
        now: Instant,
        timers: &mut Timers,
    ) -> Option<(usize, usize)> {
        if self.state.phase != (Phase::Transitioning { target }) {
            return None;
        }
        let from = self.state.current_index;
        self.state.current_index = target;
        timers.schedule(now + self.timing.settle_delay, TimerEvent::SettleTransition);
        Some((from, target))
    }

    /// Unlocks the navigator. Returns the outgoing slide whose marks should
    /// be cleaned up.
    pub fn settle(&mut self) -> Option<usize> {
        if !self.state.is_transitioning() {
            return None;
        }
        self.state.phase = Phase::Idle;
        self.state.previous_index.take()
    }

    fn current_as_i64(&self) -> i64 {
        i64::try_from(self.state.current_index).unwrap_or(i64::MAX)
    }
}
