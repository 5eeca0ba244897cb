use std::time::{Duration, Instant};

use crate::presenter::PresentationSurface;
use crate::timer::{TimerEvent, Timers};

/// Opacity state of the on-screen controls. Dimmed controls stay operable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Affordance {
    Visible,
    Dimmed,
}

/// Dims the controls after a stretch without qualifying activity.
#[derive(Debug, Clone)]
pub struct AutoHide {
    state: Affordance,
    idle_after: Duration,
}

impl AutoHide {
    pub fn new(idle_after: Duration) -> Self {
        Self {
            state: Affordance::Visible,
            idle_after,
        }
    }

    /// Shows the controls right away and restarts the countdown.
    pub fn on_activity(
        &mut self,
        now: Instant,
        timers: &mut Timers,
        surface: &mut dyn PresentationSurface,
    ) {
        if self.state == Affordance::Dimmed {
            self.state = Affordance::Visible;
            surface.set_affordance(Affordance::Visible);
        }
        timers.schedule(now + self.idle_after, TimerEvent::AutoHideElapsed);
    }

    pub fn on_elapsed(&mut self, surface: &mut dyn PresentationSurface) {
        if self.state == Affordance::Visible {
            tracing::debug!("controls dimmed after inactivity");
            self.state = Affordance::Dimmed;
            surface.set_affordance(Affordance::Dimmed);
        }
    }
}
