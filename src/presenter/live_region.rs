use std::time::{Duration, Instant};

use crate::timer::{TimerEvent, Timers};

use super::traits::PresentationSurface;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channel {
    /// Screen-reader announcements.
    Announcement,
    /// Visible notices for faults the user should know about.
    Notice,
}

/// Transient message slot: text is shown, then withdrawn after `ttl`.
/// A newer message replaces the current one and restarts the timer.
#[derive(Debug, Clone)]
pub struct LiveRegion {
    channel: Channel,
    ttl: Duration,
    message: Option<String>,
}

impl LiveRegion {
    pub fn new(channel: Channel, ttl: Duration) -> Self {
        Self {
            channel,
            ttl,
            message: None,
        }
    }

    pub fn post(
        &mut self,
        message: impl Into<String>,
        now: Instant,
        timers: &mut Timers,
        surface: &mut dyn PresentationSurface,
    ) {
        let message = message.into();
        self.write(surface, Some(&message));
        self.message = Some(message);
        timers.schedule(now + self.ttl, self.clear_event());
    }

    pub fn withdraw(&mut self, surface: &mut dyn PresentationSurface) {
        if self.message.take().is_some() {
            self.write(surface, None);
        }
    }

    fn clear_event(&self) -> TimerEvent {
        match self.channel {
            Channel::Announcement => TimerEvent::ClearAnnouncement,
            Channel::Notice => TimerEvent::ClearNotice,
        }
    }

    fn write(&self, surface: &mut dyn PresentationSurface, message: Option<&str>) {
        match self.channel {
            Channel::Announcement => surface.set_live_region(message),
            Channel::Notice => surface.set_notice(message),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::{Duration, Instant};

    use crate::presenter::ViewModel;
    use crate::timer::{TimerEvent, Timers};

    use super::{Channel, LiveRegion};

    #[test]
    fn post_shows_message_and_schedules_withdrawal() {
        let t0 = Instant::now();
        let mut timers = Timers::new();
        let mut view = ViewModel::default();
        let mut region = LiveRegion::new(Channel::Announcement, Duration::from_millis(1000));

        region.post("Slide 2 of 3: Two", t0, &mut timers, &mut view);
        assert_eq!(view.live_region(), Some("Slide 2 of 3: Two"));

        region.post("Slide 3 of 3: Three", t0 + Duration::from_millis(400), &mut timers, &mut view);
        assert_eq!(timers.pop_due(t0 + Duration::from_millis(1000)), None);
        assert_eq!(
            timers.pop_due(t0 + Duration::from_millis(1400)),
            Some((t0 + Duration::from_millis(1400), TimerEvent::ClearAnnouncement))
        );

        region.withdraw(&mut view);
        assert_eq!(view.live_region(), None);
    }

    #[test]
    fn notice_channel_writes_notice_slot() {
        let t0 = Instant::now();
        let mut timers = Timers::new();
        let mut view = ViewModel::default();
        let mut region = LiveRegion::new(Channel::Notice, Duration::from_millis(5000));

        region.post("draw failed", t0, &mut timers, &mut view);
        assert_eq!(view.notice(), Some("draw failed"));
        assert_eq!(view.live_region(), None);
        assert_eq!(timers.next_deadline(), Some(t0 + Duration::from_millis(5000)));
    }
}
