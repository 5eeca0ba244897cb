use std::time::Instant;

use chrono::Utc;

use crate::affordance::AutoHide;
use crate::config::Config;
use crate::deck::SlideSource;
use crate::export::{SlideExport, SlideInfo, export_slides, printable_layout, slide_info};
use crate::input::keymap::KeymapPreset;
use crate::input::{GestureInterpreter, Intent, SwipeThresholds};
use crate::nav::{NavOutcome, NavigationState, Navigator, TransitionTiming};
use crate::presenter::{Channel, LiveRegion, PresentationSurface, Presenter, ViewModel};
use crate::timer::{TimerEvent, Timers};
use crate::ui::ControlHitRegions;

use super::host::HostApi;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntentOutcome {
    Handled,
    QuitRequested,
}

/// Pointer bookkeeping between mouse-down and mouse-up.
#[derive(Debug, Default)]
pub(crate) struct PointerState {
    pub(crate) controls: Option<ControlHitRegions>,
    pub(crate) pressed_at: Option<(u16, u16)>,
}

/// Composition root: owns the navigator and everything that reacts to it.
/// All time-dependent calls take `now` so the caller decides the clock.
pub struct App {
    pub config: Config,
    slides: Box<dyn SlideSource>,
    navigator: Navigator,
    presenter: Presenter,
    view: ViewModel,
    timers: Timers,
    auto_hide: AutoHide,
    announcer: LiveRegion,
    notices: LiveRegion,
    pub(crate) keymap: KeymapPreset,
    pub(crate) gestures: GestureInterpreter,
    pub(crate) pointer: PointerState,
    host: Box<dyn HostApi>,
    fullscreen: bool,
}

impl App {
    pub fn new(
        slides: Box<dyn SlideSource>,
        config: Config,
        host: Box<dyn HostApi>,
        now: Instant,
    ) -> Self {
        let timing = &config.timing;
        let navigator = Navigator::new(slides.slide_count(), TransitionTiming::from(timing));
        let mut app = Self {
            navigator,
            presenter: Presenter,
            view: ViewModel::default(),
            timers: Timers::new(),
            auto_hide: AutoHide::new(timing.autohide_idle()),
            announcer: LiveRegion::new(Channel::Announcement, timing.announcement_clear()),
            notices: LiveRegion::new(Channel::Notice, timing.notice()),
            keymap: KeymapPreset::parse(&config.keymap.preset),
            gestures: GestureInterpreter::new(SwipeThresholds::from(&config.gesture)),
            pointer: PointerState::default(),
            host,
            fullscreen: false,
            slides,
            config,
        };

        if !app.navigator.state().is_empty() {
            app.view.mark_active(app.navigator.state().current_index);
        }
        app.presenter
            .present(app.navigator.state(), app.slides.as_ref(), &mut app.view);
        app.auto_hide
            .on_activity(now, &mut app.timers, &mut app.view);
        app.sync_host_title();
        app
    }

    pub fn navigation(&self) -> &NavigationState {
        self.navigator.state()
    }

    pub fn view(&self) -> &ViewModel {
        &self.view
    }

    pub(crate) fn view_mut(&mut self) -> &mut ViewModel {
        &mut self.view
    }

    pub fn slides(&self) -> &dyn SlideSource {
        self.slides.as_ref()
    }

    pub fn is_fullscreen(&self) -> bool {
        self.fullscreen
    }

    pub fn next_deadline(&self) -> Option<Instant> {
        self.timers.next_deadline()
    }

    pub fn handle_intent(&mut self, intent: Intent, now: Instant) -> IntentOutcome {
        if intent == Intent::Quit {
            tracing::info!("quit requested");
            return IntentOutcome::QuitRequested;
        }
        self.auto_hide
            .on_activity(now, &mut self.timers, &mut self.view);

        let outcome = match intent {
            Intent::Next => self.navigator.next(now, &mut self.timers),
            Intent::Previous => self.navigator.previous(now, &mut self.timers),
            Intent::GoTo { index } => self.navigator.go_to(index, now, &mut self.timers),
            Intent::Reset => self.navigator.reset(now, &mut self.timers),
            Intent::Last => self.navigator.last(now, &mut self.timers),
            Intent::ToggleFullscreen => {
                self.set_fullscreen(!self.fullscreen);
                return IntentOutcome::Handled;
            }
            Intent::ExitFullscreen => {
                if self.fullscreen {
                    self.set_fullscreen(false);
                }
                return IntentOutcome::Handled;
            }
            Intent::Print => {
                self.print();
                return IntentOutcome::Handled;
            }
            Intent::Activity | Intent::Quit => return IntentOutcome::Handled,
        };

        match outcome {
            NavOutcome::Accepted { from, to } => {
                tracing::debug!(intent = intent.as_str(), from, to, "transition started");
            }
            NavOutcome::Rejected(reason) => {
                tracing::debug!(
                    intent = intent.as_str(),
                    reason = reason.as_str(),
                    "navigation ignored"
                );
            }
        }
        IntentOutcome::Handled
    }

    /// Runs every timer due at `now`, in deadline order. Follow-up timers
    /// are scheduled relative to the deadline that fired, not to `now`.
    pub fn advance(&mut self, now: Instant) {
        while let Some((deadline, event)) = self.timers.pop_due(now) {
            match event {
                TimerEvent::CommitTransition { target } => {
                    self.commit_transition(target, deadline);
                }
                TimerEvent::SettleTransition => {
                    if let Some(outgoing) = self.navigator.settle() {
                        self.presenter.finish_crossfade(outgoing, &mut self.view);
                    }
                }
                TimerEvent::AutoHideElapsed => self.auto_hide.on_elapsed(&mut self.view),
                TimerEvent::ClearAnnouncement => self.announcer.withdraw(&mut self.view),
                TimerEvent::ClearNotice => self.notices.withdraw(&mut self.view),
            }
        }
        self.sync_host_title();
    }

    /// Shows an unexpected fault as a transient notice. Navigation state is
    /// left alone.
    pub fn report_fault(&mut self, message: &str, now: Instant) {
        tracing::error!("{message}");
        self.notices
            .post(message, now, &mut self.timers, &mut self.view);
    }

    /// Zero-based, like every other index in the navigator.
    pub fn go_to_slide(&mut self, index: i64, now: Instant) -> NavOutcome {
        self.auto_hide
            .on_activity(now, &mut self.timers, &mut self.view);
        self.navigator.go_to(index, now, &mut self.timers)
    }

    pub fn next(&mut self, now: Instant) -> NavOutcome {
        self.go_to_relative(1, now)
    }

    pub fn previous(&mut self, now: Instant) -> NavOutcome {
        self.go_to_relative(-1, now)
    }

    pub fn reset(&mut self, now: Instant) -> NavOutcome {
        self.go_to_slide(0, now)
    }

    pub fn current_slide_info(&self) -> Option<SlideInfo> {
        slide_info(self.navigator.state(), self.slides.as_ref())
    }

    pub fn export_slide_data(&self) -> SlideExport {
        export_slides(self.navigator.state(), self.slides.as_ref(), Utc::now())
    }

    fn go_to_relative(&mut self, step: i64, now: Instant) -> NavOutcome {
        let current = i64::try_from(self.navigator.state().current_index).unwrap_or(i64::MAX);
        self.go_to_slide(current.saturating_add(step), now)
    }

    fn commit_transition(&mut self, target: usize, at: Instant) {
        let Some((from, to)) = self.navigator.commit(target, at, &mut self.timers) else {
            return;
        };
        self.presenter.begin_crossfade(from, to, &mut self.view);
        if let Some(projection) =
            self.presenter
                .present(self.navigator.state(), self.slides.as_ref(), &mut self.view)
        {
            tracing::info!(slide = to + 1, title = %projection.slide_title, "slide changed");
            self.announcer
                .post(projection.announcement, at, &mut self.timers, &mut self.view);
        }
    }

    fn set_fullscreen(&mut self, enabled: bool) {
        let result = if enabled {
            self.host.request_fullscreen()
        } else {
            self.host.exit_fullscreen()
        };
        match result {
            Ok(()) => {
                self.fullscreen = enabled;
                self.view.mark_dirty();
            }
            Err(err) => tracing::warn!("fullscreen change ignored: {err}"),
        }
    }

    fn print(&mut self) {
        let document = printable_layout(self.slides.as_ref());
        match self.host.print(&document) {
            Ok(path) => tracing::info!(path = %path.display(), "printable layout written"),
            Err(err) => tracing::warn!("print failed: {err}"),
        }
    }

    fn sync_host_title(&mut self) {
        let Some(title) = self.view.take_title_change() else {
            return;
        };
        let title = title.to_string();
        if let Err(err) = self.host.set_title(&title) {
            tracing::warn!("title update failed: {err}");
        }
    }
}
