use std::any::Any;
use std::future;
use std::panic::{self, AssertUnwindSafe};
use std::time::Instant;

use tokio::sync::mpsc::{UnboundedReceiver, UnboundedSender};
use tokio::time;

use crate::error::AppResult;
use crate::event::DomainEvent;

use super::core::{App, IntentOutcome};
use super::event_bus::EventBus;
use super::terminal_session::{TerminalSession, TerminalSurface};

enum WaitEvent {
    Event(DomainEvent),
    TimerDue,
    Closed,
}

enum LoopControl {
    Continue,
    Break,
}

impl App {
    pub async fn run(&mut self) -> AppResult<()> {
        let mut session = TerminalSession::enter()?;
        let (tx, mut rx, mut bus) = EventBus::spawn();
        tracing::info!(slides = self.navigation().total_slides, "presentation started");

        loop {
            let now = Instant::now();
            self.guarded("timer", |app| app.advance(now));
            self.redraw(&mut session);

            let waited = wait_next_event(&mut rx, self.next_deadline()).await;
            if matches!(
                self.handle_waited_event(waited, &tx, &mut session),
                LoopControl::Break
            ) {
                break;
            }
        }

        bus.shutdown();
        session.restore()?;
        tracing::info!("presentation closed");
        Ok(())
    }

    fn redraw(&mut self, session: &mut impl TerminalSurface) {
        if !self.view_mut().take_dirty() {
            return;
        }
        if let Some(Err(err)) = self.guarded("draw", |app| app.draw_frame(session)) {
            self.report_fault(&format!("draw failed: {err}"), Instant::now());
        }
    }

    fn handle_waited_event(
        &mut self,
        waited: WaitEvent,
        tx: &UnboundedSender<DomainEvent>,
        session: &mut impl TerminalSurface,
    ) -> LoopControl {
        self.guarded("event handling", |app| app.dispatch_waited_event(waited, tx, session))
            .unwrap_or(LoopControl::Continue)
    }

    /// Runs one step of the loop; a panic inside it becomes a transient
    /// notice and the session carries on.
    fn guarded<T>(&mut self, step: &str, run: impl FnOnce(&mut Self) -> T) -> Option<T> {
        match panic::catch_unwind(AssertUnwindSafe(|| run(self))) {
            Ok(value) => Some(value),
            Err(payload) => {
                let message = panic_message(payload.as_ref());
                self.report_fault(&format!("{step} panicked: {message}"), Instant::now());
                None
            }
        }
    }

    fn dispatch_waited_event(
        &mut self,
        waited: WaitEvent,
        tx: &UnboundedSender<DomainEvent>,
        session: &mut impl TerminalSurface,
    ) -> LoopControl {
        let now = Instant::now();
        match waited {
            WaitEvent::Event(DomainEvent::Input(event)) => {
                let resized = matches!(event, crossterm::event::Event::Resize(_, _));
                if let Some(intent) = self.translate_input(event, now)
                    && tx.send(DomainEvent::Intent(intent)).is_err()
                {
                    tracing::debug!(intent = intent.as_str(), "event queue closed");
                    return LoopControl::Break;
                }
                if resized && let Err(err) = session.clear() {
                    self.report_fault(&format!("terminal clear failed: {err}"), now);
                }
            }
            WaitEvent::Event(DomainEvent::InputError(message)) => {
                self.report_fault(&format!("input error: {message}"), now);
            }
            WaitEvent::Event(DomainEvent::Intent(intent)) => {
                if self.handle_intent(intent, now) == IntentOutcome::QuitRequested {
                    return LoopControl::Break;
                }
            }
            WaitEvent::TimerDue => {}
            WaitEvent::Closed => return LoopControl::Break,
        }
        LoopControl::Continue
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "unknown panic".to_string()
    }
}

/// Waits for the next queued event or the earliest timer, whichever is
/// first. Queued events win ties so input order is preserved.
async fn wait_next_event(
    rx: &mut UnboundedReceiver<DomainEvent>,
    deadline: Option<Instant>,
) -> WaitEvent {
    let timer = async {
        match deadline {
            Some(deadline) => time::sleep_until(time::Instant::from_std(deadline)).await,
            None => future::pending::<()>().await,
        }
    };

    tokio::select! {
        biased;
        maybe_event = rx.recv() => {
            match maybe_event {
                Some(event) => WaitEvent::Event(event),
                None => WaitEvent::Closed,
            }
        },
        _ = timer => WaitEvent::TimerDue,
    }
}
