use crossterm::event::{Event, EventStream};
use futures_util::StreamExt;
use tokio::sync::mpsc::{UnboundedReceiver, UnboundedSender, unbounded_channel};
use tokio::task::JoinHandle;

use crate::event::DomainEvent;

/// Producer side of the single-consumer event queue. Input adapters run as
/// tasks here; only the event loop reads the receiver.
pub(crate) struct EventBus {
    tasks: Vec<JoinHandle<()>>,
}

impl EventBus {
    pub(crate) fn spawn() -> (
        UnboundedSender<DomainEvent>,
        UnboundedReceiver<DomainEvent>,
        Self,
    ) {
        let (tx, rx) = unbounded_channel();
        let tasks = vec![spawn_terminal_input(tx.clone())];
        (tx, rx, Self { tasks })
    }

    pub(crate) fn shutdown(&mut self) {
        for task in self.tasks.drain(..) {
            task.abort();
        }
    }
}

impl Drop for EventBus {
    fn drop(&mut self) {
        self.shutdown();
    }
}

fn spawn_terminal_input(tx: UnboundedSender<DomainEvent>) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut input_stream = EventStream::new();
        while let Some(event) = input_stream.next().await {
            let loop_event = match event {
                Ok(event) if is_forwarded(&event) => DomainEvent::Input(event),
                Ok(_) => continue,
                Err(err) => DomainEvent::InputError(err.to_string()),
            };
            if tx.send(loop_event).is_err() {
                return;
            }
        }
        tracing::debug!("terminal input stream ended");
    })
}

fn is_forwarded(event: &Event) -> bool {
    matches!(event, Event::Key(_) | Event::Mouse(_) | Event::Resize(_, _))
}
