use crossterm::event::Event;

use crate::input::Intent;

/// Everything the event loop consumes, in arrival order.
#[derive(Debug)]
pub(crate) enum DomainEvent {
    /// Raw terminal input, not yet translated.
    Input(Event),
    InputError(String),
    Intent(Intent),
}
