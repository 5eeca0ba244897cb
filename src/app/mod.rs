mod core;
mod event_bus;
mod event_loop;
mod host;
mod input_ops;
mod render_ops;
pub(crate) mod terminal_session;

#[cfg(test)]
mod tests;

pub use core::{App, IntentOutcome};
pub use host::{HostApi, TerminalHost};
