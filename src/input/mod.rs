pub mod events;
pub mod gesture;
pub mod keymap;

pub use events::Intent;
pub use gesture::{GestureInterpreter, SwipeThresholds, TouchPoint};
