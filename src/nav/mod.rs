mod navigator;
mod state;

pub use navigator::{NavOutcome, Navigator, RejectReason, TransitionTiming};
pub use state::{NavigationState, Phase};
