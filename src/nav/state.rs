#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Transitioning { target: usize },
}

/// The only mutable navigation state. Everything shown to the user is
/// projected from it on demand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationState {
    pub current_index: usize,
    pub total_slides: usize,
    pub phase: Phase,
    /// Outgoing slide of the active transition, cleared once it settles.
    pub previous_index: Option<usize>,
}

impl NavigationState {
    pub fn new(total_slides: usize) -> Self {
        Self {
            current_index: 0,
            total_slides,
            phase: Phase::Idle,
            previous_index: None,
        }
    }

    pub fn is_transitioning(&self) -> bool {
        matches!(self.phase, Phase::Transitioning { .. })
    }

    pub fn is_empty(&self) -> bool {
        self.total_slides == 0
    }

    pub fn is_first(&self) -> bool {
        self.current_index == 0
    }

    pub fn is_last(&self) -> bool {
        self.current_index + 1 >= self.total_slides
    }

    pub fn last_index(&self) -> Option<usize> {
        self.total_slides.checked_sub(1)
    }
}
