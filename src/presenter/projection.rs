use crate::deck::{SlideSource, derived_title};
use crate::nav::NavigationState;

/// Everything the page shows about the position, derived from one
/// navigation snapshot.
#[derive(Debug, Clone, PartialEq)]
pub struct Projection {
    pub counter: String,
    pub progress: f64,
    pub previous_enabled: bool,
    pub next_enabled: bool,
    pub slide_title: String,
    pub page_title: String,
    pub announcement: String,
}

impl Projection {
    /// `None` for an empty deck, where no slide is current.
    pub fn derive(state: &NavigationState, slides: &dyn SlideSource) -> Option<Self> {
        if state.is_empty() {
            return None;
        }
        let index = state.current_index;
        let total = state.total_slides;
        let slide_title = derived_title(slides, index);

        Some(Self {
            counter: counter_text(index, total),
            progress: progress_fraction(index, total),
            previous_enabled: !state.is_first(),
            next_enabled: !state.is_last(),
            page_title: page_title(&slide_title, slides.deck_title()),
            announcement: format!("Slide {} of {}: {}", index + 1, total, slide_title),
            slide_title,
        })
    }
}

pub fn counter_text(index: usize, total: usize) -> String {
    format!("{} / {}", index + 1, total)
}

pub fn progress_fraction(index: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    (index + 1) as f64 / total as f64
}

fn page_title(slide_title: &str, deck_title: &str) -> String {
    if deck_title.is_empty() || deck_title == slide_title {
        return slide_title.to_string();
    }
    format!("{slide_title} - {deck_title}")
}
