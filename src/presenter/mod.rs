mod live_region;
mod projection;
mod traits;
mod view_model;

pub use live_region::{Channel, LiveRegion};
pub use projection::{Projection, counter_text, progress_fraction};
pub use traits::PresentationSurface;
pub use view_model::ViewModel;

use crate::deck::SlideSource;
use crate::nav::NavigationState;

/// Applies navigation snapshots to a presentation surface. Reads state,
/// never writes it.
#[derive(Debug, Clone, Copy, Default)]
pub struct Presenter;

impl Presenter {
    /// Pushes counter, progress, button enablement and page title. Returns
    /// the projection so the caller can announce it.
    pub fn present(
        &self,
        state: &NavigationState,
        slides: &dyn SlideSource,
        surface: &mut dyn PresentationSurface,
    ) -> Option<Projection> {
        let Some(projection) = Projection::derive(state, slides) else {
            surface.set_counter("0 / 0");
            surface.set_progress(0.0);
            surface.set_nav_enabled(false, false);
            surface.set_page_title(slides.deck_title());
            return None;
        };

        surface.set_counter(&projection.counter);
        surface.set_progress(projection.progress);
        surface.set_nav_enabled(projection.previous_enabled, projection.next_enabled);
        surface.set_page_title(&projection.page_title);
        Some(projection)
    }

    /// Outgoing slide fades out while the incoming one becomes active.
    pub fn begin_crossfade(&self, from: usize, to: usize, surface: &mut dyn PresentationSurface) {
        surface.mark_previous(from);
        surface.mark_active(to);
    }

    pub fn finish_crossfade(&self, outgoing: usize, surface: &mut dyn PresentationSurface) {
        surface.clear_marks(outgoing);
    }
}

#[cfg(test)]
mod tests {
    use crate::deck::MarkdownDeck;
    use crate::nav::NavigationState;

    use super::{Presenter, ViewModel};

    #[test]
    fn present_applies_projection_without_touching_state() {
        let deck = MarkdownDeck::parse("# A\n---\n# B\n---\n# C\n---\n# D", "abcd");
        let mut state = NavigationState::new(4);
        state.current_index = 3;
        let before = state.clone();
        let mut view = ViewModel::default();

        let projection = Presenter
            .present(&state, &deck, &mut view)
            .expect("deck is not empty");

        assert_eq!(state, before);
        assert_eq!(view.counter(), "4 / 4");
        assert_eq!(view.progress(), 1.0);
        assert!(view.previous_enabled());
        assert!(!view.next_enabled());
        assert_eq!(view.page_title(), "D - A");
        assert_eq!(projection.announcement, "Slide 4 of 4: D");
    }

    #[test]
    fn present_empty_deck_shows_zero_counter() {
        let deck = MarkdownDeck::parse("", "empty");
        let mut view = ViewModel::default();

        assert!(Presenter.present(&NavigationState::new(0), &deck, &mut view).is_none());
        assert_eq!(view.counter(), "0 / 0");
        assert_eq!(view.progress(), 0.0);
        assert!(!view.previous_enabled());
        assert!(!view.next_enabled());
        assert_eq!(view.page_title(), "empty");
    }

    #[test]
    fn crossfade_marks_then_cleans_up_outgoing_slide() {
        let mut view = ViewModel::default();
        Presenter.begin_crossfade(0, 2, &mut view);
        assert_eq!(view.active(), Some(2));
        assert_eq!(view.previous(), Some(0));

        Presenter.finish_crossfade(0, &mut view);
        assert_eq!(view.previous(), None);
        assert_eq!(view.active(), Some(2));
    }
}
