use crate::deck::derived_title;
use crate::error::AppResult;
use crate::ui;

use super::core::App;
use super::terminal_session::TerminalSurface;

impl App {
    /// Draws the page from the view model and remembers where the buttons
    /// landed for click hit-testing.
    pub(crate) fn draw_frame(&mut self, session: &mut impl TerminalSurface) -> AppResult<()> {
        let size = session.size()?;
        if size.width == 0 || size.height == 0 {
            return Ok(());
        }

        let view = self.view();
        let slides = self.slides();
        let fullscreen = self.is_fullscreen();
        let mut controls = None;

        session.draw(|frame| {
            let layout = ui::split_layout(frame.area(), fullscreen);
            match view.active() {
                Some(active) => ui::draw_slide(
                    frame,
                    layout.slide,
                    &derived_title(slides, active),
                    slides.text(active),
                    view.previous().is_some(),
                ),
                None => ui::draw_empty_deck(frame, layout.slide),
            }
            if let Some(area) = layout.live_region {
                ui::draw_live_region(frame, area, view.live_region());
            }
            if let Some(area) = layout.controls {
                controls = Some(ui::draw_controls(frame, area, view));
            }
            if let Some(notice) = view.notice() {
                ui::draw_notice_overlay(frame, layout.slide, notice);
            }
        })?;

        self.pointer.controls = controls;
        Ok(())
    }
}
