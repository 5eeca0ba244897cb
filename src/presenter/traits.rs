use crate::affordance::Affordance;

/// Visual side of the page, driven by the presenter and the auxiliary
/// controllers. Implementations only record or draw; they never decide.
pub trait PresentationSurface {
    fn mark_active(&mut self, slide: usize);
    fn mark_previous(&mut self, slide: usize);
    fn clear_marks(&mut self, slide: usize);

    fn set_counter(&mut self, text: &str);
    fn set_progress(&mut self, fraction: f64);
    fn set_nav_enabled(&mut self, previous: bool, next: bool);
    fn set_page_title(&mut self, title: &str);
    fn set_live_region(&mut self, message: Option<&str>);

    fn set_affordance(&mut self, affordance: Affordance) {
        let _ = affordance;
    }

    fn set_notice(&mut self, notice: Option<&str>) {
        let _ = notice;
    }
}
