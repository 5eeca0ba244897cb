use crate::affordance::Affordance;

use super::traits::PresentationSurface;

/// Presentation state of the terminal page. The UI draws from it; tests
/// read it back to observe what the user would see.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewModel {
    active: Option<usize>,
    previous: Option<usize>,
    counter: String,
    progress: f64,
    previous_enabled: bool,
    next_enabled: bool,
    page_title: String,
    live_region: Option<String>,
    notice: Option<String>,
    affordance: Affordance,
    dirty: bool,
    title_changed: bool,
}

impl Default for ViewModel {
    fn default() -> Self {
        Self {
            active: None,
            previous: None,
            counter: String::new(),
            progress: 0.0,
            previous_enabled: false,
            next_enabled: false,
            page_title: String::new(),
            live_region: None,
            notice: None,
            affordance: Affordance::Visible,
            dirty: true,
            title_changed: false,
        }
    }
}

impl ViewModel {
    pub fn active(&self) -> Option<usize> {
        self.active
    }

    pub fn previous(&self) -> Option<usize> {
        self.previous
    }

    pub fn counter(&self) -> &str {
        &self.counter
    }

    pub fn progress(&self) -> f64 {
        self.progress
    }

    pub fn previous_enabled(&self) -> bool {
        self.previous_enabled
    }

    pub fn next_enabled(&self) -> bool {
        self.next_enabled
    }

    pub fn page_title(&self) -> &str {
        &self.page_title
    }

    pub fn live_region(&self) -> Option<&str> {
        self.live_region.as_deref()
    }

    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    pub fn affordance(&self) -> Affordance {
        self.affordance
    }

    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub fn take_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    /// The page title, once per change, for pushing to the host.
    pub fn take_title_change(&mut self) -> Option<&str> {
        if !std::mem::take(&mut self.title_changed) {
            return None;
        }
        Some(&self.page_title)
    }
}

impl PresentationSurface for ViewModel {
    fn mark_active(&mut self, slide: usize) {
        if self.previous == Some(slide) {
            self.previous = None;
        }
        self.active = Some(slide);
        self.dirty = true;
    }

    fn mark_previous(&mut self, slide: usize) {
        if self.active == Some(slide) {
            self.active = None;
        }
        self.previous = Some(slide);
        self.dirty = true;
    }

    fn clear_marks(&mut self, slide: usize) {
        if self.active == Some(slide) {
            self.active = None;
        }
        if self.previous == Some(slide) {
            self.previous = None;
        }
        self.dirty = true;
    }

    fn set_counter(&mut self, text: &str) {
        if self.counter != text {
            self.counter = text.to_string();
            self.dirty = true;
        }
    }

    fn set_progress(&mut self, fraction: f64) {
        self.progress = fraction.clamp(0.0, 1.0);
        self.dirty = true;
    }

    fn set_nav_enabled(&mut self, previous: bool, next: bool) {
        self.previous_enabled = previous;
        self.next_enabled = next;
        self.dirty = true;
    }

    fn set_page_title(&mut self, title: &str) {
        if self.page_title != title {
            self.page_title = title.to_string();
            self.title_changed = true;
            self.dirty = true;
        }
    }

    fn set_live_region(&mut self, message: Option<&str>) {
        self.live_region = message.map(str::to_string);
        self.dirty = true;
    }

    fn set_affordance(&mut self, affordance: Affordance) {
        if self.affordance != affordance {
            self.affordance = affordance;
            self.dirty = true;
        }
    }

    fn set_notice(&mut self, notice: Option<&str>) {
        self.notice = notice.map(str::to_string);
        self.dirty = true;
    }
}
