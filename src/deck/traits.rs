/// Ordered slide panels, fixed for the lifetime of a session.
pub trait SlideSource: Send {
    fn deck_title(&self) -> &str;
    fn slide_count(&self) -> usize;
    /// First heading text of the panel, if it has one.
    fn heading(&self, index: usize) -> Option<&str>;
    fn text(&self, index: usize) -> Option<&str>;
}

/// Title shown for a slide: its heading, else `Slide {n}` (1-based).
pub fn derived_title(source: &dyn SlideSource, index: usize) -> String {
    match source.heading(index) {
        Some(heading) if !heading.trim().is_empty() => heading.trim().to_string(),
        _ => format!("Slide {}", index + 1),
    }
}
