use chrono::{DateTime, Utc};
use serde::Serialize;
use unicode_segmentation::UnicodeSegmentation;

use crate::deck::{SlideSource, derived_title};
use crate::nav::NavigationState;

const EXCERPT_GRAPHEMES: usize = 100;
const PRINT_RULER: &str = "----------------------------------------";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SlideInfo {
    pub index: usize,
    pub total: usize,
    pub title: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SlideSummary {
    pub index: usize,
    pub title: String,
    pub excerpt: String,
}

/// Snapshot of the deck for hosting code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SlideExport {
    pub title: String,
    pub timestamp: DateTime<Utc>,
    pub total_slides: usize,
    pub current_index: usize,
    pub slides: Vec<SlideSummary>,
}

/// `None` when the deck is empty.
pub fn slide_info(state: &NavigationState, slides: &dyn SlideSource) -> Option<SlideInfo> {
    if state.is_empty() {
        return None;
    }
    Some(SlideInfo {
        index: state.current_index,
        total: state.total_slides,
        title: derived_title(slides, state.current_index),
    })
}

pub fn export_slides(
    state: &NavigationState,
    slides: &dyn SlideSource,
    timestamp: DateTime<Utc>,
) -> SlideExport {
    SlideExport {
        title: slides.deck_title().to_string(),
        timestamp,
        total_slides: state.total_slides,
        current_index: state.current_index,
        slides: (0..slides.slide_count())
            .map(|index| SlideSummary {
                index,
                title: derived_title(slides, index),
                excerpt: excerpt(slides.text(index).unwrap_or_default(), EXCERPT_GRAPHEMES),
            })
            .collect(),
    }
}

/// Collapses whitespace and cuts to `limit` grapheme clusters, marking the
/// cut with `...`.
pub fn excerpt(text: &str, limit: usize) -> String {
    let collapsed = text.split_whitespace().collect::<Vec<_>>().join(" ");
    let mut graphemes = collapsed.graphemes(true);
    let head: String = graphemes.by_ref().take(limit).collect();
    if graphemes.next().is_some() {
        format!("{head}...")
    } else {
        head
    }
}

/// Every slide in order, headed by its position and title.
pub fn printable_layout(slides: &dyn SlideSource) -> String {
    let total = slides.slide_count();
    let mut out = String::new();
    out.push_str(slides.deck_title());
    out.push('\n');
    for index in 0..total {
        out.push_str(PRINT_RULER);
        out.push('\n');
        out.push_str(&format!(
            "Slide {} / {}: {}\n\n",
            index + 1,
            total,
            derived_title(slides, index)
        ));
        out.push_str(slides.text(index).unwrap_or_default());
        out.push('\n');
    }
    out
}
