use std::path::Path;

use crate::error::{AppError, AppResult};

use super::traits::SlideSource;

const SLIDE_SEPARATOR: &str = "---";

#[derive(Debug, Clone, PartialEq, Eq)]
struct Slide {
    heading: Option<String>,
    text: String,
}

/// Plain-text deck: slides separated by `---` lines, titles taken from the
/// first ATX heading of each slide.
#[derive(Debug, Clone)]
pub struct MarkdownDeck {
    title: String,
    slides: Vec<Slide>,
}

impl SlideSource for MarkdownDeck {
    fn deck_title(&self) -> &str {
        &self.title
    }

    fn slide_count(&self) -> usize {
        self.slides.len()
    }

    fn heading(&self, index: usize) -> Option<&str> {
        self.slides.get(index)?.heading.as_deref()
    }

    fn text(&self, index: usize) -> Option<&str> {
        self.slides.get(index).map(|slide| slide.text.as_str())
    }
}

impl MarkdownDeck {
    pub fn open(path: impl AsRef<Path>) -> AppResult<Self> {
        let path = path.as_ref();
        if path.as_os_str().is_empty() {
            return Err(AppError::invalid_argument("deck path must not be empty"));
        }
        if !path.exists() {
            return Err(AppError::io_with_context(
                std::io::Error::new(std::io::ErrorKind::NotFound, "missing file"),
                format!("deck file not found: {}", path.display()),
            ));
        }
        if !path.is_file() {
            return Err(AppError::invalid_argument(
                "deck path must be a regular file",
            ));
        }

        let raw = std::fs::read_to_string(path).map_err(|source| {
            AppError::io_with_context(source, format!("failed to read deck: {}", path.display()))
        })?;
        let fallback = path
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_else(|| "deck".to_string());

        let deck = Self::parse(&raw, &fallback);
        tracing::info!(
            path = %path.display(),
            slides = deck.slides.len(),
            "deck loaded"
        );
        Ok(deck)
    }

    pub fn parse(raw: &str, fallback_title: &str) -> Self {
        let slides: Vec<Slide> = split_slides(raw)
            .into_iter()
            .filter(|segment| !segment.trim().is_empty())
            .map(|segment| Slide {
                heading: first_heading(&segment),
                text: segment.trim_matches('\n').to_string(),
            })
            .collect();

        let title = slides
            .first()
            .and_then(|slide| slide.heading.clone())
            .unwrap_or_else(|| fallback_title.to_string());

        Self { title, slides }
    }
}

fn split_slides(raw: &str) -> Vec<String> {
    let mut segments = vec![String::new()];
    for line in raw.lines() {
        if line.trim_end() == SLIDE_SEPARATOR {
            segments.push(String::new());
            continue;
        }
        if let Some(current) = segments.last_mut() {
            current.push_str(line);
            current.push('\n');
        }
    }
    segments
}

fn first_heading(segment: &str) -> Option<String> {
    segment.lines().find_map(|line| {
        let line = line.trim_start();
        let level = line.chars().take_while(|ch| *ch == '#').count();
        if level == 0 || level > 6 {
            return None;
        }
        let rest = &line[level..];
        if !rest.is_empty() && !rest.starts_with(' ') {
            return None;
        }
        let text = rest.trim().trim_end_matches('#').trim();
        (!text.is_empty()).then(|| text.to_string())
    })
}
