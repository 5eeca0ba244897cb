use std::path::Path;

use crate::error::AppResult;

mod markdown;
mod traits;

pub use markdown::MarkdownDeck;
pub use traits::{SlideSource, derived_title};

pub fn open_default_deck(path: impl AsRef<Path>) -> AppResult<Box<dyn SlideSource>> {
    MarkdownDeck::open(path).map(|deck| Box::new(deck) as Box<dyn SlideSource>)
}
