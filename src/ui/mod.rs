mod controls;
mod layout;
mod overlay;
mod slide;

pub use controls::{ControlHitRegions, draw_controls};
pub use layout::{UiLayout, split_layout};
pub use overlay::{draw_live_region, draw_notice_overlay};
pub use slide::{draw_empty_deck, draw_slide};
