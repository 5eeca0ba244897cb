use ratatui::layout::{Constraint, Direction, Layout, Rect};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UiLayout {
    pub slide: Rect,
    /// Announcement row; hidden in fullscreen.
    pub live_region: Option<Rect>,
    /// Buttons, counter and progress; hidden in fullscreen.
    pub controls: Option<Rect>,
}

pub fn split_layout(area: Rect, fullscreen: bool) -> UiLayout {
    if fullscreen {
        return UiLayout {
            slide: area,
            live_region: None,
            controls: None,
        };
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(area);

    UiLayout {
        slide: chunks[0],
        live_region: Some(chunks[1]),
        controls: Some(chunks[2]),
    }
}

pub(crate) fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.max(1).min(area.width);
    let height = height.max(1).min(area.height);
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width, height)
}
