use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{LineGauge, Paragraph};
use unicode_width::UnicodeWidthStr;

use crate::affordance::Affordance;
use crate::presenter::ViewModel;

const PREVIOUS_LABEL: &str = "[◀ Prev]";
const NEXT_LABEL: &str = "[Next ▶]";

/// Screen cells of the clickable buttons from the last draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ControlHitRegions {
    pub previous: Rect,
    pub next: Rect,
}

impl ControlHitRegions {
    pub fn previous_contains(&self, column: u16, row: u16) -> bool {
        contains(self.previous, column, row)
    }

    pub fn next_contains(&self, column: u16, row: u16) -> bool {
        contains(self.next, column, row)
    }
}

fn contains(rect: Rect, column: u16, row: u16) -> bool {
    column >= rect.x
        && column < rect.x.saturating_add(rect.width)
        && row >= rect.y
        && row < rect.y.saturating_add(rect.height)
}

pub fn draw_controls(frame: &mut Frame<'_>, area: Rect, view: &ViewModel) -> ControlHitRegions {
    let previous_width = PREVIOUS_LABEL.width() as u16;
    let next_width = NEXT_LABEL.width() as u16;
    let counter_width = (view.counter().width() as u16).saturating_add(2);

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(previous_width),
            Constraint::Length(counter_width),
            Constraint::Min(0),
            Constraint::Length(next_width),
        ])
        .split(area);

    let dimmed = view.affordance() == Affordance::Dimmed;
    let base = if dimmed {
        Style::default()
            .fg(Color::DarkGray)
            .add_modifier(Modifier::DIM)
    } else {
        Style::default()
    };

    frame.render_widget(
        Paragraph::new(PREVIOUS_LABEL).style(button_style(base, view.previous_enabled())),
        chunks[0],
    );
    frame.render_widget(
        Paragraph::new(format!(" {} ", view.counter())).style(base),
        chunks[1],
    );
    frame.render_widget(
        LineGauge::default()
            .ratio(view.progress())
            .label("")
            .style(base)
            .filled_style(base.fg(if dimmed { Color::DarkGray } else { Color::Cyan })),
        chunks[2],
    );
    frame.render_widget(
        Paragraph::new(NEXT_LABEL).style(button_style(base, view.next_enabled())),
        chunks[3],
    );

    ControlHitRegions {
        previous: chunks[0],
        next: chunks[3],
    }
}

fn button_style(base: Style, enabled: bool) -> Style {
    if enabled {
        base.add_modifier(Modifier::BOLD)
    } else {
        base.fg(Color::DarkGray)
    }
}
