use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

/// Draws one slide. `fading_in` renders it dimmed while the crossfade from
/// the outgoing slide is still settling.
pub fn draw_slide(
    frame: &mut Frame<'_>,
    area: Rect,
    title: &str,
    text: Option<&str>,
    fading_in: bool,
) {
    if area.width == 0 || area.height == 0 {
        return;
    }

    let mut style = Style::default();
    if fading_in {
        style = style.add_modifier(Modifier::DIM);
    }

    let lines: Vec<Line<'_>> = text
        .unwrap_or_default()
        .lines()
        .map(|line| {
            if line.trim_start().starts_with('#') {
                Line::from(Span::styled(
                    line.trim_start().trim_start_matches('#').trim(),
                    Style::default().add_modifier(Modifier::BOLD),
                ))
            } else {
                Line::from(line)
            }
        })
        .collect();

    let block = Block::default()
        .title(format!(" {title} "))
        .borders(Borders::ALL);
    let paragraph = Paragraph::new(lines)
        .block(block)
        .style(style)
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}

pub fn draw_empty_deck(frame: &mut Frame<'_>, area: Rect) {
    if area.width == 0 || area.height == 0 {
        return;
    }
    let block = Block::default().borders(Borders::ALL);
    frame.render_widget(Paragraph::new("No slides").block(block), area);
}

#[cfg(test)]
mod tests {
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;
    use ratatui::layout::{Position, Rect};
    use ratatui::style::Modifier;

    use super::draw_slide;

    #[test]
    fn heading_lines_render_bold_without_markers() {
        let mut terminal =
            Terminal::new(TestBackend::new(30, 6)).expect("test terminal should initialize");
        terminal
            .draw(|frame| {
                draw_slide(frame, Rect::new(0, 0, 30, 6), "Intro", Some("# Intro\nbody"), false);
            })
            .expect("draw should pass");

        let buffer = terminal.backend().buffer();
        assert_eq!(buffer[Position::new(1, 1)].symbol(), "I");
        assert!(buffer[Position::new(1, 1)].modifier.contains(Modifier::BOLD));
        assert_eq!(buffer[Position::new(1, 2)].symbol(), "b");
        assert!(!buffer[Position::new(1, 2)].modifier.contains(Modifier::DIM));
    }

    #[test]
    fn fading_slide_is_dimmed() {
        let mut terminal =
            Terminal::new(TestBackend::new(30, 6)).expect("test terminal should initialize");
        terminal
            .draw(|frame| {
                draw_slide(frame, Rect::new(0, 0, 30, 6), "Two", Some("body"), true);
            })
            .expect("draw should pass");

        assert!(terminal.backend().buffer()[Position::new(1, 1)].modifier.contains(Modifier::DIM));
    }
}
