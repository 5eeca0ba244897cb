use std::time::Instant;

use crossterm::event::{Event, KeyEventKind, MouseButton, MouseEvent, MouseEventKind};

use crate::input::keymap::map_key_to_intent_with_preset;
use crate::input::{Intent, TouchPoint};

use super::core::App;

impl App {
    /// Translates a raw terminal event into at most one intent for the
    /// event queue.
    pub(crate) fn translate_input(&mut self, event: Event, now: Instant) -> Option<Intent> {
        match event {
            Event::Key(key) if matches!(key.kind, KeyEventKind::Press | KeyEventKind::Repeat) => {
                Some(map_key_to_intent_with_preset(key, self.keymap).unwrap_or(Intent::Activity))
            }
            Event::Mouse(mouse) => self.translate_mouse(mouse, now),
            Event::Resize(_, _) => {
                self.view_mut().mark_dirty();
                None
            }
            _ => None,
        }
    }

    fn translate_mouse(&mut self, mouse: MouseEvent, now: Instant) -> Option<Intent> {
        let (column, row) = (mouse.column, mouse.row);
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                self.pointer.pressed_at = Some((column, row));
                let point = self.touch_point(column, row, now);
                self.gestures.touch_start(point);
                Some(Intent::Activity)
            }
            MouseEventKind::Up(MouseButton::Left) => {
                let pressed_at = self.pointer.pressed_at.take();
                let point = self.touch_point(column, row, now);
                if let Some(swipe) = self.gestures.touch_end(point) {
                    return Some(swipe);
                }
                if pressed_at == Some((column, row)) {
                    return Some(self.click_intent(column, row));
                }
                Some(Intent::Activity)
            }
            _ => Some(Intent::Activity),
        }
    }

    /// Disabled buttons still count as activity but never navigate.
    fn click_intent(&self, column: u16, row: u16) -> Intent {
        let Some(controls) = self.pointer.controls else {
            return Intent::Activity;
        };
        if controls.previous_contains(column, row) && self.view().previous_enabled() {
            return Intent::Previous;
        }
        if controls.next_contains(column, row) && self.view().next_enabled() {
            return Intent::Next;
        }
        Intent::Activity
    }

    fn touch_point(&self, column: u16, row: u16, now: Instant) -> TouchPoint {
        TouchPoint::new(
            f32::from(column) * self.config.gesture.cell_width_px,
            f32::from(row) * self.config.gesture.cell_height_px,
            now,
        )
    }
}

#[cfg(test)]
mod tests {
    use std::time::{Duration, Instant};

    use crossterm::event::{
        Event, KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
    };
    use ratatui::layout::Rect;

    use crate::app::tests::{RecordingHost, app_with_config, app_with_deck};
    use crate::config::Config;
    use crate::input::Intent;
    use crate::ui::ControlHitRegions;

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> Event {
        Event::Mouse(MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        })
    }

    #[test]
    fn keys_map_through_configured_preset() {
        let t0 = Instant::now();
        let (mut app, _) = app_with_deck(3, RecordingHost::default(), t0);

        let right = Event::Key(KeyEvent::new(KeyCode::Right, KeyModifiers::NONE));
        assert_eq!(app.translate_input(right.clone(), t0), Some(Intent::Next));

        let j = Event::Key(KeyEvent::new(KeyCode::Char('j'), KeyModifiers::NONE));
        assert_eq!(app.translate_input(j.clone(), t0), Some(Intent::Activity));

        let mut config = Config::default();
        config.keymap.preset = "vim".to_string();
        let (mut vim, _) = app_with_config(3, config, RecordingHost::default(), t0);
        assert_eq!(vim.translate_input(j, t0), Some(Intent::Next));
        assert_eq!(vim.translate_input(right, t0), Some(Intent::Next));
    }

    #[test]
    fn fast_horizontal_drag_becomes_swipe() {
        let t0 = Instant::now();
        let (mut app, _) = app_with_deck(3, RecordingHost::default(), t0);

        let down = mouse(MouseEventKind::Down(MouseButton::Left), 40, 5);
        assert_eq!(app.translate_input(down, t0), Some(Intent::Activity));
        let up = mouse(MouseEventKind::Up(MouseButton::Left), 30, 5);
        assert_eq!(
            app.translate_input(up, t0 + Duration::from_millis(120)),
            Some(Intent::Next)
        );

        let down = mouse(MouseEventKind::Down(MouseButton::Left), 30, 5);
        app.translate_input(down, t0);
        let up = mouse(MouseEventKind::Up(MouseButton::Left), 40, 5);
        assert_eq!(
            app.translate_input(up, t0 + Duration::from_millis(400)),
            Some(Intent::Activity)
        );
    }

    #[test]
    fn clicks_on_enabled_buttons_navigate() {
        let t0 = Instant::now();
        let (mut app, _) = app_with_deck(3, RecordingHost::default(), t0);
        app.pointer.controls = Some(ControlHitRegions {
            previous: Rect::new(0, 23, 8, 1),
            next: Rect::new(72, 23, 8, 1),
        });

        let click = |app: &mut crate::app::App, column| {
            app.translate_input(mouse(MouseEventKind::Down(MouseButton::Left), column, 23), t0);
            app.translate_input(mouse(MouseEventKind::Up(MouseButton::Left), column, 23), t0)
        };

        assert_eq!(click(&mut app, 75), Some(Intent::Next));
        assert_eq!(click(&mut app, 3), Some(Intent::Activity));
        assert_eq!(click(&mut app, 40), Some(Intent::Activity));
    }

    #[test]
    fn pointer_movement_is_activity_only() {
        let t0 = Instant::now();
        let (mut app, _) = app_with_deck(2, RecordingHost::default(), t0);
        assert_eq!(
            app.translate_input(mouse(MouseEventKind::Moved, 1, 1), t0),
            Some(Intent::Activity)
        );
        assert_eq!(app.translate_input(Event::Resize(80, 24), t0), None);
    }

    #[test]
    fn other_buttons_and_wheel_count_as_activity() {
        let t0 = Instant::now();
        let (mut app, _) = app_with_deck(2, RecordingHost::default(), t0);
        let kinds = [
            MouseEventKind::Down(MouseButton::Right),
            MouseEventKind::Up(MouseButton::Right),
            MouseEventKind::Down(MouseButton::Middle),
            MouseEventKind::Up(MouseButton::Middle),
            MouseEventKind::ScrollDown,
            MouseEventKind::ScrollUp,
        ];
        for kind in kinds {
            assert_eq!(
                app.translate_input(mouse(kind, 75, 23), t0),
                Some(Intent::Activity)
            );
        }
        assert_eq!(app.navigation().current_index, 0);
    }
}
