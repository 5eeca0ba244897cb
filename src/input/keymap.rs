use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::events::Intent;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeymapPreset {
    Default,
    Vim,
}

impl KeymapPreset {
    pub fn parse(value: &str) -> Self {
        match value {
            "default" => Self::Default,
            "vim" => Self::Vim,
            _ => Self::Default,
        }
    }
}

pub fn map_key_to_intent_with_preset(key: KeyEvent, preset: KeymapPreset) -> Option<Intent> {
    match preset {
        KeymapPreset::Default => map_key_default(key),
        KeymapPreset::Vim => map_key_vim(key),
    }
}

fn map_key_default(key: KeyEvent) -> Option<Intent> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => Some(Intent::Quit),
            _ => None,
        };
    }

    match key.code {
        KeyCode::Right | KeyCode::Down | KeyCode::PageDown | KeyCode::Enter => Some(Intent::Next),
        KeyCode::Char(' ') => Some(Intent::Next),
        KeyCode::Left | KeyCode::Up | KeyCode::PageUp | KeyCode::Backspace => {
            Some(Intent::Previous)
        }
        KeyCode::Home => Some(Intent::Reset),
        KeyCode::End => Some(Intent::Last),
        KeyCode::Char('f') | KeyCode::Char('F') => Some(Intent::ToggleFullscreen),
        KeyCode::Esc => Some(Intent::ExitFullscreen),
        KeyCode::Char('p') => Some(Intent::Print),
        KeyCode::Char('q') => Some(Intent::Quit),
        _ => None,
    }
}

fn map_key_vim(key: KeyEvent) -> Option<Intent> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return map_key_default(key);
    }

    match key.code {
        KeyCode::Char('j') | KeyCode::Char('l') => Some(Intent::Next),
        KeyCode::Char('k') | KeyCode::Char('h') => Some(Intent::Previous),
        KeyCode::Char('g') => Some(Intent::Reset),
        KeyCode::Char('G') => Some(Intent::Last),
        _ => map_key_default(key),
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    use super::{Intent, KeymapPreset, map_key_to_intent_with_preset};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn map_default(key: KeyEvent) -> Option<Intent> {
        map_key_to_intent_with_preset(key, KeymapPreset::Default)
    }

    #[test]
    fn keymap_preset_parse_defaults_on_unknown_values() {
        assert_eq!(KeymapPreset::parse("default"), KeymapPreset::Default);
        assert_eq!(KeymapPreset::parse("vim"), KeymapPreset::Vim);
        assert_eq!(KeymapPreset::parse("emacs"), KeymapPreset::Default);
    }

    #[test]
    fn default_preset_maps_navigation_keys() {
        assert_eq!(map_default(key(KeyCode::Right)), Some(Intent::Next));
        assert_eq!(map_default(key(KeyCode::Char(' '))), Some(Intent::Next));
        assert_eq!(map_default(key(KeyCode::PageUp)), Some(Intent::Previous));
        assert_eq!(map_default(key(KeyCode::Home)), Some(Intent::Reset));
        assert_eq!(map_default(key(KeyCode::End)), Some(Intent::Last));
        assert_eq!(map_default(key(KeyCode::Char('f'))), Some(Intent::ToggleFullscreen));
        assert_eq!(map_default(key(KeyCode::Esc)), Some(Intent::ExitFullscreen));
        assert_eq!(map_default(key(KeyCode::Char('j'))), None);
        assert_eq!(
            map_default(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(Intent::Quit)
        );
    }

    #[test]
    fn vim_preset_adds_letter_keys_and_keeps_defaults() {
        let vim = |code| map_key_to_intent_with_preset(key(code), KeymapPreset::Vim);
        assert_eq!(vim(KeyCode::Char('j')), Some(Intent::Next));
        assert_eq!(vim(KeyCode::Char('h')), Some(Intent::Previous));
        assert_eq!(vim(KeyCode::Char('G')), Some(Intent::Last));
        assert_eq!(vim(KeyCode::Left), Some(Intent::Previous));
        assert_eq!(vim(KeyCode::Char('q')), Some(Intent::Quit));
    }
}
