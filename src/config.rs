use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;

use crate::error::{AppError, AppResult};

#[derive(Debug, Clone, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct Config {
    pub timing: TimingConfig,
    pub gesture: GestureConfig,
    pub keymap: KeymapConfig,
    pub log: LogConfig,
    pub print: PrintConfig,
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct TimingConfig {
    /// Delay between accepting a navigation and committing the new index.
    pub transition_commit_ms: u64,
    /// Delay between the commit and the navigator accepting input again.
    pub transition_settle_ms: u64,
    pub announcement_clear_ms: u64,
    pub autohide_idle_ms: u64,
    pub notice_ms: u64,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            transition_commit_ms: 50,
            transition_settle_ms: 500,
            announcement_clear_ms: 1000,
            autohide_idle_ms: 3000,
            notice_ms: 5000,
        }
    }
}

impl TimingConfig {
    pub fn transition_commit(&self) -> Duration {
        Duration::from_millis(self.transition_commit_ms)
    }

    pub fn transition_settle(&self) -> Duration {
        Duration::from_millis(self.transition_settle_ms)
    }

    pub fn announcement_clear(&self) -> Duration {
        Duration::from_millis(self.announcement_clear_ms)
    }

    pub fn autohide_idle(&self) -> Duration {
        Duration::from_millis(self.autohide_idle_ms)
    }

    pub fn notice(&self) -> Duration {
        Duration::from_millis(self.notice_ms)
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct GestureConfig {
    pub min_distance_px: f32,
    pub max_elapsed_ms: u64,
    pub cell_width_px: f32,
    pub cell_height_px: f32,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            min_distance_px: 50.0,
            max_elapsed_ms: 300,
            cell_width_px: 10.0,
            cell_height_px: 20.0,
        }
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct KeymapConfig {
    pub preset: String,
}

impl Default for KeymapConfig {
    fn default() -> Self {
        Self {
            preset: "default".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq, Default)]
#[serde(default)]
pub struct LogConfig {
    /// Log file. The terminal UI owns stdout, so logging is off when unset.
    pub path: Option<PathBuf>,
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq, Default)]
#[serde(default)]
pub struct PrintConfig {
    /// Where printable layouts are written. Defaults to the deck's directory.
    pub output_dir: Option<PathBuf>,
}

impl Config {
    pub fn load() -> AppResult<Self> {
        let Some(path) = default_config_path() else {
            return Ok(Self::default());
        };
        Self::load_from_path(path)
    }

    pub fn load_from_path(path: impl AsRef<Path>) -> AppResult<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }
        if !path.is_file() {
            return Err(AppError::invalid_argument(format!(
                "config path is not a regular file: {}",
                path.display()
            )));
        }

        let raw = fs::read_to_string(path).map_err(|source| {
            AppError::io_with_context(source, format!("failed to read config: {}", path.display()))
        })?;
        let parsed = toml::from_str::<Self>(&raw).map_err(|source| {
            AppError::config(format!("failed to parse {}: {source}", path.display()))
        })?;
        Ok(parsed.sanitized())
    }

    fn sanitized(mut self) -> Self {
        self.timing.transition_commit_ms = self.timing.transition_commit_ms.max(1);
        self.timing.transition_settle_ms = self.timing.transition_settle_ms.max(1);
        self.timing.announcement_clear_ms = self.timing.announcement_clear_ms.max(1);
        self.timing.autohide_idle_ms = self.timing.autohide_idle_ms.max(1);
        self.timing.notice_ms = self.timing.notice_ms.max(1);
        self.gesture.max_elapsed_ms = self.gesture.max_elapsed_ms.max(1);

        let defaults = GestureConfig::default();
        if !self.gesture.min_distance_px.is_finite() || self.gesture.min_distance_px < 0.0 {
            self.gesture.min_distance_px = defaults.min_distance_px;
        }
        if !self.gesture.cell_width_px.is_finite() || self.gesture.cell_width_px <= 0.0 {
            self.gesture.cell_width_px = defaults.cell_width_px;
        }
        if !self.gesture.cell_height_px.is_finite() || self.gesture.cell_height_px <= 0.0 {
            self.gesture.cell_height_px = defaults.cell_height_px;
        }
        self
    }
}

pub fn default_config_path() -> Option<PathBuf> {
    if let Some(explicit) = std::env::var_os("DECK_CONFIG_PATH")
        && !explicit.is_empty()
    {
        return Some(PathBuf::from(explicit));
    }

    if let Some(xdg) = std::env::var_os("XDG_CONFIG_HOME")
        && !xdg.is_empty()
    {
        return Some(PathBuf::from(xdg).join("deck").join("config.toml"));
    }
    if let Some(home) = std::env::var_os("HOME")
        && !home.is_empty()
    {
        return Some(
            PathBuf::from(home)
                .join(".config")
                .join("deck")
                .join("config.toml"),
        );
    }
    if let Some(appdata) = std::env::var_os("APPDATA")
        && !appdata.is_empty()
    {
        return Some(PathBuf::from(appdata).join("deck").join("config.toml"));
    }
    None
}
