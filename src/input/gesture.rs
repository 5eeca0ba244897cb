use std::time::{Duration, Instant};

use crate::config::GestureConfig;

use super::events::Intent;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TouchPoint {
    pub x: f32,
    pub y: f32,
    pub at: Instant,
}

impl TouchPoint {
    pub fn new(x: f32, y: f32, at: Instant) -> Self {
        Self { x, y, at }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SwipeThresholds {
    pub min_distance_px: f32,
    pub max_elapsed: Duration,
}

impl From<&GestureConfig> for SwipeThresholds {
    fn from(config: &GestureConfig) -> Self {
        Self {
            min_distance_px: config.min_distance_px,
            max_elapsed: Duration::from_millis(config.max_elapsed_ms),
        }
    }
}

impl Default for SwipeThresholds {
    fn default() -> Self {
        Self::from(&GestureConfig::default())
    }
}

/// Turns a touch-start/touch-end pair into `Next`/`Previous`.
#[derive(Debug, Clone, Default)]
pub struct GestureInterpreter {
    thresholds: SwipeThresholds,
    start: Option<TouchPoint>,
}

impl GestureInterpreter {
    pub fn new(thresholds: SwipeThresholds) -> Self {
        Self {
            thresholds,
            start: None,
        }
    }

    pub fn touch_start(&mut self, point: TouchPoint) {
        self.start = Some(point);
    }

    /// Ends the gesture. A touch-end without a start yields nothing.
    pub fn touch_end(&mut self, point: TouchPoint) -> Option<Intent> {
        let start = self.start.take()?;
        interpret_swipe(start, point, self.thresholds)
    }
}

/// A fast, mostly horizontal flick longer than the minimum distance.
/// Moving the finger right-to-left (positive delta) advances.
pub fn interpret_swipe(
    start: TouchPoint,
    end: TouchPoint,
    thresholds: SwipeThresholds,
) -> Option<Intent> {
    let dx = start.x - end.x;
    let dy = start.y - end.y;
    let elapsed = end.at.saturating_duration_since(start.at);

    if elapsed >= thresholds.max_elapsed {
        return None;
    }
    if dx.abs() <= thresholds.min_distance_px || dx.abs() <= dy.abs() {
        return None;
    }
    if dx > 0.0 {
        Some(Intent::Next)
    } else {
        Some(Intent::Previous)
    }
}
