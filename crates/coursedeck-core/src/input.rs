//! Decoding of wheel, touch and keyboard input into navigation intents.

use serde::{Deserialize, Serialize};

/// Minimum vertical drag, in pixels, before a touch gesture counts.
pub const TOUCH_THRESHOLD_PX: f64 = 50.0;

/// Direction of a page-level navigation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScrollIntent {
    /// Towards the next section (content moves up).
    Forward,
    /// Towards the previous section.
    Backward,
}

impl ScrollIntent {
    /// Interprets a wheel event's `deltaY`.
    pub fn from_wheel_delta(delta_y: f64) -> Option<Self> {
        if delta_y > 0.0 {
            Some(Self::Forward)
        } else if delta_y < 0.0 {
            Some(Self::Backward)
        } else {
            None
        }
    }
}

/// Keys that move between sections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NavKey {
    Next,
    Previous,
    First,
    Last,
}

impl NavKey {
    /// Maps a DOM `KeyboardEvent.key` value.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ArrowDown" | "PageDown" => Some(Self::Next),
            "ArrowUp" | "PageUp" => Some(Self::Previous),
            "Home" => Some(Self::First),
            "End" => Some(Self::Last),
            _ => None,
        }
    }
}

/// Tracks the origin of the current touch drag.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TouchTracker {
    start_y: f64,
    threshold: f64,
}

impl Default for TouchTracker {
    fn default() -> Self {
        Self::new(TOUCH_THRESHOLD_PX)
    }
}

impl TouchTracker {
    pub fn new(threshold: f64) -> Self {
        Self {
            start_y: 0.0,
            threshold,
        }
    }

    pub fn start(&mut self, y: f64) {
        self.start_y = y;
    }

    /// Returns the intent of a drag to `y`, once it passes the threshold.
    ///
    /// Dragging the finger up (`y` decreasing) asks for the next section.
    pub fn drag(&self, y: f64) -> Option<ScrollIntent> {
        let delta = self.start_y - y;
        if delta > self.threshold {
            Some(ScrollIntent::Forward)
        } else if delta < -self.threshold {
            Some(ScrollIntent::Backward)
        } else {
            None
        }
    }

    /// Moves the origin to `y` so the same drag cannot trigger twice.
    pub fn rebase(&mut self, y: f64) {
        self.start_y = y;
    }
}
