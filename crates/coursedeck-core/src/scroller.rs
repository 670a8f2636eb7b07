//! Full-viewport section scroller.
//!
//! Turns discrete gestures into at most one section transition at a time.
//! The scroller is a two-state machine, unlocked or locked, with a single
//! transition function [`SectionScroller::update`]. Entering the locked state
//! records a release deadline `animation_ms` ahead on the injected
//! [`Clock`]; the lock is released once the clock passes it, whether or not
//! the browser's smooth scroll has actually arrived.

use serde::{Deserialize, Serialize};

use crate::clock::Clock;
use crate::geometry::{BOUNDARY_TOLERANCE_PX, ScrollMetrics};
use crate::input::{NavKey, ScrollIntent, TOUCH_THRESHOLD_PX, TouchTracker};
use crate::navigation::{Highlight, NavMap, SectionId};

/// Tunables for a [`SectionScroller`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScrollerConfig {
    /// How long input stays locked after a transition starts.
    pub animation_ms: u32,
    /// Slack when testing whether a section is scrolled to an edge.
    pub boundary_tolerance_px: f64,
    /// Drag distance needed before a touch gesture moves a section.
    pub touch_threshold_px: f64,
    /// In-section scroll offset of the first section that hides the hint.
    pub hint_hide_offset_px: f64,
}

impl Default for ScrollerConfig {
    fn default() -> Self {
        Self {
            animation_ms: 1000,
            boundary_tolerance_px: BOUNDARY_TOLERANCE_PX,
            touch_threshold_px: TOUCH_THRESHOLD_PX,
            hint_hide_offset_px: 50.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum LockState {
    Unlocked,
    Locked { release_at: f64 },
}

/// Input delivered to the scroller.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Command {
    /// Explicit jump, e.g. from a navigation button.
    GoTo(usize),
    /// Wheel event. `inside_current` tells whether the event target lies in
    /// the focused section; `metrics` are that section's scroll metrics.
    Wheel {
        delta_y: f64,
        inside_current: bool,
        metrics: Option<ScrollMetrics>,
    },
    TouchStart {
        y: f64,
    },
    TouchMove {
        y: f64,
        metrics: Option<ScrollMetrics>,
    },
    Key(NavKey),
    /// The section at `index` scrolled internally.
    SectionScrolled {
        index: usize,
        metrics: ScrollMetrics,
    },
}

/// Effects the driver applies after a section change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub from: usize,
    /// Section to smooth-scroll into view, top edge aligned.
    pub to: usize,
    pub highlight: Highlight,
    pub hint_visible: bool,
}

/// Outcome of [`SectionScroller::update`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Response {
    /// Suppress the browser's default handling of the event.
    pub prevent_default: bool,
    pub transition: Option<Transition>,
    /// Set when the scroll hint changed visibility without a transition.
    pub hint_visible: Option<bool>,
}

impl Response {
    fn ignored() -> Self {
        Self::default()
    }

    fn suppressed() -> Self {
        Self {
            prevent_default: true,
            ..Self::default()
        }
    }

    fn handled(transition: Option<Transition>) -> Self {
        Self {
            prevent_default: true,
            transition,
            hint_visible: None,
        }
    }
}

/// Section scroll controller for one page.
///
/// Owned by whichever view currently shows the page; dropping it is the
/// teardown.
#[derive(Debug)]
pub struct SectionScroller<C> {
    sections: Vec<SectionId>,
    cursor: usize,
    lock: LockState,
    config: ScrollerConfig,
    nav: NavMap,
    touch: TouchTracker,
    hint_visible: bool,
    /// Last reported inner offset of the first section.
    first_scroll_top: f64,
    clock: C,
}

impl<C: Clock> SectionScroller<C> {
    pub fn new(sections: Vec<SectionId>, nav: NavMap, config: ScrollerConfig, clock: C) -> Self {
        Self {
            sections,
            cursor: 0,
            lock: LockState::Unlocked,
            nav,
            touch: TouchTracker::new(config.touch_threshold_px),
            hint_visible: true,
            first_scroll_top: 0.0,
            config,
            clock,
        }
    }

    /// Scroller over `count` sections identified by position.
    pub fn with_positions(count: usize, nav: NavMap, config: ScrollerConfig, clock: C) -> Self {
        Self::new(
            (0..count).map(SectionId::from_position).collect(),
            nav,
            config,
            clock,
        )
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    pub fn config(&self) -> &ScrollerConfig {
        &self.config
    }

    pub fn hint_visible(&self) -> bool {
        self.hint_visible
    }

    /// Returns true while a transition is in flight.
    pub fn is_locked(&self) -> bool {
        match self.lock {
            LockState::Unlocked => false,
            LockState::Locked { release_at } => self.clock.now_ms() < release_at,
        }
    }

    /// Highlight for the current cursor.
    pub fn highlight(&self) -> Highlight {
        self.highlight_at(self.cursor)
    }

    /// Highlight for the section at `index`; empty when out of range.
    pub fn highlight_at(&self, index: usize) -> Highlight {
        self.sections
            .get(index)
            .map(|id| self.nav.highlight(index, id))
            .unwrap_or_default()
    }

    /// Moves to section `index`.
    ///
    /// Returns `None` without touching any state if `index` is out of range
    /// or a transition is already in flight.
    pub fn scroll_to_section(&mut self, index: usize) -> Option<Transition> {
        if index >= self.sections.len() {
            tracing::trace!(index, len = self.sections.len(), "section out of range");
            return None;
        }
        if self.is_locked() {
            tracing::trace!(index, "transition in flight, request dropped");
            return None;
        }

        let from = self.cursor;
        self.lock = LockState::Locked {
            release_at: self.clock.now_ms() + f64::from(self.config.animation_ms),
        };
        self.cursor = index;
        self.hint_visible =
            index == 0 && self.first_scroll_top <= self.config.hint_hide_offset_px;

        let transition = Transition {
            from,
            to: index,
            highlight: self.highlight(),
            hint_visible: self.hint_visible,
        };
        tracing::debug!(from, to = index, section = %self.sections[index], "section transition");
        Some(transition)
    }

    /// Applies one input to the state machine.
    pub fn update(&mut self, command: Command) -> Response {
        match command {
            Command::GoTo(index) => Response {
                prevent_default: false,
                transition: self.scroll_to_section(index),
                hint_visible: None,
            },
            Command::Wheel {
                delta_y,
                inside_current,
                metrics,
            } => self.on_wheel(delta_y, inside_current, metrics),
            Command::TouchStart { y } => {
                self.touch.start(y);
                Response::ignored()
            }
            Command::TouchMove { y, metrics } => self.on_touch_move(y, metrics),
            Command::Key(key) => self.on_key(key),
            Command::SectionScrolled { index, metrics } => self.on_section_scrolled(index, metrics),
        }
    }

    fn on_wheel(
        &mut self,
        delta_y: f64,
        inside_current: bool,
        metrics: Option<ScrollMetrics>,
    ) -> Response {
        if self.is_locked() {
            return Response::suppressed();
        }
        if !inside_current {
            return Response::ignored();
        }
        let (Some(metrics), Some(intent)) = (metrics, ScrollIntent::from_wheel_delta(delta_y))
        else {
            return Response::ignored();
        };

        match self.boundary_target(intent, &metrics) {
            Some(target) => Response::handled(self.scroll_to_section(target)),
            None => Response::ignored(),
        }
    }

    fn on_touch_move(&mut self, y: f64, metrics: Option<ScrollMetrics>) -> Response {
        if self.is_locked() {
            return Response::suppressed();
        }
        let (Some(metrics), Some(intent)) = (metrics, self.touch.drag(y)) else {
            return Response::ignored();
        };

        match self.boundary_target(intent, &metrics) {
            Some(target) => {
                let transition = self.scroll_to_section(target);
                self.touch.rebase(y);
                Response::handled(transition)
            }
            None => Response::ignored(),
        }
    }

    fn on_key(&mut self, key: NavKey) -> Response {
        if self.is_locked() || self.sections.is_empty() {
            return Response::ignored();
        }

        let last = self.sections.len() - 1;
        let target = match key {
            NavKey::Next => self.cursor.checked_add(1).filter(|&i| i <= last),
            NavKey::Previous => self.cursor.checked_sub(1),
            NavKey::First => Some(0),
            NavKey::Last => Some(last),
        };
        Response::handled(target.and_then(|i| self.scroll_to_section(i)))
    }

    fn on_section_scrolled(&mut self, index: usize, metrics: ScrollMetrics) -> Response {
        if index != 0 {
            return Response::ignored();
        }
        self.first_scroll_top = metrics.scroll_top;
        if self.cursor != 0 {
            return Response::ignored();
        }

        let visible = metrics.scroll_top <= self.config.hint_hide_offset_px;
        if visible == self.hint_visible {
            return Response::ignored();
        }
        self.hint_visible = visible;
        Response {
            prevent_default: false,
            transition: None,
            hint_visible: Some(visible),
        }
    }

    /// Section to move to when the focused section is scrolled to the edge
    /// facing `intent`.
    fn boundary_target(&self, intent: ScrollIntent, metrics: &ScrollMetrics) -> Option<usize> {
        let tolerance = self.config.boundary_tolerance_px;
        match intent {
            ScrollIntent::Forward => {
                let next = self.cursor + 1;
                (metrics.is_at_bottom(tolerance) && next < self.sections.len()).then_some(next)
            }
            ScrollIntent::Backward => {
                (metrics.is_at_top(tolerance) && self.cursor > 0).then(|| self.cursor - 1)
            }
        }
    }
}
