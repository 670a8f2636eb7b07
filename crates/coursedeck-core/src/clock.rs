//! Time source for the scroll lock.

use std::cell::Cell;
use std::rc::Rc;

/// Millisecond time source.
///
/// The browser client reads `Date.now()`; tests use [`VirtualClock`].
pub trait Clock {
    /// Current time in milliseconds.
    fn now_ms(&self) -> f64;
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now_ms(&self) -> f64 {
        (**self).now_ms()
    }
}

/// Manually advanced clock.
///
/// Clones share the same timeline, so a test can hand one clone to a
/// [`SectionScroller`](crate::SectionScroller) and advance another.
#[derive(Debug, Clone, Default)]
pub struct VirtualClock {
    now: Rc<Cell<f64>>,
}

impl VirtualClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Moves time forward by `ms`.
    pub fn advance(&self, ms: f64) {
        self.now.set(self.now.get() + ms);
    }

    pub fn set(&self, ms: f64) {
        self.now.set(ms);
    }
}

impl Clock for VirtualClock {
    fn now_ms(&self) -> f64 {
        self.now.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clones_share_time() {
        let clock = VirtualClock::new();
        let other = clock.clone();

        clock.advance(250.0);
        other.advance(250.0);

        assert!((clock.now_ms() - 500.0).abs() < f64::EPSILON);
        assert!((other.now_ms() - 500.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_set_overrides() {
        let clock = VirtualClock::new();
        clock.advance(10.0);
        clock.set(3.0);
        assert!((clock.now_ms() - 3.0).abs() < f64::EPSILON);
    }
}
