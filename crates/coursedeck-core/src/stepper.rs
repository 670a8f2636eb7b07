//! Selection state for step tabs and image carousels inside a section.

/// A row of step buttons, each paired with a content panel of the same index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepTabs {
    len: usize,
    active: usize,
}

impl StepTabs {
    pub fn new(len: usize) -> Self {
        Self { len, active: 0 }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn active(&self) -> usize {
        self.active
    }

    pub fn is_active(&self, index: usize) -> bool {
        self.len > 0 && self.active == index
    }

    /// Activates step `index`. Returns false and keeps the current step if
    /// `index` has no button/panel pair.
    pub fn select(&mut self, index: usize) -> bool {
        if index >= self.len {
            return false;
        }
        self.active = index;
        true
    }
}

/// Cycles through a fixed list of images.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageCarousel {
    len: usize,
    current: usize,
}

impl ImageCarousel {
    pub fn new(len: usize) -> Self {
        Self { len, current: 0 }
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Previous/next buttons and the counter only make sense for two or more images.
    pub fn shows_controls(&self) -> bool {
        self.len > 1
    }

    /// One-based position and total, as shown in the counter.
    pub fn counter(&self) -> (usize, usize) {
        (self.current + 1, self.len)
    }

    pub fn next(&mut self) -> usize {
        if self.len > 0 {
            self.current = (self.current + 1) % self.len;
        }
        self.current
    }

    pub fn previous(&mut self) -> usize {
        if self.len > 0 {
            self.current = (self.current + self.len - 1) % self.len;
        }
        self.current
    }
}
