//! Coursedeck Core Library
//!
//! Platform-independent state for full-viewport course decks.
//!
//! The browser client feeds DOM input into [`SectionScroller`] as
//! [`Command`]s and applies the returned [`Response`]. Nothing in this crate
//! touches the DOM, so every transition can be driven from plain tests with a
//! [`VirtualClock`].

#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::module_name_repetitions)]

pub mod clock;
pub mod course;
pub mod geometry;
pub mod input;
pub mod navigation;
pub mod scroller;
pub mod stepper;
pub mod typewriter;

pub use clock::{Clock, VirtualClock};
pub use course::{CourseConfig, CourseError, NavItem, NavLevel, PageConfig, SectionConfig};
pub use geometry::{BOUNDARY_TOLERANCE_PX, ScrollMetrics};
pub use input::{NavKey, ScrollIntent, TouchTracker};
pub use navigation::{Highlight, NavMap, NavRule, SectionId, SectionMatch};
pub use scroller::{Command, Response, ScrollerConfig, SectionScroller, Transition};
pub use stepper::{ImageCarousel, StepTabs};
pub use typewriter::Typewriter;
