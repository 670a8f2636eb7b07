//! Course configuration shared through a Yew context.

use std::rc::Rc;

use coursedeck_core::{CourseConfig, CourseError};
use yew::prelude::*;

/// Loaded course, cheap to clone into components.
pub type CourseContext = Rc<CourseConfig>;

/// Parses the course bundled into the binary.
pub fn load_course() -> Result<CourseContext, CourseError> {
    let course = CourseConfig::bundled()?;
    tracing::info!(
        title = %course.title,
        pages = course.pages.len(),
        "course loaded"
    );
    Ok(Rc::new(course))
}

/// Returns the course provided by [`App`](crate::app::App).
#[hook]
pub fn use_course() -> CourseContext {
    use_context::<CourseContext>().expect("CourseContext not found")
}
