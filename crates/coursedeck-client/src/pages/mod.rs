//! Page components.

mod course_page;
mod not_found;
mod panic;

pub use course_page::CoursePage;
pub use not_found::{ConfigErrorPage, NotFoundPage};
pub use panic::{PanicPage, set_panic_hook};
