//! UI components for the coursedeck client.

mod hero;
mod image_carousel;
mod navbar;
mod scroll_hint;
mod section;
mod section_nav;
mod step_tabs;

pub use hero::Hero;
pub use image_carousel::ImageCarousel;
pub use navbar::Navbar;
pub use scroll_hint::ScrollHint;
pub use section::Section;
pub use section_nav::SectionNav;
pub use step_tabs::StepTabs;
