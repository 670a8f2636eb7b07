mod use_section_scroller;
mod use_typewriter;

pub use use_section_scroller::*;
pub use use_typewriter::*;
