//! DOM adapter for the section scroller.
//!
//! Everything that reads or writes the live document lives here; missing
//! elements are treated as normal and simply skipped.

use coursedeck_core::{Clock, ScrollMetrics, SectionId};
use wasm_bindgen::JsCast;
use web_sys::{
    Element, EventTarget, Node, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition,
    ScrollToOptions,
};

/// Class marking a full-viewport section.
pub const SECTION_CLASS: &str = "section-scroll-item";
/// Attribute carrying a section's sub-identifier.
pub const SECTION_ID_ATTR: &str = "data-section";

/// Element id of a page container.
pub fn page_element_id(page_id: &str) -> String {
    format!("page-{page_id}")
}

/// `Date.now()` as a [`Clock`].
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserClock;

impl Clock for BrowserClock {
    fn now_ms(&self) -> f64 {
        js_sys::Date::now()
    }
}

/// Section elements of one page, in document order.
#[derive(Debug, Default)]
pub struct PageSections {
    elements: Vec<Element>,
}

impl PageSections {
    /// Collects `.section-scroll-item` elements under `#page-{page_id}`.
    pub fn collect(page_id: &str) -> Self {
        let Some(page) = gloo::utils::document().get_element_by_id(&page_element_id(page_id))
        else {
            tracing::warn!(page_id, "page container not found");
            return Self::default();
        };

        let Ok(nodes) = page.query_selector_all(&format!(".{SECTION_CLASS}")) else {
            return Self::default();
        };

        let elements = (0..nodes.length())
            .filter_map(|i| nodes.item(i))
            .filter_map(|node| node.dyn_into::<Element>().ok())
            .collect();
        Self { elements }
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn get(&self, index: usize) -> Option<&Element> {
        self.elements.get(index)
    }

    /// `data-section` values, falling back to the position.
    pub fn ids(&self) -> Vec<SectionId> {
        self.elements
            .iter()
            .enumerate()
            .map(|(i, el)| {
                el.get_attribute(SECTION_ID_ATTR)
                    .map_or_else(|| SectionId::from_position(i), SectionId::new)
            })
            .collect()
    }

    pub fn metrics(&self, index: usize) -> Option<ScrollMetrics> {
        self.get(index).map(|el| {
            ScrollMetrics::new(
                f64::from(el.scroll_top()),
                f64::from(el.scroll_height()),
                f64::from(el.client_height()),
            )
        })
    }

    /// Returns true if `target` is the section at `index` or inside it.
    pub fn contains(&self, index: usize, target: Option<&EventTarget>) -> bool {
        let (Some(section), Some(node)) = (self.get(index), target.and_then(|t| t.dyn_ref::<Node>()))
        else {
            return false;
        };
        section.contains(Some(node))
    }

    /// Smooth-scrolls section `index` so its top meets the viewport top.
    pub fn scroll_into_view(&self, index: usize) {
        if let Some(section) = self.get(index) {
            let options = ScrollIntoViewOptions::new();
            options.set_behavior(ScrollBehavior::Smooth);
            options.set_block(ScrollLogicalPosition::Start);
            section.scroll_into_view_with_scroll_into_view_options(&options);
        }
    }

    /// Rewinds every section's inner scroll position.
    pub fn reset_scroll_positions(&self) {
        for section in &self.elements {
            section.set_scroll_top(0);
        }
    }
}

/// Smooth-scrolls the window back to the top.
pub fn scroll_window_to_top() {
    let options = ScrollToOptions::new();
    options.set_top(0.0);
    options.set_behavior(ScrollBehavior::Smooth);
    gloo::utils::window().scroll_to_with_scroll_to_options(&options);
}

/// Returns true if `target` is a form field that should keep arrow keys.
pub fn is_input_element(target: Option<&EventTarget>) -> bool {
    if let Some(element) = target.and_then(|t| t.dyn_ref::<web_sys::HtmlElement>()) {
        let tag_name = element.tag_name().to_lowercase();
        return matches!(tag_name.as_str(), "input" | "textarea" | "select")
            || element.is_content_editable();
    }
    false
}
