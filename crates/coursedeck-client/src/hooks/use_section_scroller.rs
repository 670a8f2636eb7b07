//! Section scroller hook.
//!
//! Binds the page-level wheel, touch and keyboard listeners to a
//! [`SectionScroller`] for the page that is currently mounted.

use std::cell::RefCell;
use std::rc::Rc;

use coursedeck_core::{
    Command, Highlight, NavKey, NavMap, Response, ScrollMetrics, ScrollerConfig, SectionScroller,
};
use gloo::events::{EventListener, EventListenerOptions, EventListenerPhase};
use wasm_bindgen::JsCast;
use web_sys::{Event, KeyboardEvent, TouchEvent, WheelEvent};
use yew::prelude::*;

use crate::dom::{self, BrowserClock, PageSections};

/// What the page renders from the scroller state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollView {
    pub cursor: usize,
    pub highlight: Highlight,
    pub hint_visible: bool,
}

impl Default for ScrollView {
    fn default() -> Self {
        Self {
            cursor: 0,
            highlight: Highlight::default(),
            hint_visible: true,
        }
    }
}

impl ScrollView {
    fn of(scroller: &SectionScroller<BrowserClock>) -> Self {
        Self {
            cursor: scroller.cursor(),
            highlight: scroller.highlight(),
            hint_visible: scroller.hint_visible(),
        }
    }
}

/// Handle returned by [`use_section_scroller`].
#[derive(Clone, PartialEq)]
pub struct SectionScrollerHandle {
    pub view: ScrollView,
    /// Requests a jump to a section; ignored while a transition is in flight.
    pub scroll_to: Callback<usize>,
}

/// Live scroller plus the elements it drives.
struct Controller {
    scroller: SectionScroller<BrowserClock>,
    sections: PageSections,
}

type SharedController = Rc<RefCell<Controller>>;

impl Controller {
    fn dispatch(&mut self, command: Command) -> Response {
        let response = self.scroller.update(command);
        if let Some(transition) = response.transition {
            self.sections.scroll_into_view(transition.to);
        }
        response
    }

    fn current_metrics(&self) -> Option<ScrollMetrics> {
        self.sections.metrics(self.scroller.cursor())
    }
}

/// Dispatches `command` and pushes any visible change into `view`.
fn dispatch(
    controller: &SharedController,
    view: &UseStateHandle<ScrollView>,
    command: Command,
) -> Response {
    let (response, next) = {
        let mut controller = controller.borrow_mut();
        let response = controller.dispatch(command);
        (response, ScrollView::of(&controller.scroller))
    };
    if response.transition.is_some() || response.hint_visible.is_some() {
        view.set(next);
    }
    response
}

fn first_touch_y(event: &TouchEvent) -> Option<f64> {
    event.touches().get(0).map(|touch| f64::from(touch.client_y()))
}

const NON_PASSIVE: EventListenerOptions = EventListenerOptions {
    phase: EventListenerPhase::Bubble,
    passive: false,
};

fn install_listeners(
    controller: &SharedController,
    view: &UseStateHandle<ScrollView>,
) -> Vec<EventListener> {
    let window = gloo::utils::window();
    let mut listeners = Vec::with_capacity(5);

    {
        let controller = controller.clone();
        let view = view.clone();
        listeners.push(EventListener::new_with_options(
            &window,
            "wheel",
            NON_PASSIVE,
            move |event: &Event| {
                let Some(event) = event.dyn_ref::<WheelEvent>() else {
                    return;
                };
                let command = {
                    let controller = controller.borrow();
                    let cursor = controller.scroller.cursor();
                    Command::Wheel {
                        delta_y: event.delta_y(),
                        inside_current: controller
                            .sections
                            .contains(cursor, event.target().as_ref()),
                        metrics: controller.current_metrics(),
                    }
                };
                if dispatch(&controller, &view, command).prevent_default {
                    event.prevent_default();
                }
            },
        ));
    }

    {
        let controller = controller.clone();
        let view = view.clone();
        listeners.push(EventListener::new_with_options(
            &window,
            "touchstart",
            NON_PASSIVE,
            move |event: &Event| {
                let Some(y) = event.dyn_ref::<TouchEvent>().and_then(first_touch_y) else {
                    return;
                };
                dispatch(&controller, &view, Command::TouchStart { y });
            },
        ));
    }

    {
        let controller = controller.clone();
        let view = view.clone();
        listeners.push(EventListener::new_with_options(
            &window,
            "touchmove",
            NON_PASSIVE,
            move |event: &Event| {
                let Some(y) = event.dyn_ref::<TouchEvent>().and_then(first_touch_y) else {
                    return;
                };
                let metrics = controller.borrow().current_metrics();
                if dispatch(&controller, &view, Command::TouchMove { y, metrics }).prevent_default
                {
                    event.prevent_default();
                }
            },
        ));
    }

    {
        let controller = controller.clone();
        let view = view.clone();
        listeners.push(EventListener::new(&window, "keydown", move |event: &Event| {
            let Some(event) = event.dyn_ref::<KeyboardEvent>() else {
                return;
            };
            // Arrow keys inside form fields move the caret, not the deck.
            if dom::is_input_element(event.target().as_ref()) {
                return;
            }
            let Some(key) = NavKey::from_key(&event.key()) else {
                return;
            };
            if dispatch(&controller, &view, Command::Key(key)).prevent_default {
                event.prevent_default();
            }
        }));
    }

    // `scroll` does not bubble, so the first section is watched directly.
    let first = controller.borrow().sections.get(0).cloned();
    if let Some(first) = first {
        let controller = controller.clone();
        let view = view.clone();
        let target = first.clone();
        listeners.push(EventListener::new(&target, "scroll", move |_| {
            let metrics = ScrollMetrics::new(
                f64::from(first.scroll_top()),
                f64::from(first.scroll_height()),
                f64::from(first.client_height()),
            );
            dispatch(
                &controller,
                &view,
                Command::SectionScrolled { index: 0, metrics },
            );
        }));
    }

    listeners
}

/// Hook that owns the section scroller of the mounted page.
///
/// A new scroller is built whenever `page_id` changes; the previous one and
/// all of its listeners are dropped first, so at most one scroller reacts to
/// global input at any time.
///
/// # Example
///
/// ```ignore
/// let scroller = use_section_scroller(page.id.clone().into(), page.nav.clone(), config);
/// html! { <SectionNav highlight={scroller.view.highlight} on_select={scroller.scroll_to} .. /> }
/// ```
#[hook]
pub fn use_section_scroller(
    page_id: AttrValue,
    nav: NavMap,
    config: ScrollerConfig,
) -> SectionScrollerHandle {
    let controller = use_mut_ref(|| None::<SharedController>);
    let view = use_state(ScrollView::default);

    {
        let controller = controller.clone();
        let view = view.clone();

        use_effect_with(page_id, move |page_id| {
            let sections = PageSections::collect(page_id);
            sections.reset_scroll_positions();
            dom::scroll_window_to_top();

            let scroller = SectionScroller::new(sections.ids(), nav, config, BrowserClock);
            tracing::debug!(page = %page_id, sections = scroller.len(), "section scroller created");
            view.set(ScrollView::of(&scroller));

            let live = Rc::new(RefCell::new(Controller { scroller, sections }));
            let listeners = install_listeners(&live, &view);
            *controller.borrow_mut() = Some(live);

            let page_id = page_id.clone();
            move || {
                drop(listeners);
                controller.borrow_mut().take();
                tracing::debug!(page = %page_id, "section scroller destroyed");
            }
        });
    }

    let scroll_to = {
        let controller = controller.clone();
        let view = view.clone();
        Callback::from(move |index: usize| {
            let live = controller.borrow().clone();
            if let Some(live) = live {
                dispatch(&live, &view, Command::GoTo(index));
            }
        })
    };

    SectionScrollerHandle {
        view: *view,
        scroll_to,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::wasm_bindgen_test;

    #[wasm_bindgen_test]
    fn test_view_of_new_scroller() {
        let scroller = SectionScroller::with_positions(
            3,
            NavMap::linear(3),
            ScrollerConfig::default(),
            BrowserClock,
        );
        let view = ScrollView::of(&scroller);
        assert_eq!(view.cursor, 0);
        assert!(view.highlight.is_primary(0));
        assert!(view.hint_visible);
    }

    #[wasm_bindgen_test]
    fn test_view_follows_transition() {
        let mut scroller = SectionScroller::with_positions(
            3,
            NavMap::linear(3),
            ScrollerConfig::default(),
            BrowserClock,
        );
        scroller.update(Command::Key(NavKey::Last));
        let view = ScrollView::of(&scroller);
        assert_eq!(view.cursor, 2);
        assert!(view.highlight.is_primary(2));
        assert!(!view.hint_visible);
    }
}
