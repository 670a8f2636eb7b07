//! A course page: hero, full-viewport sections and navigation.

use std::rc::Rc;

use coursedeck_core::PageConfig;
use yew::prelude::*;

use crate::components::{Hero, Navbar, ScrollHint, Section, SectionNav};
use crate::config::use_course;
use crate::dom::page_element_id;
use crate::hooks::use_section_scroller;

/// Props for the CoursePage component.
#[derive(Properties, PartialEq)]
pub struct CoursePageProps {
    pub page: Rc<PageConfig>,
}

#[function_component(CoursePage)]
pub fn course_page(props: &CoursePageProps) -> Html {
    let course = use_course();
    let page = &props.page;

    let scroller = use_section_scroller(
        AttrValue::from(page.id.clone()),
        page.nav.clone(),
        course.scroller,
    );

    let ids = page.section_ids();
    let sections = page.sections.iter().zip(ids).enumerate().map(|(i, (section, id))| {
        let hero = if i == 0 {
            html! {
                <Hero
                    title={AttrValue::from(page.title.clone())}
                    subtitle={AttrValue::from(page.subtitle.clone())}
                />
            }
        } else {
            html! {}
        };
        let key = id.to_string();
        html! {
            <Section key={key} id={id} section={section.clone()}>
                { hero }
            </Section>
        }
    });

    html! {
        <>
            <Navbar active_page={AttrValue::from(page.id.clone())} />
            <div
                id={page_element_id(&page.id)}
                class="page active"
                data-active-section={scroller.view.cursor.to_string()}
            >
                if !page.nav_items.is_empty() {
                    <SectionNav
                        items={page.nav_items.clone()}
                        highlight={scroller.view.highlight}
                        on_select={scroller.scroll_to.clone()}
                    />
                }
                { for sections }
                if page.scroll_hint {
                    <ScrollHint visible={scroller.view.hint_visible} />
                }
            </div>
        </>
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use coursedeck_core::CourseConfig;
    use wasm_bindgen_test::wasm_bindgen_test;
    use web_sys::{Element, KeyboardEvent, KeyboardEventInit};
    use yew::platform::time::sleep;
    use yew_router::Router;
    use yew_router::history::{AnyHistory, MemoryHistory};

    use super::*;
    use crate::config::CourseContext;

    const DECK: &str = r#"{
        "title": "Deck",
        "pages": [
            {
                "id": "deck-a", "label": "A", "title": "A",
                "sections": [{ "heading": "a0" }, { "heading": "a1" }, { "heading": "a2" }]
            },
            {
                "id": "deck-b", "label": "B", "title": "B",
                "sections": [
                    { "heading": "b0" }, { "heading": "b1" },
                    { "heading": "b2" }, { "heading": "b3" }
                ]
            },
            { "id": "deck-empty", "label": "E", "title": "E", "sections": [] }
        ]
    }"#;

    #[derive(Properties, PartialEq)]
    struct DeckProps {
        course: CourseContext,
        page: AttrValue,
    }

    /// Mounts one page keyed by id, the way the app's page switch does.
    #[function_component(Deck)]
    fn deck(props: &DeckProps) -> Html {
        let history = use_memo((), |_| AnyHistory::from(MemoryHistory::new()));
        let page = props.course.page(&props.page).cloned().map(Rc::new);

        html! {
            <ContextProvider<CourseContext> context={props.course.clone()}>
                <Router history={(*history).clone()}>
                    if let Some(page) = page {
                        <CoursePage key={page.id.clone()} page={page.clone()} />
                    }
                </Router>
            </ContextProvider<CourseContext>>
        }
    }

    fn deck_props(course: &CourseContext, page: &'static str) -> DeckProps {
        DeckProps {
            course: course.clone(),
            page: AttrValue::from(page),
        }
    }

    fn mount(course: &CourseContext, page: &'static str) -> (yew::AppHandle<Deck>, Element) {
        let root = gloo::utils::document().create_element("div").unwrap();
        gloo::utils::body().append_child(&root).unwrap();
        let handle =
            yew::Renderer::<Deck>::with_root_and_props(root.clone(), deck_props(course, page))
                .render();
        (handle, root)
    }

    /// Lets the scheduler render and run effects.
    async fn settle() {
        sleep(Duration::from_millis(20)).await;
    }

    /// Dispatches a cancelable `keydown` on the window; returns whether a
    /// listener prevented its default.
    fn press(key: &str) -> bool {
        let init = KeyboardEventInit::new();
        init.set_key(key);
        init.set_cancelable(true);
        let event = KeyboardEvent::new_with_keyboard_event_init_dict("keydown", &init).unwrap();
        gloo::utils::window().dispatch_event(&event).unwrap();
        event.default_prevented()
    }

    fn active_section(page: &str) -> Option<String> {
        gloo::utils::document()
            .get_element_by_id(&page_element_id(page))
            .and_then(|el| el.get_attribute("data-active-section"))
    }

    #[wasm_bindgen_test]
    async fn test_page_switch_drives_only_the_new_page() {
        let course = Rc::new(CourseConfig::from_json(DECK).unwrap());
        let (mut handle, root) = mount(&course, "deck-a");
        settle().await;
        assert_eq!(active_section("deck-a").as_deref(), Some("0"));

        handle.update(deck_props(&course, "deck-b"));
        settle().await;
        assert!(active_section("deck-a").is_none());
        assert_eq!(active_section("deck-b").as_deref(), Some("0"));

        assert!(press("End"));
        settle().await;
        assert_eq!(active_section("deck-b").as_deref(), Some("3"));

        handle.destroy();
        root.remove();
    }

    #[wasm_bindgen_test]
    async fn test_switched_out_page_stops_listening() {
        let course = Rc::new(CourseConfig::from_json(DECK).unwrap());
        let (mut handle, root) = mount(&course, "deck-a");
        settle().await;
        // Up on the first section is handled without starting a transition.
        assert!(press("ArrowUp"));
        assert_eq!(active_section("deck-a").as_deref(), Some("0"));

        // The empty page ignores keys, so a prevented default could only
        // come from a listener left behind by the first page.
        handle.update(deck_props(&course, "deck-empty"));
        settle().await;
        assert!(active_section("deck-empty").is_some());
        assert!(!press("End"));

        handle.destroy();
        settle().await;
        assert!(!press("End"));
        root.remove();
    }
}
