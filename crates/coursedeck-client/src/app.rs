//! Main application component.

use std::rc::Rc;

use yew::prelude::*;
use yew_router::prelude::*;

use crate::config::{CourseContext, load_course, use_course};
use crate::pages::{ConfigErrorPage, CoursePage, NotFoundPage, PanicPage};
use crate::routes::Route;

/// Route switch function.
fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => html! { <PageSwitch page={None::<AttrValue>} /> },
        Route::Page { page } => html! { <PageSwitch page={Some(AttrValue::from(page))} /> },
        Route::Panic => html! { <PanicPage /> },
        Route::NotFound => html! { <NotFoundPage /> },
    }
}

#[derive(Properties, PartialEq)]
struct PageSwitchProps {
    /// Page id, or `None` for the first page.
    page: Option<AttrValue>,
}

/// Resolves a page id against the course and mounts its view.
#[function_component(PageSwitch)]
fn page_switch(props: &PageSwitchProps) -> Html {
    let course = use_course();

    let page = match &props.page {
        Some(id) => course.page(id),
        None => course.first_page(),
    };

    match page {
        // Keyed by id so a page switch unmounts the old page and its scroller.
        Some(page) => html! {
            <CoursePage key={page.id.clone()} page={Rc::new(page.clone())} />
        },
        None => html! { <NotFoundPage /> },
    }
}

/// Root application component with router.
#[function_component(App)]
pub fn app() -> Html {
    let course = use_memo((), |_| {
        load_course().map_err(|e| {
            tracing::error!("Failed to load course: {}", e);
            e.to_string()
        })
    });

    match &*course {
        Ok(course) => html! {
            <ContextProvider<CourseContext> context={course.clone()}>
                <BrowserRouter>
                    <Switch<Route> render={switch} />
                </BrowserRouter>
            </ContextProvider<CourseContext>>
        },
        Err(message) => html! { <ConfigErrorPage message={message.clone()} /> },
    }
}
