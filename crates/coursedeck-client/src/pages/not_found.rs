//! 404 Not Found page.

use crate::routes::Route;
use yew::prelude::*;
use yew_router::prelude::*;

/// 404 Not Found page.
#[function_component(NotFoundPage)]
pub fn not_found_page() -> Html {
    html! {
        <main class="page not-found-page">
            <h1>{ "404" }</h1>
            <p>{ "This page is not part of the course." }</p>
            <Link<Route> to={Route::Home}>{ "Go to the first page" }</Link<Route>>
        </main>
    }
}

#[derive(Properties, PartialEq)]
pub struct ConfigErrorPageProps {
    pub message: String,
}

/// Shown instead of the router when the course definition fails to load.
#[function_component(ConfigErrorPage)]
pub fn config_error_page(props: &ConfigErrorPageProps) -> Html {
    html! {
        <main class="page config-error-page">
            <h1>{ "Course unavailable" }</h1>
            <pre>{ &props.message }</pre>
        </main>
    }
}
