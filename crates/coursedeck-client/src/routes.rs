//! Application routes.

use yew_router::prelude::*;

/// Application routes. Each course page is its own route, so switching
/// pages tears down the previous page's scroller.
#[derive(Clone, Routable, PartialEq, Debug)]
pub enum Route {
    /// First page of the course.
    #[at("/")]
    Home,
    /// Panic report page.
    #[at("/panic")]
    Panic,
    /// 404 Not Found.
    #[not_found]
    #[at("/404")]
    NotFound,
    /// A course page by id.
    #[at("/:page")]
    Page { page: String },
}

impl Route {
    pub fn page(id: &str) -> Self {
        Self::Page {
            page: id.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::wasm_bindgen_test;

    #[wasm_bindgen_test]
    fn test_page_route_paths() {
        assert_eq!(Route::page("course").to_path(), "/course");
        assert_eq!(Route::Home.to_path(), "/");
        assert_eq!(
            Route::recognize("/homework"),
            Some(Route::page("homework"))
        );
        assert_eq!(Route::recognize("/panic"), Some(Route::Panic));
    }
}
