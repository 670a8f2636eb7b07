//! Top navigation bar switching between course pages.

use yew::prelude::*;
use yew_icons::{Icon, IconData};
use yew_router::prelude::*;

use crate::config::use_course;
use crate::routes::Route;

/// Props for the Navbar component.
#[derive(Properties, PartialEq)]
pub struct NavbarProps {
    /// Id of the page being shown.
    pub active_page: AttrValue,
}

/// Navbar with one item per page; collapses into a menu on small screens.
#[function_component(Navbar)]
pub fn navbar(props: &NavbarProps) -> Html {
    let course = use_course();
    let menu_open = use_state(|| false);

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(!*menu_open))
    };
    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(false))
    };

    let active = course.page_position(&props.active_page);

    html! {
        <nav class="navbar">
            <div class="navbar-brand">{ &course.title }</div>
            <button class="navbar-toggle" onclick={toggle_menu} aria-label="Toggle menu">
                <Icon data={IconData::LUCIDE_MENU} width="20px" height="20px" />
            </button>
            <ul id="navbarMenu" class={classes!("navbar-menu", (*menu_open).then_some("active"))}>
                { for course.pages.iter().enumerate().map(|(i, page)| html! {
                    <li
                        key={page.id.clone()}
                        class={classes!("navbar-item", (active == Some(i)).then_some("active"))}
                        onclick={close_menu.clone()}
                    >
                        <Link<Route> to={Route::page(&page.id)}>{ &page.label }</Link<Route>>
                    </li>
                }) }
            </ul>
        </nav>
    }
}
