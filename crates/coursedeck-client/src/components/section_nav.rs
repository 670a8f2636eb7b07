//! Side navigation that mirrors the focused section.

use coursedeck_core::{Highlight, NavItem, NavLevel};
use yew::prelude::*;

/// Props for the SectionNav component.
#[derive(Properties, PartialEq)]
pub struct SectionNavProps {
    pub items: Vec<NavItem>,
    pub highlight: Highlight,
    /// Called with the target section when an item is clicked.
    pub on_select: Callback<usize>,
}

/// Primary items are numbered 0.. in order, secondary items likewise.
#[function_component(SectionNav)]
pub fn section_nav(props: &SectionNavProps) -> Html {
    let mut primary_slot = 0;
    let mut secondary_slot = 0;

    let items = props.items.iter().map(|item| {
        let (class, active) = match item.level {
            NavLevel::Primary => {
                let active = props.highlight.is_primary(primary_slot);
                primary_slot += 1;
                ("nav-item", active)
            }
            NavLevel::Secondary => {
                let active = props.highlight.is_secondary(secondary_slot);
                secondary_slot += 1;
                ("nav-item-sub", active)
            }
        };

        let onclick = {
            let on_select = props.on_select.clone();
            let section = item.section;
            Callback::from(move |_: MouseEvent| on_select.emit(section))
        };

        html! {
            <li>
                <button class={classes!(class, active.then_some("active"))} {onclick}>
                    { &item.label }
                </button>
            </li>
        }
    });

    html! {
        <aside class="course-nav">
            <ul>{ for items }</ul>
        </aside>
    }
}
