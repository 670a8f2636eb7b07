//! Page heading typed out on activation.

use coursedeck_core::typewriter::{SUBTITLE_SPEED_MS, TITLE_SPEED_MS};
use yew::prelude::*;

use crate::hooks::use_typewriter;

/// Props for the Hero component.
#[derive(Properties, PartialEq)]
pub struct HeroProps {
    pub title: AttrValue,
    #[prop_or_default]
    pub subtitle: AttrValue,
}

/// Title and subtitle type out in parallel.
#[function_component(Hero)]
pub fn hero(props: &HeroProps) -> Html {
    let title = use_typewriter(props.title.clone(), TITLE_SPEED_MS);
    let subtitle = use_typewriter(props.subtitle.clone(), SUBTITLE_SPEED_MS);

    html! {
        <header class="hero">
            <h1 class={classes!("typewriter", (!title.finished).then_some("typing"))}>
                { title.text }
            </h1>
            if !props.subtitle.is_empty() {
                <p class={classes!("subtitle", (!subtitle.finished).then_some("typing"))}>
                    { subtitle.text }
                </p>
            }
        </header>
    }
}
