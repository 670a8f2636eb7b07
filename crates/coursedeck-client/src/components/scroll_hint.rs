use yew::prelude::*;
use yew_icons::{Icon, IconData};

#[derive(Properties, PartialEq)]
pub struct ScrollHintProps {
    pub visible: bool,
}

/// "Scroll down" indicator shown while the first section is in view.
#[function_component(ScrollHint)]
pub fn scroll_hint(props: &ScrollHintProps) -> Html {
    html! {
        <div class={classes!("scroll-indicator", (!props.visible).then_some("hidden"))}>
            <span>{ "Scroll" }</span>
            <Icon data={IconData::LUCIDE_CHEVRON_DOWN} width="20px" height="20px" />
        </div>
    }
}
