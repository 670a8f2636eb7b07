//! Step buttons with one content panel per step.

use coursedeck_core::course::StepConfig;
use yew::prelude::*;

/// Props for the StepTabs component.
#[derive(Properties, PartialEq)]
pub struct StepTabsProps {
    pub steps: Vec<StepConfig>,
}

#[function_component(StepTabs)]
pub fn step_tabs(props: &StepTabsProps) -> Html {
    let tabs = use_state(|| coursedeck_core::StepTabs::new(props.steps.len()));

    let buttons = props.steps.iter().enumerate().map(|(i, step)| {
        let onclick = {
            let tabs = tabs.clone();
            Callback::from(move |_: MouseEvent| {
                let mut next = *tabs;
                if next.select(i) {
                    tabs.set(next);
                }
            })
        };
        html! {
            <button class={classes!("step-button", tabs.is_active(i).then_some("active"))} {onclick}>
                { &step.label }
            </button>
        }
    });

    let contents = props.steps.iter().enumerate().map(|(i, step)| {
        html! {
            <div class={classes!("step-content-item", tabs.is_active(i).then_some("active"))}>
                { &step.body }
            </div>
        }
    });

    html! {
        <div class="steps">
            <div class="step-buttons">{ for buttons }</div>
            <div class="step-contents">{ for contents }</div>
        </div>
    }
}
