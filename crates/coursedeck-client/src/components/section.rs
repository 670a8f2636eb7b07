use coursedeck_core::{SectionConfig, SectionId};
use yew::prelude::*;

use crate::components::{ImageCarousel, StepTabs};
use crate::dom::SECTION_CLASS;

#[derive(Properties, PartialEq)]
pub struct SectionProps {
    pub id: SectionId,
    pub section: SectionConfig,
    /// Rendered above the heading, e.g. the page hero.
    #[prop_or_default]
    pub children: Html,
}

/// One full-viewport slide.
#[function_component(Section)]
pub fn section(props: &SectionProps) -> Html {
    let section = &props.section;

    html! {
        <section class={SECTION_CLASS} data-section={props.id.to_string()}>
            <div class="section-content">
                { props.children.clone() }
                <h2>{ &section.heading }</h2>
                { for section.paragraphs.iter().map(|p| html! { <p>{ p }</p> }) }
                if !section.steps.is_empty() {
                    <StepTabs steps={section.steps.clone()} />
                }
                if !section.images.is_empty() {
                    <ImageCarousel images={section.images.clone()} />
                }
            </div>
        </section>
    }
}
