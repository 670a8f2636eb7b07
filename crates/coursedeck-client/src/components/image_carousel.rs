//! Image viewer with previous/next buttons and a counter.

use coursedeck_core::course::ImageConfig;
use yew::prelude::*;
use yew_icons::{Icon, IconData};

/// Props for the ImageCarousel component.
#[derive(Properties, PartialEq)]
pub struct ImageCarouselProps {
    pub images: Vec<ImageConfig>,
}

#[function_component(ImageCarousel)]
pub fn image_carousel(props: &ImageCarouselProps) -> Html {
    let carousel = use_state(|| coursedeck_core::ImageCarousel::new(props.images.len()));

    let on_prev = {
        let carousel = carousel.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            let mut next = *carousel;
            next.previous();
            carousel.set(next);
        })
    };
    let on_next = {
        let carousel = carousel.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            let mut next = *carousel;
            next.next();
            carousel.set(next);
        })
    };

    let Some(image) = props.images.get(carousel.current()) else {
        return html! {};
    };
    let (position, total) = carousel.counter();

    html! {
        <figure class="step-image-container">
            <div class="step-image-placeholder">
                <img src={image.src.clone()} alt={image.caption.clone().unwrap_or_default()} />
            </div>
            if let Some(caption) = &image.caption {
                <figcaption class="step-content-description">{ caption }</figcaption>
            }
            if carousel.shows_controls() {
                <div class="image-nav">
                    <button class="image-nav-btn image-nav-prev" onclick={on_prev}>
                        <Icon data={IconData::LUCIDE_CHEVRON_LEFT} width="16px" height="16px" />
                    </button>
                    <span class="image-counter">
                        <span class="current-image">{ position }</span>
                        { " / " }
                        <span class="total-images">{ total }</span>
                    </span>
                    <button class="image-nav-btn image-nav-next" onclick={on_next}>
                        <Icon data={IconData::LUCIDE_CHEVRON_RIGHT} width="16px" height="16px" />
                    </button>
                </div>
            }
        </figure>
    }
}
