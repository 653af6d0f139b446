use shared::carousel::{Carousel, Slide};
use yew::prelude::*;

use crate::components::common::{Badge, Container};
use crate::hooks::{use_in_view, InViewConfig};
use crate::services::i18n::use_i18n;
use crate::services::logging::Logger;

const DEMO_SLIDE_COUNT: u32 = 5;

fn demo_slide(id: u32) -> Slide {
    Slide {
        id,
        image: format!("/images/demo-{id}.png"),
        alt: format!("Demo {id}"),
    }
}

fn demo_carousel() -> Carousel {
    Carousel::from_first(
        demo_slide(1),
        (2..=DEMO_SLIDE_COUNT).map(demo_slide).collect(),
    )
}

/// Product-demo carousel: five screenshots on a horizontal track, the
/// active one enlarged and kept centered via the controller's offset math.
/// Arrows step with wraparound; pagination dots jump directly.
#[function_component(DemoSection)]
pub fn demo_section() -> Html {
    let i18n = use_i18n();
    let section_ref = use_node_ref();
    let in_view = use_in_view(section_ref.clone(), InViewConfig::default());

    let carousel = use_state(demo_carousel);

    let on_previous = {
        let carousel = carousel.clone();
        Callback::from(move |_| {
            let mut next = (*carousel).clone();
            next.previous();
            Logger::debug_with_component("demo", &format!("slide {}", next.active_index()));
            carousel.set(next);
        })
    };

    let on_next = {
        let carousel = carousel.clone();
        Callback::from(move |_| {
            let mut next = (*carousel).clone();
            next.next();
            Logger::debug_with_component("demo", &format!("slide {}", next.active_index()));
            carousel.set(next);
        })
    };

    let on_dot = |index: usize| {
        let carousel = carousel.clone();
        Callback::from(move |_| {
            let mut next = (*carousel).clone();
            next.jump_to(index);
            carousel.set(next);
        })
    };

    let track_style = format!(
        "width: {}px; transform: translateX(calc(50% - {}px));",
        carousel.track_width_px(),
        carousel.center_offset_px(),
    );

    html! {
        <section class="demo-section" ref={section_ref}>
            <Container>
                <div class={classes!("demo-panel", in_view.then_some("is-visible"))}>
                    <div class="demo-heading">
                        <Badge
                            text={i18n.t("demo.label")}
                            icon="fa-solid fa-heart"
                            class={classes!("demo-badge")}
                        />
                        <h2 class="demo-title">{ i18n.t("demo.title") }</h2>
                        <p class="demo-description">{ i18n.t("demo.description") }</p>
                    </div>

                    <div class="demo-carousel">
                        <div class="demo-track" style={track_style}>
                            { for carousel.slides().iter().enumerate().map(|(index, slide)| html! {
                                <div
                                    key={slide.id}
                                    class={classes!(
                                        "demo-slide",
                                        carousel.is_active(index).then_some("is-active"),
                                    )}
                                >
                                    <img
                                        src={slide.image.clone()}
                                        alt={slide.alt.clone()}
                                        loading="lazy"
                                    />
                                </div>
                            }) }
                        </div>

                        <div class="demo-fade demo-fade-left" aria-hidden="true"></div>
                        <div class="demo-fade demo-fade-right" aria-hidden="true"></div>

                        <button
                            type="button"
                            class="demo-arrow demo-arrow-left"
                            onclick={on_previous}
                            aria-label="Previous slide"
                        >
                            <i class="fa-solid fa-chevron-left" aria-hidden="true"></i>
                        </button>
                        <button
                            type="button"
                            class="demo-arrow demo-arrow-right"
                            onclick={on_next}
                            aria-label="Next slide"
                        >
                            <i class="fa-solid fa-chevron-right" aria-hidden="true"></i>
                        </button>
                    </div>

                    <div class="demo-dots">
                        { for (0..carousel.len()).map(|index| html! {
                            <button
                                type="button"
                                key={index}
                                class={classes!(
                                    "demo-dot",
                                    carousel.is_active(index).then_some("is-active"),
                                )}
                                onclick={on_dot(index)}
                                aria-label={format!("Go to slide {}", index + 1)}
                            />
                        }) }
                    </div>
                </div>
            </Container>
        </section>
    }
}
