use yew::prelude::*;

use crate::components::common::{Badge, Button, ButtonVariant, Container, Description, GradientHeadline};
use crate::services::i18n::use_i18n;

/// Opening hero: badge, gradient headline, description, and the two primary
/// calls to action over the hero backdrop. Animates in on mount.
#[function_component(HeroSection)]
pub fn hero_section() -> Html {
    let i18n = use_i18n();

    let gradient_words: Vec<AttrValue> = i18n
        .t("hero.headlineGradient")
        .split_whitespace()
        .map(|word| AttrValue::from(word.to_owned()))
        .collect();

    html! {
        <section class="hero-section" id="solutions">
            <Container class={classes!("hero-content")}>
                <div class="hero-copy reveal">
                    <Badge
                        text={i18n.t("hero.label")}
                        icon="fa-solid fa-heart"
                        class={classes!("hero-badge")}
                    />
                    <div class="hero-divider"></div>
                    <GradientHeadline
                        text={i18n.t("hero.headline")}
                        gradient_words={gradient_words}
                    />
                    <Description text={i18n.t("hero.description")} class={classes!("hero-description")} />
                    <div class="hero-actions">
                        <Button icon={Some(html! { <i class="fa-solid fa-arrow-right" aria-hidden="true"></i> })}>
                            { i18n.t("buttons.getStarted") }
                        </Button>
                        <Button variant={ButtonVariant::Outline}>
                            { i18n.t("buttons.freeDemo") }
                        </Button>
                    </div>
                </div>
            </Container>
        </section>
    }
}
