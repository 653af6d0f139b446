use yew::prelude::*;

use crate::components::common::{Button, ButtonSize, ButtonVariant, Container};
use crate::hooks::{use_in_view, InViewConfig};
use crate::services::i18n::use_i18n;

const BENEFITS: [(&str, &str); 3] = [
    ("fa-solid fa-bolt", "cta.benefitSetup"),
    ("fa-solid fa-dollar-sign", "cta.benefitGuarantee"),
    ("fa-solid fa-lock", "cta.benefitContracts"),
];

/// Closing call to action: headline, the primary buttons one more time, and
/// the three reassurance bullets.
#[function_component(CtaSection)]
pub fn cta_section() -> Html {
    let i18n = use_i18n();
    let section_ref = use_node_ref();
    let in_view = use_in_view(section_ref.clone(), InViewConfig::default());

    html! {
        <section class="cta-section" id="contact" ref={section_ref}>
            <Container>
                <div class={classes!("cta-content", in_view.then_some("is-visible"))}>
                    <div class="cta-heading">
                        <div class="cta-label">
                            <span class="cta-label-emoji">{ "💗" }</span>
                            <span>{ i18n.t("cta.label") }</span>
                        </div>
                        <h2 class="cta-title">{ i18n.t("cta.title") }</h2>
                        <p class="cta-description">{ i18n.t("cta.description") }</p>
                    </div>

                    <div class="cta-actions">
                        <Button
                            size={ButtonSize::Md}
                            icon={Some(html! { <i class="fa-solid fa-arrow-right" aria-hidden="true"></i> })}
                        >
                            { i18n.t("buttons.getStarted") }
                        </Button>
                        <Button variant={ButtonVariant::Outline} size={ButtonSize::Md}>
                            { i18n.t("buttons.learnMore") }
                        </Button>
                    </div>

                    <ul class="cta-benefits">
                        { for BENEFITS.iter().map(|(icon, key)| html! {
                            <li key={*key} class="cta-benefit">
                                <i class={*icon} aria-hidden="true"></i>
                                <span>{ i18n.t(key) }</span>
                            </li>
                        }) }
                    </ul>
                </div>
            </Container>
        </section>
    }
}
