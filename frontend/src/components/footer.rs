use yew::prelude::*;

use crate::components::common::{Button, Container};
use crate::services::i18n::use_i18n;

const SOCIAL_LINKS: [(&str, &str); 4] = [
    ("fa-brands fa-facebook-f", "Facebook"),
    ("fa-brands fa-twitter", "Twitter"),
    ("fa-brands fa-instagram", "Instagram"),
    ("fa-brands fa-linkedin-in", "LinkedIn"),
];

#[function_component(Footer)]
pub fn footer() -> Html {
    let i18n = use_i18n();

    html! {
        <footer class="footer">
            <Container>
                <div class="footer-subscription">
                    <h4 class="footer-subscription-title">{ i18n.t("footer.subscriptionTitle") }</h4>
                    <p class="footer-subscription-description">
                        { i18n.t("footer.subscriptionDescription") }
                    </p>
                    <div class="footer-subscription-form">
                        <input
                            type="email"
                            class="footer-email-input"
                            placeholder={i18n.t("footer.emailPlaceholder")}
                            aria-label="Email address"
                        />
                        <Button>{ i18n.t("buttons.subscribe") }</Button>
                    </div>
                </div>

                <div class="footer-main">
                    <div class="footer-company">
                        <span class="logo">
                            <span class="logo-easy">{ "easy " }</span>
                            <span class="logo-nails">{ "nails" }</span>
                            <span class="logo-pos">{ "POS" }</span>
                        </span>
                        <p class="footer-tagline">{ i18n.t("footer.tagline") }</p>

                        <ul class="footer-contact">
                            <li>
                                <i class="fa-solid fa-phone" aria-hidden="true"></i>
                                <span>{ "+1 (555) 123-4567" }</span>
                            </li>
                            <li>
                                <i class="fa-solid fa-envelope" aria-hidden="true"></i>
                                <span>{ "sales@easynailpos.com" }</span>
                            </li>
                            <li>
                                <i class="fa-solid fa-location-dot" aria-hidden="true"></i>
                                <span>{ "123 Tech Street, San Francisco, CA" }</span>
                            </li>
                        </ul>

                        <div class="footer-social">
                            { for SOCIAL_LINKS.iter().map(|(icon, label)| html! {
                                <a href="#" class="footer-social-link" aria-label={*label}>
                                    <i class={*icon} aria-hidden="true"></i>
                                </a>
                            }) }
                        </div>
                    </div>
                </div>

                <div class="footer-bottom">
                    <span>{ i18n.t("footer.copyright") }</span>
                </div>
            </Container>
        </footer>
    }
}
