use yew::prelude::*;

use crate::components::common::{Button, ButtonVariant, Container};
use crate::services::i18n::{use_i18n, Locale};

const NAV_ITEMS: [&str; 5] = ["solutions", "whoItsFor", "pricing", "about", "contact"];

/// Fixed page header: logo, section links, demo/get-started buttons, the
/// language switcher, and a collapsible menu on small screens.
#[function_component(Header)]
pub fn header() -> Html {
    let i18n = use_i18n();
    let mobile_menu_open = use_state(|| false);

    let toggle_menu = {
        let mobile_menu_open = mobile_menu_open.clone();
        Callback::from(move |_| mobile_menu_open.set(!*mobile_menu_open))
    };

    let close_menu = {
        let mobile_menu_open = mobile_menu_open.clone();
        Callback::from(move |_| mobile_menu_open.set(false))
    };

    let locale_switch = |locale: Locale| {
        let i18n = i18n.clone();
        Callback::from(move |_| i18n.set_locale(locale))
    };

    let nav_links = |class: &'static str, onclick: Option<Callback<MouseEvent>>| {
        html! {
            <ul class={class}>
                { for NAV_ITEMS.iter().map(|item| html! {
                    <li key={*item}>
                        <a
                            href={format!("#{item}")}
                            class="nav-link"
                            onclick={onclick.clone()}
                        >
                            { i18n.t(&format!("navigation.{item}")) }
                        </a>
                    </li>
                }) }
            </ul>
        }
    };

    html! {
        <header class="header">
            <Container class={classes!("header-nav")}>
                <a href="/" class="logo" aria-label="Easy Nail POS Home">
                    <span class="logo-easy">{ "easy " }</span>
                    <span class="logo-nails">{ "nails" }</span>
                    <span class="logo-pos">{ "POS" }</span>
                </a>

                { nav_links("nav-links", None) }

                <div class="header-actions">
                    <div class="locale-switch" role="group" aria-label="Language">
                        { for Locale::ALL.iter().map(|locale| html! {
                            <button
                                type="button"
                                class={classes!(
                                    "locale-button",
                                    (i18n.locale == *locale).then_some("is-active"),
                                )}
                                onclick={locale_switch(*locale)}
                            >
                                { locale.label() }
                            </button>
                        }) }
                    </div>
                    <Button variant={ButtonVariant::Outline}>
                        { i18n.t("buttons.freeDemo") }
                    </Button>
                    <Button>
                        { i18n.t("buttons.getStarted") }
                    </Button>
                </div>

                <button
                    type="button"
                    class="mobile-menu-toggle"
                    onclick={toggle_menu}
                    aria-label="Toggle menu"
                    aria-expanded={mobile_menu_open.to_string()}
                >
                    if *mobile_menu_open {
                        <i class="fa-solid fa-xmark" aria-hidden="true"></i>
                    } else {
                        <i class="fa-solid fa-bars" aria-hidden="true"></i>
                    }
                </button>
            </Container>

            if *mobile_menu_open {
                <div class="mobile-menu">
                    { nav_links("mobile-nav-links", Some(close_menu)) }
                    <div class="mobile-menu-actions">
                        <Button variant={ButtonVariant::Outline}>
                            { i18n.t("buttons.freeDemo") }
                        </Button>
                        <Button>
                            { i18n.t("buttons.getStarted") }
                        </Button>
                    </div>
                </div>
            }
        </header>
    }
}
