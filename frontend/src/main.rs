mod components;
mod hooks;
mod services;

use yew::prelude::*;

use components::sections::{CtaSection, DemoSection, HeroSection, StatsSection};
use components::{Footer, Header};
use services::i18n::I18nProvider;
use services::logging::Logger;

#[function_component(App)]
fn app() -> Html {
    html! {
        <I18nProvider>
            <Header />
            <main id="main-content">
                <HeroSection />
                <StatsSection />
                <DemoSection />
                <CtaSection />
            </main>
            <Footer />
        </I18nProvider>
    }
}

fn main() {
    Logger::info_with_component("app", "starting Easy Nail POS landing page");
    yew::Renderer::<App>::new().render();
}
