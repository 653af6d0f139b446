//! Embedded-catalog internationalization.
//!
//! Two locales ship with the page: English (default and fallback) and
//! Vietnamese. Catalogs are JSON files compiled into the binary; lookups
//! take dotted keys (`"hero.headline"`). The active locale is detected from
//! localStorage first, then the browser language, and every explicit switch
//! is cached back to localStorage.

use gloo::storage::{LocalStorage, Storage};
use serde_json::Value;
use std::sync::OnceLock;
use yew::prelude::*;

use crate::services::logging::Logger;

const STORAGE_KEY: &str = "easynail.locale";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Locale {
    En,
    Vi,
}

impl Locale {
    pub const ALL: [Locale; 2] = [Locale::En, Locale::Vi];

    pub fn tag(self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Vi => "vi",
        }
    }

    /// Short label for the header language switcher.
    pub fn label(self) -> &'static str {
        match self {
            Locale::En => "EN",
            Locale::Vi => "VI",
        }
    }

    /// Matches a BCP 47 tag ("vi", "vi-VN", "en-US") to a shipped locale.
    pub fn from_tag(tag: &str) -> Option<Locale> {
        let primary = tag.split('-').next().unwrap_or(tag);
        match primary.to_ascii_lowercase().as_str() {
            "en" => Some(Locale::En),
            "vi" => Some(Locale::Vi),
            _ => None,
        }
    }
}

fn catalog(locale: Locale) -> &'static Value {
    static EN: OnceLock<Value> = OnceLock::new();
    static VI: OnceLock<Value> = OnceLock::new();
    let (cell, source) = match locale {
        Locale::En => (&EN, include_str!("../../i18n/en.json")),
        Locale::Vi => (&VI, include_str!("../../i18n/vi.json")),
    };
    cell.get_or_init(|| serde_json::from_str(source).unwrap_or(Value::Null))
}

/// Resolves a dotted key ("stats.activeSalons") inside a catalog.
fn lookup<'a>(catalog: &'a Value, key: &str) -> Option<&'a str> {
    key.split('.')
        .try_fold(catalog, |node, part| node.get(part))?
        .as_str()
}

/// Translation context handed to every component.
#[derive(Clone, PartialEq)]
pub struct I18n {
    pub locale: Locale,
    switch: Callback<Locale>,
}

impl I18n {
    /// Looks up `key` in the active catalog, falling back to English and
    /// finally to the key itself so a missing entry stays visible on the
    /// page instead of blanking it.
    pub fn t(&self, key: &str) -> String {
        lookup(catalog(self.locale), key)
            .or_else(|| lookup(catalog(Locale::En), key))
            .map(str::to_owned)
            .unwrap_or_else(|| {
                Logger::warn_with_component("i18n", &format!("missing translation key {key:?}"));
                key.to_owned()
            })
    }

    pub fn set_locale(&self, locale: Locale) {
        self.switch.emit(locale);
    }
}

/// Detection order mirrors the design: cached choice first, browser
/// language second, English last.
fn detect_locale() -> Locale {
    if let Ok(tag) = LocalStorage::get::<String>(STORAGE_KEY) {
        if let Some(locale) = Locale::from_tag(&tag) {
            return locale;
        }
    }
    if let Some(window) = web_sys::window() {
        if let Some(tag) = window.navigator().language() {
            if let Some(locale) = Locale::from_tag(&tag) {
                return locale;
            }
        }
    }
    Locale::En
}

#[derive(Properties, PartialEq)]
pub struct I18nProviderProps {
    pub children: Children,
}

#[function_component(I18nProvider)]
pub fn i18n_provider(props: &I18nProviderProps) -> Html {
    let locale = use_state(|| {
        let detected = detect_locale();
        Logger::info_with_component("i18n", &format!("active locale: {}", detected.tag()));
        detected
    });

    let switch = {
        let locale = locale.clone();
        Callback::from(move |next: Locale| {
            if let Err(err) = LocalStorage::set(STORAGE_KEY, next.tag()) {
                Logger::warn_with_component("i18n", &format!("failed to cache locale: {err:?}"));
            }
            locale.set(next);
        })
    };

    let context = I18n {
        locale: *locale,
        switch,
    };

    html! {
        <ContextProvider<I18n> context={context}>
            { props.children.clone() }
        </ContextProvider<I18n>>
    }
}

#[hook]
pub fn use_i18n() -> I18n {
    use_context::<I18n>().unwrap_or(I18n {
        locale: Locale::En,
        switch: Callback::noop(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn from_tag_matches_primary_subtag() {
        assert_eq!(Locale::from_tag("vi"), Some(Locale::Vi));
        assert_eq!(Locale::from_tag("vi-VN"), Some(Locale::Vi));
        assert_eq!(Locale::from_tag("en-US"), Some(Locale::En));
        assert_eq!(Locale::from_tag("fr"), None);
    }

    #[wasm_bindgen_test]
    fn catalogs_resolve_dotted_keys() {
        assert_eq!(
            lookup(catalog(Locale::En), "navigation.pricing"),
            Some("Pricing")
        );
        assert_eq!(
            lookup(catalog(Locale::Vi), "navigation.pricing"),
            Some("Bảng giá")
        );
        assert_eq!(lookup(catalog(Locale::En), "navigation.missing"), None);
    }

    #[wasm_bindgen_test]
    fn both_catalogs_cover_the_same_keys() {
        for key in [
            "hero.headline",
            "stats.activeSalons",
            "demo.title",
            "cta.benefitGuarantee",
            "footer.copyright",
            "buttons.getStarted",
        ] {
            assert!(lookup(catalog(Locale::En), key).is_some(), "en missing {key}");
            assert!(lookup(catalog(Locale::Vi), key).is_some(), "vi missing {key}");
        }
    }
}
