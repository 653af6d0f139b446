use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

use crate::services::logging::Logger;

/// Configuration for viewport-visibility detection
#[derive(Clone, PartialEq)]
pub struct InViewConfig {
    /// Shrinks the viewport box, so elements must scroll this far past the
    /// edge before counting as visible. Negative values match the design's
    /// "-100px" margin.
    pub root_margin_px: i32,
    /// Latch on the first intersection and stop observing
    pub once: bool,
}

impl Default for InViewConfig {
    fn default() -> Self {
        Self {
            root_margin_px: -100,
            once: true,
        }
    }
}

/// Hook reporting whether the referenced element has entered the viewport.
///
/// Sections use this to trigger their entrance animations and to arm the
/// stat counters. With `once` set (the default) the observer disconnects
/// after the first sighting, so the animations never re-run on scroll-away.
/// The observer and its callback are torn down when the component unmounts.
#[hook]
pub fn use_in_view(node: NodeRef, config: InViewConfig) -> bool {
    let in_view = use_state(|| false);

    {
        let in_view = in_view.clone();
        use_effect_with((node, config), move |(node, config)| {
            let mut observer: Option<IntersectionObserver> = None;
            let mut callback: Option<Closure<dyn FnMut(Vec<IntersectionObserverEntry>, IntersectionObserver)>> =
                None;

            if let Some(element) = node.cast::<Element>() {
                let state = in_view.clone();
                let once = config.once;
                let handler = Closure::new(
                    move |entries: Vec<IntersectionObserverEntry>, obs: IntersectionObserver| {
                        let visible = entries.iter().any(|entry| entry.is_intersecting());
                        if visible {
                            state.set(true);
                            if once {
                                obs.disconnect();
                            }
                        } else if !once {
                            state.set(false);
                        }
                    },
                );

                let options = IntersectionObserverInit::new();
                options.set_root_margin(&format!("{}px", config.root_margin_px));

                match IntersectionObserver::new_with_options(
                    handler.as_ref().unchecked_ref(),
                    &options,
                ) {
                    Ok(obs) => {
                        obs.observe(&element);
                        observer = Some(obs);
                    }
                    Err(err) => {
                        Logger::warn_with_component(
                            "in-view-hook",
                            &format!("IntersectionObserver unavailable: {err:?}"),
                        );
                        // No observer means no trigger; show content rather
                        // than leaving the section permanently hidden.
                        in_view.set(true);
                    }
                }
                callback = Some(handler);
            }

            move || {
                if let Some(obs) = observer {
                    obs.disconnect();
                }
                drop(callback);
            }
        });
    }

    *in_view
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_config_default() {
        let config = InViewConfig::default();
        assert_eq!(config.root_margin_px, -100);
        assert!(config.once);
    }
}
