use gloo::timers::future::TimeoutFuture;
use shared::countup::{format_stat_number, parse_stat};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::components::common::Container;
use crate::hooks::{use_count_up, use_in_view, CountUpConfig, InViewConfig};
use crate::services::i18n::use_i18n;
use crate::services::logging::Logger;

/// Delay between adjacent counters so the row counts up as a cascade.
const STAGGER_STEP_MS: u32 = 200;

struct StatEntry {
    number: &'static str,
    label_key: &'static str,
    icon: &'static str,
}

const STATS: [StatEntry; 4] = [
    StatEntry {
        number: "12,000+",
        label_key: "stats.activeSalons",
        icon: "fa-solid fa-users",
    },
    StatEntry {
        number: "47%",
        label_key: "stats.avgRevenueGrowth",
        icon: "fa-solid fa-arrow-trend-up",
    },
    StatEntry {
        number: "15hrs",
        label_key: "stats.timeSaved",
        icon: "fa-solid fa-clock",
    },
    StatEntry {
        number: "4.9/5",
        label_key: "stats.customerRating",
        icon: "fa-solid fa-star",
    },
];

#[derive(Properties, PartialEq)]
struct AnimatedNumberProps {
    value: AttrValue,
    in_view: bool,
    #[prop_or_default]
    delay_ms: u32,
}

/// One animated stat figure.
///
/// Arms its counter `delay_ms` after the section scrolls into view, then
/// renders prefix + counted number + suffix. A stat string outside the
/// supported formats is shown as-is instead of animated.
#[function_component(AnimatedNumber)]
fn animated_number(props: &AnimatedNumberProps) -> Html {
    let armed = use_state(|| false);

    {
        let armed = armed.clone();
        use_effect_with((props.in_view, props.delay_ms), move |(in_view, delay_ms)| {
            if *in_view && !*armed {
                let delay = *delay_ms;
                spawn_local(async move {
                    if delay > 0 {
                        TimeoutFuture::new(delay).await;
                    }
                    armed.set(true);
                });
            }
            || ()
        });
    }

    let parsed = use_memo(props.value.clone(), |value| {
        parse_stat(value).map_err(|err| {
            Logger::warn_with_component("stats", &format!("stat fell back to raw text: {err}"));
            err
        })
    });

    // Go through `Result::as_ref` explicitly; `parsed.as_ref()` would hit
    // `AsRef for Rc` and try to move the `Result` out of the shared pointer.
    let target = (*parsed).as_ref().map(|stat| stat.number).unwrap_or(0.0);
    let shown = use_count_up(target, *armed, CountUpConfig::default());

    match (*parsed).as_ref() {
        Ok(stat) => html! {
            <span>{ format!("{}{}{}", stat.prefix, format_stat_number(shown), stat.suffix) }</span>
        },
        Err(_) => html! { <span>{ props.value.clone() }</span> },
    }
}

/// The four-figure stats row, counters armed on first visibility with a
/// 200ms-per-column stagger.
#[function_component(StatsSection)]
pub fn stats_section() -> Html {
    let i18n = use_i18n();
    let section_ref = use_node_ref();
    let in_view = use_in_view(section_ref.clone(), InViewConfig::default());

    html! {
        <section class="stats-section" ref={section_ref}>
            <Container>
                <div class="stats-row">
                    { for STATS.iter().enumerate().map(|(index, stat)| {
                        let delay_ms = index as u32 * STAGGER_STEP_MS;
                        html! {
                            <div
                                key={stat.label_key}
                                class={classes!("stat-card", in_view.then_some("is-visible"))}
                                style={format!("transition-delay: {delay_ms}ms")}
                            >
                                <div class="stat-icon">
                                    <i class={stat.icon} aria-hidden="true"></i>
                                </div>
                                <div class="stat-number">
                                    <AnimatedNumber
                                        value={stat.number}
                                        in_view={in_view}
                                        delay_ms={delay_ms}
                                    />
                                </div>
                                <div class="stat-label">{ i18n.t(stat.label_key) }</div>
                            </div>
                        }
                    }) }
                </div>
            </Container>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::rc::Rc;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    // The parse result is shared behind an Rc by use_memo; deriving the
    // count-up target must borrow through `Result::as_ref`, not move.
    #[wasm_bindgen_test]
    fn count_up_target_derived_from_shared_parse_result() {
        let parsed = Rc::new(parse_stat("12,000+"));
        let target = (*parsed).as_ref().map(|stat| stat.number).unwrap_or(0.0);
        assert_eq!(target, 12000.0);
    }

    #[wasm_bindgen_test]
    fn count_up_target_falls_back_to_zero_on_parse_error() {
        let parsed = Rc::new(parse_stat("fast"));
        let target = (*parsed).as_ref().map(|stat| stat.number).unwrap_or(0.0);
        assert_eq!(target, 0.0);
        assert!((*parsed).as_ref().is_err());
    }
}
