use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct GradientHeadlineProps {
    pub text: AttrValue,
    /// Words from `text` to render with the pink-to-purple gradient;
    /// everything else stays solid.
    #[prop_or_default]
    pub gradient_words: Vec<AttrValue>,
    #[prop_or_default]
    pub class: Classes,
}

/// Headline with selected words rendered in a text gradient.
///
/// Matching is per whitespace-separated word, so the gradient set can come
/// straight out of the locale catalog and differ between languages.
#[function_component(GradientHeadline)]
pub fn gradient_headline(props: &GradientHeadlineProps) -> Html {
    let words = props.text.split_whitespace().map(|word| {
        let gradient = props
            .gradient_words
            .iter()
            .any(|candidate| candidate.as_str() == word);
        if gradient {
            html! { <><span class="gradient-text">{ word }</span>{ " " }</> }
        } else {
            html! { <><span class="solid-text">{ word }</span>{ " " }</> }
        }
    });

    html! {
        <h1 class={classes!("headline", props.class.clone())}>
            { for words }
        </h1>
    }
}
