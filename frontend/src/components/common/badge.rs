use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct BadgeProps {
    pub text: AttrValue,
    /// Font Awesome icon classes, e.g. `"fa-solid fa-heart"`
    #[prop_or_default]
    pub icon: Option<AttrValue>,
    #[prop_or_default]
    pub class: Classes,
}

/// Icon-plus-text pill used at the top of hero and demo sections.
#[function_component(Badge)]
pub fn badge(props: &BadgeProps) -> Html {
    html! {
        <div class={classes!("badge", props.class.clone())}>
            if let Some(icon) = &props.icon {
                <i class={icon.to_string()} aria-hidden="true"></i>
            }
            <span class="badge-text">{ props.text.clone() }</span>
        </div>
    }
}
