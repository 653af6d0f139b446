use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct DescriptionProps {
    pub text: AttrValue,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(Description)]
pub fn description(props: &DescriptionProps) -> Html {
    html! {
        <p class={classes!("description", props.class.clone())}>
            { props.text.clone() }
        </p>
    }
}
