use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ContainerProps {
    pub children: Children,
    #[prop_or_default]
    pub class: Classes,
}

/// Max-width wrapper (1168px plus responsive side padding) so every section
/// shares the same alignment.
#[function_component(Container)]
pub fn container(props: &ContainerProps) -> Html {
    html! {
        <div class={classes!("container", props.class.clone())}>
            { props.children.clone() }
        </div>
    }
}
