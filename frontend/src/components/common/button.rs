use yew::prelude::*;

#[derive(Clone, Copy, PartialEq)]
pub enum ButtonVariant {
    Filled,
    Outline,
}

impl ButtonVariant {
    fn class(self) -> &'static str {
        match self {
            ButtonVariant::Filled => "button-filled",
            ButtonVariant::Outline => "button-outline",
        }
    }
}

#[derive(Clone, Copy, PartialEq)]
pub enum ButtonSize {
    Sm,
    Md,
}

impl ButtonSize {
    fn class(self) -> &'static str {
        match self {
            ButtonSize::Sm => "button-sm",
            ButtonSize::Md => "button-md",
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct ButtonProps {
    pub children: Children,
    #[prop_or(ButtonVariant::Filled)]
    pub variant: ButtonVariant,
    #[prop_or(ButtonSize::Sm)]
    pub size: ButtonSize,
    #[prop_or_default]
    pub onclick: Callback<MouseEvent>,
    #[prop_or_default]
    pub disabled: bool,
    /// Optional trailing icon, rendered after the label
    #[prop_or_default]
    pub icon: Option<Html>,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(Button)]
pub fn button(props: &ButtonProps) -> Html {
    let classes = classes!(
        "button",
        props.variant.class(),
        props.size.class(),
        props.class.clone(),
    );

    html! {
        <button
            type="button"
            class={classes}
            onclick={props.onclick.clone()}
            disabled={props.disabled}
            aria-disabled={props.disabled.to_string()}
        >
            <span class="button-label">{ props.children.clone() }</span>
            if let Some(icon) = &props.icon {
                <span class="button-icon">{ icon.clone() }</span>
            }
        </button>
    }
}
