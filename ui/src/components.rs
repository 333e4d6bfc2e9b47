//! Off-the-shelf form primitives used by the auth forms.

use dioxus::prelude::*;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
    Danger,
}

impl ButtonVariant {
    fn class(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => "btn btn--primary",
            ButtonVariant::Secondary => "btn btn--secondary",
            ButtonVariant::Danger => "btn btn--danger",
        }
    }
}

#[component]
pub fn Button(
    #[props(default)] variant: ButtonVariant,
    #[props(default = "".to_string())] class: String,
    #[props(default = "button".to_string())] r#type: String,
    #[props(default = false)] disabled: bool,
    #[props(default)] onclick: Option<EventHandler<MouseEvent>>,
    children: Element,
) -> Element {
    let class = format!("{} {class}", variant.class());
    let type_attr = r#type;

    rsx! {
        button {
            class: "{class}",
            r#type: "{type_attr}",
            disabled: disabled,
            onclick: move |evt| {
                if let Some(handler) = &onclick {
                    handler.call(evt);
                }
            },
            {children}
        }
    }
}

#[component]
pub fn Input(
    #[props(default = "".to_string())] id: String,
    #[props(default = "text".to_string())] r#type: String,
    #[props(default = "".to_string())] placeholder: String,
    #[props(default = "".to_string())] class: String,
    #[props(default = false)] invalid: bool,
    #[props(default = false)] disabled: bool,
    value: String,
    oninput: EventHandler<FormEvent>,
) -> Element {
    let class = if invalid {
        format!("input input--invalid {class}")
    } else {
        format!("input {class}")
    };
    let type_attr = r#type;

    rsx! {
        input {
            id: "{id}",
            class: "{class}",
            r#type: "{type_attr}",
            placeholder: "{placeholder}",
            disabled: disabled,
            value: "{value}",
            oninput: move |evt| oninput.call(evt),
        }
    }
}
