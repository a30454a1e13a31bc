//! Shared form primitives: buttons, inputs, and text areas.

use dioxus::prelude::*;

/// Styles for the button/input/textarea wrappers.
pub const UI_STYLES: &str = r"
.ui-button {
    border-radius: 6px;
    padding: 10px 14px;
    font-size: 14px;
    font-weight: 500;
    border: 1px solid transparent;
    cursor: pointer;
    transition: background-color 120ms ease, color 120ms ease;
}
.ui-button:disabled { opacity: 0.55; cursor: default; }
.ui-button--block { width: 100%; }
.ui-button--primary { background: #2B85FF; color: #ffffff; }
.ui-button--primary:hover { background: #1d6fe0; }
.ui-button--outline { background: #ffffff; color: #2B85FF; border-color: #2B85FF; }
.ui-button--outline:hover { background: #2B85FF; color: #ffffff; }
.ui-input, .ui-textarea {
    width: 100%;
    border: 1px solid #e2e8f0;
    border-radius: 6px;
    padding: 10px 12px;
    font-size: 14px;
    background: #f8fafc;
    color: #1e293b;
    outline: none;
}
.ui-input:focus, .ui-textarea:focus { border-color: #2B85FF; }
.ui-textarea { resize: vertical; }
";

/// Button look.
#[derive(Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Outline,
}

impl ButtonVariant {
    const fn class(self) -> &'static str {
        match self {
            Self::Primary => "ui-button--primary",
            Self::Outline => "ui-button--outline",
        }
    }
}

#[component]
pub fn UiButton(
    #[props(default)] variant: ButtonVariant,
    #[props(default)] block: bool,
    onclick: Option<EventHandler<MouseEvent>>,
    #[props(extends = GlobalAttributes)]
    #[props(extends = button)]
    attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let class_name = if block {
        format!("ui-button {} ui-button--block", variant.class())
    } else {
        format!("ui-button {}", variant.class())
    };

    rsx! {
        button {
            class: "{class_name}",
            onclick: move |event| {
                if let Some(handler) = &onclick {
                    handler.call(event);
                }
            },
            ..attributes,
            {children}
        }
    }
}

#[component]
pub fn UiInput(
    oninput: Option<EventHandler<FormEvent>>,
    onkeydown: Option<EventHandler<KeyboardEvent>>,
    #[props(extends = GlobalAttributes)]
    #[props(extends = input)]
    attributes: Vec<Attribute>,
) -> Element {
    rsx! {
        input {
            class: "ui-input",
            oninput: move |event| _ = oninput.map(|handler| handler(event)),
            onkeydown: move |event| _ = onkeydown.map(|handler| handler(event)),
            ..attributes,
        }
    }
}

#[component]
pub fn UiTextarea(
    oninput: Option<EventHandler<FormEvent>>,
    #[props(extends = GlobalAttributes)]
    #[props(extends = textarea)]
    attributes: Vec<Attribute>,
) -> Element {
    rsx! {
        textarea {
            class: "ui-textarea",
            oninput: move |event| _ = oninput.map(|handler| handler(event)),
            ..attributes,
        }
    }
}
