use std::rc::Rc;

use dioxus::prelude::*;

/// Query input: the decorated textarea plus the TRANSMIT button.
///
/// Draft state lives in the parent; this component only reports edits
/// and send requests. The draft is not cleared on send. Ctrl+Enter
/// also sends.
#[component]
pub fn ChatInput(
    value: String,
    disabled: bool,
    pending: bool,
    on_input: Callback<String, ()>,
    on_send: Callback<(), ()>,
) -> Element {
    let set_text = move |e: Event<FormData>| {
        if disabled {
            return;
        }
        on_input(e.value());
    };
    let _send = move || {
        if disabled {
            return;
        }
        on_send(());
    };
    let send = move |_e: Event<MouseData>| {
        _send();
    };
    let disabled = if disabled { Some(true) } else { None };
    let button_class = if pending {
        "cyber-button loading"
    } else {
        "cyber-button"
    };
    rsx! {
        div { class: "textarea-wrapper",
            textarea {
                class: "cyber-textarea",
                rows: "4",
                placeholder: "Enter your financial query...",
                disabled,
                oninput: set_text,
                onkeypress: move |e: Event<KeyboardData>| {
                    let k: Rc<KeyboardData> = e.data;
                    let code = k.code();
                    let modifiers = k.modifiers();
                    if code == Code::Enter && modifiers.ctrl() {
                        _send();
                    }
                },
                value: "{value}",
            }
            div { class: "textarea-corner tl" }
            div { class: "textarea-corner tr" }
            div { class: "textarea-corner bl" }
            div { class: "textarea-corner br" }
        }
        div { class: "button-row",

            // span { class: "hint-text", "CTRL + ENTER to send" }

            button {
                class: "{button_class}",
                onclick: send,
                disabled,
                span { class: "button-content",
                    if pending {
                        span { class: "spinner" }
                        "PROCESSING..."
                    } else {
                        span { class: "button-icon", "▶" }
                        "TRANSMIT"
                    }
                }
                div { class: "button-glare" }
            }
        }
    }
}
