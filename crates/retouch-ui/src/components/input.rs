//! Free-form prompt input.

use dioxus::prelude::*;

/// Properties for the PromptInput component
#[derive(Clone, PartialEq, Props)]
pub struct PromptInputProps {
    /// Current input value
    pub value: String,
    /// Handler called with the raw text on every edit
    pub oninput: EventHandler<String>,
    /// Placeholder text
    #[props(default)]
    pub placeholder: Option<String>,
    /// Hover help text
    #[props(default)]
    pub title: Option<String>,
    /// Ring the field as the active input
    #[props(default = false)]
    pub active: bool,
    #[props(default = false)]
    pub disabled: bool,
}

/// Single-line text input for describing an edit in words
///
/// # Example
///
/// ```rust,ignore
/// let mut text = use_signal(String::new);
///
/// rsx! {
///     PromptInput {
///         value: text(),
///         oninput: move |s| text.set(s),
///         placeholder: "describe an adjustment".to_string(),
///     }
/// }
/// ```
#[component]
pub fn PromptInput(props: PromptInputProps) -> Element {
    rsx! {
        input {
            class: if props.active { "prompt-input active" } else { "prompt-input" },
            r#type: "text",
            value: "{props.value}",
            placeholder: props.placeholder.as_deref().unwrap_or(""),
            title: props.title.as_deref().unwrap_or(""),
            disabled: props.disabled,
            oninput: move |e| props.oninput.call(e.value()),
        }
    }
}
