//! Button Components
//!
//! Two styles are used by the panels:
//! - Option: grid buttons for presets and enhancements, ringed when selected
//! - Apply: the full-width confirmation button

use dioxus::prelude::*;

/// Button style variants
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum ButtonVariant {
    /// Grid button for a preset or enhancement
    #[default]
    Option,
    /// Prominent confirmation button
    Apply,
}

impl ButtonVariant {
    /// Returns the CSS class for this variant
    pub fn class(&self) -> &'static str {
        match self {
            ButtonVariant::Option => "btn-option",
            ButtonVariant::Apply => "btn-apply",
        }
    }
}

/// Full class list for a button in the given state
pub fn button_class(variant: ButtonVariant, selected: bool) -> String {
    if selected {
        format!("{} selected", variant.class())
    } else {
        variant.class().to_string()
    }
}

/// Properties for the Button component
#[derive(Clone, PartialEq, Props)]
pub struct ButtonProps {
    /// Visual style variant
    #[props(default)]
    pub variant: ButtonVariant,
    /// Button content
    pub children: Element,
    /// Click handler
    #[props(default)]
    pub onclick: Option<EventHandler<()>>,
    /// Whether the button is disabled
    #[props(default = false)]
    pub disabled: bool,
    /// Highlight as the active choice
    #[props(default = false)]
    pub selected: bool,
    /// Hover help text
    #[props(default)]
    pub title: Option<String>,
}

/// Styled button used by both panels
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     Button {
///         variant: ButtonVariant::Option,
///         selected: true,
///         title: "Adds dramatic lighting".to_string(),
///         onclick: move |_| pick_preset(),
///         "Studio Light"
///     }
/// }
/// ```
#[component]
pub fn Button(props: ButtonProps) -> Element {
    let class = button_class(props.variant, props.selected);

    rsx! {
        button {
            class: "{class}",
            r#type: "button",
            title: props.title.as_deref().unwrap_or(""),
            disabled: props.disabled,
            "aria-pressed": if props.selected { "true" } else { "false" },
            onclick: move |_| {
                if let Some(handler) = &props.onclick {
                    handler.call(());
                }
            },
            {props.children}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn button_variant_classes() {
        assert_eq!(ButtonVariant::Option.class(), "btn-option");
        assert_eq!(ButtonVariant::Apply.class(), "btn-apply");
    }

    #[test]
    fn button_variant_default() {
        assert_eq!(ButtonVariant::default(), ButtonVariant::Option);
    }

    #[test]
    fn selected_adds_class() {
        assert_eq!(button_class(ButtonVariant::Option, true), "btn-option selected");
        assert_eq!(button_class(ButtonVariant::Apply, false), "btn-apply");
    }
}
