//! Labelled range slider.

use dioxus::prelude::*;
use retouch_core::{SLIDER_MAX, SLIDER_MIN};

/// Properties for the RangeSlider component
#[derive(Clone, PartialEq, Props)]
pub struct RangeSliderProps {
    /// Element id, also used for label association
    pub id: String,
    pub label: String,
    /// Current value, shown next to the label
    pub value: i32,
    /// Handler called with the raw value reported by the input
    pub oninput: EventHandler<String>,
    #[props(default)]
    pub title: Option<String>,
    #[props(default = SLIDER_MIN)]
    pub min: i32,
    #[props(default = SLIDER_MAX)]
    pub max: i32,
    #[props(default = false)]
    pub disabled: bool,
}

/// Range input with a label row showing the current value
///
/// The raw string is passed through untouched; parsing belongs to the owner
/// of the value.
#[component]
pub fn RangeSlider(props: RangeSliderProps) -> Element {
    rsx! {
        div { class: "slider-field",
            label {
                class: "slider-label",
                r#for: "{props.id}",
                span { "{props.label}" }
                span { class: "slider-value", "{props.value}" }
            }
            input {
                id: "{props.id}",
                class: "slider-input",
                r#type: "range",
                min: "{props.min}",
                max: "{props.max}",
                value: "{props.value}",
                title: props.title.as_deref().unwrap_or(""),
                disabled: props.disabled,
                oninput: move |e| props.oninput.call(e.value()),
            }
        }
    }
}
