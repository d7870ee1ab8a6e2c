//! Adjustment Panel
//!
//! Lets the user describe an adjustment in one of three ways:
//! - clicking a preset
//! - dragging the brightness/contrast sliders
//! - typing a free-form instruction
//!
//! The last interaction wins. The derived prompt is handed to the host
//! through `on_apply_adjustment` when the user confirms.

use dioxus::prelude::*;
use retouch_core::{parse_slider_value, AdjustmentState, LoadingEdge, SliderKind, PRESETS};

use super::{Button, ButtonVariant, PromptInput, RangeSlider};

const CUSTOM_PLACEHOLDER: &str =
    "Or describe an adjustment (e.g., 'change background to a forest')";
const CUSTOM_TOOLTIP: &str =
    "Describe any adjustment you can imagine (e.g., 'make the sky a dramatic purple').";
const APPLY_TOOLTIP: &str = "Applies the selected preset, slider adjustments, or your custom-described adjustment to the image.";

/// Properties for the AdjustmentPanel component
#[derive(Clone, PartialEq, Props)]
pub struct AdjustmentPanelProps {
    /// Receives the derived prompt when the user applies it
    pub on_apply_adjustment: EventHandler<String>,
    /// Host-owned flag, true while an edit request is in flight
    #[props(default = false)]
    pub is_loading: bool,
}

/// Preset, slider and free-text adjustment panel
///
/// Local state is cleared whenever `is_loading` drops from true to false,
/// so a finished request never leaves a stale prompt behind.
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     AdjustmentPanel {
///         is_loading: loading(),
///         on_apply_adjustment: move |prompt: String| start_edit(prompt),
///     }
/// }
/// ```
#[component]
pub fn AdjustmentPanel(props: AdjustmentPanelProps) -> Element {
    let mut state = use_signal(AdjustmentState::new);
    let mut loading_edge = use_signal(LoadingEdge::new);

    let is_loading = props.is_loading;
    let on_apply_adjustment = props.on_apply_adjustment;

    // Clear everything once the in-flight request completes
    use_effect(use_reactive((&is_loading,), move |(is_loading,)| {
        if loading_edge.write().completed(is_loading) {
            state.write().reset();
        }
    }));

    let active_prompt = use_memo(move || state.read().active_prompt());

    let current = state();
    let can_apply = current.can_apply(is_loading);
    let slider_mode = current.is_slider_mode();

    let on_apply = move |_: ()| {
        state
            .read()
            .apply(is_loading, |prompt| on_apply_adjustment.call(prompt));
    };

    rsx! {
        section { class: "panel adjustment-panel",
            h3 { class: "panel-title", "Apply a Professional Adjustment" }

            div { class: "option-grid cols-4",
                for preset in PRESETS.iter() {
                    {
                        let selected = current.is_preset_selected(preset.prompt);
                        let name = preset.name;
                        let prompt = preset.prompt;
                        rsx! {
                            Button {
                                key: "{name}",
                                variant: ButtonVariant::Option,
                                selected: selected,
                                disabled: is_loading,
                                title: preset.tooltip.to_string(),
                                onclick: move |_| state.write().select_preset(prompt),
                                "{name}"
                            }
                        }
                    }
                }
            }

            div { class: if slider_mode { "slider-group active" } else { "slider-group" },
                for kind in SliderKind::all().iter().copied() {
                    {
                        let id = kind.noun();
                        rsx! {
                            RangeSlider {
                                key: "{id}",
                                id: id.to_string(),
                                label: kind.label().to_string(),
                                value: current.slider(kind),
                                title: kind.tooltip().to_string(),
                                disabled: is_loading,
                                oninput: move |raw: String| match parse_slider_value(&raw) {
                                    Ok(value) => state.write().set_slider(kind, value),
                                    Err(e) => tracing::warn!("Ignoring slider input: {}", e),
                                },
                            }
                        }
                    }
                }
            }

            PromptInput {
                value: current.custom_text().to_string(),
                oninput: move |text: String| state.write().set_custom(text),
                placeholder: CUSTOM_PLACEHOLDER.to_string(),
                title: CUSTOM_TOOLTIP.to_string(),
                active: current.is_custom_mode(),
                disabled: is_loading,
            }

            if active_prompt().is_some() {
                div { class: "apply-row",
                    Button {
                        variant: ButtonVariant::Apply,
                        title: APPLY_TOOLTIP.to_string(),
                        disabled: !can_apply,
                        onclick: on_apply,
                        "Apply Adjustment"
                    }
                }
            }
        }
    }
}
