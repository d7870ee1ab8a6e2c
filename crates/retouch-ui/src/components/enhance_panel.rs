//! Enhancement Panel
//!
//! Three one-click enhancements. Nothing is retained between clicks.

use dioxus::prelude::*;
use retouch_core::{trigger_enhancement, EnhancementRequest, ENHANCEMENTS};

use super::{Button, ButtonVariant};

/// Properties for the EnhancePanel component
#[derive(Clone, PartialEq, Props)]
pub struct EnhancePanelProps {
    /// Receives the fixed prompt and name of the clicked enhancement
    pub on_apply_enhancement: EventHandler<EnhancementRequest>,
    /// Host-owned flag, true while an edit request is in flight
    #[props(default = false)]
    pub is_loading: bool,
}

#[component]
pub fn EnhancePanel(props: EnhancePanelProps) -> Element {
    let is_loading = props.is_loading;
    let on_apply_enhancement = props.on_apply_enhancement;

    rsx! {
        section { class: "panel enhance-panel",
            h3 { class: "panel-title", "Image Enhancements" }
            p { class: "panel-subtitle", "Apply powerful one-click AI enhancements." }

            div { class: "option-grid cols-3",
                for option in ENHANCEMENTS.iter() {
                    {
                        let name = option.name;
                        rsx! {
                            Button {
                                key: "{name}",
                                variant: ButtonVariant::Option,
                                disabled: is_loading,
                                title: option.tooltip.to_string(),
                                onclick: move |_| {
                                    trigger_enhancement(option, is_loading, |request| {
                                        on_apply_enhancement.call(request)
                                    });
                                },
                                "{name}"
                            }
                        }
                    }
                }
            }
        }
    }
}
