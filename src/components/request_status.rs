//! Request Status Indicator
//!
//! Shows whether an edit request is in flight and which panel sent it.

use dioxus::prelude::*;

use crate::context::AppliedEdit;

/// Status line text for the pending edit, if any.
pub fn status_label(pending: Option<&AppliedEdit>) -> String {
    match pending {
        Some(edit) => format!("applying {}...", edit.source.label().to_lowercase()),
        None => "ready".to_string(),
    }
}

#[component]
pub fn RequestStatus(pending: Option<AppliedEdit>) -> Element {
    let label = status_label(pending.as_ref());
    let busy = pending.is_some();

    rsx! {
        div { class: "request-status",
            span {
                class: if busy { "status-dot busy" } else { "status-dot" },
                role: "img",
                "aria-label": if busy { "Busy" } else { "Idle" },
            }
            span { class: "status-label", "{label}" }
        }
    }
}
