use dioxus::prelude::*;
use retouch_core::EnhancementRequest;
use retouch_ui::{AdjustmentPanel, EnhancePanel};

use crate::components::{EditHistory, RequestStatus};
use crate::context::{get_host_config, AppliedEdit};
use crate::theme::GLOBAL_STYLES;

/// Root application component.
///
/// Owns the loading flag and stands in for the editing service: an applied
/// prompt keeps `is_loading` raised for the configured latency, then lands
/// in the session history.
#[component]
pub fn App() -> Element {
    let mut is_loading: Signal<bool> = use_signal(|| false);
    let mut history: Signal<Vec<AppliedEdit>> = use_signal(Vec::new);
    let mut pending: Signal<Option<AppliedEdit>> = use_signal(|| None);

    use_context_provider(|| history);

    let latency = get_host_config().request_latency;

    let mut start_edit = move |edit: AppliedEdit| {
        if is_loading() {
            tracing::warn!("Edit request already in flight, ignoring {}", edit.source.label());
            return;
        }

        tracing::info!(source = edit.source.label(), prompt = %edit.prompt, "Edit requested");
        is_loading.set(true);
        pending.set(Some(edit.clone()));

        spawn(async move {
            tokio::time::sleep(latency).await;
            tracing::info!(source = edit.source.label(), "Edit completed");
            history.write().push(edit);
            pending.set(None);
            is_loading.set(false);
        });
    };

    rsx! {
        style { {GLOBAL_STYLES} }
        main { class: "editor",
            header { class: "editor-header",
                h1 { class: "page-title", "Retouch" }
                RequestStatus { pending: pending() }
            }

            EnhancePanel {
                is_loading: is_loading(),
                on_apply_enhancement: move |request: EnhancementRequest| {
                    start_edit(AppliedEdit::enhancement(request))
                },
            }

            AdjustmentPanel {
                is_loading: is_loading(),
                on_apply_adjustment: move |prompt: String| start_edit(AppliedEdit::adjustment(prompt)),
            }

            EditHistory {}
        }
    }
}
