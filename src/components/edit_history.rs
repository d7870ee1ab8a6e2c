//! Session history of applied edits, newest first.

use dioxus::prelude::*;

use crate::context::use_edit_history;

#[component]
pub fn EditHistory() -> Element {
    let history = use_edit_history();
    let entries: Vec<_> = history.read().iter().rev().cloned().collect();

    if entries.is_empty() {
        return rsx! {
            p { class: "history-empty", "No edits applied yet." }
        };
    }

    rsx! {
        section { class: "panel edit-history",
            h3 { class: "panel-title", "Applied Edits" }
            ul { class: "history-list",
                for (i, edit) in entries.into_iter().enumerate() {
                    {
                        let time = edit.time_label();
                        let source = edit.source.label().to_string();
                        let prompt = edit.prompt;
                        rsx! {
                            li { key: "{i}", class: "history-item",
                                span { class: "history-time", "{time}" }
                                span { class: "history-source", "{source}" }
                                span { class: "history-prompt", "{prompt}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
