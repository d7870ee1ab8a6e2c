//! Host context for Retouch.
//!
//! Holds the host-side settings and the record of applied edits shared by
//! the app shell components.

use std::time::Duration;

use chrono::{DateTime, Local};
use dioxus::prelude::*;
use retouch_core::EnhancementRequest;

/// Host settings taken from the command line.
#[derive(Clone, Debug, PartialEq)]
pub struct HostConfig {
    /// How long a simulated edit request stays in flight
    pub request_latency: Duration,
}

impl Default for HostConfig {
    fn default() -> Self {
        Self {
            request_latency: Duration::from_millis(1500),
        }
    }
}

/// Get the host settings for the application.
pub fn get_host_config() -> HostConfig {
    crate::get_host_config()
}

/// Which panel produced an edit.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EditSource {
    Adjustment,
    /// Enhancement, with its display name
    Enhancement(String),
}

impl EditSource {
    pub fn label(&self) -> &str {
        match self {
            EditSource::Adjustment => "Adjustment",
            EditSource::Enhancement(name) => name,
        }
    }
}

/// An edit handed to the (simulated) editing service.
#[derive(Clone, Debug, PartialEq)]
pub struct AppliedEdit {
    pub source: EditSource,
    pub prompt: String,
    pub requested_at: DateTime<Local>,
}

impl AppliedEdit {
    pub fn adjustment(prompt: String) -> Self {
        Self {
            source: EditSource::Adjustment,
            prompt,
            requested_at: Local::now(),
        }
    }

    pub fn enhancement(request: EnhancementRequest) -> Self {
        Self {
            source: EditSource::Enhancement(request.name),
            prompt: request.prompt,
            requested_at: Local::now(),
        }
    }

    /// Wall-clock time of the request, e.g. "14:03:27"
    pub fn time_label(&self) -> String {
        self.requested_at.format("%H:%M:%S").to_string()
    }
}

/// Hook to access the session's applied edits from context.
pub fn use_edit_history() -> Signal<Vec<AppliedEdit>> {
    use_context::<Signal<Vec<AppliedEdit>>>()
}
