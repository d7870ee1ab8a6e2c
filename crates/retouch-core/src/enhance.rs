//! One-click enhancements.
//!
//! Enhancements carry no state: a click forwards the option's fixed prompt
//! and name to the host, unless a request is already in flight.

use serde::{Deserialize, Serialize};

use crate::options::EditOption;

/// What the enhancement panel hands to the host on click.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnhancementRequest {
    /// Instruction text for the editing service
    pub prompt: String,
    /// Display name of the clicked enhancement
    pub name: String,
}

impl From<&EditOption> for EnhancementRequest {
    fn from(option: &EditOption) -> Self {
        Self {
            prompt: option.prompt.to_string(),
            name: option.name.to_string(),
        }
    }
}

/// Forward `option` to `on_apply` unless loading.
///
/// Returns whether the callback fired.
pub fn trigger_enhancement(
    option: &EditOption,
    is_loading: bool,
    on_apply: impl FnOnce(EnhancementRequest),
) -> bool {
    if is_loading {
        tracing::debug!(name = option.name, "Enhancement ignored while loading");
        return false;
    }

    tracing::info!(name = option.name, "Applying enhancement");
    on_apply(EnhancementRequest::from(option));
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::{find_enhancement, ENHANCEMENTS};

    #[test]
    fn upscale_fires_once_with_fixed_prompt() {
        let upscale = find_enhancement("Upscale").unwrap();
        let mut calls = Vec::new();

        assert!(trigger_enhancement(upscale, false, |req| calls.push(req)));

        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].name, "Upscale");
        assert_eq!(calls[0].prompt, ENHANCEMENTS[1].prompt);
    }

    #[test]
    fn loading_blocks_the_callback() {
        let mut calls = 0;
        for option in ENHANCEMENTS.iter() {
            assert!(!trigger_enhancement(option, true, |_| calls += 1));
        }
        assert_eq!(calls, 0);
    }

    #[test]
    fn request_serializes_with_both_fields() {
        let req = EnhancementRequest::from(&ENHANCEMENTS[2]);
        let json = serde_json::to_string(&req).unwrap();
        assert!(json.contains("\"name\":\"Remove Background\""));
        assert!(json.contains("\"prompt\":\"Perfectly remove the background"));
    }
}
