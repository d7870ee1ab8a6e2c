//! Fixed edit option catalogs.
//!
//! Presets feed the adjustment panel, enhancements feed the enhancement
//! panel. Both lists are hardcoded and names are unique within a list.

use serde::Serialize;

use crate::error::{PanelError, PanelResult};

/// A one-click edit offered to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EditOption {
    /// Display label, unique within its catalog
    pub name: &'static str,
    /// Instruction text sent upstream
    pub prompt: &'static str,
    /// Help text shown on hover
    pub tooltip: &'static str,
}

/// Preset adjustments shown as a button grid in the adjustment panel.
pub static PRESETS: [EditOption; 4] = [
    EditOption {
        name: "Blur Background",
        prompt: "Apply a realistic depth-of-field effect, making the background blurry while keeping the main subject in sharp focus.",
        tooltip: "Applies a 'bokeh' effect, making the background blurry to focus on the main subject.",
    },
    EditOption {
        name: "Enhance Details",
        prompt: "Slightly enhance the sharpness and details of the image without making it look unnatural.",
        tooltip: "Subtly sharpens the image to bring out fine details and textures.",
    },
    EditOption {
        name: "Warmer Lighting",
        prompt: "Adjust the color temperature to give the image warmer, golden-hour style lighting.",
        tooltip: "Adjusts the color balance to give the image a warm, 'golden hour' feel.",
    },
    EditOption {
        name: "Studio Light",
        prompt: "Add dramatic, professional studio lighting to the main subject.",
        tooltip: "Adds dramatic lighting to the main subject, mimicking a professional studio setup.",
    },
];

/// Whole-image enhancements applied immediately on click.
pub static ENHANCEMENTS: [EditOption; 3] = [
    EditOption {
        name: "Auto Enhance",
        prompt: "Automatically enhance the image by improving brightness, contrast, and color balance for a clear and vibrant look.",
        tooltip: "Improve lighting, color, and contrast automatically.",
    },
    EditOption {
        name: "Upscale",
        prompt: "Upscale the image to a higher resolution, intelligently adding detail and clarity without introducing artifacts.",
        tooltip: "Increase image resolution and sharpness using AI.",
    },
    EditOption {
        name: "Remove Background",
        prompt: "Perfectly remove the background, leaving only the main subject against a transparent backdrop.",
        tooltip: "Isolate the main subject by removing the background.",
    },
];

/// Look up a preset by display name (case-insensitive).
pub fn find_preset(name: &str) -> PanelResult<&'static EditOption> {
    lookup(&PRESETS, name).ok_or_else(|| PanelError::UnknownPreset(name.to_string()))
}

/// Look up an enhancement by display name (case-insensitive).
pub fn find_enhancement(name: &str) -> PanelResult<&'static EditOption> {
    lookup(&ENHANCEMENTS, name).ok_or_else(|| PanelError::UnknownEnhancement(name.to_string()))
}

fn lookup(catalog: &'static [EditOption], name: &str) -> Option<&'static EditOption> {
    let name = name.trim();
    catalog.iter().find(|opt| opt.name.eq_ignore_ascii_case(name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn catalog_sizes() {
        assert_eq!(PRESETS.len(), 4);
        assert_eq!(ENHANCEMENTS.len(), 3);
    }

    #[test]
    fn names_are_unique() {
        let presets: HashSet<_> = PRESETS.iter().map(|p| p.name).collect();
        let enhancements: HashSet<_> = ENHANCEMENTS.iter().map(|e| e.name).collect();
        assert_eq!(presets.len(), PRESETS.len());
        assert_eq!(enhancements.len(), ENHANCEMENTS.len());
    }

    #[test]
    fn enhancement_order_matches_buttons() {
        let names: Vec<_> = ENHANCEMENTS.iter().map(|e| e.name).collect();
        assert_eq!(names, ["Auto Enhance", "Upscale", "Remove Background"]);
    }

    #[test]
    fn find_preset_ignores_case() {
        let preset = find_preset("studio light").unwrap();
        assert_eq!(preset.name, "Studio Light");
    }

    #[test]
    fn find_unknown_preset_fails() {
        assert_eq!(
            find_preset("Sepia"),
            Err(PanelError::UnknownPreset("Sepia".to_string()))
        );
    }

    #[test]
    fn find_enhancement_by_name() {
        let upscale = find_enhancement("Upscale").unwrap();
        assert!(upscale.prompt.starts_with("Upscale the image"));
        assert!(find_enhancement("Blur Background").is_err());
    }

    #[test]
    fn catalog_serializes_to_json() {
        let json = serde_json::to_value(&ENHANCEMENTS[1]).unwrap();
        assert_eq!(json["name"], "Upscale");
        assert_eq!(json["tooltip"], "Increase image resolution and sharpness using AI.");
    }
}
