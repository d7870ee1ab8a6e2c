//! Adjustment panel state and prompt derivation.
//!
//! The panel offers three mutually exclusive ways to describe an edit: a
//! preset, the brightness/contrast sliders, or free-form text. The last
//! interaction wins and clears the others, which [`Mode`] encodes directly.

use serde::{Deserialize, Serialize};

use crate::error::{PanelError, PanelResult};

/// Lowest value a slider can hold
pub const SLIDER_MIN: i32 = -100;
/// Highest value a slider can hold
pub const SLIDER_MAX: i32 = 100;

const SLIDER_PROMPT_PREFIX: &str = "Photographically adjust the image: ";

/// The manual sliders offered by the adjustment panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SliderKind {
    Brightness,
    Contrast,
}

impl SliderKind {
    /// Lowercase noun used inside composed prompts
    pub fn noun(&self) -> &'static str {
        match self {
            SliderKind::Brightness => "brightness",
            SliderKind::Contrast => "contrast",
        }
    }

    /// Capitalized label shown next to the slider
    pub fn label(&self) -> &'static str {
        match self {
            SliderKind::Brightness => "Brightness",
            SliderKind::Contrast => "Contrast",
        }
    }

    pub fn tooltip(&self) -> &'static str {
        match self {
            SliderKind::Brightness => "Drag to make the image brighter or darker.",
            SliderKind::Contrast => "Drag to adjust the difference between light and dark areas.",
        }
    }

    pub fn all() -> &'static [SliderKind] {
        &[SliderKind::Brightness, SliderKind::Contrast]
    }
}

/// How strongly a slider value should be described.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Magnitude {
    Slightly,
    Moderately,
    Significantly,
}

impl Magnitude {
    /// Classify by absolute value: above 75 is significant, above 35 moderate.
    pub fn classify(value: i32) -> Self {
        let abs = value.unsigned_abs();
        if abs > 75 {
            Magnitude::Significantly
        } else if abs > 35 {
            Magnitude::Moderately
        } else {
            Magnitude::Slightly
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Magnitude::Slightly => "slightly",
            Magnitude::Moderately => "moderately",
            Magnitude::Significantly => "significantly",
        }
    }
}

/// Direction of a non-zero slider value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Increase,
    Decrease,
}

impl Direction {
    /// Positive values increase, everything else decreases.
    pub fn of(value: i32) -> Self {
        if value > 0 {
            Direction::Increase
        } else {
            Direction::Decrease
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Increase => "increase",
            Direction::Decrease => "decrease",
        }
    }
}

/// Describe a single slider as "<magnitude> <direction> <noun>".
fn describe(kind: SliderKind, value: i32) -> String {
    format!(
        "{} {} {}",
        Magnitude::classify(value).as_str(),
        Direction::of(value).as_str(),
        kind.noun()
    )
}

/// Compose the prompt for a pair of slider values.
///
/// Returns `None` when both sliders sit at zero.
///
/// ```
/// use retouch_core::compose_slider_prompt;
///
/// assert_eq!(
///     compose_slider_prompt(0, 40).as_deref(),
///     Some("Photographically adjust the image: moderately increase contrast."),
/// );
/// assert_eq!(compose_slider_prompt(0, 0), None);
/// ```
pub fn compose_slider_prompt(brightness: i32, contrast: i32) -> Option<String> {
    let clauses: Vec<String> = [
        (SliderKind::Brightness, brightness),
        (SliderKind::Contrast, contrast),
    ]
    .into_iter()
    .filter(|(_, value)| *value != 0)
    .map(|(kind, value)| describe(kind, value))
    .collect();

    if clauses.is_empty() {
        return None;
    }

    Some(format!("{}{}.", SLIDER_PROMPT_PREFIX, clauses.join(" and ")))
}

/// Parse the raw value delivered by a range input.
///
/// Out-of-range integers are clamped into `SLIDER_MIN..=SLIDER_MAX`.
pub fn parse_slider_value(raw: &str) -> PanelResult<i32> {
    raw.trim()
        .parse::<i32>()
        .map(clamp_slider)
        .map_err(|_| PanelError::InvalidSliderValue(raw.to_string()))
}

fn clamp_slider(value: i32) -> i32 {
    value.clamp(SLIDER_MIN, SLIDER_MAX)
}

/// Which input currently drives the adjustment.
///
/// Fields belonging to inactive inputs do not exist, so a preset can never
/// coexist with slider values or custom text.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Mode {
    /// Nothing selected yet (shown as preset mode with no preset chosen)
    #[default]
    None,
    /// A preset was clicked; holds its prompt
    Preset(String),
    /// Sliders were dragged
    Slider { brightness: i32, contrast: i32 },
    /// Free-form text was typed; holds the raw text
    Custom(String),
}

impl Mode {
    /// Short name for logging
    pub fn name(&self) -> &'static str {
        match self {
            Mode::None => "none",
            Mode::Preset(_) => "preset",
            Mode::Slider { .. } => "slider",
            Mode::Custom(_) => "custom",
        }
    }
}

/// Local state of the adjustment panel.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AdjustmentState {
    mode: Mode,
}

impl AdjustmentState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(&self) -> &Mode {
        &self.mode
    }

    /// Select a preset, clearing custom text and both sliders.
    pub fn select_preset(&mut self, prompt: impl Into<String>) {
        self.mode = Mode::Preset(prompt.into());
        tracing::debug!(mode = self.mode.name(), "Preset selected");
    }

    /// Store custom text as typed, clearing the preset and both sliders.
    pub fn set_custom(&mut self, text: impl Into<String>) {
        self.mode = Mode::Custom(text.into());
        tracing::trace!(mode = self.mode.name(), "Custom text edited");
    }

    /// Move one slider, clearing the preset and custom text.
    ///
    /// The other slider keeps its value while already in slider mode and
    /// starts from zero otherwise.
    pub fn set_slider(&mut self, kind: SliderKind, value: i32) {
        let value = clamp_slider(value);
        let (mut brightness, mut contrast) = match self.mode {
            Mode::Slider {
                brightness,
                contrast,
            } => (brightness, contrast),
            _ => (0, 0),
        };

        match kind {
            SliderKind::Brightness => brightness = value,
            SliderKind::Contrast => contrast = value,
        }

        self.mode = Mode::Slider {
            brightness,
            contrast,
        };
        tracing::trace!(brightness, contrast, "Slider moved");
    }

    /// Return to the default state.
    pub fn reset(&mut self) {
        if self.mode != Mode::None {
            tracing::debug!(previous = self.mode.name(), "Adjustment state reset");
        }
        self.mode = Mode::None;
    }

    pub fn brightness(&self) -> i32 {
        self.slider(SliderKind::Brightness)
    }

    pub fn contrast(&self) -> i32 {
        self.slider(SliderKind::Contrast)
    }

    /// Current value of a slider (zero outside slider mode)
    pub fn slider(&self, kind: SliderKind) -> i32 {
        match (&self.mode, kind) {
            (Mode::Slider { brightness, .. }, SliderKind::Brightness) => *brightness,
            (Mode::Slider { contrast, .. }, SliderKind::Contrast) => *contrast,
            _ => 0,
        }
    }

    /// Custom text (empty outside custom mode)
    pub fn custom_text(&self) -> &str {
        match &self.mode {
            Mode::Custom(text) => text,
            _ => "",
        }
    }

    /// Prompt of the selected preset, if any
    pub fn selected_preset(&self) -> Option<&str> {
        match &self.mode {
            Mode::Preset(prompt) => Some(prompt),
            _ => None,
        }
    }

    /// Whether the preset with this prompt is the active selection
    pub fn is_preset_selected(&self, prompt: &str) -> bool {
        self.selected_preset() == Some(prompt)
    }

    pub fn is_slider_mode(&self) -> bool {
        matches!(self.mode, Mode::Slider { .. })
    }

    pub fn is_custom_mode(&self) -> bool {
        matches!(self.mode, Mode::Custom(_))
    }

    /// Derive the prompt for the current selection.
    ///
    /// Custom text is returned exactly as typed; empty text yields `None`.
    pub fn active_prompt(&self) -> Option<String> {
        match &self.mode {
            Mode::None => None,
            Mode::Preset(prompt) => Some(prompt.clone()),
            Mode::Custom(text) if text.is_empty() => None,
            Mode::Custom(text) => Some(text.clone()),
            Mode::Slider {
                brightness,
                contrast,
            } => compose_slider_prompt(*brightness, *contrast),
        }
    }

    /// Active prompt, provided it contains more than whitespace.
    pub fn actionable_prompt(&self) -> PanelResult<String> {
        self.active_prompt()
            .filter(|prompt| !prompt.trim().is_empty())
            .ok_or(PanelError::NothingToApply)
    }

    /// Whether the apply action is enabled.
    pub fn can_apply(&self, is_loading: bool) -> bool {
        !is_loading && self.actionable_prompt().is_ok()
    }

    /// Hand the derived prompt to `on_apply` when applying is allowed.
    ///
    /// Returns whether the callback fired.
    pub fn apply(&self, is_loading: bool, on_apply: impl FnOnce(String)) -> bool {
        if is_loading {
            tracing::debug!("Apply ignored while a request is in flight");
            return false;
        }

        match self.actionable_prompt() {
            Ok(prompt) => {
                tracing::info!(mode = self.mode.name(), %prompt, "Applying adjustment");
                on_apply(prompt);
                true
            }
            Err(_) => false,
        }
    }
}
