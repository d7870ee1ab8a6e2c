//! Property-based tests for adjustment prompt derivation
//!
//! Uses proptest to verify the mode exclusivity and derivation rules of
//! AdjustmentState.

use proptest::prelude::*;
use retouch_core::{
    compose_slider_prompt, AdjustmentState, LoadingEdge, Mode, SliderKind, PRESETS, SLIDER_MAX,
    SLIDER_MIN,
};

// ============================================================================
// Strategy Generators
// ============================================================================

/// Non-empty custom prompt text
fn custom_text_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex(".{1,200}").expect("valid regex")
}

fn slider_value_strategy() -> impl Strategy<Value = i32> {
    SLIDER_MIN..=SLIDER_MAX
}

fn slider_kind_strategy() -> impl Strategy<Value = SliderKind> {
    prop_oneof![Just(SliderKind::Brightness), Just(SliderKind::Contrast)]
}

/// User interactions with the adjustment panel
#[derive(Debug, Clone)]
enum PanelOp {
    Preset(usize),
    Custom(String),
    Slider(SliderKind, i32),
}

fn panel_ops_strategy(max_ops: usize) -> impl Strategy<Value = Vec<PanelOp>> {
    prop::collection::vec(
        prop_oneof![
            (0..PRESETS.len()).prop_map(PanelOp::Preset),
            custom_text_strategy().prop_map(PanelOp::Custom),
            (slider_kind_strategy(), slider_value_strategy())
                .prop_map(|(kind, value)| PanelOp::Slider(kind, value)),
        ],
        1..max_ops,
    )
}

fn apply_op(state: &mut AdjustmentState, op: &PanelOp) {
    match op {
        PanelOp::Preset(i) => state.select_preset(PRESETS[*i].prompt),
        PanelOp::Custom(text) => state.set_custom(text.clone()),
        PanelOp::Slider(kind, value) => state.set_slider(*kind, *value),
    }
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// Selecting any preset yields exactly its prompt
    #[test]
    fn preset_prompt_roundtrip(i in 0..PRESETS.len(), ops in panel_ops_strategy(8)) {
        let mut state = AdjustmentState::new();
        for op in &ops {
            apply_op(&mut state, op);
        }
        state.select_preset(PRESETS[i].prompt);
        prop_assert_eq!(state.active_prompt(), Some(PRESETS[i].prompt.to_string()));
    }

    /// Typing any non-empty text yields exactly that text
    #[test]
    fn custom_text_roundtrip(text in custom_text_strategy()) {
        let mut state = AdjustmentState::new();
        state.set_custom(text.clone());
        prop_assert_eq!(state.active_prompt(), Some(text));
    }

    /// The last interaction decides the mode and leaves no other field set
    #[test]
    fn last_interaction_wins(ops in panel_ops_strategy(20)) {
        let mut state = AdjustmentState::new();
        for op in &ops {
            apply_op(&mut state, op);
        }

        match ops.last().unwrap() {
            PanelOp::Preset(i) => {
                prop_assert!(state.is_preset_selected(PRESETS[*i].prompt));
                prop_assert_eq!(state.brightness(), 0);
                prop_assert_eq!(state.contrast(), 0);
                prop_assert_eq!(state.custom_text(), "");
            }
            PanelOp::Custom(text) => {
                prop_assert_eq!(state.custom_text(), text.as_str());
                prop_assert_eq!(state.selected_preset(), None);
                prop_assert_eq!(state.brightness(), 0);
                prop_assert_eq!(state.contrast(), 0);
            }
            PanelOp::Slider(kind, value) => {
                prop_assert!(state.is_slider_mode());
                prop_assert_eq!(state.slider(*kind), *value);
                prop_assert_eq!(state.selected_preset(), None);
                prop_assert_eq!(state.custom_text(), "");
            }
        }
    }

    /// Slider prompts exist exactly when a slider is off zero
    #[test]
    fn slider_prompt_presence(b in slider_value_strategy(), c in slider_value_strategy()) {
        let prompt = compose_slider_prompt(b, c);
        prop_assert_eq!(prompt.is_some(), b != 0 || c != 0);

        if let Some(prompt) = prompt {
            prop_assert!(prompt.starts_with("Photographically adjust the image: "));
            prop_assert!(prompt.ends_with('.'));
            prop_assert_eq!(prompt.contains("brightness"), b != 0);
            prop_assert_eq!(prompt.contains("contrast"), c != 0);
            prop_assert_eq!(prompt.contains(" and "), b != 0 && c != 0);
        }
    }

    /// A completed request always returns the panel to its defaults
    #[test]
    fn completion_resets_state(ops in panel_ops_strategy(10)) {
        let mut state = AdjustmentState::new();
        let mut edge = LoadingEdge::new();

        for op in &ops {
            apply_op(&mut state, op);
        }
        edge.observe(true);
        if edge.completed(false) {
            state.reset();
        }

        prop_assert_eq!(state.mode(), &Mode::None);
        prop_assert_eq!(state, AdjustmentState::default());
    }
}
