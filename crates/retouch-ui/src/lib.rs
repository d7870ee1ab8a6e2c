//! Retouch UI Components
//!
//! Dioxus side panels for an AI photo editor. The panels only describe the
//! edit; the host decides what to do with the resulting prompt.
//!
//! - [`AdjustmentPanel`]: presets, brightness/contrast sliders and free-form
//!   text, confirmed with an apply button
//! - [`EnhancePanel`]: one-click whole-image enhancements
//!
//! Both take an `is_loading` flag owned by the host. While it is set every
//! control is disabled; when it drops the adjustment panel clears itself.

pub mod components;

pub use components::*;
