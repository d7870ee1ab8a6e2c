//! Retouch Core Library
//!
//! Framework-independent logic behind the photo-editing side panels.
//!
//! ## Overview
//!
//! The panels never touch pixels. They turn user interaction into a
//! natural-language *adjustment prompt* and hand it to a host callback,
//! which forwards it to an AI image-editing service.
//!
//! - [`options`]: the fixed preset and enhancement catalogs
//! - [`adjustment`]: the adjustment panel state and prompt derivation
//! - [`enhance`]: one-click enhancement triggering
//! - [`loading`]: falling-edge detection on the host's loading flag
//!
//! ## Quick Start
//!
//! ```
//! use retouch_core::{AdjustmentState, SliderKind};
//!
//! let mut state = AdjustmentState::new();
//! state.set_slider(SliderKind::Brightness, 80);
//! state.set_slider(SliderKind::Contrast, -10);
//!
//! assert_eq!(
//!     state.active_prompt().as_deref(),
//!     Some("Photographically adjust the image: significantly increase brightness and slightly decrease contrast."),
//! );
//! ```

pub mod adjustment;
pub mod enhance;
pub mod error;
pub mod loading;
pub mod options;

// Re-exports
pub use adjustment::{
    compose_slider_prompt, parse_slider_value, AdjustmentState, Direction, Magnitude, Mode,
    SliderKind, SLIDER_MAX, SLIDER_MIN,
};
pub use enhance::{trigger_enhancement, EnhancementRequest};
pub use error::{PanelError, PanelResult};
pub use loading::{LoadingEdge, LoadingTransition};
pub use options::{find_enhancement, find_preset, EditOption, ENHANCEMENTS, PRESETS};
