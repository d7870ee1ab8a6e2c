//! Panel components and the controls they are built from.

mod adjustment_panel;
mod button;
mod enhance_panel;
mod input;
mod slider;

pub use adjustment_panel::*;
pub use button::*;
pub use enhance_panel::*;
pub use input::*;
pub use slider::*;
