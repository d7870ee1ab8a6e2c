//! Visual theme for the Retouch desktop shell.

mod styles;

pub use styles::GLOBAL_STYLES;
