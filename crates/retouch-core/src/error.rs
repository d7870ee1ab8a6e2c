//! Error types for Retouch

use thiserror::Error;

/// Errors raised by the fallible catalog and input helpers.
///
/// The panels themselves never fail: a missing prompt only disables the
/// apply action. These variants surface where text from outside the panel
/// (command line arguments, raw input events) has to be interpreted.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PanelError {
    /// No preset carries this display name
    #[error("Unknown preset: {0}")]
    UnknownPreset(String),

    /// No enhancement carries this display name
    #[error("Unknown enhancement: {0}")]
    UnknownEnhancement(String),

    /// Range input delivered a value that is not an integer
    #[error("Invalid slider value: {0:?}")]
    InvalidSliderValue(String),

    /// The current selection does not produce an actionable prompt
    #[error("Nothing to apply")]
    NothingToApply,
}

/// Result type alias using PanelError
pub type PanelResult<T> = Result<T, PanelError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = PanelError::UnknownPreset("Sepia".to_string());
        assert_eq!(format!("{}", err), "Unknown preset: Sepia");
    }

    #[test]
    fn test_invalid_slider_value_is_quoted() {
        let err = PanelError::InvalidSliderValue("abc".to_string());
        assert_eq!(err.to_string(), "Invalid slider value: \"abc\"");
    }
}
