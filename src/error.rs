//! Error types for badge rendering and composition

use thiserror::Error;

/// Errors that can occur while rendering badges or composing a document
#[derive(Debug, Error, PartialEq)]
pub enum ComposeError {
    /// A sponsor record is missing a required field
    #[error("invalid sponsor '{login}': {reason}")]
    InvalidSponsor { login: String, reason: String },

    /// The preset leaves no room for a single badge per row
    #[error(
        "degenerate layout: box width {box_width} does not fit in width {width} with side padding {side_padding}"
    )]
    DegenerateLayout {
        width: f64,
        side_padding: f64,
        box_width: f64,
    },

    /// Preset dimensions that cannot be laid out
    #[error("invalid preset: {reason}")]
    InvalidPreset { reason: String },
}

impl ComposeError {
    /// Create an invalid sponsor error
    pub fn invalid_sponsor(login: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidSponsor {
            login: login.into(),
            reason: reason.into(),
        }
    }

    /// Create a degenerate layout error
    pub fn degenerate(width: f64, side_padding: f64, box_width: f64) -> Self {
        Self::DegenerateLayout {
            width,
            side_padding,
            box_width,
        }
    }

    /// Create an invalid preset error
    pub fn invalid_preset(reason: impl Into<String>) -> Self {
        Self::InvalidPreset {
            reason: reason.into(),
        }
    }
}
