use crate::units::{Pt, Px};
use thiserror::Error;

/// All errors that the crate can generate
#[derive(Error, Debug)]
pub enum Error {
    #[error("invalid pagination config: {0}")]
    /// The pagination config violates one of its construction rules
    InvalidConfig(#[from] ConfigError),

    #[error(transparent)]
    /// The measurement oracle failed; pagination is aborted as a whole
    Measurement(#[from] MeasurementError),

    #[error(transparent)]
    /// An I/O error occurred
    Io(#[from] std::io::Error),

    #[error(transparent)]
    /// [owned_ttf_parser] failed to parse the font
    FaceParsing(#[from] owned_ttf_parser::FaceParsingError),

    #[error("font has no glyph for {0:?}, nor a replacement glyph")]
    /// A renderer could not draw a character, not even with a fallback glyph
    MissingGlyph(char),

    #[error("font family {0:?} is not loaded")]
    /// A renderer was asked to draw with a family it does not know
    UnknownFontFamily(String),
}

/// Reasons a [PaginationConfig](crate::PaginationConfig) can be rejected
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("image width must be positive")]
    ZeroImageWidth,

    #[error("margins ({margin} on each side) leave no room in a {image_width} wide image")]
    MarginTooLarge { image_width: Px, margin: Px },

    #[error("font size must be a positive number, got {0}")]
    InvalidFontSize(Pt),

    #[error("body height ratio must be within (0, 1], got {0}")]
    InvalidBodyHeightRatio(f32),
}

/// Failures reported by a [Measurer](crate::Measurer)
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MeasurementError {
    #[error("unknown font family {0:?}")]
    UnknownFontFamily(String),

    #[error("measurement backend failed: {0}")]
    Backend(String),
}
