//! Turning measurements into pagination decisions.

use crate::{
    config::PaginationConfig,
    font::FontSpec,
    measure::Measurer,
    units::Px,
    MeasurementError,
};

/// The verdict for a candidate line of a frame body
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Fit {
    /// The candidate fits in the current frame as-is
    Fits,
    /// The candidate is too wide even with wrapping; the newest word has to move
    /// onto a new line of the same frame
    NeedsLineBreak,
    /// The candidate is too tall for the frame; the newest word has to start a
    /// new frame
    NeedsNewFrame,
}

/// The room a frame body has to grow into
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct ContentBounds {
    /// The width text is wrapped at
    pub width: Px,
    /// The tallest a body may measure and still fit
    pub height_budget: Px,
}

impl From<&PaginationConfig> for ContentBounds {
    fn from(config: &PaginationConfig) -> Self {
        ContentBounds {
            width: config.content_width(),
            height_budget: config.height_budget(),
        }
    }
}

/// Classify a candidate frame body.
///
/// Width is checked before height: a candidate that is merely too wide can be
/// repaired in place with a line break, while one that is too tall can't be
/// repaired without a new frame. A measured width exactly equal to the bounds
/// already needs a line break.
pub fn classify<M: Measurer + ?Sized>(
    measurer: &M,
    candidate: &str,
    bounds: ContentBounds,
    font: &FontSpec,
) -> Result<Fit, MeasurementError> {
    let extent = measurer.measure(candidate, bounds.width, font)?;

    let fit = if extent.width >= bounds.width {
        Fit::NeedsLineBreak
    } else if extent.height > bounds.height_budget {
        Fit::NeedsNewFrame
    } else {
        Fit::Fits
    };

    tracing::trace!(?fit, ?extent, len = candidate.len(), "classified candidate");
    Ok(fit)
}
