use crate::{font::FontSpec, units::Px, ConfigError};

/// The share of a frame's content width that the body may grow to vertically
/// before a new frame is started. What remains below is room for the byline.
pub const DEFAULT_BODY_HEIGHT_RATIO: f32 = 0.7;

/// Settings shared by every frame of a series. Construction validates the
/// geometry, so every `PaginationConfig` has a positive content width.
///
/// ```
/// use carousel_gen::{FontSpec, PaginationConfig, Px};
///
/// let config = PaginationConfig::new(Px(1080), Px(90), FontSpec::new("Crimson Pro", 36.0))
///     .expect("valid config")
///     .with_middle_byline("swipe for more →")
///     .with_end_byline("@hamaluik");
///
/// assert_eq!(config.content_width(), Px(900));
/// assert_eq!(config.height_budget(), Px(630));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct PaginationConfig {
    image_width: Px,
    margin: Px,
    font: FontSpec,
    middle_byline: String,
    end_byline: String,
    body_height_ratio: f32,
}

impl PaginationConfig {
    /// Create a config for square frames `image_width` pixels wide, with `margin`
    /// pixels of space on each side of the text. Bylines start out empty.
    pub fn new(image_width: Px, margin: Px, font: FontSpec) -> Result<PaginationConfig, ConfigError> {
        if image_width == Px(0) {
            return Err(ConfigError::ZeroImageWidth);
        }
        if margin.0.saturating_mul(2) >= image_width.0 {
            return Err(ConfigError::MarginTooLarge {
                image_width,
                margin,
            });
        }
        if !font.size.0.is_finite() || font.size.0 <= 0.0 {
            return Err(ConfigError::InvalidFontSize(font.size));
        }

        Ok(PaginationConfig {
            image_width,
            margin,
            font,
            middle_byline: String::new(),
            end_byline: String::new(),
            body_height_ratio: DEFAULT_BODY_HEIGHT_RATIO,
        })
    }

    /// Set the byline shown on every frame but the last
    pub fn with_middle_byline<S: Into<String>>(mut self, byline: S) -> Self {
        self.middle_byline = byline.into();
        self
    }

    /// Set the byline shown on the last frame only
    pub fn with_end_byline<S: Into<String>>(mut self, byline: S) -> Self {
        self.end_byline = byline.into();
        self
    }

    /// Change how tall, as a share of the content width, a frame body may get
    pub fn with_body_height_ratio(mut self, ratio: f32) -> Result<Self, ConfigError> {
        if !(ratio > 0.0 && ratio <= 1.0) {
            return Err(ConfigError::InvalidBodyHeightRatio(ratio));
        }
        self.body_height_ratio = ratio;
        Ok(self)
    }

    pub fn image_width(&self) -> Px {
        self.image_width
    }

    pub fn margin(&self) -> Px {
        self.margin
    }

    pub fn font(&self) -> &FontSpec {
        &self.font
    }

    pub fn middle_byline(&self) -> &str {
        &self.middle_byline
    }

    pub fn end_byline(&self) -> &str {
        &self.end_byline
    }

    pub fn body_height_ratio(&self) -> f32 {
        self.body_height_ratio
    }

    /// Horizontal room for text once both margins are taken off
    pub fn content_width(&self) -> Px {
        self.image_width - Px(2 * self.margin.0)
    }

    /// How tall a frame body may measure before it no longer fits
    pub fn height_budget(&self) -> Px {
        self.content_width().scale_floor(self.body_height_ratio)
    }
}
