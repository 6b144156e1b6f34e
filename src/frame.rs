use crate::{config::PaginationConfig, font::FontSpec, layout, units::Px};

/// Size and margins of a square frame
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct FrameGeometry {
    /// Width, and height, of the frame
    pub image_width: Px,
    /// Space left free on each side of the text
    pub margin: Px,
    /// `image_width - 2 * margin`
    pub content_width: Px,
}

impl From<&PaginationConfig> for FrameGeometry {
    fn from(config: &PaginationConfig) -> Self {
        FrameGeometry {
            image_width: config.image_width(),
            margin: config.margin(),
            content_width: config.content_width(),
        }
    }
}

/// Everything needed to draw one frame of a series. Built by the
/// [Paginator](crate::Paginator) and never changed afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameDescriptor {
    body_text: String,
    caption: String,
    geometry: FrameGeometry,
    font: FontSpec,
}

impl FrameDescriptor {
    pub(crate) fn new(body_text: String, caption: &str, config: &PaginationConfig) -> FrameDescriptor {
        FrameDescriptor {
            body_text,
            caption: caption.to_string(),
            geometry: FrameGeometry::from(config),
            font: config.font().clone(),
        }
    }

    /// The body, possibly containing [LINE_BREAK](crate::layout::LINE_BREAK)s
    pub fn body_text(&self) -> &str {
        &self.body_text
    }

    pub fn caption(&self) -> &str {
        &self.caption
    }

    pub fn geometry(&self) -> FrameGeometry {
        self.geometry
    }

    pub fn font(&self) -> &FontSpec {
        &self.font
    }

    /// The body split at inserted line breaks
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.body_text.split(layout::LINE_BREAK)
    }

    /// The words of the body, in order
    pub fn words(&self) -> impl Iterator<Item = &str> {
        layout::words(&self.body_text)
    }
}
