use crate::{
    font::{Font, FontSpec},
    layout::wrap_lines,
    measure::{Extent, Measurer},
    units::Px,
    Error, MeasurementError,
};
use id_arena::{Arena, Id};
use std::collections::HashMap;

/// The set of fonts available to measure and render frames with, looked up by
/// family name. Family names are matched case-insensitively.
///
/// A `FontBook` is also the crate's font-backed [Measurer]: text is wrapped with
/// real glyph advances, and its height is the number of wrapped lines times the
/// face's line height.
#[derive(Debug, Default)]
pub struct FontBook {
    pub fonts: Arena<Font>,
    families: HashMap<String, Id<Font>>,
}

fn family_key(family: &str) -> String {
    family.trim().to_lowercase()
}

impl FontBook {
    pub fn new() -> FontBook {
        FontBook::default()
    }

    /// Add a font, registering it under the family name stored in the face. If the
    /// face has no family name, it can only be reached through
    /// [FontBook::add_font_as] aliases. A font registered later under the same
    /// family replaces the earlier one for lookups.
    pub fn add_font(&mut self, font: Font) -> Id<Font> {
        let family = font.family();
        let id = self.fonts.alloc(font);
        match family {
            Some(family) => self.register(&family, id),
            None => tracing::debug!(?id, "added font without a family name"),
        }
        id
    }

    /// Add a font under an explicit family name, regardless of what the face says
    pub fn add_font_as<S: AsRef<str>>(&mut self, family: S, font: Font) -> Id<Font> {
        let id = self.fonts.alloc(font);
        self.register(family.as_ref(), id);
        id
    }

    /// Make an already-added font reachable under another family name
    pub fn alias<S: AsRef<str>>(&mut self, family: S, id: Id<Font>) {
        self.register(family.as_ref(), id);
    }

    fn register(&mut self, family: &str, id: Id<Font>) {
        tracing::debug!(family, ?id, "registered font family");
        self.families.insert(family_key(family), id);
    }

    pub fn id_of(&self, family: &str) -> Option<Id<Font>> {
        self.families.get(&family_key(family)).copied()
    }

    pub fn get(&self, family: &str) -> Option<&Font> {
        self.id_of(family).and_then(|id| self.fonts.get(id))
    }

    /// Resolve a family for drawing
    pub fn resolve(&self, family: &str) -> Result<&Font, Error> {
        self.get(family)
            .ok_or_else(|| Error::UnknownFontFamily(family.to_string()))
    }

    /// The registered family names, lowercased and sorted
    pub fn families(&self) -> Vec<&str> {
        let mut families: Vec<&str> = self.families.keys().map(String::as_str).collect();
        families.sort_unstable();
        families
    }
}

impl Measurer for FontBook {
    fn measure(&self, text: &str, width: Px, font: &FontSpec) -> Result<Extent, MeasurementError> {
        let face = self
            .get(&font.family)
            .ok_or_else(|| MeasurementError::UnknownFontFamily(font.family.clone()))?;

        let lines = wrap_lines(text, width.as_f32(), |line| {
            face.width_of_text(line, font.size)
        });
        let widest = lines.iter().map(|l| l.width).fold(0.0_f32, f32::max);
        let height = lines.len() as f32 * face.line_height(font.size);

        Ok(Extent {
            width: Px::ceil(widest),
            height: Px::ceil(height),
        })
    }
}

impl Measurer for &FontBook {
    fn measure(&self, text: &str, width: Px, font: &FontSpec) -> Result<Extent, MeasurementError> {
        (**self).measure(text, width, font)
    }
}
