use crate::{units::Pt, Error};
use owned_ttf_parser::{AsFaceRef, Face, GlyphId, OwnedFace};
use std::fmt;

/// Which font, and at what size, a frame is measured and drawn with. The family
/// is an opaque identifier as far as pagination is concerned; it is only ever
/// resolved by a [Measurer](crate::Measurer) or a [Renderer](crate::Renderer).
#[derive(Debug, Clone, PartialEq)]
pub struct FontSpec {
    pub family: String,
    pub size: Pt,
}

impl FontSpec {
    pub fn new<S: Into<String>>(family: S, size: f32) -> FontSpec {
        FontSpec {
            family: family.into(),
            size: Pt(size),
        }
    }
}

impl fmt::Display for FontSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.family, self.size)
    }
}

/// A parsed TrueType or OpenType face. Faces are embedded in their entirety
/// when rendered to PDF, so large fonts make for large frames.
pub struct Font {
    pub face: OwnedFace,
}

impl fmt::Debug for Font {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Font")
            .field("family", &self.family())
            .field("glyphs", &self.face_ref().number_of_glyphs())
            .finish()
    }
}

impl Font {
    /// Load a font from raw bytes, parsing the font and returning an error if the font
    /// could not be parsed
    pub fn load(bytes: Vec<u8>) -> Result<Font, Error> {
        let face = OwnedFace::from_vec(bytes, 0)?;
        Ok(Font { face })
    }

    /// Read and parse a font file
    pub fn load_from_disk<P: AsRef<std::path::Path>>(path: P) -> Result<Font, Error> {
        Font::load(std::fs::read(path)?)
    }

    pub(crate) fn face_ref(&self) -> &Face<'_> {
        self.face.as_face_ref()
    }

    fn name_entry(&self, id: u16) -> Option<String> {
        self.face_ref()
            .names()
            .into_iter()
            .find(|name| name.name_id == id && name.is_unicode())
            .and_then(|name| name.to_string())
    }

    /// The full name of the font, if the face has one
    pub fn name(&self) -> Option<String> {
        self.name_entry(owned_ttf_parser::name_id::FULL_NAME)
    }

    /// The family name of the font, if the face has one
    pub fn family(&self) -> Option<String> {
        self.name_entry(owned_ttf_parser::name_id::FAMILY)
    }

    fn scaling(&self, size: Pt) -> f32 {
        size.0 / self.face_ref().units_per_em() as f32
    }

    /// Distance from the baseline to the top of the font at the given size
    pub fn ascent(&self, size: Pt) -> f32 {
        self.scaling(size) * self.face_ref().ascender() as f32
    }

    /// Distance from the baseline to the bottom of the font at the given size.
    /// Note: this is usually negative
    pub fn descent(&self, size: Pt) -> f32 {
        self.scaling(size) * self.face_ref().descender() as f32
    }

    /// Extra space between lines at the given size
    pub fn leading(&self, size: Pt) -> f32 {
        self.scaling(size) * self.face_ref().line_gap() as f32
    }

    /// How far a second line of text sits below the first
    pub fn line_height(&self, size: Pt) -> f32 {
        self.leading(size) + self.ascent(size) - self.descent(size)
    }

    pub fn glyph_id(&self, ch: char) -> Option<u16> {
        self.face_ref().glyph_index(ch).map(|i| i.0)
    }

    pub fn replacement_glyph_id(&self) -> Option<u16> {
        self.glyph_id('\u{FFFD}').or_else(|| self.glyph_id('?'))
    }

    /// The glyph drawn for `ch`: its own glyph, else U+FFFD, else `?`
    pub fn glyph_or_fallback(&self, ch: char) -> Option<u16> {
        self.glyph_id(ch).or_else(|| self.replacement_glyph_id())
    }

    /// Width of a single line of text at the given size. Characters without any
    /// drawable glyph contribute nothing.
    pub fn width_of_text(&self, text: &str, size: Pt) -> f32 {
        let scaling = self.scaling(size);
        text.chars()
            .filter_map(|ch| self.glyph_or_fallback(ch))
            .map(|gid| {
                scaling
                    * self
                        .face_ref()
                        .glyph_hor_advance(GlyphId(gid))
                        .unwrap_or_default() as f32
            })
            .sum()
    }
}
