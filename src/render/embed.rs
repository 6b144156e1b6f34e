//! Embedding a [Font] into a frame's PDF as a Type0 / CIDFontType2 font.
//!
//! Glyphs are addressed by glyph id (`Identity-H`), so the content stream can
//! draw any glyph the face has. A ToUnicode map keeps the text selectable.

use super::refs::{ObjectReferences, RefType};
use crate::font::Font;
use miniz_oxide::deflate::{compress_to_vec_zlib, CompressionLevel};
use pdf_writer::{
    types::{CidFontType, FontFlags, SystemInfo},
    Filter, Finish, Name, Pdf, Ref, Str,
};
use std::collections::HashMap;
use std::fmt::Write;

/// The name fonts are referred to by in page resources
pub(crate) const FONT_RESOURCE: Name<'static> = Name(b"F0");

#[derive(Debug, Copy, Clone)]
struct GlyphInfo {
    id: u16,
    ch: char,
    advance: u16,
    height: i16,
}

pub(crate) struct EmbeddedFont<'a> {
    font: &'a Font,
    /// every glyph reachable through a unicode cmap, sorted by glyph id
    glyphs: Vec<GlyphInfo>,
    scaling: f32,
}

impl<'a> EmbeddedFont<'a> {
    pub(crate) fn new(font: &'a Font) -> EmbeddedFont<'a> {
        let face = font.face_ref();

        // Adapted from printpdf
        let mut chars: HashMap<u16, char> = HashMap::new();
        if let Some(cmap) = face.tables().cmap {
            for subtable in cmap.subtables.into_iter().filter(|t| t.is_unicode()) {
                subtable.codepoints(|codepoint: u32| {
                    if let Ok(ch) = char::try_from(codepoint) {
                        if let Some(index) = subtable.glyph_index(codepoint).filter(|i| i.0 > 0) {
                            chars.entry(index.0).or_insert(ch);
                        }
                    }
                });
            }
        }

        let mut glyphs: Vec<GlyphInfo> = chars
            .into_iter()
            .filter_map(|(id, ch)| {
                let gid = owned_ttf_parser::GlyphId(id);
                let advance = face.glyph_hor_advance(gid)?;
                let height = face
                    .glyph_bounding_box(gid)
                    .map(|bbox| bbox.y_max - bbox.y_min - face.descender())
                    .unwrap_or(1000);
                Some(GlyphInfo {
                    id,
                    ch,
                    advance,
                    height,
                })
            })
            .collect();
        glyphs.sort_by_key(|g| g.id);

        EmbeddedFont {
            font,
            glyphs,
            scaling: 1000.0 / face.units_per_em() as f32,
        }
    }

    fn base_font(&self) -> String {
        self.font
            .name()
            .or_else(|| self.font.family())
            .map(|name| name.replace(|c: char| c.is_whitespace() || c == '/', ""))
            .filter(|name| !name.is_empty())
            .unwrap_or_else(|| "F0".to_string())
    }

    /// Write the font and everything it depends on, returning the id of the
    /// top-level font object to list in page resources
    pub(crate) fn write(&self, refs: &mut ObjectReferences, writer: &mut Pdf) -> Ref {
        let font_id = refs.get(RefType::Font);
        let cid_font_id = self.write_cid(refs, writer);
        let to_unicode_id = self.write_to_unicode(refs, writer);
        let base_font = self.base_font();

        let mut font = writer.type0_font(font_id);
        font.base_font(Name(base_font.as_bytes()));
        font.encoding_predefined(Name(b"Identity-H"));
        font.descendant_font(cid_font_id);
        font.to_unicode(to_unicode_id);
        font.finish();

        font_id
    }

    fn write_cid(&self, refs: &mut ObjectReferences, writer: &mut Pdf) -> Ref {
        let descriptor_id = self.write_descriptor(refs, writer);
        let base_font = self.base_font();

        let id = refs.get(RefType::CidFont);
        let mut cid_font = writer.cid_font(id);
        cid_font.subtype(CidFontType::Type2);
        cid_font.base_font(Name(base_font.as_bytes()));
        cid_font.system_info(SystemInfo {
            registry: Str(b"Adobe"),
            ordering: Str(b"Identity"),
            supplement: 0,
        });
        cid_font.font_descriptor(descriptor_id);

        // the most popular width makes for the smallest widths array
        let mut width_counts: HashMap<u16, usize> = HashMap::new();
        for glyph in self.glyphs.iter() {
            *width_counts.entry(glyph.advance).or_insert(0) += 1;
        }
        let default_width = width_counts
            .iter()
            .max_by_key(|&(&advance, &count)| (count, advance))
            .map(|(&advance, _)| advance as f32 * self.scaling)
            .unwrap_or(1000.0);
        cid_font.default_width(default_width);

        // runs of consecutive glyph ids share one widths entry
        let mut widths = cid_font.widths();
        let mut run: Vec<f32> = Vec::new();
        let mut run_start: u16 = 0;
        for glyph in self.glyphs.iter() {
            let contiguous = !run.is_empty() && glyph.id as usize == run_start as usize + run.len();
            if !contiguous && !run.is_empty() {
                widths.consecutive(run_start, run.drain(..));
            }
            if run.is_empty() {
                run_start = glyph.id;
            }
            run.push(glyph.advance as f32 * self.scaling);
        }
        if !run.is_empty() {
            widths.consecutive(run_start, run.drain(..));
        }
        widths.finish();

        cid_font.cid_to_gid_map_predefined(Name(b"Identity"));
        cid_font.finish();

        id
    }

    fn write_descriptor(&self, refs: &mut ObjectReferences, writer: &mut Pdf) -> Ref {
        let data_id = refs.get(RefType::FontData);
        let bytes = self.font.face.as_slice();
        writer
            .stream(data_id, bytes)
            .pair(Name(b"Length1"), bytes.len() as i32);

        let face = self.font.face_ref();
        let max_width = self.glyphs.iter().map(|g| g.advance).max().unwrap_or_default();
        let max_height = self.glyphs.iter().map(|g| g.height).max().unwrap_or_default();
        let avg_width = if self.glyphs.is_empty() {
            0.0
        } else {
            self.glyphs.iter().map(|g| g.advance as f32).sum::<f32>() / self.glyphs.len() as f32
        };
        let family = self.font.family().unwrap_or_default();
        let base_font = self.base_font();

        let id = refs.get(RefType::FontDescriptor);
        let mut descriptor = writer.font_descriptor(id);
        descriptor.name(Name(base_font.as_bytes()));
        if !family.is_empty() {
            descriptor.family(Str(family.as_bytes()));
        }
        descriptor.weight(face.weight().to_number());

        let mut flags = FontFlags::NON_SYMBOLIC;
        if face.is_monospaced() {
            flags.insert(FontFlags::FIXED_PITCH);
        }
        if face.is_italic() {
            flags.insert(FontFlags::ITALIC);
        }
        descriptor.flags(flags);

        let bbox = face.global_bounding_box();
        descriptor.bbox(pdf_writer::Rect::new(
            bbox.x_min as f32 * self.scaling,
            bbox.y_min as f32 * self.scaling,
            bbox.x_max as f32 * self.scaling,
            (bbox.y_max.max(max_height)) as f32 * self.scaling,
        ));
        descriptor.italic_angle(face.tables().post.as_ref().map(|post| post.italic_angle).unwrap_or(0.0));
        descriptor.ascent(face.ascender() as f32 * self.scaling);
        descriptor.descent(face.descender() as f32 * self.scaling);
        descriptor.leading(face.line_gap() as f32 * self.scaling);
        descriptor.cap_height(
            face.capital_height()
                .map(|h| h as f32 * self.scaling)
                .unwrap_or(1000.0),
        );
        descriptor.x_height(
            face.x_height()
                .or_else(|| face.capital_height())
                .unwrap_or_default() as f32
                * self.scaling,
        );
        // TODO: derive from the OS/2 weight class instead of a fixed stem
        descriptor.stem_v(80.0);
        descriptor.avg_width(avg_width * self.scaling);
        descriptor.max_width(max_width as f32 * self.scaling);
        descriptor.missing_width(max_width as f32 * self.scaling);
        descriptor.font_file2(data_id);
        descriptor.finish();

        id
    }

    fn write_to_unicode(&self, refs: &mut ObjectReferences, writer: &mut Pdf) -> Ref {
        let id = refs.get(RefType::ToUnicode);

        let mut map = String::from(
            "/CIDInit /ProcSet findresource begin\n\
             12 dict begin\n\
             begincmap\n\
             /CIDSystemInfo\n\
             << /Registry (Adobe)\n\
             /Ordering (UCS) /Supplement 0 >> def\n\
             /CMapName /Adobe-Identity-UCS def\n\
             /CMapType 2 def\n\
             1 begincodespacerange\n\
             <0000> <FFFF>\n\
             endcodespacerange\n",
        );

        // bfchar blocks hold at most 100 entries that share a high byte
        let mut blocks: Vec<&[GlyphInfo]> = Vec::new();
        let mut start = 0;
        for i in 1..=self.glyphs.len() {
            let split = i == self.glyphs.len()
                || i - start >= 100
                || self.glyphs[i].id >> 8 != self.glyphs[start].id >> 8;
            if split {
                blocks.push(&self.glyphs[start..i]);
                start = i;
            }
        }

        for block in blocks {
            // writing to a String can't fail
            let _ = writeln!(map, "{} beginbfchar", block.len());
            for glyph in block {
                let mut utf16 = [0u16; 2];
                let units: String = glyph
                    .ch
                    .encode_utf16(&mut utf16)
                    .iter()
                    .map(|u| format!("{u:04x}"))
                    .collect();
                let _ = writeln!(map, "<{:04x}> <{units}>", glyph.id);
            }
            map.push_str("endbfchar\n");
        }

        map.push_str("endcmap CMapName currentdict /CMap defineresource pop end end\n");

        let compressed =
            compress_to_vec_zlib(map.as_bytes(), CompressionLevel::DefaultLevel as u8);
        writer
            .stream(id, compressed.as_slice())
            .filter(Filter::FlateDecode);

        id
    }
}
