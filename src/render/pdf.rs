use super::{
    content::{place_frame, write_content, LineMetrics},
    embed::{EmbeddedFont, FONT_RESOURCE},
    info::write_info,
    refs::{ObjectReferences, RefType},
    Renderer,
};
use crate::{
    colour::{colours, Colour},
    font_book::FontBook,
    frame::FrameDescriptor,
    Error,
};
use miniz_oxide::deflate::{compress_to_vec_zlib, CompressionLevel};
use pdf_writer::{Filter, Finish, Pdf, Rect};
use std::{fs::File, io::Write, path::Path};

/// Renders frames as single-page PDFs, one square page per frame, with the
/// frame's font embedded. Pixels map onto points one to one.
pub struct PdfRenderer<'f> {
    fonts: &'f FontBook,
    background: Colour,
    foreground: Colour,
}

impl<'f> PdfRenderer<'f> {
    /// Black text on a white background, drawn with fonts from `fonts`
    pub fn new(fonts: &'f FontBook) -> PdfRenderer<'f> {
        PdfRenderer {
            fonts,
            background: colours::WHITE,
            foreground: colours::BLACK,
        }
    }

    pub fn with_background(mut self, colour: Colour) -> Self {
        self.background = colour;
        self
    }

    pub fn with_foreground(mut self, colour: Colour) -> Self {
        self.foreground = colour;
        self
    }

    /// Render a frame into an in-memory PDF
    pub fn render_to_vec(&self, frame: &FrameDescriptor) -> Result<Vec<u8>, Error> {
        let font = self.fonts.resolve(&frame.font().family)?;
        let size = frame.font().size;
        let page_size = frame.geometry().image_width.as_f32();

        let metrics = LineMetrics {
            ascent: font.ascent(size),
            descent: font.descent(size),
            line_height: font.line_height(size),
        };
        let lines = place_frame(frame, metrics, |text| font.width_of_text(text, size));
        let content = write_content(
            page_size,
            &lines,
            size,
            self.background,
            self.foreground,
            |ch| font.glyph_or_fallback(ch),
        )?;

        let mut refs = ObjectReferences::new();
        let catalog_id = refs.get(RefType::Catalog);
        let page_tree_id = refs.get(RefType::PageTree);
        let page_id = refs.get(RefType::Page);
        let content_id = refs.get(RefType::Content);

        let mut writer = Pdf::new();
        write_info(frame.caption(), &mut refs, &mut writer);
        writer.catalog(catalog_id).pages(page_tree_id);
        writer.pages(page_tree_id).kids([page_id]).count(1);

        let font_id = EmbeddedFont::new(font).write(&mut refs, &mut writer);

        let mut page = writer.page(page_id);
        page.media_box(Rect::new(0.0, 0.0, page_size, page_size));
        page.parent(page_tree_id);
        page.contents(content_id);
        page.resources().fonts().pair(FONT_RESOURCE, font_id);
        page.finish();

        let compressed = compress_to_vec_zlib(&content, CompressionLevel::DefaultLevel as u8);
        writer
            .stream(content_id, compressed.as_slice())
            .filter(Filter::FlateDecode);

        Ok(writer.finish())
    }

    /// Render a frame into any writer
    pub fn render_to_writer<W: Write>(&self, frame: &FrameDescriptor, mut w: W) -> Result<(), Error> {
        let bytes = self.render_to_vec(frame)?;
        w.write_all(&bytes).map_err(Into::into)
    }
}

impl Renderer for PdfRenderer<'_> {
    fn render(&self, frame: &FrameDescriptor, destination: &Path) -> Result<(), Error> {
        let bytes = self.render_to_vec(frame)?;
        tracing::debug!(
            destination = %destination.display(),
            bytes = bytes.len(),
            "rendered frame"
        );
        // File::create truncates, overwriting whatever was there
        let mut out = File::create(destination)?;
        out.write_all(&bytes)?;
        Ok(())
    }

    fn extension(&self) -> &str {
        "pdf"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{font::FontSpec, measure::measurer_fn, measure::Extent, PaginationConfig, Px};

    #[test]
    fn unknown_family_fails_rendering() {
        let book = FontBook::new();
        let config =
            PaginationConfig::new(Px(500), Px(20), FontSpec::new("Nope Sans", 20.0)).unwrap();
        let frames =
            crate::paginate("hi there", &config, &measurer_fn(|_, _, _| Ok(Extent::new(1, 1))))
                .unwrap();

        let err = PdfRenderer::new(&book).render_to_vec(&frames[0]).unwrap_err();
        assert!(matches!(err, Error::UnknownFontFamily(f) if f == "Nope Sans"));
    }
}
