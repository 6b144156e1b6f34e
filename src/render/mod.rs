//! Turning frames into files.
//!
//! A [Renderer] draws one [FrameDescriptor] to a destination path. Frames carry
//! no dependencies on one another, so they can be rendered in any order, or in
//! parallel, so long as the output keeps the series order.
//!
//! The crate ships a [PdfRenderer], which writes each frame as a single square
//! PDF page with the font embedded.
//!
//! # Example
//!
//! ```no_run
//! use carousel_gen::{
//!     render::{render_series, PdfRenderer},
//!     Font, FontBook, FontSpec, PaginationConfig, Paginator, Px,
//! };
//!
//! let mut fonts = FontBook::new();
//! fonts.add_font(Font::load_from_disk("assets/CrimsonPro-Regular.ttf").expect("can load font"));
//!
//! let config = PaginationConfig::new(Px(1080), Px(90), FontSpec::new("Crimson Pro", 44.0))
//!     .expect("valid config")
//!     .with_middle_byline("swipe →")
//!     .with_end_byline("by Kenton");
//!
//! let frames = Paginator::new(&fonts)
//!     .paginate("a long body of text ...", &config)
//!     .expect("can paginate");
//!
//! let paths = render_series(&PdfRenderer::new(&fonts), &frames, "out", "carousel")
//!     .expect("can render");
//! println!("wrote {} frames", paths.len());
//! ```

mod content;
mod embed;
mod info;
mod pdf;
mod refs;

pub use pdf::PdfRenderer;

use crate::{frame::FrameDescriptor, Error};
use std::path::{Path, PathBuf};

/// The nominal height of the body box, as a share of the content width
pub const BODY_BOX_RATIO: f32 = 0.8;

/// How far below the middle of the frame the caption is centred, as a share of
/// the content width
pub const CAPTION_OFFSET_RATIO: f32 = 0.4;

/// Draws frames to files
pub trait Renderer {
    /// Render `frame` to `destination`, overwriting any existing file
    fn render(&self, frame: &FrameDescriptor, destination: &Path) -> Result<(), Error>;

    /// The file extension the rendered files should carry, without a dot
    fn extension(&self) -> &str;
}

/// Render every frame of a series into `dir` (created if needed), naming the
/// files `{stem}-01.{ext}`, `{stem}-02.{ext}` and so on in series order.
/// Returns the paths written, in order. Stops at the first failure.
pub fn render_series<'a, R, I, P>(
    renderer: &R,
    frames: I,
    dir: P,
    stem: &str,
) -> Result<Vec<PathBuf>, Error>
where
    R: Renderer + ?Sized,
    I: IntoIterator<Item = &'a FrameDescriptor>,
    P: AsRef<Path>,
{
    let dir = dir.as_ref();
    std::fs::create_dir_all(dir)?;

    let mut paths: Vec<PathBuf> = Vec::new();
    for (i, frame) in frames.into_iter().enumerate() {
        let path = dir.join(format!("{stem}-{:02}.{}", i + 1, renderer.extension()));
        renderer.render(frame, &path)?;
        paths.push(path);
    }

    tracing::debug!(count = paths.len(), dir = %dir.display(), "rendered series");
    Ok(paths)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        measure::{measurer_fn, Extent},
        FontSpec, PaginationConfig, Px,
    };
    use pretty_assertions::assert_eq;
    use std::cell::RefCell;

    /// Writes the caption and body as plain text
    struct TextRenderer {
        rendered: RefCell<Vec<String>>,
    }

    impl Renderer for TextRenderer {
        fn render(&self, frame: &FrameDescriptor, destination: &Path) -> Result<(), Error> {
            std::fs::write(destination, format!("{}\n{}", frame.body_text(), frame.caption()))?;
            self.rendered.borrow_mut().push(frame.caption().to_string());
            Ok(())
        }

        fn extension(&self) -> &str {
            "txt"
        }
    }

    #[test]
    fn renders_series_in_order() {
        let config = PaginationConfig::new(Px(1000), Px(50), FontSpec::new("Mono", 12.0))
            .unwrap()
            .with_middle_byline("more")
            .with_end_byline("end");
        let tall = measurer_fn(|_, _, _| Ok(Extent::new(1, 10_000)));
        let frames = crate::paginate("one two three", &config, &tall).unwrap();

        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("series");
        let renderer = TextRenderer {
            rendered: RefCell::new(Vec::new()),
        };
        let paths = render_series(&renderer, &frames, &out, "frame").unwrap();

        let names: Vec<String> = paths
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["frame-01.txt", "frame-02.txt", "frame-03.txt"]);
        assert_eq!(*renderer.rendered.borrow(), vec!["more", "more", "end"]);
        assert_eq!(std::fs::read_to_string(&paths[2]).unwrap(), "three\nend");
    }

    #[test]
    fn rendering_overwrites() {
        let config = PaginationConfig::new(Px(100), Px(10), FontSpec::new("Mono", 12.0)).unwrap();
        let fits = measurer_fn(|_, _, _| Ok(Extent::new(1, 1)));
        let dir = tempfile::tempdir().unwrap();
        let renderer = TextRenderer {
            rendered: RefCell::new(Vec::new()),
        };

        let first = crate::paginate("first", &config, &fits).unwrap();
        render_series(&renderer, &first, dir.path(), "f").unwrap();
        let second = crate::paginate("second", &config, &fits).unwrap();
        let paths = render_series(&renderer, &second, dir.path(), "f").unwrap();

        assert_eq!(std::fs::read_to_string(&paths[0]).unwrap(), "second\n");
    }
}
