//! The pagination algorithm.
//!
//! Pagination is a single greedy pass over the words of a body. Each word is
//! tentatively appended to the frame being built and the result is run through
//! the [Fit Classifier](crate::classify::classify), whose verdict decides whether
//! the word stays on the current line, moves to a new line of the same frame, or
//! starts a new frame.
//!
//! # Example
//!
//! ```
//! use carousel_gen::{measurer_fn, Extent, FontSpec, PaginationConfig, Paginator, Px};
//!
//! // pretend every word is 100px wide and 50px tall, laid out one per line
//! let measurer = measurer_fn(|text, _width, _font| {
//!     let words = text.split(' ').count() as u32;
//!     Ok(Extent::new(100, 50 * words))
//! });
//!
//! let config = PaginationConfig::new(Px(1000), Px(50), FontSpec::new("Crimson Pro", 32.0))
//!     .unwrap()
//!     .with_middle_byline("→")
//!     .with_end_byline("fin");
//!
//! // 12 words of 50px fit in the 630px height budget, the rest spill over
//! let body = lipsum_like(20);
//! let frames = Paginator::new(measurer).paginate(&body, &config).unwrap();
//! assert_eq!(frames.len(), 2);
//! assert_eq!(frames[0].caption(), "→");
//! assert_eq!(frames[1].caption(), "fin");
//! assert_eq!(frames[0].words().count(), 12);
//!
//! # fn lipsum_like(n: usize) -> String {
//! #     (0..n).map(|i| format!("w{i}")).collect::<Vec<_>>().join(" ")
//! # }
//! ```

use crate::{
    classify::{classify, ContentBounds, Fit},
    config::PaginationConfig,
    frame::FrameDescriptor,
    layout::{self, LINE_BREAK, SEPARATOR},
    measure::{CachedMeasurer, Measurer},
    Error,
};
use derive_more::{Deref, Into};

/// The frames of a series, in order. There is always at least one frame, and
/// only the last one carries the end byline.
#[derive(Debug, Clone, PartialEq, Deref, Into)]
#[deref(forward)]
pub struct Pagination(Vec<FrameDescriptor>);

impl Pagination {
    /// The final frame of the series
    pub fn last_frame(&self) -> &FrameDescriptor {
        // a pagination is never empty
        &self.0[self.0.len() - 1]
    }

    /// Every word of every frame, in order. This is the body's words, neither
    /// duplicated nor dropped.
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.0.iter().flat_map(|frame| layout::words(frame.body_text()))
    }
}

impl IntoIterator for Pagination {
    type Item = FrameDescriptor;
    type IntoIter = std::vec::IntoIter<FrameDescriptor>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Pagination {
    type Item = &'a FrameDescriptor;
    type IntoIter = std::slice::Iter<'a, FrameDescriptor>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Splits bodies of text into frames using a [Measurer]
pub struct Paginator<M> {
    measurer: M,
}

impl<M: Measurer> Paginator<M> {
    pub fn new(measurer: M) -> Paginator<M> {
        Paginator { measurer }
    }

    /// The measurer frames are sized with, e.g. to inspect a cache
    pub fn measurer(&self) -> &M {
        &self.measurer
    }

    /// Take the measurer back, e.g. to reuse a warmed cache elsewhere
    pub fn into_measurer(self) -> M {
        self.measurer
    }

    /// Paginate `body` into frames according to `config`. See [paginate].
    pub fn paginate(&self, body: &str, config: &PaginationConfig) -> Result<Pagination, Error> {
        paginate(body, config, &self.measurer)
    }
}

impl<M: Measurer> Paginator<CachedMeasurer<M>> {
    /// A paginator that remembers every measurement it makes. Results are
    /// identical to an uncached paginator's.
    pub fn cached(measurer: M) -> Paginator<CachedMeasurer<M>> {
        Paginator::new(CachedMeasurer::new(measurer))
    }
}

/// Paginate `body` into frames.
///
/// A body that contains no space, or that fits in a single frame as a whole, is
/// returned verbatim as one frame with the end byline. Otherwise the body is
/// split on spaces (runs of spaces collapse) and frames are filled word by word:
///
/// - [Fit::Fits]: the word joins the current line, separated by a space
/// - [Fit::NeedsLineBreak]: the word starts a new line of the current frame
/// - [Fit::NeedsNewFrame]: the current frame is closed with the middle byline
///   and the word starts the next one
///
/// Whatever is left when the words run out becomes the last frame, with the end
/// byline. Words are never split, so a word that is too wide for the frame sits
/// on a line of its own and overflows; likewise a single word too tall for a
/// frame is kept rather than leaving an empty frame behind.
///
/// A failing [Measurer] aborts pagination of the whole body.
#[tracing::instrument(level = "debug", skip_all, fields(len = body.len()))]
pub fn paginate<M: Measurer + ?Sized>(
    body: &str,
    config: &PaginationConfig,
    measurer: &M,
) -> Result<Pagination, Error> {
    let bounds = ContentBounds::from(config);
    let font = config.font();

    if !body.contains(SEPARATOR) || classify(measurer, body, bounds, font)? == Fit::Fits {
        tracing::debug!("body fits in a single frame");
        return Ok(Pagination(vec![FrameDescriptor::new(
            body.to_string(),
            config.end_byline(),
            config,
        )]));
    }

    let mut frames: Vec<FrameDescriptor> = Vec::new();
    let mut chunk = String::new();

    for word in body.split(SEPARATOR).filter(|w| !w.is_empty()) {
        let candidate = if chunk.is_empty() {
            word.to_string()
        } else {
            format!("{chunk}{SEPARATOR}{word}")
        };

        match classify(measurer, &candidate, bounds, font)? {
            Fit::Fits => chunk = candidate,
            Fit::NeedsLineBreak => {
                if !chunk.is_empty() {
                    chunk.push(LINE_BREAK);
                }
                chunk.push_str(word);
            }
            // nothing to close yet
            Fit::NeedsNewFrame if chunk.is_empty() => chunk.push_str(word),
            Fit::NeedsNewFrame => {
                let full = std::mem::replace(&mut chunk, word.to_string());
                tracing::debug!(frame = frames.len(), len = full.len(), "closed frame");
                frames.push(FrameDescriptor::new(full, config.middle_byline(), config));
            }
        }
    }

    frames.push(FrameDescriptor::new(chunk, config.end_byline(), config));
    tracing::debug!(frames = frames.len(), "paginated body");

    Ok(Pagination(frames))
}
