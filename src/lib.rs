//! Paginates long, unbroken text into a series of equally-sized square frames,
//! each holding as much of the text as fits plus a short byline, and renders
//! them. Think slide-style carousels made from a paragraph of prose.
//!
//! Pagination is driven entirely by a [Measurer], which reports how large a piece
//! of text would be when drawn. [FontBook] measures with real fonts; any closure
//! with the right signature works too.

mod colour;
pub use colour::*;

pub mod classify;
pub use classify::{classify, ContentBounds, Fit};

mod config;
pub use config::*;

mod error;
pub use error::*;

mod font;
pub use font::*;

mod font_book;
pub use font_book::*;

mod frame;
pub use frame::*;

/// Text wrapping shared by measurement and rendering
pub mod layout;

mod measure;
pub use measure::*;

mod paginate;
pub use paginate::*;

/// Drawing frames to files
pub mod render;

mod units;
pub use units::*;

/// Re-export PDF-writer, for renderers that want to build on it
pub use pdf_writer;
