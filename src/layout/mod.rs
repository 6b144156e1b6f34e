//! Text wrapping shared by measurement and rendering.
//!
//! A frame body is measured and drawn with the same greedy word wrap, so that
//! whatever the [Fit Classifier](crate::classify) decided fits in a frame is
//! also what ends up on the rendered frame.
//!
//! # Example
//!
//! ```
//! use carousel_gen::layout::wrap_lines;
//!
//! // a fake monospace font where every character is 10 units wide
//! let advance = |s: &str| s.chars().count() as f32 * 10.0;
//!
//! let lines = wrap_lines("the quick brown fox", 100.0, advance);
//! let lines: Vec<&str> = lines.iter().map(|l| l.text.as_str()).collect();
//! assert_eq!(lines, vec!["the quick", "brown fox"]);
//! ```

mod wrap;

pub use wrap::*;
