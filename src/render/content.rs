//! Placing a frame's text on the page and turning it into PDF operators.

use super::{embed::FONT_RESOURCE, BODY_BOX_RATIO, CAPTION_OFFSET_RATIO};
use crate::{colour::Colour, frame::FrameDescriptor, layout, units::Pt, Error};
use std::io::Write;

/// Vertical font metrics at the frame's font size
#[derive(Debug, Copy, Clone, PartialEq)]
pub(crate) struct LineMetrics {
    pub ascent: f32,
    /// usually negative
    pub descent: f32,
    pub line_height: f32,
}

/// A line of text positioned on the page. Coordinates are PDF user space, with
/// the origin in the bottom-left corner and `baseline` the y of the baseline.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct PlacedLine {
    pub text: String,
    pub x: f32,
    pub baseline: f32,
}

/// Lays out a frame: the body wrapped at the content width with its first line
/// tucked under the top-left margin, and the caption on one line, vertically
/// centred [CAPTION_OFFSET_RATIO] of the content width below the middle of the
/// frame.
///
/// The body is drawn in a box [BODY_BOX_RATIO] of the content width tall. Lines
/// whose baseline would fall below the box are dropped rather than drawn over
/// the caption.
pub(crate) fn place_frame<F>(frame: &FrameDescriptor, metrics: LineMetrics, advance: F) -> Vec<PlacedLine>
where
    F: Fn(&str) -> f32,
{
    let geometry = frame.geometry();
    let page = geometry.image_width.as_f32();
    let margin = geometry.margin.as_f32();
    let content_width = geometry.content_width.as_f32();

    let mut placed: Vec<PlacedLine> = Vec::new();

    let first_baseline = page - margin - metrics.ascent;
    let box_bottom = page - margin - BODY_BOX_RATIO * content_width;
    let lines = layout::wrap_lines(frame.body_text(), content_width, &advance);
    let total = lines.len();
    for (i, line) in lines.into_iter().enumerate() {
        let baseline = first_baseline - i as f32 * metrics.line_height;
        if baseline < box_bottom {
            tracing::debug!(dropped = total - i, "body overflows its box");
            break;
        }
        if line.text.is_empty() {
            continue;
        }
        placed.push(PlacedLine {
            text: line.text,
            x: margin,
            baseline,
        });
    }

    let caption = frame.caption().replace(layout::LINE_BREAK, " ");
    if !caption.trim().is_empty() {
        let centre_from_top = page / 2.0 + CAPTION_OFFSET_RATIO * content_width;
        let centre = page - centre_from_top;
        placed.push(PlacedLine {
            text: caption,
            x: margin,
            baseline: centre - (metrics.ascent + metrics.descent) / 2.0,
        });
    }

    placed
}

/// Writes the content stream for a frame: a background filling the page, then
/// each placed line drawn as glyph ids of the embedded font.
#[allow(clippy::write_with_newline)]
pub(crate) fn write_content<G>(
    page_size: f32,
    lines: &[PlacedLine],
    font_size: Pt,
    background: Colour,
    foreground: Colour,
    glyph: G,
) -> Result<Vec<u8>, Error>
where
    G: Fn(char) -> Option<u16>,
{
    let mut content: Vec<u8> = Vec::default();

    write!(content, "q\n")?;
    write_colour(&mut content, background)?;
    write!(content, "0 0 {page_size} {page_size} re f\n")?;
    write!(content, "Q\n")?;

    if lines.is_empty() {
        return Ok(content);
    }

    write!(content, "BT\n")?;
    content.write_all(b"/")?;
    content.write_all(FONT_RESOURCE.0)?;
    write!(content, " {} Tf\n", font_size.0)?;
    write_colour(&mut content, foreground)?;

    for line in lines {
        write!(content, "1 0 0 1 {} {} Tm\n", line.x, line.baseline)?;
        write!(content, "<")?;
        for ch in line.text.chars() {
            let gid = glyph(ch).ok_or(Error::MissingGlyph(ch))?;
            write!(content, "{gid:04x}")?;
        }
        write!(content, "> Tj\n")?;
    }

    write!(content, "ET\n")?;
    Ok(content)
}

#[allow(clippy::write_with_newline)]
fn write_colour(content: &mut Vec<u8>, colour: Colour) -> Result<(), std::io::Error> {
    match colour {
        Colour::RGB { r, g, b } => write!(content, "{r} {g} {b} rg\n"),
        Colour::Grey { g } => write!(content, "{g} g\n"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{colour::colours, config::PaginationConfig, font::FontSpec, units::Px};
    use pretty_assertions::assert_eq;

    const METRICS: LineMetrics = LineMetrics {
        ascent: 40.0,
        descent: -10.0,
        line_height: 60.0,
    };

    fn mono(text: &str) -> f32 {
        text.chars().count() as f32 * 10.0
    }

    fn frame(body: &str, caption: &str) -> FrameDescriptor {
        let config = PaginationConfig::new(Px(1000), Px(50), FontSpec::new("Mono", 50.0))
            .unwrap()
            .with_end_byline(caption);
        crate::paginate(body, &config, &crate::measure::measurer_fn(|_, _, _| {
            Ok(crate::measure::Extent::new(1, 1))
        }))
        .unwrap()
        .last_frame()
        .clone()
    }

    #[test]
    fn body_starts_under_the_top_left_margin() {
        let placed = place_frame(&frame("one two\nthree", ""), METRICS, mono);
        assert_eq!(
            placed,
            vec![
                PlacedLine {
                    text: "one two".into(),
                    x: 50.0,
                    baseline: 910.0,
                },
                PlacedLine {
                    text: "three".into(),
                    x: 50.0,
                    baseline: 850.0,
                },
            ]
        );
    }

    #[test]
    fn body_wraps_at_content_width() {
        // 900px fits 89 characters
        let body = vec!["abcdefghi"; 10].join(" ");
        let placed = place_frame(&frame(&body, ""), METRICS, mono);
        assert_eq!(placed.len(), 2);
        assert_eq!(placed[1].text, "abcdefghi");
    }

    #[test]
    fn body_is_clipped_to_its_box() {
        // the box runs from 50px down to 50 + 0.8 * 900 = 770px from the top,
        // so baselines below 230 are dropped: 910, 850, ..., 250 is 12 lines
        let body = (0..20).map(|i| format!("l{i}")).collect::<Vec<_>>().join("\n");
        let placed = place_frame(&frame(&body, "caption"), METRICS, mono);

        let (caption, body_lines) = placed.split_last().unwrap();
        assert_eq!(body_lines.len(), 12);
        assert_eq!(body_lines[11].text, "l11");
        assert_eq!(body_lines[11].baseline, 250.0);
        assert_eq!(caption.text, "caption");
    }

    #[test]
    fn caption_sits_below_the_middle() {
        let placed = place_frame(&frame("", "@someone"), METRICS, mono);
        // centred 500 + 0.4 * 900 = 860px from the top, so 140px from the
        // bottom, less half of (ascent + descent)
        assert_eq!(
            placed,
            vec![PlacedLine {
                text: "@someone".into(),
                x: 50.0,
                baseline: 125.0,
            }]
        );
    }

    #[test]
    fn writes_glyph_ids() {
        let lines = vec![PlacedLine {
            text: "ab".into(),
            x: 50.0,
            baseline: 100.0,
        }];
        let content = write_content(1000.0, &lines, Pt(12.0), colours::WHITE, colours::BLACK, |ch| {
            Some(ch as u16)
        })
        .unwrap();
        let content = String::from_utf8(content).unwrap();

        assert_eq!(
            content,
            "q\n1 g\n0 0 1000 1000 re f\nQ\nBT\n/F0 12 Tf\n0 g\n1 0 0 1 50 100 Tm\n<00610062> Tj\nET\n"
        );
    }

    #[test]
    fn missing_glyphs_fail() {
        let lines = vec![PlacedLine {
            text: "a".into(),
            x: 0.0,
            baseline: 0.0,
        }];
        let err = write_content(100.0, &lines, Pt(12.0), colours::WHITE, colours::BLACK, |_| None)
            .unwrap_err();
        assert!(matches!(err, Error::MissingGlyph('a')));
    }
}
