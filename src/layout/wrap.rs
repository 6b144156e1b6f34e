/// The line break marker the paginator inserts into frame bodies, and that
/// renderers must honour as a hard break
pub const LINE_BREAK: char = '\n';

/// Word separator. Only ASCII spaces separate words; any other character,
/// including other whitespace, is part of a word.
pub const SEPARATOR: char = ' ';

/// One line of wrapped text along with its measured width
#[derive(Debug, Clone, PartialEq)]
pub struct WrappedLine {
    pub text: String,
    pub width: f32,
}

/// Iterate the words of `text`, treating both spaces and inserted line breaks as
/// boundaries. Runs of separators never produce empty words.
pub fn words(text: &str) -> impl Iterator<Item = &str> {
    text.split([SEPARATOR, LINE_BREAK]).filter(|w| !w.is_empty())
}

/// Greedily wraps text into lines no wider than `max_width`, the way a frame
/// body is drawn.
///
/// The text is first split at [LINE_BREAK]s. Each of those lines is then filled
/// word by word for as long as the line stays strictly narrower than
/// `max_width`; a line exactly as wide as `max_width` counts as too wide. Words
/// are never split: a word that alone is too wide gets a line to itself and
/// overflows.
///
/// `advance` returns the width of a single line of text. Empty input yields a
/// single empty line, as does each empty hard line.
pub fn wrap_lines<F>(text: &str, max_width: f32, advance: F) -> Vec<WrappedLine>
where
    F: Fn(&str) -> f32,
{
    let mut lines: Vec<WrappedLine> = Vec::new();

    for hard_line in text.split(LINE_BREAK) {
        let mut current = WrappedLine {
            text: String::new(),
            width: 0.0,
        };

        for word in hard_line.split(SEPARATOR).filter(|w| !w.is_empty()) {
            if current.text.is_empty() {
                current.text.push_str(word);
                current.width = advance(&current.text);
                continue;
            }

            let candidate = format!("{}{SEPARATOR}{word}", current.text);
            let width = advance(&candidate);
            if width < max_width {
                current.text = candidate;
                current.width = width;
            } else {
                lines.push(current);
                current = WrappedLine {
                    text: word.to_string(),
                    width: advance(word),
                };
            }
        }

        lines.push(current);
    }

    lines
}
