//! Line-oriented hex palette parsing.
//!
//! The format is one color per line:
//!
//! ```text
//! ; NorCal ocean
//! // comments start with '/', ';' or '#'
//! #001F3F
//! 0074D9  ocean blue
//! ```
//!
//! A `#` line counts as a color when the `#` is followed by six hex digits;
//! whatever comes after them is ignored, as it is for bare colors. Any
//! other `#` line is a comment.

use super::error::ParseColorError;
use super::palette::Palette;
use crate::color::Rgb;

/// A palette line that could not be parsed as a color.
///
/// Malformed lines are recoverable: the line is skipped and parsing
/// continues with the next one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MalformedLine {
    /// 1-based line number in the source
    pub line_number: usize,
    /// The trimmed line content
    pub content: String,
    /// Why the line was rejected
    pub error: ParseColorError,
}

/// Result of parsing a hex palette source.
#[derive(Debug, Clone)]
pub struct ParsedPalette {
    /// The effective palette (the default palette when `used_default`)
    pub palette: Palette,
    /// Lines that looked like colors but failed to parse
    pub malformed: Vec<MalformedLine>,
    /// Whether the source produced no colors and the default was used
    pub used_default: bool,
}

/// How a single source line is treated.
enum Line<'a> {
    Skip,
    Color(&'a str),
}

fn classify(line: &str) -> Line<'_> {
    if line.is_empty() || line.starts_with('/') || line.starts_with(';') {
        return Line::Skip;
    }
    if let Some(rest) = line.strip_prefix('#') {
        let bytes = rest.as_bytes();
        let is_color = bytes.len() >= 6 && bytes[..6].iter().all(u8::is_ascii_hexdigit);
        return if is_color { Line::Color(line) } else { Line::Skip };
    }
    Line::Color(line)
}

impl ParsedPalette {
    pub(super) fn parse(text: &str) -> Self {
        let mut colors = Vec::new();
        let mut malformed = Vec::new();

        for (i, raw) in text.lines().enumerate() {
            let line = raw.trim();
            let Line::Color(candidate) = classify(line) else {
                continue;
            };
            match candidate.parse::<Rgb>() {
                Ok(color) => colors.push(color),
                Err(error) => {
                    tracing::warn!(line = i + 1, content = line, %error, "Skipping palette line");
                    malformed.push(MalformedLine {
                        line_number: i + 1,
                        content: line.to_string(),
                        error,
                    });
                }
            }
        }

        match Palette::new(&colors) {
            Ok(palette) => Self {
                palette,
                malformed,
                used_default: false,
            },
            Err(_) => {
                tracing::info!(
                    skipped = malformed.len(),
                    "Palette source has no colors, using the default palette"
                );
                Self {
                    palette: Palette::default_palette(),
                    malformed,
                    used_default: true,
                }
            }
        }
    }
}
