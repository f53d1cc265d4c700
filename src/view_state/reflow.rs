//! Line reflow: wrapping text into width-bounded spans.
//!
//! [`reflow`] is a pure function of `(text, width)`. Its spans cover the text
//! exactly, in order, except for the `\n` characters that end forced lines.
//! Soft breaks insert nothing, so joining the spans of one paragraph gives
//! the paragraph back with its whitespace intact.
//!
//! Widths are terminal columns measured with `unicode-width`.

use std::ops::Range;
use unicode_width::UnicodeWidthChar;

/// One display line: a byte range of the reflowed text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineSpan {
    /// Byte offset of the first character.
    pub start: usize,
    /// Length in bytes.
    pub len: usize,
}

impl LineSpan {
    /// Byte range of this span.
    pub fn range(self) -> Range<usize> {
        self.start..self.start + self.len
    }

    /// Slice the span out of the text it was computed from.
    pub fn text(self, source: &str) -> &str {
        &source[self.range()]
    }
}

/// Display width of a character. Control characters take no columns.
fn char_width(c: char) -> usize {
    c.width().unwrap_or(0)
}

/// Display width of a string in terminal columns.
pub fn display_width(s: &str) -> usize {
    s.chars().map(char_width).sum()
}

/// Wrap `text` into spans no wider than `width` columns.
///
/// - Breaks after the last whitespace that fits; a word longer than the
///   width is split mid-word.
/// - Every `\n` ends a span; the newline itself belongs to no span.
/// - Empty text yields exactly one empty span.
/// - `width` is clamped to at least 1. A single character wider than the
///   width (a double-width glyph at width 1) still gets a span of its own.
pub fn reflow(text: &str, width: usize) -> Vec<LineSpan> {
    let width = width.max(1);
    let mut spans = Vec::new();

    let mut line_start = 0;
    let mut line_width = 0;
    // Byte offset just past the last whitespace on this line, and the
    // line width up to that point.
    let mut last_break: Option<(usize, usize)> = None;
    // Whitespace only becomes a break point once the line holds a visible
    // character, so no line consists solely of leading blanks.
    let mut has_text = false;

    for (i, c) in text.char_indices() {
        if c == '\n' {
            spans.push(span(line_start, i));
            line_start = i + 1;
            line_width = 0;
            last_break = None;
            has_text = false;
            continue;
        }

        let w = char_width(c);
        while line_width > 0 && line_width + w > width {
            match last_break.take() {
                Some((at, width_at)) if at > line_start => {
                    spans.push(span(line_start, at));
                    line_start = at;
                    line_width -= width_at;
                    has_text = line_width > 0;
                }
                _ => {
                    spans.push(span(line_start, i));
                    line_start = i;
                    line_width = 0;
                    has_text = false;
                }
            }
        }

        line_width += w;
        if !c.is_whitespace() {
            has_text = true;
        } else if has_text {
            last_break = Some((i + c.len_utf8(), line_width));
        }
    }

    spans.push(span(line_start, text.len()));
    spans
}

fn span(start: usize, end: usize) -> LineSpan {
    LineSpan {
        start,
        len: end - start,
    }
}

/// Spans with index in `[start_line, end_line)`, clamped to what exists.
///
/// A range past the end yields whatever remains, possibly nothing.
pub fn slice_range(spans: &[LineSpan], start_line: usize, end_line: usize) -> &[LineSpan] {
    let end = end_line.min(spans.len());
    let start = start_line.min(end);
    &spans[start..end]
}

/// Text together with its span index for one width.
///
/// Rebuilt whenever the text or the width changes; nothing carries over
/// from a previous layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReflowedText {
    text: String,
    width: usize,
    spans: Vec<LineSpan>,
}

impl ReflowedText {
    /// Reflow `text` for `width` columns.
    pub fn new(text: impl Into<String>, width: usize) -> Self {
        let text = text.into();
        let spans = reflow(&text, width);
        Self {
            text,
            width: width.max(1),
            spans,
        }
    }

    /// Same text, new width. A no-op when the width is unchanged.
    pub fn rewrap(&mut self, width: usize) {
        let width = width.max(1);
        if width != self.width {
            self.spans = reflow(&self.text, width);
            self.width = width;
        }
    }

    /// The source text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Width the spans were computed for.
    pub fn width(&self) -> usize {
        self.width
    }

    /// All spans.
    pub fn spans(&self) -> &[LineSpan] {
        &self.spans
    }

    /// Number of display lines.
    pub fn line_count(&self) -> usize {
        self.spans.len()
    }

    /// Text of the lines in `[start, end)`, clamped.
    pub fn lines(&self, start: usize, end: usize) -> impl Iterator<Item = &str> + '_ {
        slice_range(&self.spans, start, end)
            .iter()
            .map(|s| s.text(&self.text))
    }
}
