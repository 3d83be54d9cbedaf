//! Attributed text: character content plus attribute spans.
//!
//! This module provides [`StyledText`], the crate's central type. Content is
//! rope-backed; attributes live in an ordered span list over char-index
//! ranges. The substring-styling entry point is [`StyledText::style`].

use crate::event::{LogLevel, emit_log};
use crate::font::Font;
use crate::style::Attrs;
use crate::text::span::Span;
use ropey::Rope;
use std::fmt;
use std::ops::{Add, AddAssign, Range};
use unicode_width::UnicodeWidthStr;

/// Text content paired with a mapping from char ranges to attributes.
///
/// Characters untouched by any span simply have no attributes; ranges do
/// not need to tile the content. Styling never alters the character
/// content.
///
/// # Examples
///
/// ```
/// use richtext_rust::{Rgb, StyledText};
///
/// let mut text = StyledText::from("Red Green Blue");
/// text.style("Red", |a| a.foreground = Some(Rgb::RED))
///     .style("Green", |a| a.foreground = Some(Rgb::GREEN))
///     .style("Blue", |a| a.foreground = Some(Rgb::BLUE));
///
/// assert_eq!(text.to_string(), "Red Green Blue");
/// assert_eq!(text.attrs_at(0).foreground, Some(Rgb::RED));
/// assert_eq!(text.attrs_at(4).foreground, Some(Rgb::GREEN));
/// ```
#[derive(Clone, Debug, Default)]
pub struct StyledText {
    rope: Rope,
    spans: Vec<Span>,
    default_font: Option<Font>,
}

impl StyledText {
    /// Create an empty text.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an unstyled text from plain content.
    #[must_use]
    pub fn plain(text: &str) -> Self {
        Self {
            rope: Rope::from_str(text),
            spans: Vec::new(),
            default_font: None,
        }
    }

    /// Create a text with attributes applied to the whole content.
    ///
    /// The closure receives a fresh [`Attrs`] record; every field it sets
    /// covers the entire string.
    ///
    /// ```
    /// use richtext_rust::{Rgb, StyledText};
    ///
    /// let hello = StyledText::styled("Hello", |a| a.foreground = Some(Rgb::RED));
    /// assert_eq!(hello.attrs_at(4).foreground, Some(Rgb::RED));
    /// ```
    #[must_use]
    pub fn styled<F>(text: &str, configure: F) -> Self
    where
        F: FnOnce(&mut Attrs),
    {
        let mut out = Self::plain(text);
        let mut attrs = Attrs::default();
        configure(&mut attrs);
        let len = out.len_chars();
        if !attrs.is_empty() && len > 0 {
            out.spans.push(Span::new(0..len, attrs));
        }
        out
    }

    /// Set the default font for characters no span gives a font to.
    ///
    /// This replaces implicit environment lookup: callers that want a
    /// baseline font state it explicitly on the value.
    pub fn set_default_font(&mut self, font: Font) {
        self.default_font = Some(font);
    }

    /// Get the default font.
    #[must_use]
    pub fn default_font(&self) -> Option<Font> {
        self.default_font
    }

    /// Get the number of chars.
    #[must_use]
    pub fn len_chars(&self) -> usize {
        self.rope.len_chars()
    }

    /// Get the number of bytes.
    #[must_use]
    pub fn len_bytes(&self) -> usize {
        self.rope.len_bytes()
    }

    /// Check if empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rope.len_bytes() == 0
    }

    /// Display width of the content in terminal columns.
    #[must_use]
    pub fn width(&self) -> usize {
        self.rope.chunks().map(UnicodeWidthStr::width).sum()
    }

    /// Find the first occurrence of `query` in the character content.
    ///
    /// Returns the char range of the match. Comparison is exact and
    /// case-sensitive. Empty queries never match. The match is computed on
    /// demand and never cached.
    #[must_use]
    pub fn find(&self, query: &str) -> Option<Range<usize>> {
        if query.is_empty() {
            return None;
        }
        let content = self.rope.to_string();
        let byte_start = content.find(query)?;
        let start = self.rope.byte_to_char(byte_start);
        Some(start..start + query.chars().count())
    }

    /// Apply attributes to the first occurrence of `query`.
    ///
    /// If the query occurs in the content, `configure` receives a fresh
    /// [`Attrs`] record and the fields it sets are recorded over exactly
    /// the matched char range, layered over whatever attributes that range
    /// already carries. Fields it leaves unset are untouched.
    ///
    /// If the query does not occur, nothing changes and `configure` is
    /// never invoked; a missing match is a no-op, not an error. Only the
    /// first occurrence is styled — repeated substrings keep their later
    /// occurrences unstyled, since the intended use is highlighting a small
    /// number of distinct keywords.
    ///
    /// Calls chain, each targeting its own substring; where two targeted
    /// ranges overlap, the later call's set fields win on the shared
    /// characters.
    pub fn style<F>(&mut self, query: &str, configure: F) -> &mut Self
    where
        F: FnOnce(&mut Attrs),
    {
        let Some(range) = self.find(query) else {
            emit_log(LogLevel::Debug, &format!("style: no match for {query:?}"));
            return self;
        };
        let mut attrs = Attrs::default();
        configure(&mut attrs);
        if !attrs.is_empty() {
            self.spans.push(Span::new(range, attrs));
        }
        self
    }

    /// Apply attributes directly to a char range.
    ///
    /// The range is clamped to the content length. Empty ranges and empty
    /// attribute records are ignored.
    pub fn set_attrs(&mut self, range: Range<usize>, attrs: Attrs) {
        let len = self.len_chars();
        let start = range.start.min(len);
        let end = range.end.min(len);
        if start >= end || attrs.is_empty() {
            return;
        }
        self.spans.push(Span::new(start..end, attrs));
    }

    /// Effective attributes at a char position.
    ///
    /// Starts from the default font (if any), then merges every span
    /// containing the position in insertion order, so later spans override
    /// earlier ones per field.
    #[must_use]
    pub fn attrs_at(&self, pos: usize) -> Attrs {
        let mut attrs = Attrs::NONE;
        attrs.font = self.default_font;
        for span in &self.spans {
            if span.contains(pos) {
                attrs = attrs.merge(span.attrs.clone());
            }
        }
        attrs
    }

    /// All attribute spans, in application order.
    pub fn spans(&self) -> impl Iterator<Item = &Span> {
        self.spans.iter()
    }

    /// Spans overlapping a char range.
    pub fn spans_in_range(&self, range: Range<usize>) -> impl Iterator<Item = &Span> {
        self.spans
            .iter()
            .filter(move |span| span.range.start < range.end && range.start < span.range.end)
    }

    /// Remove all attribute spans, keeping the content.
    pub fn clear_attrs(&mut self) {
        self.spans.clear();
    }

    /// Append plain content.
    pub fn push_str(&mut self, text: &str) {
        let len = self.rope.len_chars();
        self.rope.insert(len, text);
    }

    /// Append another styled text, shifting its spans past this content.
    ///
    /// The left operand's default font wins for the combined value.
    pub fn append(&mut self, other: Self) {
        let offset = self.len_chars();
        self.push_str(&other.rope.to_string());
        self.spans
            .extend(other.spans.into_iter().map(|span| span.shifted(offset)));
        if self.default_font.is_none() {
            self.default_font = other.default_font;
        }
    }

    /// Concatenate two styled texts.
    ///
    /// Characters concatenate; the right operand's attribute ranges are
    /// offset by the left operand's char length.
    #[must_use]
    pub fn concat(mut self, other: Self) -> Self {
        self.append(other);
        self
    }
}

impl fmt::Display for StyledText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for chunk in self.rope.chunks() {
            f.write_str(chunk)?;
        }
        Ok(())
    }
}

impl From<&str> for StyledText {
    fn from(text: &str) -> Self {
        Self::plain(text)
    }
}

impl From<String> for StyledText {
    fn from(text: String) -> Self {
        Self::plain(&text)
    }
}

impl Add for StyledText {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        self.concat(rhs)
    }
}

impl AddAssign for StyledText {
    fn add_assign(&mut self, rhs: Self) {
        self.append(rhs);
    }
}
