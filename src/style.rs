//! Style attributes applied to character ranges.
//!
//! This module provides the attribute types attached to styled text:
//!
//! - [`TextAttributes`]: Bitflags for bold, italic, underline, etc.
//! - [`Attrs`]: The full attribute record (color, font, link, flags)
//! - [`AttrsBuilder`]: Fluent builder for constructing attribute records
//!
//! # Examples
//!
//! ```
//! use richtext_rust::{Attrs, Rgb, TextAttributes};
//!
//! // Quick creation
//! let warning = Attrs::fg(Rgb::RED).with_bold();
//!
//! // Builder for richer records
//! let link = Attrs::builder()
//!     .fg(Rgb::from_hex("#74b9ff").unwrap())
//!     .underline()
//!     .link("https://example.com")
//!     .build();
//!
//! // Merge records (overlay's set fields win)
//! let combined = Attrs::bold().merge(Attrs::fg(Rgb::RED));
//! assert!(combined.attributes.contains(TextAttributes::BOLD));
//! ```

use crate::color::Rgb;
use crate::font::Font;
use bitflags::bitflags;

bitflags! {
    /// Text rendering flags (bold, italic, underline, etc.).
    ///
    /// Flags can be combined using bitwise OR. How each flag is realized is
    /// up to the rendering surface; [`CODE`](Self::CODE) marks inline code
    /// spans produced by the markup parser.
    #[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
    pub struct TextAttributes: u8 {
        /// Bold/increased intensity.
        const BOLD          = 0x01;
        /// Italic.
        const ITALIC        = 0x02;
        /// Underlined text.
        const UNDERLINE     = 0x04;
        /// Strikethrough text.
        const STRIKETHROUGH = 0x08;
        /// Inline code span.
        const CODE          = 0x10;
    }
}

impl TextAttributes {
    /// Merge two flag sets (union).
    #[must_use]
    pub const fn merge(self, other: Self) -> Self {
        Self::from_bits_retain(self.bits() | other.bits())
    }
}

/// Complete attribute record for a character range.
///
/// Every field is independently settable; a field left as `None` (or empty
/// flags) means "no opinion" and defers to whatever applies underneath —
/// earlier spans, the text's default font, or the surface default.
///
/// # Underline color
///
/// `underline_color` is stored and merged like any other field, but the
/// bundled ANSI backend never emits it. The behavior is inherited from the
/// source material, where underline color is documented as non-functional;
/// the field is kept so the data model stays complete.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Attrs {
    /// Foreground color (None = surface default).
    pub foreground: Option<Rgb>,
    /// Font descriptor (None = text default, then surface default).
    pub font: Option<Font>,
    /// Underline color. Stored but not rendered; see type docs.
    pub underline_color: Option<Rgb>,
    /// Hyperlink target attached to the range.
    pub link: Option<String>,
    /// Rendering flags.
    pub attributes: TextAttributes,
}

impl Attrs {
    /// Empty record with no fields set.
    pub const NONE: Self = Self {
        foreground: None,
        font: None,
        underline_color: None,
        link: None,
        attributes: TextAttributes::empty(),
    };

    /// Create a new attribute builder.
    #[must_use]
    pub fn builder() -> AttrsBuilder {
        AttrsBuilder::default()
    }

    /// Create a record with only a foreground color.
    #[must_use]
    pub const fn fg(color: Rgb) -> Self {
        Self {
            foreground: Some(color),
            font: None,
            underline_color: None,
            link: None,
            attributes: TextAttributes::empty(),
        }
    }

    /// Create a record with only the bold flag.
    #[must_use]
    pub const fn bold() -> Self {
        Self {
            foreground: None,
            font: None,
            underline_color: None,
            link: None,
            attributes: TextAttributes::BOLD,
        }
    }

    /// Create a record with only the italic flag.
    #[must_use]
    pub const fn italic() -> Self {
        Self {
            foreground: None,
            font: None,
            underline_color: None,
            link: None,
            attributes: TextAttributes::ITALIC,
        }
    }

    /// Create a record with only the underline flag.
    #[must_use]
    pub const fn underline() -> Self {
        Self {
            foreground: None,
            font: None,
            underline_color: None,
            link: None,
            attributes: TextAttributes::UNDERLINE,
        }
    }

    /// Create a record with only the strikethrough flag.
    #[must_use]
    pub const fn strikethrough() -> Self {
        Self {
            foreground: None,
            font: None,
            underline_color: None,
            link: None,
            attributes: TextAttributes::STRIKETHROUGH,
        }
    }

    /// Create a record with only a hyperlink target.
    #[must_use]
    pub fn link(target: impl Into<String>) -> Self {
        Self {
            link: Some(target.into()),
            ..Self::NONE
        }
    }

    /// Return a copy with the given foreground color.
    #[must_use]
    pub fn with_fg(mut self, color: Rgb) -> Self {
        self.foreground = Some(color);
        self
    }

    /// Return a copy with the given font.
    #[must_use]
    pub fn with_font(mut self, font: Font) -> Self {
        self.font = Some(font);
        self
    }

    /// Return a copy with the given underline color.
    #[must_use]
    pub fn with_underline_color(mut self, color: Rgb) -> Self {
        self.underline_color = Some(color);
        self
    }

    /// Return a copy with the given hyperlink target.
    #[must_use]
    pub fn with_link(mut self, target: impl Into<String>) -> Self {
        self.link = Some(target.into());
        self
    }

    /// Return a copy with the given flags added.
    #[must_use]
    pub fn with_attributes(mut self, attrs: TextAttributes) -> Self {
        self.attributes = self.attributes.merge(attrs);
        self
    }

    /// Return a copy with the bold flag added.
    #[must_use]
    pub fn with_bold(self) -> Self {
        self.with_attributes(TextAttributes::BOLD)
    }

    /// Return a copy with the italic flag added.
    #[must_use]
    pub fn with_italic(self) -> Self {
        self.with_attributes(TextAttributes::ITALIC)
    }

    /// Return a copy with the underline flag added.
    #[must_use]
    pub fn with_underline(self) -> Self {
        self.with_attributes(TextAttributes::UNDERLINE)
    }

    /// Check if this record has any field set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.foreground.is_none()
            && self.font.is_none()
            && self.underline_color.is_none()
            && self.link.is_none()
            && self.attributes.is_empty()
    }

    /// Merge two records, with `other` taking precedence for set fields.
    ///
    /// Unset fields in `other` leave the corresponding field of `self`
    /// untouched; flags are unioned.
    #[must_use]
    pub fn merge(self, other: Self) -> Self {
        Self {
            foreground: other.foreground.or(self.foreground),
            font: other.font.or(self.font),
            underline_color: other.underline_color.or(self.underline_color),
            link: other.link.or(self.link),
            attributes: self.attributes.merge(other.attributes),
        }
    }
}

/// Builder for creating attribute records fluently.
#[derive(Clone, Debug, Default)]
pub struct AttrsBuilder {
    attrs: Attrs,
}

impl AttrsBuilder {
    /// Set foreground color.
    #[must_use]
    pub fn fg(mut self, color: Rgb) -> Self {
        self.attrs.foreground = Some(color);
        self
    }

    /// Set the font.
    #[must_use]
    pub fn font(mut self, font: Font) -> Self {
        self.attrs.font = Some(font);
        self
    }

    /// Set the underline color.
    #[must_use]
    pub fn underline_color(mut self, color: Rgb) -> Self {
        self.attrs.underline_color = Some(color);
        self
    }

    /// Set the hyperlink target.
    #[must_use]
    pub fn link(mut self, target: impl Into<String>) -> Self {
        self.attrs.link = Some(target.into());
        self
    }

    /// Add the bold flag.
    #[must_use]
    pub fn bold(mut self) -> Self {
        self.attrs.attributes |= TextAttributes::BOLD;
        self
    }

    /// Add the italic flag.
    #[must_use]
    pub fn italic(mut self) -> Self {
        self.attrs.attributes |= TextAttributes::ITALIC;
        self
    }

    /// Add the underline flag.
    #[must_use]
    pub fn underline(mut self) -> Self {
        self.attrs.attributes |= TextAttributes::UNDERLINE;
        self
    }

    /// Add the strikethrough flag.
    #[must_use]
    pub fn strikethrough(mut self) -> Self {
        self.attrs.attributes |= TextAttributes::STRIKETHROUGH;
        self
    }

    /// Build the final record.
    #[must_use]
    pub fn build(self) -> Attrs {
        self.attrs
    }
}
