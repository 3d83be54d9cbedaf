//! Font descriptors for styled text.
//!
//! A [`Font`] is a description, not a rasterizer handle: it names a family
//! class, a point size, a weight, and an italic flag, and leaves resolution
//! to whatever surface renders the text. Constructors are fluent so call
//! sites read like the styles they produce:
//!
//! ```
//! use richtext_rust::Font;
//!
//! let heading = Font::system(24.0).bold().italic();
//! let code = Font::monospaced(36.0);
//! assert!(heading.is_bold());
//! ```

/// Font family class.
///
/// Families are abstract classes rather than concrete face names; the
/// rendering surface picks the actual face.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum FontFamily {
    /// The surface's default UI family.
    #[default]
    Default,
    /// A fixed-width family.
    Monospaced,
    /// A serif family.
    Serif,
    /// A rounded variant of the default family.
    Rounded,
}

/// Font weight.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FontWeight {
    Light,
    #[default]
    Regular,
    Medium,
    Bold,
}

/// Complete font descriptor: family, size, weight, and italic flag.
///
/// `Font` is immutable and cheap to copy; the `with`-style modifiers return
/// adjusted copies.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Font {
    /// Family class.
    pub family: FontFamily,
    /// Point size.
    pub size: f32,
    /// Weight.
    pub weight: FontWeight,
    /// Italic flag.
    pub italic: bool,
}

impl Font {
    /// Default point size used by [`Font::default`].
    pub const DEFAULT_SIZE: f32 = 16.0;

    /// Create a font in the default family at the given size.
    #[must_use]
    pub const fn system(size: f32) -> Self {
        Self {
            family: FontFamily::Default,
            size,
            weight: FontWeight::Regular,
            italic: false,
        }
    }

    /// Create a fixed-width font at the given size.
    #[must_use]
    pub const fn monospaced(size: f32) -> Self {
        Self {
            family: FontFamily::Monospaced,
            size,
            weight: FontWeight::Regular,
            italic: false,
        }
    }

    /// Return a copy with the given family.
    #[must_use]
    pub const fn family(self, family: FontFamily) -> Self {
        Self { family, ..self }
    }

    /// Return a copy with the given size.
    #[must_use]
    pub const fn size(self, size: f32) -> Self {
        Self { size, ..self }
    }

    /// Return a copy with the given weight.
    #[must_use]
    pub const fn weight(self, weight: FontWeight) -> Self {
        Self { weight, ..self }
    }

    /// Return a bold copy.
    #[must_use]
    pub const fn bold(self) -> Self {
        self.weight(FontWeight::Bold)
    }

    /// Return an italic copy.
    #[must_use]
    pub const fn italic(self) -> Self {
        Self {
            italic: true,
            ..self
        }
    }

    /// Check whether the weight is bold.
    #[must_use]
    pub fn is_bold(&self) -> bool {
        self.weight == FontWeight::Bold
    }
}

impl Default for Font {
    fn default() -> Self {
        Self::system(Self::DEFAULT_SIZE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_system_font_chain() {
        let font = Font::system(24.0).bold().italic();
        assert_eq!(font.family, FontFamily::Default);
        assert_eq!(font.size, 24.0);
        assert_eq!(font.weight, FontWeight::Bold);
        assert!(font.italic);
    }

    #[test]
    fn test_monospaced() {
        let font = Font::monospaced(36.0);
        assert_eq!(font.family, FontFamily::Monospaced);
        assert_eq!(font.size, 36.0);
        assert_eq!(font.weight, FontWeight::Regular);
        assert!(!font.italic);
    }

    #[test]
    fn test_default_font() {
        let font = Font::default();
        assert_eq!(font.size, Font::DEFAULT_SIZE);
        assert_eq!(font.family, FontFamily::Default);
    }

    #[test]
    fn test_weight_ordering() {
        assert!(FontWeight::Light < FontWeight::Regular);
        assert!(FontWeight::Regular < FontWeight::Bold);
    }
}
