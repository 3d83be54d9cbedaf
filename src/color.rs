//! RGB color type for text styling.
//!
//! This module provides the [`Rgb`] type, which represents colors using
//! 8-bit components. It supports:
//!
//! - **Color creation**: From u8 components or hex strings
//! - **Named constants**: The handful of colors styling call sites reach for
//! - **Parsing**: `FromStr` with a typed error for fallible call sites
//!
//! # Examples
//!
//! ```
//! use richtext_rust::Rgb;
//!
//! let red = Rgb::RED;
//! let custom = Rgb::from_hex("#1a1a2e").unwrap();
//! assert_eq!(custom.to_hex(), "#1a1a2e");
//! ```

use crate::error::Error;
use std::fmt;
use std::str::FromStr;

/// 24-bit RGB color with u8 components.
///
/// Colors are plain data here: the crate attaches them to character ranges
/// and rendering backends decide how to emit them. There is no alpha
/// channel because styled text is never composited.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// Black.
    pub const BLACK: Self = Self { r: 0, g: 0, b: 0 };

    /// White.
    pub const WHITE: Self = Self {
        r: 255,
        g: 255,
        b: 255,
    };

    /// Red.
    pub const RED: Self = Self { r: 255, g: 0, b: 0 };

    /// Green.
    pub const GREEN: Self = Self { r: 0, g: 255, b: 0 };

    /// Blue.
    pub const BLUE: Self = Self { r: 0, g: 0, b: 255 };

    /// Create a new RGB color from u8 components.
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse a hex color string (e.g., "#FF0000" or "FF0000").
    ///
    /// Supports 3-char (#RGB) and 6-char (#RRGGBB) formats.
    #[must_use]
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.strip_prefix('#').unwrap_or(hex);

        match hex.len() {
            3 => {
                // #RGB -> #RRGGBB
                let r = u8::from_str_radix(hex.get(0..1)?, 16).ok()?;
                let g = u8::from_str_radix(hex.get(1..2)?, 16).ok()?;
                let b = u8::from_str_radix(hex.get(2..3)?, 16).ok()?;
                Some(Self::new(r * 17, g * 17, b * 17))
            }
            6 => {
                let r = u8::from_str_radix(hex.get(0..2)?, 16).ok()?;
                let g = u8::from_str_radix(hex.get(2..4)?, 16).ok()?;
                let b = u8::from_str_radix(hex.get(4..6)?, 16).ok()?;
                Some(Self::new(r, g, b))
            }
            _ => None,
        }
    }

    /// Format as a lowercase "#rrggbb" hex string.
    #[must_use]
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl FromStr for Rgb {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s).ok_or_else(|| Error::InvalidColor(s.to_string()))
    }
}
