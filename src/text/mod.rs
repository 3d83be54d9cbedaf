//! Attributed text storage.
//!
//! Key types:
//!
//! - [`StyledText`]: character content plus a char-range-to-attributes map
//! - [`Span`]: one attributed range
//!
//! # Examples
//!
//! ```
//! use richtext_rust::{Rgb, StyledText};
//!
//! let mut text = StyledText::from("Red Green Blue");
//! text.style("Red", |a| a.foreground = Some(Rgb::RED));
//! assert_eq!(text.to_string(), "Red Green Blue");
//! ```

mod span;
mod styled;

pub use span::Span;
pub use styled::StyledText;
