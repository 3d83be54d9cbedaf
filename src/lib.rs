//! `richtext` - Attributed rich text for Rust
//!
//! A small library for building styled text values: character content plus
//! a mapping from char ranges to attributes (color, font, underline color,
//! hyperlink, rendering flags). Substrings are targeted by content, inline
//! markup parses into the same model, and an ANSI backend renders it.
//!
//! # Examples
//!
//! ```
//! use richtext_rust::{Rgb, StyledText, ansi};
//!
//! let mut text = StyledText::from("Red Green Blue");
//! text.style("Red", |a| a.foreground = Some(Rgb::RED))
//!     .style("Green", |a| a.foreground = Some(Rgb::GREEN))
//!     .style("Blue", |a| a.foreground = Some(Rgb::BLUE));
//!
//! println!("{}", ansi::render(&text));
//! ```

// Crate-level lint configuration
#![allow(clippy::module_name_repetitions)] // Allow TextAttributes etc
#![allow(clippy::missing_errors_doc)] // Docs WIP
#![allow(clippy::doc_markdown)] // Allow technical names without backticks
#![allow(clippy::use_self)] // Allow explicit type names in impl blocks
#![allow(clippy::items_after_statements)] // Common pattern in tests
#![allow(clippy::redundant_clone)] // Clones in tests for clarity are fine
#![allow(clippy::semicolon_if_nothing_returned)] // Style preference

pub mod ansi;
pub mod color;
pub mod error;
pub mod event;
pub mod font;
pub mod markup;
pub mod style;
pub mod text;

// Re-export core types at crate root
pub use color::Rgb;
pub use error::{Error, Result};
pub use event::{LogLevel, emit_log, set_log_callback};
pub use font::{Font, FontFamily, FontWeight};
pub use style::{Attrs, AttrsBuilder, TextAttributes};
pub use text::{Span, StyledText};
