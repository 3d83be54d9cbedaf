//! ANSI escape sequence rendering for styled text.
//!
//! [`render`] turns a [`StyledText`] into a string carrying SGR truecolor
//! and attribute sequences plus OSC 8 hyperlinks, suitable for writing to a
//! modern terminal. Output is emitted per run: maximal stretches of equal
//! effective attributes share one escape prefix.
//!
//! # Examples
//!
//! ```
//! use richtext_rust::{Rgb, StyledText, ansi};
//!
//! let mut text = StyledText::from("Red Green Blue");
//! text.style("Red", |a| a.foreground = Some(Rgb::RED));
//! let rendered = ansi::render(&text);
//! assert!(rendered.starts_with("\x1b[38;2;255;0;0mRed\x1b[0m"));
//! ```

use crate::style::{Attrs, TextAttributes};
use crate::text::StyledText;

/// Reset all attributes to default.
pub const RESET: &str = "\x1b[0m";

/// OSC 8 hyperlink close.
pub const LINK_CLOSE: &str = "\x1b]8;;\x1b\\";

/// OSC 8 hyperlink open for the given target.
#[must_use]
pub fn link_open(url: &str) -> String {
    format!("\x1b]8;;{url}\x1b\\")
}

/// SGR sequence for an attribute record, or an empty string if the record
/// sets nothing SGR-expressible.
///
/// Font weight and italic map onto the bold/italic SGR attributes; family
/// and size have no terminal equivalent and are skipped. Inline code
/// renders dim. Underline color is never emitted (see [`Attrs`] docs).
#[must_use]
pub fn sgr(attrs: &Attrs) -> String {
    let mut params: Vec<String> = Vec::new();
    let flags = attrs.attributes;
    let font_bold = attrs.font.is_some_and(|f| f.is_bold());
    let font_italic = attrs.font.is_some_and(|f| f.italic);

    if flags.contains(TextAttributes::BOLD) || font_bold {
        params.push("1".to_string());
    }
    if flags.contains(TextAttributes::CODE) {
        params.push("2".to_string());
    }
    if flags.contains(TextAttributes::ITALIC) || font_italic {
        params.push("3".to_string());
    }
    if flags.contains(TextAttributes::UNDERLINE) {
        params.push("4".to_string());
    }
    if flags.contains(TextAttributes::STRIKETHROUGH) {
        params.push("9".to_string());
    }
    if let Some(fg) = attrs.foreground {
        params.push(format!("38;2;{};{};{}", fg.r, fg.g, fg.b));
    }

    if params.is_empty() {
        String::new()
    } else {
        format!("\x1b[{}m", params.join(";"))
    }
}

/// Render a styled text as an ANSI-escaped string.
///
/// Attribute runs are bracketed with their SGR prefix and a reset; linked
/// runs are additionally wrapped in OSC 8 open/close.
#[must_use]
pub fn render(text: &StyledText) -> String {
    let content = text.to_string();
    let mut out = String::with_capacity(content.len() * 2);

    let mut active = Attrs::NONE;
    let mut active_sgr = String::new();

    for (idx, ch) in content.chars().enumerate() {
        let attrs = text.attrs_at(idx);
        if attrs != active {
            if active.link.is_some() && attrs.link != active.link {
                out.push_str(LINK_CLOSE);
            }
            if !active_sgr.is_empty() {
                out.push_str(RESET);
            }
            let seq = sgr(&attrs);
            if !seq.is_empty() {
                out.push_str(&seq);
            }
            if attrs.link != active.link {
                if let Some(url) = &attrs.link {
                    out.push_str(&link_open(url));
                }
            }
            active_sgr = seq;
            active = attrs;
        }
        out.push(ch);
    }

    if active.link.is_some() {
        out.push_str(LINK_CLOSE);
    }
    if !active_sgr.is_empty() {
        out.push_str(RESET);
    }
    out
}
