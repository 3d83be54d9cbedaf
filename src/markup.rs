//! Inline markup parsing.
//!
//! Parses the lightweight inline syntax into a [`StyledText`]:
//!
//! - `*italic*` / `_italic_`
//! - `**bold**` / `__bold__`
//! - `***bold italic***`
//! - `~strike~` / `~~strike~~`
//! - `` `code` `` (contents taken verbatim)
//! - `[label](url)` (label taken literally)
//! - backslash escapes for the delimiter characters
//!
//! Delimiters are consumed; the produced spans cover the emitted content.
//! Unterminated delimiters are literal text, never errors.
//!
//! # Examples
//!
//! ```
//! use richtext_rust::{TextAttributes, markup};
//!
//! let text = markup::parse("plain *italic* **bold**");
//! assert_eq!(text.to_string(), "plain italic bold");
//! assert!(text.attrs_at(6).attributes.contains(TextAttributes::ITALIC));
//! assert!(text.attrs_at(13).attributes.contains(TextAttributes::BOLD));
//! ```

use crate::style::{Attrs, TextAttributes};
use crate::text::StyledText;

/// Emphasis nesting cap; delimiters nested deeper are literal.
const MAX_DEPTH: usize = 32;

/// Parse inline markup into a styled text.
#[must_use]
pub fn parse(input: &str) -> StyledText {
    let mut out = StyledText::new();
    parse_into(input, &mut out, 0);
    out
}

fn is_escaped(bytes: &[u8], idx: usize) -> bool {
    idx > 0 && bytes[idx - 1] == b'\\'
}

fn is_escapable(b: u8) -> bool {
    matches!(
        b,
        b'\\' | b'*' | b'_' | b'~' | b'`' | b'[' | b']' | b'(' | b')'
    )
}

fn in_ranges(idx: usize, ranges: &[(usize, usize)]) -> bool {
    ranges.iter().any(|&(start, end)| idx >= start && idx < end)
}

/// Byte ranges of complete code spans, delimiters included.
fn scan_code_spans(src: &str) -> Vec<(usize, usize)> {
    let mut ranges = Vec::new();
    let bytes = src.as_bytes();
    let mut i = 0usize;
    while i < bytes.len() {
        if bytes[i] == b'`' && !is_escaped(bytes, i) {
            let start = i;
            i += 1;
            while i < bytes.len() {
                if bytes[i] == b'`' && !is_escaped(bytes, i) {
                    let end = i + 1;
                    ranges.push((start, end));
                    i = end;
                    break;
                }
                i += 1;
            }
        } else {
            i += 1;
        }
    }
    ranges
}

/// Try to read an inline link starting at the `[` at `open`.
///
/// Returns (label, url, byte offset past the closing paren).
fn scan_link(src: &str, open: usize) -> Option<(&str, &str, usize)> {
    let bytes = src.as_bytes();
    let mut j = open + 1;
    while j < bytes.len() && bytes[j] != b']' {
        j += 1;
    }
    if j >= bytes.len() {
        return None;
    }
    let next = j + 1;
    if next >= bytes.len() || bytes[next] != b'(' {
        return None;
    }
    let mut k = next + 1;
    while k < bytes.len() && bytes[k] != b')' {
        k += 1;
    }
    if k >= bytes.len() {
        return None;
    }
    Some((&src[open + 1..j], &src[next + 1..k], k + 1))
}

/// Find a closing delimiter run of exactly `run` copies of `delim`.
///
/// Skips escaped delimiters and anything inside a code span; requires a
/// non-empty body.
fn find_closer(
    bytes: &[u8],
    from: usize,
    delim: u8,
    run: usize,
    code_spans: &[(usize, usize)],
) -> Option<usize> {
    let mut j = from;
    while j + run <= bytes.len() {
        if j > from
            && bytes[j..j + run].iter().all(|&b| b == delim)
            && !is_escaped(bytes, j)
            && !in_ranges(j, code_spans)
        {
            return Some(j);
        }
        j += 1;
    }
    None
}

const fn emphasis_flags(delim: u8, run: usize) -> TextAttributes {
    if delim == b'~' {
        TextAttributes::STRIKETHROUGH
    } else {
        match run {
            1 => TextAttributes::ITALIC,
            2 => TextAttributes::BOLD,
            _ => TextAttributes::BOLD.union(TextAttributes::ITALIC),
        }
    }
}

fn flush(literal: &mut String, out: &mut StyledText) {
    if !literal.is_empty() {
        out.push_str(literal);
        literal.clear();
    }
}

fn parse_into(src: &str, out: &mut StyledText, depth: usize) {
    let bytes = src.as_bytes();
    let code_spans = scan_code_spans(src);
    let mut literal = String::new();
    let mut i = 0usize;

    while i < bytes.len() {
        match bytes[i] {
            b'\\' if i + 1 < bytes.len() && is_escapable(bytes[i + 1]) => {
                literal.push(bytes[i + 1] as char);
                i += 2;
            }
            b'`' => {
                if let Some(&(_, end)) = code_spans.iter().find(|&&(start, _)| start == i) {
                    flush(&mut literal, out);
                    let inner = &src[i + 1..end - 1];
                    if !inner.is_empty() {
                        let from = out.len_chars();
                        out.push_str(inner);
                        out.set_attrs(
                            from..out.len_chars(),
                            Attrs::NONE.with_attributes(TextAttributes::CODE),
                        );
                    }
                    i = end;
                } else {
                    literal.push('`');
                    i += 1;
                }
            }
            b'[' => {
                if let Some((label, url, end)) = scan_link(src, i) {
                    flush(&mut literal, out);
                    if !label.is_empty() {
                        let from = out.len_chars();
                        out.push_str(label);
                        out.set_attrs(from..out.len_chars(), Attrs::link(url));
                    }
                    i = end;
                } else {
                    literal.push('[');
                    i += 1;
                }
            }
            delim @ (b'*' | b'_' | b'~') if depth < MAX_DEPTH => {
                let max_run = if delim == b'~' { 2 } else { 3 };
                let mut run = 1;
                while run < max_run && i + run < bytes.len() && bytes[i + run] == delim {
                    run += 1;
                }
                if let Some(close) = find_closer(bytes, i + run, delim, run, &code_spans) {
                    flush(&mut literal, out);
                    let from = out.len_chars();
                    parse_into(&src[i + run..close], out, depth + 1);
                    out.set_attrs(
                        from..out.len_chars(),
                        Attrs::NONE.with_attributes(emphasis_flags(delim, run)),
                    );
                    i = close + run;
                } else {
                    for _ in 0..run {
                        literal.push(delim as char);
                    }
                    i += run;
                }
            }
            _ => {
                let ch = src[i..].chars().next().expect("byte index on char boundary");
                literal.push(ch);
                i += ch.len_utf8();
            }
        }
    }
    flush(&mut literal, out);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain_is_identity() {
        let text = parse("no markup here");
        assert_eq!(text.to_string(), "no markup here");
        assert_eq!(text.spans().count(), 0);
    }

    #[test]
    fn test_parse_demo_line() {
        let text = parse("plain *italic* **bold** ~strike~ `code`, [link](https://apple.com)");
        assert_eq!(text.to_string(), "plain italic bold strike code, link");

        assert!(text.attrs_at(0).is_empty());
        assert!(text.attrs_at(6).attributes.contains(TextAttributes::ITALIC));
        assert!(text.attrs_at(13).attributes.contains(TextAttributes::BOLD));
        assert!(
            text.attrs_at(18)
                .attributes
                .contains(TextAttributes::STRIKETHROUGH)
        );
        assert!(text.attrs_at(25).attributes.contains(TextAttributes::CODE));
        assert_eq!(
            text.attrs_at(31).link.as_deref(),
            Some("https://apple.com")
        );
    }

    #[test]
    fn test_parse_nested_emphasis() {
        let text = parse("**a *b* c**");
        assert_eq!(text.to_string(), "a b c");

        let outer = text.attrs_at(0).attributes;
        assert!(outer.contains(TextAttributes::BOLD));
        assert!(!outer.contains(TextAttributes::ITALIC));

        let inner = text.attrs_at(2).attributes;
        assert!(inner.contains(TextAttributes::BOLD));
        assert!(inner.contains(TextAttributes::ITALIC));
    }

    #[test]
    fn test_parse_triple_emphasis() {
        let text = parse("***both***");
        assert_eq!(text.to_string(), "both");
        let attrs = text.attrs_at(0).attributes;
        assert!(attrs.contains(TextAttributes::BOLD));
        assert!(attrs.contains(TextAttributes::ITALIC));
    }

    #[test]
    fn test_parse_underscore_variants() {
        let text = parse("_i_ __b__");
        assert_eq!(text.to_string(), "i b");
        assert!(text.attrs_at(0).attributes.contains(TextAttributes::ITALIC));
        assert!(text.attrs_at(2).attributes.contains(TextAttributes::BOLD));
    }

    #[test]
    fn test_parse_double_tilde() {
        let text = parse("~~strike~~");
        assert_eq!(text.to_string(), "strike");
        assert!(
            text.attrs_at(0)
                .attributes
                .contains(TextAttributes::STRIKETHROUGH)
        );
    }

    #[test]
    fn test_parse_escaping() {
        let text = parse("\\*not italic\\*");
        assert_eq!(text.to_string(), "*not italic*");
        assert_eq!(text.spans().count(), 0);
    }

    #[test]
    fn test_parse_unterminated_is_literal() {
        assert_eq!(parse("*abc").to_string(), "*abc");
        assert_eq!(parse("*abc").spans().count(), 0);

        assert_eq!(parse("`code").to_string(), "`code");
        assert_eq!(parse("[label](no-close").to_string(), "[label](no-close");
    }

    #[test]
    fn test_parse_emphasis_never_closes_inside_code() {
        let text = parse("*a `*` b*");
        assert_eq!(text.to_string(), "a * b");
        assert!(text.attrs_at(0).attributes.contains(TextAttributes::ITALIC));
        assert!(text.attrs_at(2).attributes.contains(TextAttributes::CODE));
    }

    #[test]
    fn test_parse_code_contents_verbatim() {
        let text = parse("`*a*`");
        assert_eq!(text.to_string(), "*a*");
        let attrs = text.attrs_at(0).attributes;
        assert!(attrs.contains(TextAttributes::CODE));
        assert!(!attrs.contains(TextAttributes::ITALIC));
    }

    #[test]
    fn test_parse_link_label_is_literal() {
        let text = parse("[*a*](https://example.com)");
        assert_eq!(text.to_string(), "*a*");
        assert_eq!(text.attrs_at(0).link.as_deref(), Some("https://example.com"));
        assert!(!text.attrs_at(0).attributes.contains(TextAttributes::ITALIC));
    }

    #[test]
    fn test_parse_empty() {
        let text = parse("");
        assert!(text.is_empty());
        assert_eq!(text.spans().count(), 0);
    }
}
