//! Fuzz target for inline markup parsing.
//!
//! Tests that markup::parse handles arbitrary strings without panicking.

#![no_main]

use libfuzzer_sys::fuzz_target;
use richtext_rust::markup;

fuzz_target!(|data: &str| {
    let parsed = markup::parse(data);

    // Delimiters are only ever consumed, so output never grows
    assert!(parsed.len_bytes() <= data.len());

    // Every recorded span stays inside the emitted content
    let len = parsed.len_chars();
    for span in parsed.spans() {
        assert!(span.range.end <= len);
        assert!(span.range.start < span.range.end);
    }
});
