//! Fuzz target for color hex parsing.
//!
//! Tests that Rgb::from_hex handles arbitrary strings without panicking.

#![no_main]

use libfuzzer_sys::fuzz_target;
use richtext_rust::Rgb;

fuzz_target!(|data: &str| {
    // This should never panic, just return None for invalid input
    let _ = Rgb::from_hex(data);

    // Also try with a # prefix if not already present
    if !data.starts_with('#') {
        let with_hash = format!("#{data}");
        let _ = Rgb::from_hex(&with_hash);
    }

    // Parsed values must roundtrip through their hex form
    if let Some(color) = Rgb::from_hex(data) {
        assert_eq!(Rgb::from_hex(&color.to_hex()), Some(color));
    }
});
