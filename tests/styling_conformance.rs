//! Conformance tests for substring styling semantics.
//!
//! Each test pins one documented behavior of `StyledText::style`: exact
//! range targeting, the silent no-op on a missing match, idempotence,
//! chaining, overlap precedence, and first-occurrence-only matching.

use richtext_rust::{Rgb, StyledText, TextAttributes};

#[test]
fn present_query_styles_exact_range() {
    let mut text = StyledText::from("Red Green Blue");
    text.style("Green", |a| {
        a.foreground = Some(Rgb::GREEN);
        a.attributes |= TextAttributes::BOLD;
    });

    assert_eq!(text.to_string(), "Red Green Blue");
    for pos in 4..9 {
        let attrs = text.attrs_at(pos);
        assert_eq!(attrs.foreground, Some(Rgb::GREEN));
        assert!(attrs.attributes.contains(TextAttributes::BOLD));
        assert!(attrs.font.is_none());
        assert!(attrs.link.is_none());
        assert!(attrs.underline_color.is_none());
    }
    for pos in (0..4).chain(9..14) {
        assert!(text.attrs_at(pos).is_empty(), "unexpected attrs at {pos}");
    }
}

#[test]
fn absent_query_is_silent_noop() {
    let mut text = StyledText::from("Red Green Blue");
    let mut invoked = false;
    text.style("Purple", |_| invoked = true);

    assert!(!invoked, "configure closure ran for an absent query");
    assert_eq!(text.to_string(), "Red Green Blue");
    assert_eq!(text.spans().count(), 0);
}

#[test]
fn absent_query_emits_debug_log() {
    use std::sync::Arc;
    use std::sync::atomic::{AtomicBool, Ordering};
    use richtext_rust::{LogLevel, set_log_callback};

    let seen = Arc::new(AtomicBool::new(false));
    let seen_clone = Arc::clone(&seen);
    set_log_callback(move |level, msg| {
        if level == LogLevel::Debug && msg.contains("Purple") {
            seen_clone.store(true, Ordering::SeqCst);
        }
    });

    StyledText::from("Red Green Blue").style("Purple", |_| {});
    assert!(seen.load(Ordering::SeqCst));
}

#[test]
fn styling_twice_equals_styling_once() {
    let mut once = StyledText::from("Red Green Blue");
    once.style("Red", |a| a.foreground = Some(Rgb::RED));

    let mut twice = StyledText::from("Red Green Blue");
    twice
        .style("Red", |a| a.foreground = Some(Rgb::RED))
        .style("Red", |a| a.foreground = Some(Rgb::RED));

    for pos in 0..once.len_chars() {
        assert_eq!(once.attrs_at(pos), twice.attrs_at(pos));
    }
    assert_eq!(once.to_string(), twice.to_string());
}

#[test]
fn chaining_styles_three_disjoint_ranges() {
    let mut text = StyledText::from("Red Green Blue");
    text.style("Red", |a| a.foreground = Some(Rgb::RED))
        .style("Green", |a| a.foreground = Some(Rgb::GREEN))
        .style("Blue", |a| a.foreground = Some(Rgb::BLUE));

    assert_eq!(text.to_string(), "Red Green Blue");

    let spans: Vec<_> = text.spans().collect();
    assert_eq!(spans.len(), 3);
    assert_eq!(spans[0].range, 0..3);
    assert_eq!(spans[1].range, 4..9);
    assert_eq!(spans[2].range, 10..14);
    for (i, a) in spans.iter().enumerate() {
        for b in spans.iter().skip(i + 1) {
            assert!(!a.overlaps(b), "expected disjoint ranges");
        }
    }

    assert_eq!(text.attrs_at(0).foreground, Some(Rgb::RED));
    assert_eq!(text.attrs_at(4).foreground, Some(Rgb::GREEN));
    assert_eq!(text.attrs_at(10).foreground, Some(Rgb::BLUE));
    assert!(text.attrs_at(3).is_empty());
    assert!(text.attrs_at(9).is_empty());
}

#[test]
fn overlap_later_call_wins() {
    let mut text = StyledText::from("Red Green Blue");
    text.style("Red", |a| {
        a.foreground = Some(Rgb::RED);
        a.attributes |= TextAttributes::UNDERLINE;
    })
    .style("Red Green", |a| a.foreground = Some(Rgb::BLUE));

    // Later call's set fields win on the shared characters...
    for pos in 0..3 {
        assert_eq!(text.attrs_at(pos).foreground, Some(Rgb::BLUE));
        // ...while fields it left unset are untouched.
        assert!(
            text.attrs_at(pos)
                .attributes
                .contains(TextAttributes::UNDERLINE)
        );
    }
    // Characters only the later call covers
    for pos in 3..9 {
        assert_eq!(text.attrs_at(pos).foreground, Some(Rgb::BLUE));
        assert!(
            !text
                .attrs_at(pos)
                .attributes
                .contains(TextAttributes::UNDERLINE)
        );
    }
}

#[test]
fn multiple_occurrences_only_first_styled() {
    let mut text = StyledText::from("Red Red");
    text.style("Red", |a| a.foreground = Some(Rgb::RED));

    assert_eq!(text.find("Red"), Some(0..3));
    for pos in 0..3 {
        assert_eq!(text.attrs_at(pos).foreground, Some(Rgb::RED));
    }
    for pos in 3..7 {
        assert!(text.attrs_at(pos).is_empty(), "second occurrence styled");
    }
}

#[test]
fn full_demo_composition() {
    // The whole original demo value: markup, substring styling, and
    // concatenation produce one consistent model.
    let mut demo = StyledText::from("Red Green Blue");
    demo.style("Red", |a| a.foreground = Some(Rgb::RED))
        .style("Green", |a| a.foreground = Some(Rgb::GREEN))
        .style("Blue", |a| a.foreground = Some(Rgb::BLUE));

    let combined = StyledText::styled("Hello", |a| a.foreground = Some(Rgb::RED))
        + StyledText::from(", ")
        + StyledText::styled("World", |a| a.foreground = Some(Rgb::GREEN))
        + StyledText::from("!");

    let all = demo + StyledText::from("\n") + combined;
    assert_eq!(all.to_string(), "Red Green Blue\nHello, World!");
    assert_eq!(all.attrs_at(0).foreground, Some(Rgb::RED));
    assert_eq!(all.attrs_at(15).foreground, Some(Rgb::RED));
    assert_eq!(all.attrs_at(22).foreground, Some(Rgb::GREEN));
    assert!(all.attrs_at(14).is_empty());
    assert!(all.attrs_at(27).is_empty());
}
