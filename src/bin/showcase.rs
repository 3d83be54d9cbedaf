//! Showcase binary: renders the styling APIs as ANSI lines on stdout.
//!
//! Demonstrates:
//! - Inline markup parsing
//! - Substring styling with chained calls
//! - Concatenation of independently styled fragments
//! - Font descriptors and column-padded rows
//! - OSC 8 hyperlinks

use richtext_rust::{Font, Rgb, StyledText, ansi, markup};

fn demo() -> StyledText {
    let mut s = StyledText::from("Red Green Blue");
    s.style("Red", |a| a.foreground = Some(Rgb::RED))
        .style("Green", |a| a.foreground = Some(Rgb::GREEN))
        .style("Blue", |a| a.foreground = Some(Rgb::BLUE));
    s
}

fn padded(cell: &StyledText, width: usize) -> String {
    let pad = width.saturating_sub(cell.width());
    format!("{}{}", ansi::render(cell), " ".repeat(pad))
}

fn main() {
    // Inline markup path
    let markup_line =
        markup::parse("plain *italic* **bold** ~strike~ `code`, [link](https://apple.com)");
    println!("{}", ansi::render(&markup_line));

    // Substring styling path
    println!("{}", ansi::render(&demo()));

    // Concatenating fragments that each carry their own attributes
    let hello = StyledText::styled("Hello", |a| a.foreground = Some(Rgb::RED))
        + StyledText::from(", ")
        + StyledText::styled("World", |a| a.foreground = Some(Rgb::GREEN))
        + StyledText::from("!");
    println!("{}", ansi::render(&hello));

    // A row of independently fonted words, padded into columns
    let cells = [
        StyledText::styled("Red", |a| {
            a.foreground = Some(Rgb::RED);
            a.font = Some(Font::system(24.0).bold().italic());
        }),
        StyledText::styled("Green", |a| {
            a.foreground = Some(Rgb::GREEN);
            a.font = Some(Font::monospaced(36.0));
        }),
        StyledText::styled("Blue", |a| {
            a.foreground = Some(Rgb::BLUE);
            a.underline_color = Some(Rgb::GREEN); // stored, never rendered
        }),
    ];
    let col = cells.iter().map(StyledText::width).max().unwrap_or(0);
    let row: Vec<String> = cells.iter().map(|cell| padded(cell, col)).collect();
    println!("{}", row.join(" "));

    // Hyperlinked word
    let apple = StyledText::styled("Apple", |a| {
        a.link = Some("https://apple.com".to_string());
        a.underline_color = Some(Rgb::BLUE); // stored, never rendered
    });
    println!("{}", ansi::render(&apple));
}
