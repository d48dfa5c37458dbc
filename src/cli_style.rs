use clap::builder::styling::{AnsiColor, Color, Style};
use clap::builder::Styles;
use crossterm::style::{Attribute, Stylize};
use unicode_width::UnicodeWidthStr;

// ═══════════════════════════════════════════════════════════════════════════════
// Clap Styles
// ═══════════════════════════════════════════════════════════════════════════════

pub fn get_styles() -> Styles {
    clap::builder::Styles::styled()
        .usage(
            Style::new()
                .bold()
                .underline()
                .fg_color(Some(Color::Ansi(AnsiColor::Cyan))),
        )
        .header(
            Style::new()
                .bold()
                .underline()
                .fg_color(Some(Color::Ansi(AnsiColor::Cyan))),
        )
        .literal(
            Style::new()
                .bold()
                .fg_color(Some(Color::Ansi(AnsiColor::Green))),
        )
        .invalid(
            Style::new()
                .bold()
                .fg_color(Some(Color::Ansi(AnsiColor::Red))),
        )
        .error(
            Style::new()
                .bold()
                .fg_color(Some(Color::Ansi(AnsiColor::Red))),
        )
        .valid(
            Style::new()
                .bold()
                .fg_color(Some(Color::Ansi(AnsiColor::Green))),
        )
        .placeholder(Style::new().fg_color(Some(Color::Ansi(AnsiColor::BrightBlack))))
}

// ═══════════════════════════════════════════════════════════════════════════════
// Color Palette
// ═══════════════════════════════════════════════════════════════════════════════

pub mod colors {
    use crossterm::style::Color;

    pub const CYAN: Color = Color::Rgb {
        r: 0,
        g: 255,
        b: 255,
    };
    pub const GREEN: Color = Color::Rgb {
        r: 0,
        g: 255,
        b: 136,
    };
    pub const ORANGE: Color = Color::Rgb {
        r: 255,
        g: 165,
        b: 0,
    };
    pub const RED: Color = Color::Rgb {
        r: 255,
        g: 85,
        b: 85,
    };
    pub const DIM: Color = Color::Rgb {
        r: 128,
        g: 128,
        b: 128,
    };
    pub const WHITE: Color = Color::Rgb {
        r: 255,
        g: 255,
        b: 255,
    };
}

pub mod box_chars {
    pub const DOUBLE_HORIZONTAL: &str = "═";
    pub const CHECK: &str = "✓";
    pub const CROSS_MARK: &str = "✗";
}

const RULE_WIDTH: usize = 60;

// ═══════════════════════════════════════════════════════════════════════════════
// Banner
// ═══════════════════════════════════════════════════════════════════════════════

pub fn print_banner(base_url: &str, total: usize) {
    let title = "INVENTORY API CONFORMANCE";
    let padding = RULE_WIDTH.saturating_sub(title.width() + 2) / 2;
    println!();
    println!(
        "{} {} {}",
        box_chars::DOUBLE_HORIZONTAL
            .repeat(padding)
            .with(colors::CYAN),
        title.with(colors::CYAN).bold(),
        box_chars::DOUBLE_HORIZONTAL
            .repeat(RULE_WIDTH.saturating_sub(title.width() + 2 + padding))
            .with(colors::CYAN)
    );
    println!(
        "  {} {}  {}",
        "target:".with(colors::DIM),
        base_url.with(colors::WHITE),
        format!("({} checks)", total).with(colors::DIM)
    );
    print_rule();
}

pub fn print_rule() {
    println!(
        "{}",
        box_chars::DOUBLE_HORIZONTAL
            .repeat(RULE_WIDTH)
            .with(colors::CYAN)
    );
}

// ═══════════════════════════════════════════════════════════════════════════════
// Check Lines
// ═══════════════════════════════════════════════════════════════════════════════

pub fn print_pass(label: &str) {
    println!(
        " {} {} {}",
        box_chars::CHECK.with(colors::GREEN).bold(),
        "PASS".with(colors::GREEN).bold(),
        label.with(colors::WHITE)
    );
}

pub fn print_fail(label: &str) {
    println!(
        " {} {} {}",
        box_chars::CROSS_MARK.with(colors::RED).bold(),
        "FAIL".with(colors::RED).bold(),
        label.with(colors::WHITE)
    );
}

/// Indented detail under a check line. Multi-line values keep the indent.
pub fn print_detail(key: &str, value: &str) {
    let mut lines = value.lines();
    let first = lines.next().unwrap_or("");
    println!(
        "    {} {}",
        format!("{}:", key).with(colors::DIM),
        first.with(colors::WHITE)
    );
    let continuation = " ".repeat(key.width() + 6);
    for line in lines {
        println!("{}{}", continuation, line.with(colors::WHITE));
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Summary
// ═══════════════════════════════════════════════════════════════════════════════

pub fn print_summary(passed: usize, total: usize) {
    print_rule();
    let tally = format!("{}/{}", passed, total);
    println!(
        "  {} {} tests passed",
        "Test Results:".with(colors::CYAN).bold(),
        tally.with(colors::WHITE).bold()
    );
    if passed == total {
        println!(
            " {} {}",
            box_chars::CHECK.with(colors::GREEN).bold(),
            "All tests passed! API is working correctly.".with(colors::GREEN)
        );
    } else {
        println!(
            " {} {}",
            "⚠".with(colors::ORANGE).bold(),
            "Some tests failed. Please check the API implementation."
                .with(colors::ORANGE)
                .attribute(Attribute::Italic)
        );
    }
}
