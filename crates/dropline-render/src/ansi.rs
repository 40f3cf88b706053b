#![forbid(unsafe_code)]

//! SGR encoding and cursor movement.
//!
//! SGR parameters are joined with `;` inside a single `CSI ... m` sequence.
//! Palette colors use the classic 30-37/90-97 (foreground) and
//! 40-47/100-107 (background) codes; truecolor uses `38;2;r;g;b` and
//! `48;2;r;g;b`.

use std::fmt::Write;

use dropline_style::{Ansi16, Color, Style, StyleFlags};

/// Control Sequence Introducer.
pub const CSI: &str = "\x1b[";

/// Reset all styling.
pub const RESET: &str = "\x1b[0m";

/// Attribute flag to SGR parameter mapping.
const ATTR_CODES: [(StyleFlags, u8); 5] = [
    (StyleFlags::BOLD, 1),
    (StyleFlags::DIM, 2),
    (StyleFlags::ITALIC, 3),
    (StyleFlags::UNDERLINE, 4),
    (StyleFlags::REVERSE, 7),
];

fn ansi16_code(color: Ansi16, base: u8, bright_base: u8) -> u8 {
    if color.is_bright() {
        bright_base + (color.index() - 8)
    } else {
        base + color.index()
    }
}

fn push_param(params: &mut String, value: u8) {
    if !params.is_empty() {
        params.push(';');
    }
    let _ = write!(params, "{value}");
}

fn push_color(params: &mut String, color: Color, base: u8, bright_base: u8, direct: u8) {
    match color {
        Color::Ansi(ansi) => push_param(params, ansi16_code(ansi, base, bright_base)),
        Color::Rgb(rgb) => {
            push_param(params, direct);
            push_param(params, 2);
            push_param(params, rgb.r);
            push_param(params, rgb.g);
            push_param(params, rgb.b);
        }
    }
}

/// Encode a style as a single SGR sequence.
///
/// An empty style encodes as the reset sequence, so applying it still
/// clears whatever styling the terminal had active.
#[must_use]
pub fn sgr(style: Style) -> String {
    if style.is_empty() {
        return RESET.to_string();
    }

    let mut params = String::new();
    for (flag, code) in ATTR_CODES {
        if style.attrs.contains(flag) {
            push_param(&mut params, code);
        }
    }
    if let Some(fg) = style.fg {
        push_color(&mut params, fg, 30, 90, 38);
    }
    if let Some(bg) = style.bg {
        push_color(&mut params, bg, 40, 100, 48);
    }

    format!("{CSI}{params}m")
}

/// Wrap text so the terminal applies `style` before it and resets after.
#[must_use]
pub fn styled(text: &str, style: Style) -> String {
    format!("{}{text}{RESET}", sgr(style))
}

/// Move the cursor down by `rows`.
#[must_use]
pub fn cursor_down(rows: usize) -> String {
    format!("{CSI}{rows}B")
}

/// Move the cursor left by `cols`.
#[must_use]
pub fn cursor_back(cols: usize) -> String {
    format!("{CSI}{cols}D")
}
