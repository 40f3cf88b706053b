#![forbid(unsafe_code)]

//! ANSI emission for the dropline dropdown.
//!
//! Turns [`Style`](dropline_style::Style) tokens into SGR escape sequences
//! and provides the cursor-movement sequences the dropdown renderer needs.
//! Pure string building; no I/O and no terminal state.

/// SGR encoding and cursor-movement sequences.
pub mod ansi;

pub use ansi::{RESET, cursor_back, cursor_down, sgr, styled};
