#![forbid(unsafe_code)]

//! Style types for the dropline dropdown widget.
//!
//! # Role in dropline
//! `dropline-style` is the shared vocabulary for colors and styling. The
//! render and widget crates use these types without dragging in any output
//! or terminal dependencies.
//!
//! # This crate provides
//! - [`Style`] — the opaque style token widgets hand to the renderer.
//! - [`StyleFlags`] and the [`Color`] / [`Ansi16`] / [`Rgb`] color types.
//! - [`Theme`] — the four-role capability interface a dropdown resolves its
//!   visual roles through, plus [`DefaultTheme`].

/// Color types for the 16-color palette and truecolor.
pub mod color;
/// The style token and its attribute flags.
pub mod style;
/// Visual roles and the theme capability interface.
pub mod theme;

pub use color::{Ansi16, Color, Rgb};
pub use style::{Style, StyleFlags};
pub use theme::{DefaultTheme, StyleRole, Theme};
