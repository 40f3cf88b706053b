#![forbid(unsafe_code)]

//! Color types for terminal styling.

/// ANSI 16-color palette indices (0-15).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum Ansi16 {
    Black = 0,
    Red = 1,
    Green = 2,
    Yellow = 3,
    Blue = 4,
    Magenta = 5,
    Cyan = 6,
    White = 7,
    BrightBlack = 8,
    BrightRed = 9,
    BrightGreen = 10,
    BrightYellow = 11,
    BrightBlue = 12,
    BrightMagenta = 13,
    BrightCyan = 14,
    BrightWhite = 15,
}

impl Ansi16 {
    /// Palette index (0-15).
    #[inline]
    #[must_use]
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Whether this is one of the bright palette entries (8-15).
    #[inline]
    #[must_use]
    pub const fn is_bright(self) -> bool {
        self as u8 >= 8
    }
}

/// RGB color (opaque).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// A terminal color: a 16-color palette entry or a truecolor value.
///
/// The renderer decides the SGR encoding; this type stays encoding-free so
/// themes can be compared and serialized without an output layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Color {
    /// One of the 16 base palette colors.
    Ansi(Ansi16),
    /// A 24-bit truecolor value.
    Rgb(Rgb),
}

impl Color {
    /// Shorthand for a truecolor value.
    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::Rgb(Rgb::new(r, g, b))
    }
}

impl From<Ansi16> for Color {
    fn from(color: Ansi16) -> Self {
        Self::Ansi(color)
    }
}

impl From<Rgb> for Color {
    fn from(color: Rgb) -> Self {
        Self::Rgb(color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_indices_are_stable() {
        assert_eq!(Ansi16::Black.index(), 0);
        assert_eq!(Ansi16::White.index(), 7);
        assert_eq!(Ansi16::BrightBlack.index(), 8);
        assert_eq!(Ansi16::BrightWhite.index(), 15);
    }

    #[test]
    fn bright_split_is_at_eight() {
        assert!(!Ansi16::White.is_bright());
        assert!(Ansi16::BrightBlack.is_bright());
    }

    #[test]
    fn color_conversions() {
        assert_eq!(Color::from(Ansi16::Red), Color::Ansi(Ansi16::Red));
        assert_eq!(Color::rgb(1, 2, 3), Color::Rgb(Rgb::new(1, 2, 3)));
    }
}
