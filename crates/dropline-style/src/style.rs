#![forbid(unsafe_code)]

//! The style token widgets hand to the renderer.

use crate::color::Color;

/// Text attribute flags.
///
/// A transparent bit set so styles stay `Copy` and cheap to compare.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(transparent)]
pub struct StyleFlags(pub u8);

impl StyleFlags {
    /// No attributes set.
    pub const NONE: Self = Self(0);
    /// Bold / increased intensity.
    pub const BOLD: Self = Self(1 << 0);
    /// Dim / decreased intensity.
    pub const DIM: Self = Self(1 << 1);
    /// Italic text.
    pub const ITALIC: Self = Self(1 << 2);
    /// Single underline.
    pub const UNDERLINE: Self = Self(1 << 3);
    /// Reverse video (swap fg/bg).
    pub const REVERSE: Self = Self(1 << 4);

    /// Check if this flags set contains another flags set.
    #[inline]
    #[must_use]
    pub const fn contains(self, other: Self) -> bool {
        (self.0 & other.0) == other.0
    }

    /// Insert flags into this set.
    #[inline]
    pub fn insert(&mut self, other: Self) {
        self.0 |= other.0;
    }

    /// Remove flags from this set.
    #[inline]
    pub fn remove(&mut self, other: Self) {
        self.0 &= !other.0;
    }

    /// Check if the flags set is empty.
    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Combine two flag sets (OR operation).
    #[inline]
    #[must_use]
    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }
}

impl core::ops::BitOr for StyleFlags {
    type Output = Self;

    #[inline]
    fn bitor(self, rhs: Self) -> Self::Output {
        Self(self.0 | rhs.0)
    }
}

impl core::ops::BitOrAssign for StyleFlags {
    #[inline]
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

/// An opaque style token: colors plus text attributes.
///
/// `None` color fields leave the terminal's current default in place.
///
/// # Example
/// ```
/// use dropline_style::{Ansi16, Style};
///
/// let style = Style::new().fg(Ansi16::White).bg(Ansi16::Blue).bold();
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Style {
    /// Foreground color (text color).
    pub fg: Option<Color>,
    /// Background color.
    pub bg: Option<Color>,
    /// Text attributes (bold, italic, etc.).
    pub attrs: StyleFlags,
}

impl Style {
    /// Create an empty style (terminal defaults, no attributes).
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            fg: None,
            bg: None,
            attrs: StyleFlags::NONE,
        }
    }

    /// Set foreground color.
    #[inline]
    #[must_use]
    pub fn fg<C: Into<Color>>(mut self, color: C) -> Self {
        self.fg = Some(color.into());
        self
    }

    /// Set background color.
    #[inline]
    #[must_use]
    pub fn bg<C: Into<Color>>(mut self, color: C) -> Self {
        self.bg = Some(color.into());
        self
    }

    /// Add bold.
    #[inline]
    #[must_use]
    pub fn bold(mut self) -> Self {
        self.attrs.insert(StyleFlags::BOLD);
        self
    }

    /// Add dim.
    #[inline]
    #[must_use]
    pub fn dim(mut self) -> Self {
        self.attrs.insert(StyleFlags::DIM);
        self
    }

    /// Add italic.
    #[inline]
    #[must_use]
    pub fn italic(mut self) -> Self {
        self.attrs.insert(StyleFlags::ITALIC);
        self
    }

    /// Add underline.
    #[inline]
    #[must_use]
    pub fn underline(mut self) -> Self {
        self.attrs.insert(StyleFlags::UNDERLINE);
        self
    }

    /// Add reverse video.
    #[inline]
    #[must_use]
    pub fn reverse(mut self) -> Self {
        self.attrs.insert(StyleFlags::REVERSE);
        self
    }

    /// Whether the style sets nothing at all.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.fg.is_none() && self.bg.is_none() && self.attrs.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Ansi16;

    #[test]
    fn builder_accumulates_attributes() {
        let style = Style::new().fg(Ansi16::White).bold().underline();
        assert_eq!(style.fg, Some(Color::Ansi(Ansi16::White)));
        assert_eq!(style.bg, None);
        assert!(style.attrs.contains(StyleFlags::BOLD));
        assert!(style.attrs.contains(StyleFlags::UNDERLINE));
        assert!(!style.attrs.contains(StyleFlags::ITALIC));
    }

    #[test]
    fn flags_insert_remove_union() {
        let mut flags = StyleFlags::BOLD | StyleFlags::DIM;
        assert!(flags.contains(StyleFlags::BOLD));
        flags.remove(StyleFlags::BOLD);
        assert!(!flags.contains(StyleFlags::BOLD));
        assert!(flags.contains(StyleFlags::DIM));

        let both = StyleFlags::ITALIC.union(StyleFlags::REVERSE);
        assert!(both.contains(StyleFlags::ITALIC | StyleFlags::REVERSE));
        assert!(!both.is_empty());
        assert!(StyleFlags::NONE.is_empty());
    }

    #[test]
    fn default_style_is_empty() {
        assert!(Style::default().is_empty());
        assert!(!Style::new().dim().is_empty());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn style_serde_round_trip() {
        let style = Style::new().fg(Ansi16::Blue).bg(Color::rgb(9, 8, 7)).bold();
        let json = serde_json::to_string(&style).unwrap();
        let back: Style = serde_json::from_str(&json).unwrap();
        assert_eq!(style, back);
    }
}
