#![forbid(unsafe_code)]

//! Visual roles and the theme capability interface.
//!
//! A dropdown paints exactly four visual roles. [`Theme`] is the seam the
//! widget resolves them through: implementors supply one style token per
//! role, and the widget never sees colors or attributes directly.

use tracing::trace;

use crate::color::Ansi16;
use crate::style::Style;

/// The closed set of visual roles a dropdown renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StyleRole {
    /// An item row that is not selected.
    Text,
    /// The selected item row while the dropdown has focus.
    TextActive,
    /// The scrollbar track cell.
    Scrollbar,
    /// The scrollbar slider cell marking scroll progress.
    Slider,
}

/// Style provider for a dropdown: one accessor per visual role.
pub trait Theme {
    /// Style for a non-selected item row.
    fn text(&self) -> Style;

    /// Style for the selected item row (focused widget only).
    fn text_active(&self) -> Style;

    /// Style for the scrollbar track.
    fn scrollbar(&self) -> Style;

    /// Style for the scrollbar slider.
    fn slider(&self) -> Style;

    /// Resolve a role to its style token.
    fn style(&self, role: StyleRole) -> Style {
        trace!(?role, "theme.resolve");
        match role {
            StyleRole::Text => self.text(),
            StyleRole::TextActive => self.text_active(),
            StyleRole::Scrollbar => self.scrollbar(),
            StyleRole::Slider => self.slider(),
        }
    }
}

/// The stock theme: dark rows with a highlighted selection, a dim track,
/// and a bright slider.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DefaultTheme;

impl Theme for DefaultTheme {
    fn text(&self) -> Style {
        Style::new().fg(Ansi16::White).bg(Ansi16::BrightBlack)
    }

    fn text_active(&self) -> Style {
        Style::new().fg(Ansi16::Black).bg(Ansi16::Cyan)
    }

    fn scrollbar(&self) -> Style {
        Style::new().bg(Ansi16::BrightBlack)
    }

    fn slider(&self) -> Style {
        Style::new().bg(Ansi16::White)
    }
}
