#![forbid(unsafe_code)]

//! Dropdown selector widgets for terminal line editors.
//!
//! A line editor showing completions owns exactly one dropdown per
//! navigation session and drives it through the [`Dropdown`] trait:
//! [`ListDropdown`] for a non-empty item list, [`NullDropdown`] when there
//! is nothing to offer. Rendering produces a ready-to-print ANSI string;
//! the widget performs no I/O itself.

/// The scrolling list dropdown.
pub mod dropdown;
/// The no-op empty-state variant.
pub mod null;

pub use dropdown::{DropdownError, ListDropdown, Rendered};
pub use null::NullDropdown;

/// Operations a line editor drives a dropdown with.
///
/// Object-safe so the editor can hold `Box<dyn Dropdown>` and swap between
/// the real widget and [`NullDropdown`] as the completion set changes.
pub trait Dropdown {
    /// The item under the cursor.
    fn selected(&self) -> &str;

    /// Render the visible viewport as styled terminal lines.
    fn render(&self) -> Rendered;

    /// Number of rows the viewport occupies.
    fn viewport_height(&self) -> usize;

    /// Whether the widget is capturing navigation input.
    fn has_focus(&self) -> bool;

    /// Move the cursor up one item, wrapping at the top.
    fn scroll_up(&mut self);

    /// Move the cursor down one item, wrapping at the bottom.
    ///
    /// The first press on an unfocused widget only claims focus.
    fn scroll_down(&mut self);

    /// Drop focus and return to the post-construction state.
    fn reset(&mut self);
}
