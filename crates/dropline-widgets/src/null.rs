#![forbid(unsafe_code)]

//! No-op dropdown for the empty completion set.

use crate::{Dropdown, Rendered};

/// A dropdown with nothing to offer.
///
/// [`ListDropdown`](crate::ListDropdown) refuses an empty item list; a line
/// editor with no completions holds this variant instead and keeps driving
/// the same [`Dropdown`] surface.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NullDropdown;

impl Dropdown for NullDropdown {
    fn selected(&self) -> &str {
        ""
    }

    fn render(&self) -> Rendered {
        Rendered {
            text: String::new(),
            line_width: 0,
        }
    }

    fn viewport_height(&self) -> usize {
        0
    }

    fn has_focus(&self) -> bool {
        false
    }

    fn scroll_up(&mut self) {}

    fn scroll_down(&mut self) {}

    fn reset(&mut self) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn navigation_never_takes_focus() {
        let mut dd = NullDropdown;
        dd.scroll_up();
        dd.scroll_down();
        assert!(!dd.has_focus());
        dd.reset();
        assert!(!dd.has_focus());
    }

    #[test]
    fn renders_nothing() {
        let dd = NullDropdown;
        assert_eq!(dd.selected(), "");
        assert_eq!(dd.viewport_height(), 0);
        let rendered = dd.render();
        assert!(rendered.text.is_empty());
        assert_eq!(rendered.line_width, 0);
    }
}
