#![forbid(unsafe_code)]

//! Scrolling dropdown widget.
//!
//! A fixed-height viewport over an ordered item list with wrap-around
//! cursor navigation and a proportional scrollbar. State invariants,
//! maintained by every operation:
//!
//! - `0 <= offset <= count - height`
//! - `0 <= position <= count - 1`
//! - while focused: `offset <= position <= offset + height - 1`

use dropline_render::ansi;
use dropline_style::Theme;
use thiserror::Error;
use unicode_width::UnicodeWidthStr;

use crate::Dropdown;

/// Construction failure for [`ListDropdown`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DropdownError {
    /// The item list was empty. Use [`NullDropdown`](crate::NullDropdown)
    /// when there is nothing to offer instead of degrading this widget.
    #[error("dropdown requires at least one item; use NullDropdown for the empty case")]
    EmptyItems,
}

/// Result of rendering a dropdown viewport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rendered {
    /// Styled lines, each followed by a cursor-reposition sequence that
    /// returns the terminal cursor to the starting column of the next row.
    pub text: String,
    /// Total display width of one line: padded item cell plus the
    /// scrollbar cell.
    pub line_width: usize,
}

/// A dropdown over a non-empty item list.
///
/// Constructed once per navigation session, mutated only through
/// [`scroll_up`](ListDropdown::scroll_up),
/// [`scroll_down`](ListDropdown::scroll_down), and
/// [`reset`](ListDropdown::reset), and discarded when the session ends.
#[derive(Debug, Clone)]
pub struct ListDropdown<T> {
    theme: T,
    items: Vec<String>,
    /// Actual viewport height: `min(count, max_height)`.
    height: usize,
    /// Cursor position within `items`.
    position: usize,
    /// First visible item index.
    offset: usize,
    /// Whether the last wrap went first -> last.
    reverse: bool,
    has_focus: bool,
}

impl<T: Theme> ListDropdown<T> {
    /// Create a dropdown over `items`, showing at most `max_height` rows.
    ///
    /// # Errors
    ///
    /// Returns [`DropdownError::EmptyItems`] if `items` is empty.
    pub fn new(
        items: impl IntoIterator<Item = impl Into<String>>,
        max_height: usize,
        theme: T,
    ) -> Result<Self, DropdownError> {
        let items: Vec<String> = items.into_iter().map(Into::into).collect();
        if items.is_empty() {
            return Err(DropdownError::EmptyItems);
        }

        let height = items.len().min(max_height);
        Ok(Self {
            theme,
            items,
            height,
            position: 0,
            offset: 0,
            reverse: false,
            has_focus: false,
        })
    }

    /// The item under the cursor.
    #[must_use]
    pub fn selected(&self) -> &str {
        &self.items[self.position]
    }

    /// Number of rows the viewport occupies.
    #[inline]
    #[must_use]
    pub const fn viewport_height(&self) -> usize {
        self.height
    }

    /// Whether the widget is capturing navigation input.
    #[inline]
    #[must_use]
    pub const fn has_focus(&self) -> bool {
        self.has_focus
    }

    /// Whether the last wrap-around went from the first item to the last.
    #[inline]
    #[must_use]
    pub const fn is_reversed(&self) -> bool {
        self.reverse
    }

    /// Cursor position within the item list.
    #[inline]
    #[must_use]
    pub const fn position(&self) -> usize {
        self.position
    }

    /// Index of the first visible item.
    #[inline]
    #[must_use]
    pub const fn offset(&self) -> usize {
        self.offset
    }

    /// Move the cursor up one item.
    ///
    /// Claims focus on the same call if the widget was unfocused, then
    /// moves; past the first item the cursor wraps to the last and the
    /// viewport bottom-anchors.
    pub fn scroll_up(&mut self) {
        if !self.has_focus {
            self.has_focus = true;
        }

        if self.position == 0 {
            self.reverse = true;
            self.position = self.items.len() - 1;
            self.offset = self.items.len() - self.height;
        } else {
            self.position -= 1;

            if self.position < self.offset {
                self.offset -= 1;
            }
        }

        #[cfg(feature = "tracing")]
        self.log_transition("scroll_up");
    }

    /// Move the cursor down one item.
    ///
    /// The first press on an unfocused widget only claims focus and leaves
    /// the cursor in place (asymmetric with [`scroll_up`](Self::scroll_up));
    /// past the last item the cursor wraps to the first.
    pub fn scroll_down(&mut self) {
        if !self.has_focus {
            self.has_focus = true;

            #[cfg(feature = "tracing")]
            self.log_transition("focus_claim");
            return;
        }

        if self.position == self.items.len() - 1 {
            self.position = 0;
            self.reverse = false;
            self.offset = 0;
        } else {
            self.position += 1;

            if self.position + 1 > self.offset + self.height {
                self.offset += 1;
            }
        }

        #[cfg(feature = "tracing")]
        self.log_transition("scroll_down");
    }

    /// Drop focus and return to the post-construction state. Idempotent.
    pub fn reset(&mut self) {
        self.has_focus = false;
        self.reverse = false;
        self.position = 0;
        self.offset = 0;

        #[cfg(feature = "tracing")]
        self.log_transition("reset");
    }

    /// Viewport row of the scrollbar slider, if a scrollbar applies.
    ///
    /// `None` when every item fits. The top and bottom rows are reserved
    /// for the anchored ends of the range, so a mid-scroll slider snaps
    /// away from them: the proportional row is computed with float floor
    /// arithmetic and forced out of `0` and `height - 1`.
    #[must_use]
    pub fn slider_row(&self) -> Option<usize> {
        let count = self.items.len();
        // A zero-height viewport has no rows to place a slider on.
        if self.height == 0 || count <= self.height {
            return None;
        }

        if self.offset == 0 {
            return Some(0);
        }

        if self.offset == count - self.height {
            return Some(self.height - 1);
        }

        let progress = self.position as f64 * (100.0 / count as f64);
        let row = (self.height as f64 * progress / 100.0).floor() as usize;

        if row == 0 {
            Some(1)
        } else if row == self.height - 1 {
            Some(row - 1)
        } else {
            Some(row)
        }
    }

    /// Render the visible viewport.
    ///
    /// Each row is the padded item cell, the one-column scrollbar cell,
    /// then cursor-down plus cursor-back so the terminal cursor lands at
    /// the starting column of the next row. Pure over current state.
    #[must_use]
    pub fn render(&self) -> Rendered {
        // Empty viewport: nothing to draw, and the cursor may sit anywhere
        // relative to `offset`.
        if self.height == 0 {
            return Rendered {
                text: String::new(),
                line_width: 0,
            };
        }

        let visible = &self.items[self.offset..self.offset + self.height];
        let item_width = visible
            .iter()
            .map(|item| item.width())
            .max()
            .unwrap_or(0);
        // Padded cell (space + item + space) plus the scrollbar cell.
        let line_width = item_width + 3;

        let slider_row = self.slider_row();
        let active_row = self.position - self.offset;

        let mut text = String::new();
        for (row, item) in visible.iter().enumerate() {
            let text_style = if self.has_focus && row == active_row {
                self.theme.text_active()
            } else {
                self.theme.text()
            };
            text.push_str(&ansi::styled(&pad_cell(item, item_width), text_style));

            let bar_style = if slider_row == Some(row) {
                self.theme.slider()
            } else {
                self.theme.scrollbar()
            };
            text.push_str(&ansi::styled(" ", bar_style));

            text.push_str(&ansi::cursor_down(1));
            text.push_str(&ansi::cursor_back(line_width));
        }

        Rendered { text, line_width }
    }

    #[cfg(feature = "tracing")]
    fn log_transition(&self, action: &str) {
        tracing::debug!(
            message = "dropdown.transition",
            action,
            position = self.position,
            offset = self.offset,
            has_focus = self.has_focus
        );
    }
}

/// Pad an item to the viewport's widest visible item, one space either side.
fn pad_cell(item: &str, item_width: usize) -> String {
    let pad = item_width - item.width();
    let mut cell = String::with_capacity(item.len() + pad + 2);
    cell.push(' ');
    cell.push_str(item);
    for _ in 0..pad {
        cell.push(' ');
    }
    cell.push(' ');
    cell
}

impl<T: Theme> Dropdown for ListDropdown<T> {
    fn selected(&self) -> &str {
        self.selected()
    }

    fn render(&self) -> Rendered {
        self.render()
    }

    fn viewport_height(&self) -> usize {
        self.viewport_height()
    }

    fn has_focus(&self) -> bool {
        self.has_focus()
    }

    fn scroll_up(&mut self) {
        self.scroll_up();
    }

    fn scroll_down(&mut self) {
        self.scroll_down();
    }

    fn reset(&mut self) {
        self.reset();
    }
}
