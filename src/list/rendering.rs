//! View rendering functions for list components.
//!
//! This module handles the visual side of the list:
//! - Filter line rendering (only while the filter box is shown)
//! - Item rendering over the rendered window, skipping invisible items
//! - Placeholder rendering when nothing is visible

use super::style::FOCUS_MARKER;
use super::types::Item;
use super::ListModel;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const ELLIPSIS: char = '…';

/// Item styles reserve two columns on the left for the focus marker.
const GUTTER: usize = 2;

/// Cuts `text` to at most `width` columns, ending in an ellipsis when cut.
/// A width of zero leaves the text untouched.
pub(super) fn truncate(text: &str, width: usize) -> String {
    if width == 0 || UnicodeWidthStr::width(text) <= width {
        return text.to_string();
    }
    let budget = width.saturating_sub(1);
    let mut out = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let w = UnicodeWidthChar::width(ch).unwrap_or(0);
        if used + w > budget {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push(ELLIPSIS);
    out
}

impl<I: Item> ListModel<I> {
    /// Renders the filter line, or an empty string when no filter box is shown.
    pub(super) fn view_filter(&self) -> String {
        if !self.show_filter {
            return String::new();
        }
        let prompt = self.styles.filter_prompt.render("Filter: ");
        let text = self.styles.filter_text.render(&self.filter_string);
        format!("{prompt}{text}")
    }

    /// Renders each rendered, visible item on its own line, or the placeholder
    /// when there is none.
    pub(super) fn view_items(&self) -> String {
        if self.is_empty() {
            return self.styles.placeholder.render(self.empty_message());
        }

        // Zero means unbounded, so a narrow but bounded width keeps one column.
        let text_width = match self.width {
            0 => 0,
            width => width.saturating_sub(GUTTER).max(1),
        };
        let lines: Vec<String> = self
            .visible_items()
            .into_iter()
            .map(|item| {
                let title = truncate(&item.to_string(), text_width);
                let state = self.item_state(item);
                if state.focused {
                    format!("{FOCUS_MARKER} {}", self.styles.focused_item.render(&title))
                } else if state.selected {
                    self.styles.selected_item.render(&title)
                } else if state.disabled {
                    self.styles.disabled_item.render(&title)
                } else {
                    self.styles.normal_item.render(&title)
                }
            })
            .collect();
        lines.join("\n")
    }
}
