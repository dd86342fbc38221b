//! Key bindings for list navigation and selection.
//!
//! The defaults follow dropdown conventions rather than vim-style navigation,
//! since printable characters go to the filter box:
//!
//! - **Focus**: `↓/tab` (next), `↑/shift+tab` (previous)
//! - **Select**: `enter` (confirm the focused item)
//! - **Filter**: `esc` (clear the filter text)
//!
//! ```rust
//! use bubbletea_listbox::key::KeyMap;
//! use bubbletea_listbox::list::ListKeyMap;
//!
//! let keymap = ListKeyMap::default();
//! assert_eq!(keymap.short_help().len(), 4);
//! ```

use crate::key;
use crossterm::event::KeyCode;

/// Key bindings for focus movement, selection and filter clearing.
#[derive(Debug, Clone)]
pub struct ListKeyMap {
    /// Focus the next visible item.
    pub focus_next: key::Binding,
    /// Focus the previous visible item.
    pub focus_prev: key::Binding,
    /// Select the focused item.
    pub select: key::Binding,
    /// Clear the filter text.
    pub clear_filter: key::Binding,
}

impl Default for ListKeyMap {
    fn default() -> Self {
        Self {
            focus_next: key::Binding::new(vec![KeyCode::Down, KeyCode::Tab])
                .with_help("↓/tab", "next"),
            focus_prev: key::Binding::new(vec![KeyCode::Up, KeyCode::BackTab])
                .with_help("↑/shift+tab", "previous"),
            select: key::Binding::new(vec![KeyCode::Enter]).with_help("enter", "select"),
            clear_filter: key::Binding::new(vec![KeyCode::Esc]).with_help("esc", "clear filter"),
        }
    }
}

impl key::KeyMap for ListKeyMap {
    fn short_help(&self) -> Vec<&key::Binding> {
        vec![
            &self.focus_next,
            &self.focus_prev,
            &self.select,
            &self.clear_filter,
        ]
    }

    fn full_help(&self) -> Vec<Vec<&key::Binding>> {
        vec![
            // Column 1: Navigation
            vec![&self.focus_next, &self.focus_prev],
            // Column 2: Selection and filtering
            vec![&self.select, &self.clear_filter],
        ]
    }
}
