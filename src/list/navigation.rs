//! Keyboard focus navigation for list components.
//!
//! Focus moves circularly over the rendered, visible items in master-set order.
//! The focus cursor is tracked by item id and always refers to an item of the
//! master set. Pointer movement over the list hands focus back to hover, so
//! keyboard and pointer focus never coexist.

use super::types::Item;
use super::ListModel;
use crate::error::ListError;
use log::trace;

impl<I: Item> ListModel<I> {
    /// The item under the keyboard focus cursor, if any.
    pub fn focused_item(&self) -> Option<&I> {
        self.focused_position().map(|pos| &self.actions[pos])
    }

    /// Whether `item` is under the focus cursor.
    pub fn is_item_focused(&self, item: &I) -> bool {
        self.focused_id.as_deref() == Some(item.id())
    }

    /// Moves the focus cursor to `item`, or clears it with `None`.
    ///
    /// The item must be part of the master set.
    pub fn set_focused_item(&mut self, item: Option<&I>) -> Result<(), ListError> {
        match item {
            Some(item) => self.focus_item_by_id(item.id()),
            None => {
                self.clear_focus();
                Ok(())
            }
        }
    }

    /// Moves the focus cursor to the item with `id`.
    pub fn focus_item_by_id(&mut self, id: &str) -> Result<(), ListError> {
        if self.position_of(id).is_none() {
            return Err(ListError::UnknownItem { id: id.to_string() });
        }
        trace!("list: focus -> {id}");
        self.focused_id = Some(id.to_string());
        Ok(())
    }

    /// Clears the focus cursor.
    pub fn clear_focus(&mut self) {
        self.focused_id = None;
    }

    /// Focuses the next visible item, wrapping around after the last one.
    ///
    /// With nothing focused, focuses the selected item if it is visible and
    /// otherwise the first visible item. If the focused item has been filtered
    /// out, the search starts from its position in the master set.
    pub fn focus_next_visible_item(&mut self) {
        let candidates = self.visible_positions();
        let target = match self.focused_position() {
            None => self.entry_position(&candidates),
            Some(current) => candidates
                .iter()
                .copied()
                .find(|&pos| pos > current)
                .or_else(|| candidates.first().copied()),
        };
        self.move_focus_to(target);
    }

    /// Focuses the previous visible item, wrapping around before the first one.
    ///
    /// With nothing focused, behaves like
    /// [`focus_next_visible_item`](Self::focus_next_visible_item).
    pub fn focus_prev_visible_item(&mut self) {
        let candidates = self.visible_positions();
        let target = match self.focused_position() {
            None => self.entry_position(&candidates),
            Some(current) => candidates
                .iter()
                .rev()
                .copied()
                .find(|&pos| pos < current)
                .or_else(|| candidates.last().copied()),
        };
        self.move_focus_to(target);
    }

    /// Pointer moved over the list: keyboard focus is released.
    pub fn on_mouse_move(&mut self) {
        if self.focused_id.take().is_some() {
            trace!("list: focus released to pointer");
        }
    }

    pub(super) fn focused_position(&self) -> Option<usize> {
        self.focused_id.as_deref().and_then(|id| self.position_of(id))
    }

    fn entry_position(&self, candidates: &[usize]) -> Option<usize> {
        let selected = self
            .selected
            .as_ref()
            .and_then(|item| self.position_of(item.id()))
            .filter(|pos| candidates.contains(pos));
        selected.or_else(|| candidates.first().copied())
    }

    fn move_focus_to(&mut self, target: Option<usize>) {
        // An empty visible set leaves the cursor where it is.
        if let Some(pos) = target {
            let id = self.actions[pos].id().to_string();
            trace!("list: focus -> {id}");
            self.focused_id = Some(id);
        }
    }
}
