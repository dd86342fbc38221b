//! Selection state and per-item class composition.

use super::types::Item;
use super::ListModel;
use log::debug;

/// Display state of one item, shared by class composition and rendering.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ItemState {
    /// The item is under the keyboard focus cursor.
    pub focused: bool,
    /// The item is the selected item.
    pub selected: bool,
    /// The item is disabled.
    pub disabled: bool,
}

impl<I: Item> ListModel<I> {
    /// The selected item, if any.
    pub fn selected_item(&self) -> Option<&I> {
        self.selected.as_ref()
    }

    /// Sets or clears the selected item.
    ///
    /// This works whether or not interactive selection is allowed; the flag only
    /// gates selection through the select key.
    pub fn set_selected_item(&mut self, item: Option<I>) {
        debug!(
            "list: selected -> {:?}",
            item.as_ref().map(|item| item.id().to_string())
        );
        self.selected = item;
    }

    /// Whether `item` is the selected item.
    pub fn is_item_selected(&self, item: &I) -> bool {
        self.selected
            .as_ref()
            .is_some_and(|selected| selected.id() == item.id())
    }

    /// Whether user interaction may change the selection.
    pub fn allow_selection(&self) -> bool {
        self.allow_selection
    }

    /// Copies the focused item into the selection. No-op without focus.
    pub fn select_focused_item(&mut self) {
        if let Some(item) = self.focused_item().cloned() {
            self.set_selected_item(Some(item));
        }
    }

    /// Focus, selection and enabled state of `item`.
    pub fn item_state(&self, item: &I) -> ItemState {
        ItemState {
            focused: self.is_item_focused(item),
            selected: self.is_item_selected(item),
            disabled: !item.is_enabled(),
        }
    }

    /// Space-separated class string for `item`.
    ///
    /// The base token comes first, followed in order by the focused, selected
    /// and disabled tokens when they apply, then the item's own css token.
    ///
    /// ```
    /// use bubbletea_listbox::list::{Action, ListModel};
    ///
    /// let items = vec![Action::new("a", "A").with_enabled(false).with_css("wide")];
    /// let list = ListModel::new(items, true);
    /// assert_eq!(
    ///     list.get_item_class(&list.actions()[0]),
    ///     "list__item list__item--disabled wide"
    /// );
    /// ```
    pub fn get_item_class(&self, item: &I) -> String {
        let names = &self.config.class_names;
        let state = self.item_state(item);

        let mut tokens = vec![names.base.as_str()];
        if state.focused {
            tokens.push(names.focused.as_str());
        }
        if state.selected {
            tokens.push(names.selected.as_str());
        }
        if state.disabled {
            tokens.push(names.disabled.as_str());
        }
        if let Some(css) = item.css() {
            tokens.push(css);
        }

        let mut class: Vec<&str> = Vec::with_capacity(tokens.len());
        for token in tokens.into_iter().map(str::trim) {
            if !token.is_empty() && !class.contains(&token) {
                class.push(token);
            }
        }
        class.join(" ")
    }
}
