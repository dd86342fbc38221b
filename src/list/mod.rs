//! Filterable, virtualized, keyboard-navigable selection list.
//!
//! This module exposes [`ListModel`] plus its supporting types:
//! - [`Item`]: the capability the list needs from its items; [`Action`] is a
//!   ready-made implementation
//! - [`ItemFilter`]: pluggable visibility routine; [`FuzzyFilter`] is provided
//! - [`ListConfig`]: filter box threshold, render page size, placeholder texts
//!   and class tokens
//!
//! ## Architecture Overview
//!
//! The list keeps several views of one mutable item set consistent:
//!
//! - **Master set** (`actions`): replaced wholesale by `set_items`
//! - **Rendered window**: a prefix of the master set, all of it unless a render
//!   page size is configured
//! - **Visible items**: rendered items the active filter kept
//!
//! Every mutating call recomputes the views that depend on it before it returns,
//! so readers never see a half-updated state.
//!
//! ### Focus and Selection
//! Focus is a keyboard cursor that moves circularly over visible items. The
//! selection is a separate marker, usually set by confirming the focused item.
//! Pointer movement releases keyboard focus.
//!
//! ### Scroll Integration
//! The list binds to an external [`ScrollContainer`](crate::scroll::ScrollContainer),
//! keeps at most one listener on it, and signals the host through
//! [`LoadMoreMsg`] when the end of the rendered items is reached while more data
//! may exist.

pub mod config;
pub mod keys;
pub mod style;

mod filtering;
mod model;
mod navigation;
mod rendering;
mod selection;
mod types;
mod virtualization;

#[cfg(test)]
mod tests;

pub use config::{
    ItemClassNames, ListConfig, DEFAULT_EMPTY_MESSAGE, DEFAULT_LOADING_MESSAGE,
    DEFAULT_MIN_ELEMENT_COUNT,
};
pub use filtering::{title_contains, FuzzyFilter};
pub use keys::ListKeyMap;
pub use model::ListModel;
pub use selection::ItemState;
pub use style::ListStyles;
pub use types::{
    Action, Item, ItemFilter, ItemSelectedMsg, LastItemRenderedMsg, LoadMoreMsg,
    PointerMovedMsg, ScrollMsg,
};

use crate::key::{self, KeyMap};
use bubbletea_rs::{Cmd, KeyMsg, Model as BubbleTeaModel, Msg};
use crossterm::event::{KeyCode, KeyModifiers};

fn emit<M: Into<Msg>>(msg: M) -> Cmd {
    let msg: Msg = msg.into();
    Box::pin(async move { Some(msg) })
}

impl<I: Item> KeyMap for ListModel<I> {
    fn short_help(&self) -> Vec<&key::Binding> {
        self.keymap.short_help()
    }

    fn full_help(&self) -> Vec<Vec<&key::Binding>> {
        self.keymap.full_help()
    }
}

impl<I: Item + Send + Sync + 'static> ListModel<I> {
    fn handle_key(&mut self, key_msg: &KeyMsg) -> Option<Cmd> {
        if self.keymap.focus_next.matches(key_msg) {
            self.focus_next_visible_item();
        } else if self.keymap.focus_prev.matches(key_msg) {
            self.focus_prev_visible_item();
        } else if self.keymap.select.matches(key_msg) {
            if !self.allow_selection {
                return None;
            }
            let id = self.focused_item()?.id().to_string();
            self.select_focused_item();
            return Some(emit(ItemSelectedMsg { id }));
        } else if self.keymap.clear_filter.matches(key_msg) {
            self.refresh();
        } else if self.show_filter {
            match key_msg.key {
                KeyCode::Char(c)
                    if !key_msg
                        .modifiers
                        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
                {
                    self.push_filter_char(c);
                }
                KeyCode::Backspace => self.pop_filter_char(),
                _ => {}
            }
        }
        None
    }
}

impl<I: Item + Send + Sync + 'static> BubbleTeaModel for ListModel<I> {
    /// Creates an empty list with interactive selection enabled.
    fn init() -> (Self, Option<Cmd>) {
        (Self::new(Vec::new(), true), None)
    }

    /// Handles list messages.
    ///
    /// - [`PointerMovedMsg`]: releases keyboard focus
    /// - [`ScrollMsg`]: makes the bound container emit its scroll signal
    /// - [`LastItemRenderedMsg`]: returns a [`LoadMoreMsg`] command when more
    ///   data is wanted
    /// - Keys: focus movement, selection (returns an [`ItemSelectedMsg`]
    ///   command when interactive selection is allowed), filter clearing, and
    ///   filter typing while the filter box is shown
    fn update(&mut self, msg: Msg) -> Option<Cmd> {
        if msg.downcast_ref::<PointerMovedMsg>().is_some() {
            self.on_mouse_move();
            return None;
        }
        if msg.downcast_ref::<ScrollMsg>().is_some() {
            if let Some(container) = self.scrollable_container.as_mut() {
                container.dispatch_scroll();
            }
            return None;
        }
        if let Some(rendered) = msg.downcast_ref::<LastItemRenderedMsg>() {
            if self.last_item_reached(&rendered.id) {
                return Some(emit(LoadMoreMsg));
            }
            return None;
        }
        if let Some(key_msg) = msg.downcast_ref::<KeyMsg>() {
            return self.handle_key(key_msg);
        }
        None
    }

    /// Renders the filter line (when shown) above the items or placeholder.
    fn view(&self) -> String {
        let mut sections = Vec::new();

        let filter = self.view_filter();
        if !filter.is_empty() {
            sections.push(filter);
        }
        sections.push(self.view_items());

        sections.join("\n")
    }
}
