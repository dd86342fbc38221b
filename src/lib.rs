#![warn(missing_docs)]
#![doc(html_root_url = "https://docs.rs/bubbletea-listbox/")]

//! # bubbletea-listbox
//!
//! A filterable, virtualized selection list for terminal applications built with
//! [bubbletea-rs](https://github.com/joshka/bubbletea-rs).
//!
//! ## Overview
//!
//! The crate centers on [`ListModel`], the presentation state behind a dropdown
//! or picker. It owns a set of items and keeps the views derived from them
//! consistent: which items pass the current filter, which are rendered, which
//! one carries the keyboard focus, and which one is selected. Like other
//! bubbletea components it follows the Elm Architecture with `init()`,
//! `update()`, and `view()` methods.
//!
//! ## Features
//!
//! - **Text filtering** with a case-insensitive substring match, a fuzzy
//!   matcher, or any caller-supplied routine
//! - **Circular keyboard focus** over the visible items, starting from the
//!   selected item
//! - **Load-more signalling** for lists whose data arrives in pages
//! - **Scroll container binding** with a single, replaceable scroll listener
//! - **Configurable** thresholds, placeholders and class tokens through serde
//!
//! ## Quick Start
//!
//! ```rust
//! use bubbletea_listbox::prelude::*;
//!
//! let items = vec![
//!     Action::new("new", "New file"),
//!     Action::new("open", "Open file"),
//!     Action::new("quit", "Quit"),
//! ];
//! let mut list = ListModel::new(items, true);
//!
//! list.set_filter_string("file");
//! list.focus_next_visible_item();
//! list.select_focused_item();
//!
//! assert_eq!(list.selected_item().map(|a| a.id.as_str()), Some("new"));
//! ```
//!
//! ## Integration with bubbletea-rs
//!
//! [`ListModel`] implements `bubbletea_rs::Model`, so a host forwards messages
//! to it and reacts to the messages it emits:
//!
//! ```rust
//! use bubbletea_listbox::prelude::*;
//! use bubbletea_rs::{Cmd, Model, Msg};
//!
//! struct App {
//!     list: ListModel<Action>,
//!     chosen: Option<String>,
//! }
//!
//! impl Model for App {
//!     fn init() -> (Self, Option<Cmd>) {
//!         let list = ListModel::new(vec![Action::new("a", "Alpha")], true);
//!         (Self { list, chosen: None }, None)
//!     }
//!
//!     fn update(&mut self, msg: Msg) -> Option<Cmd> {
//!         if let Some(selected) = msg.downcast_ref::<ItemSelectedMsg>() {
//!             self.chosen = Some(selected.id.clone());
//!             return None;
//!         }
//!         self.list.update(msg)
//!     }
//!
//!     fn view(&self) -> String {
//!         match &self.chosen {
//!             Some(id) => format!("{}\nchosen: {id}", self.list.view()),
//!             None => self.list.view(),
//!         }
//!     }
//! }
//! ```
//!
//! ## Modules
//!
//! - [`list`]: the list model, items, filters, configuration and styles
//! - [`scroll`]: the scroll container seam and a line-based [`ScrollArea`]
//! - [`key`]: key bindings and help text
//! - [`error`]: the crate error type

pub mod error;
pub mod key;
pub mod list;
pub mod scroll;

pub use error::ListError;
pub use key::{Binding, KeyMap};
pub use list::{
    Action, FuzzyFilter, Item, ItemFilter, ItemSelectedMsg, LastItemRenderedMsg, ListConfig,
    ListKeyMap, ListModel, ListStyles, LoadMoreMsg, PointerMovedMsg, ScrollMsg,
};
pub use scroll::{ListenerId, ScrollArea, ScrollContainer, ScrollHandler, SharedScrollArea};

/// Prelude module for convenient imports.
///
/// ```rust
/// use bubbletea_listbox::prelude::*;
///
/// let list = ListModel::new(vec![Action::new("a", "Alpha")], true);
/// assert_eq!(list.len(), 1);
/// ```
pub mod prelude {
    pub use crate::error::ListError;
    pub use crate::key::{Binding as KeyBinding, KeyMap};
    pub use crate::list::{
        Action, FuzzyFilter, Item, ItemFilter, ItemSelectedMsg, LastItemRenderedMsg, ListConfig,
        ListKeyMap, ListModel, ListStyles, LoadMoreMsg, PointerMovedMsg, ScrollMsg,
    };
    pub use crate::scroll::{ScrollArea, ScrollContainer, SharedScrollArea};
}
