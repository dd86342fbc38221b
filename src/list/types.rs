//! Core types and traits for the list component.
//!
//! This module contains the item capability the list consumes, the default
//! [`Action`] item, the pluggable [`ItemFilter`] routine, and the messages the
//! list exchanges with the bubbletea runtime.

use bubbletea_rs::Msg;
use std::fmt::Display;

/// Capability the list needs from the items it displays.
///
/// The list treats items as opaque apart from these accessors. `id` must be
/// unique within one item set; it is what focus and selection track. The
/// `visible` flag belongs to the item: a custom filter writes it, and the
/// default filter only ever narrows it further.
///
/// # Examples
///
/// ```
/// use bubbletea_listbox::list::Item;
/// use std::fmt::Display;
///
/// #[derive(Clone)]
/// struct Country {
///     code: String,
///     name: String,
///     visible: bool,
/// }
///
/// impl Display for Country {
///     fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
///         write!(f, "{} ({})", self.name, self.code)
///     }
/// }
///
/// impl Item for Country {
///     fn id(&self) -> &str {
///         &self.code
///     }
///     fn title(&self) -> &str {
///         &self.name
///     }
///     fn is_visible(&self) -> bool {
///         self.visible
///     }
///     fn set_visible(&mut self, visible: bool) {
///         self.visible = visible;
///     }
/// }
/// ```
pub trait Item: Display + Clone {
    /// Stable identifier, unique within the current item set.
    fn id(&self) -> &str;

    /// Display text, matched by the default filter.
    fn title(&self) -> &str;

    /// The item's own visibility flag.
    fn is_visible(&self) -> bool;

    /// Writes the item's own visibility flag.
    fn set_visible(&mut self, visible: bool);

    /// Disabled items get the disabled style but stay navigable.
    fn is_enabled(&self) -> bool {
        true
    }

    /// Extra class token appended to the item's class string.
    fn css(&self) -> Option<&str> {
        None
    }
}

/// Ready-made list item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Action {
    /// Stable identifier.
    pub id: String,
    /// Display text.
    pub title: String,
    /// Visibility flag, true by default.
    pub visible: bool,
    /// Enabled flag, true by default.
    pub enabled: bool,
    /// Optional extra class token.
    pub css: Option<String>,
}

impl Action {
    /// Creates a visible, enabled action.
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            visible: true,
            enabled: true,
            css: None,
        }
    }

    /// Sets the extra class token.
    pub fn with_css(mut self, css: impl Into<String>) -> Self {
        self.css = Some(css.into());
        self
    }

    /// Sets the enabled flag.
    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// Sets the visibility flag.
    pub fn with_visible(mut self, visible: bool) -> Self {
        self.visible = visible;
        self
    }
}

impl Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.title)
    }
}

impl Item for Action {
    fn id(&self) -> &str {
        &self.id
    }

    fn title(&self) -> &str {
        &self.title
    }

    fn is_visible(&self) -> bool {
        self.visible
    }

    fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    fn is_enabled(&self) -> bool {
        self.enabled
    }

    fn css(&self) -> Option<&str> {
        self.css.as_deref()
    }
}

/// Caller-supplied visibility routine.
///
/// When a list is built with a custom filter, the filter runs with the current
/// filter text every time the text changes or the items are replaced, and must
/// call [`Item::set_visible`] on every item it is given. Closures of the shape
/// `FnMut(&mut [I], &str)` implement this trait.
///
/// ```
/// use bubbletea_listbox::list::{Action, Item, ListModel};
///
/// let items = vec![Action::new("a", "alpha"), Action::new("b", "beta")];
/// let mut list = ListModel::new(items, true).with_filter(|items: &mut [Action], text: &str| {
///     for item in items.iter_mut() {
///         let keep = text.is_empty() || item.id().starts_with(text);
///         item.set_visible(keep);
///     }
/// });
/// list.set_filter_string("b");
/// assert_eq!(list.visible_items().len(), 1);
/// ```
pub trait ItemFilter<I: Item>: Send {
    /// Sets the visibility flag of every item for `text`.
    fn apply(&mut self, items: &mut [I], text: &str);
}

impl<I, F> ItemFilter<I> for F
where
    I: Item,
    F: FnMut(&mut [I], &str) + Send,
{
    fn apply(&mut self, items: &mut [I], text: &str) {
        self(items, text)
    }
}

/// Pointer movement anywhere over the rendered list.
///
/// Hosts translate their mouse-move events into this message; the list answers
/// by clearing its keyboard focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PointerMovedMsg;

/// Asks the bound scroll container to emit its scroll signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollMsg;

/// Sent by the rendering layer when an item scrolled into view is the last
/// rendered one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LastItemRenderedMsg {
    /// Id of the item that became visible.
    pub id: String,
}

/// Emitted by the list when the end of the rendered items was reached while
/// more data may still exist. The host reacts by loading more items.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadMoreMsg;

/// Emitted when the user confirms the focused item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemSelectedMsg {
    /// Id of the selected item.
    pub id: String,
}

impl From<LoadMoreMsg> for Msg {
    fn from(msg: LoadMoreMsg) -> Self {
        Box::new(msg) as Msg
    }
}

impl From<ItemSelectedMsg> for Msg {
    fn from(msg: ItemSelectedMsg) -> Self {
        Box::new(msg) as Msg
    }
}
