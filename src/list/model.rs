//! Main `ListModel` struct and core functionality for list components.
//!
//! This module contains the model struct, its construction, wholesale item
//! replacement and the read-only queries over the master item set. Filtering,
//! navigation, selection and virtualization live in sibling modules as further
//! `impl` blocks on the same struct.

use super::config::ListConfig;
use super::filtering::FilterStrategy;
use super::keys::ListKeyMap;
use super::style::ListStyles;
use super::types::{Item, ItemFilter};
use crate::error::ListError;
use crate::scroll::{ListenerId, ScrollContainer, ScrollHandler};
use log::debug;

/// Presentation state of a filterable, virtualized selection list.
///
/// The model owns the master item set and keeps every derived view consistent
/// with it: per-item visibility under the current filter, the rendered window,
/// the visible subset of that window, and whether the filter box is shown.
/// Every mutating call recomputes what depends on it before returning.
///
/// # Examples
///
/// ```
/// use bubbletea_listbox::list::{Action, ListModel};
///
/// let items = (0..12)
///     .map(|i| Action::new(format!("test{i}"), format!("test{i}")))
///     .collect();
/// let mut list = ListModel::new(items, true);
///
/// list.set_filter_string("1");
/// assert_eq!(list.visible_items().len(), 3);
///
/// list.focus_next_visible_item();
/// assert_eq!(list.focused_item().map(|a| a.title.as_str()), Some("test1"));
///
/// list.select_focused_item();
/// assert!(list.is_item_selected(&list.actions()[1]));
/// ```
pub struct ListModel<I: Item> {
    pub(super) actions: Vec<I>,
    /// Visibility of `actions[i]` after the active filter ran.
    pub(super) visibility: Vec<bool>,
    pub(super) filter_string: String,
    pub(super) filter: FilterStrategy<I>,
    pub(super) show_filter: bool,

    // Virtualization
    pub(super) rendered_len: usize,
    pub(super) is_all_data_loaded: bool,
    pub(super) has_vertical_scroller: bool,
    pub(super) scrollable_container: Option<Box<dyn ScrollContainer>>,
    pub(super) scroll_handler: Option<ScrollHandler>,
    pub(super) scroll_subscription: Option<ListenerId>,

    // Focus and selection
    pub(super) focused_id: Option<String>,
    pub(super) selected: Option<I>,
    pub(super) allow_selection: bool,

    pub(super) config: ListConfig,

    // UI
    pub(super) keymap: ListKeyMap,
    pub(super) styles: ListStyles,
    pub(super) width: usize,
}

impl<I: Item> ListModel<I> {
    /// Creates a list over `items`.
    ///
    /// `allow_selection` gates selection driven by user interaction (the select
    /// key); the selected item itself can always be set programmatically.
    /// The list starts with the default substring filter, an empty filter
    /// string, the default [`ListConfig`], and all items rendered.
    pub fn new(items: Vec<I>, allow_selection: bool) -> Self {
        let mut model = Self {
            actions: items,
            visibility: Vec::new(),
            filter_string: String::new(),
            filter: FilterStrategy::Substring,
            show_filter: false,
            rendered_len: 0,
            is_all_data_loaded: true,
            has_vertical_scroller: false,
            scrollable_container: None,
            scroll_handler: None,
            scroll_subscription: None,
            focused_id: None,
            selected: None,
            allow_selection,
            config: ListConfig::default(),
            keymap: ListKeyMap::default(),
            styles: ListStyles::default(),
            width: 0,
        };
        model.on_items_replaced();
        model
    }

    /// Pre-selects `item`. The first keyboard traversal starts from it.
    pub fn with_selected_item(mut self, item: I) -> Self {
        self.selected = Some(item);
        self
    }

    /// Replaces the default substring filter with a custom routine.
    ///
    /// The routine runs immediately with the current filter text and from then
    /// on is solely responsible for the visibility flags.
    pub fn with_filter<F>(mut self, filter: F) -> Self
    where
        F: ItemFilter<I> + 'static,
    {
        self.filter = FilterStrategy::Custom(Box::new(filter));
        self.update_visibility();
        self
    }

    /// Applies `config`, rejecting it if it does not validate.
    pub fn with_config(mut self, config: ListConfig) -> Result<Self, ListError> {
        config.validate()?;
        self.config = config;
        self.show_filter = self.actions.len() > self.config.min_element_count;
        self.reset_render_window();
        Ok(self)
    }

    /// Sets the render width used by `view`. Zero means unbounded.
    pub fn with_width(mut self, width: usize) -> Self {
        self.width = width;
        self
    }

    /// Replaces the key bindings.
    pub fn with_keymap(mut self, keymap: ListKeyMap) -> Self {
        self.keymap = keymap;
        self
    }

    /// Replaces the styles.
    pub fn with_styles(mut self, styles: ListStyles) -> Self {
        self.styles = styles;
        self
    }

    /// Replaces the whole master set.
    ///
    /// The filter string is kept and re-applied to the new items. The filter box
    /// flag and the rendered window are recomputed, and the focus cursor is
    /// dropped if its item is not part of the new set.
    pub fn set_items(&mut self, items: Vec<I>) {
        debug!(
            "list: replacing {} items with {}",
            self.actions.len(),
            items.len()
        );
        self.actions = items;
        self.on_items_replaced();
    }

    /// Clears the filter string and recomputes visibility.
    pub fn refresh(&mut self) {
        self.filter_string.clear();
        self.update_visibility();
    }

    fn on_items_replaced(&mut self) {
        self.show_filter = self.actions.len() > self.config.min_element_count;
        self.reset_render_window();
        if let Some(id) = self.focused_id.take() {
            if self.position_of(&id).is_some() {
                self.focused_id = Some(id);
            }
        }
        self.update_visibility();
    }

    /// The master item set, in display order.
    pub fn actions(&self) -> &[I] {
        &self.actions
    }

    /// Mutable access to the items. Call [`refresh`](Self::refresh) or set the
    /// filter string afterwards if visibility inputs changed.
    pub fn actions_mut(&mut self) -> &mut [I] {
        &mut self.actions
    }

    /// The current filter text. Empty means no filter.
    pub fn filter_string(&self) -> &str {
        &self.filter_string
    }

    /// Whether the filter box should be shown.
    ///
    /// True when the master set holds more items than
    /// [`ListConfig::min_element_count`]. Only item replacement changes it.
    pub fn show_filter(&self) -> bool {
        self.show_filter
    }

    /// The configuration in effect.
    pub fn config(&self) -> &ListConfig {
        &self.config
    }

    /// Rendered items whose visibility is true, in display order.
    pub fn visible_items(&self) -> Vec<&I> {
        self.visible_positions()
            .into_iter()
            .map(|pos| &self.actions[pos])
            .collect()
    }

    /// True when no rendered item is visible.
    pub fn is_empty(&self) -> bool {
        !self.visibility[..self.rendered_len].contains(&true)
    }

    /// Number of items in the master set.
    pub fn len(&self) -> usize {
        self.actions.len()
    }

    /// Positions of rendered, visible items in the master set.
    pub(super) fn visible_positions(&self) -> Vec<usize> {
        (0..self.rendered_len)
            .filter(|&pos| self.visibility[pos])
            .collect()
    }

    pub(super) fn position_of(&self, id: &str) -> Option<usize> {
        self.actions.iter().position(|item| item.id() == id)
    }
}
