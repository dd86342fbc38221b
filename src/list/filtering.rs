//! Visibility engine for list components.
//!
//! This module decides, for the current filter string, which items are visible:
//! - `FilterStrategy` picks between the built-in substring match and a
//!   caller-supplied [`ItemFilter`]
//! - The substring match is case-insensitive and respects each item's own
//!   visibility flag
//! - [`FuzzyFilter`] is a ready-made custom routine based on skim fuzzy matching

use super::types::{Item, ItemFilter};
use super::ListModel;
use fuzzy_matcher::skim::SkimMatcherV2;
use fuzzy_matcher::FuzzyMatcher;
use log::debug;

/// The routine that owns visibility for a list.
pub(super) enum FilterStrategy<I: Item> {
    /// Case-insensitive substring match on the title.
    Substring,
    /// Caller-supplied routine writing the items' visibility flags.
    Custom(Box<dyn ItemFilter<I>>),
}

/// Returns true if `title` contains `needle`, ignoring case.
///
/// An empty needle matches every title.
///
/// ```
/// use bubbletea_listbox::list::title_contains;
///
/// assert!(title_contains("Best test1", "best"));
/// assert!(title_contains("Best test1", "1"));
/// assert!(!title_contains("Best test1", "test2"));
/// ```
pub fn title_contains(title: &str, needle: &str) -> bool {
    needle.is_empty() || title.to_lowercase().contains(&needle.to_lowercase())
}

impl<I: Item> ListModel<I> {
    /// Sets the filter text and recomputes visibility.
    ///
    /// The rendered window and the filter box flag are left untouched.
    pub fn set_filter_string(&mut self, text: impl Into<String>) {
        let text = text.into();
        debug!("list: filter {:?} -> {:?}", self.filter_string, text);
        self.filter_string = text;
        self.update_visibility();
    }

    /// Appends a character to the filter text.
    pub fn push_filter_char(&mut self, c: char) {
        let mut text = self.filter_string.clone();
        text.push(c);
        self.set_filter_string(text);
    }

    /// Removes the last character of the filter text, if any.
    pub fn pop_filter_char(&mut self) {
        let mut text = self.filter_string.clone();
        if text.pop().is_some() {
            self.set_filter_string(text);
        }
    }

    /// Whether a custom filter routine replaced the default one.
    pub fn has_custom_filter(&self) -> bool {
        matches!(self.filter, FilterStrategy::Custom(_))
    }

    /// Visibility of `item` as computed by the last filter run.
    ///
    /// Items that are not part of the master set are never visible.
    pub fn is_item_visible(&self, item: &I) -> bool {
        self.position_of(item.id())
            .map(|pos| self.visibility[pos])
            .unwrap_or(false)
    }

    /// Runs the active routine over the whole master set.
    pub(super) fn update_visibility(&mut self) {
        let text = self.filter_string.as_str();
        self.visibility = match &mut self.filter {
            FilterStrategy::Substring => self
                .actions
                .iter()
                .map(|item| item.is_visible() && title_contains(item.title(), text))
                .collect(),
            FilterStrategy::Custom(filter) => {
                filter.apply(&mut self.actions, text);
                self.actions.iter().map(|item| item.is_visible()).collect()
            }
        };
    }
}

/// Custom filter routine using skim-style fuzzy matching on item titles.
///
/// An empty filter text makes every item visible.
///
/// ```
/// use bubbletea_listbox::list::{Action, FuzzyFilter, ListModel};
///
/// let items = vec![
///     Action::new("1", "Apple"),
///     Action::new("2", "Banana"),
///     Action::new("3", "Apricot"),
/// ];
/// let mut list = ListModel::new(items, true).with_filter(FuzzyFilter::new());
/// list.set_filter_string("apt");
/// assert_eq!(list.visible_items().len(), 1);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FuzzyFilter {
    respect_case: bool,
}

impl FuzzyFilter {
    /// Creates a case-insensitive fuzzy filter.
    pub fn new() -> Self {
        Self {
            respect_case: false,
        }
    }

    /// Makes matching case-sensitive.
    pub fn respect_case(mut self) -> Self {
        self.respect_case = true;
        self
    }
}

impl Default for FuzzyFilter {
    fn default() -> Self {
        Self::new()
    }
}

impl<I: Item> ItemFilter<I> for FuzzyFilter {
    fn apply(&mut self, items: &mut [I], text: &str) {
        if text.is_empty() {
            items.iter_mut().for_each(|item| item.set_visible(true));
            return;
        }

        let matcher = if self.respect_case {
            SkimMatcherV2::default().respect_case()
        } else {
            SkimMatcherV2::default().ignore_case()
        };
        for item in items.iter_mut() {
            let matched = matcher.fuzzy_match(item.title(), text).is_some();
            item.set_visible(matched);
        }
    }
}
