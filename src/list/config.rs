//! Configuration for list components.
//!
//! [`ListConfig`] collects the tunables a host may want to set from its own
//! configuration file: the item count above which the filter box is shown, the
//! optional render page size, the placeholder texts and the class tokens used by
//! [`ListModel::get_item_class`](super::ListModel::get_item_class). Every field
//! has a default, so a partial document deserializes cleanly.
//!
//! ```
//! use bubbletea_listbox::list::ListConfig;
//!
//! let config = ListConfig {
//!     min_element_count: 5,
//!     ..ListConfig::default()
//! };
//! assert!(config.validate().is_ok());
//! ```

use crate::error::ListError;
use serde::{Deserialize, Serialize};

/// Default number of items a list may hold before its filter box is shown.
pub const DEFAULT_MIN_ELEMENT_COUNT: usize = 10;

/// Placeholder shown while more data may still arrive.
pub const DEFAULT_LOADING_MESSAGE: &str = "Loading...";

/// Placeholder shown once all data is loaded and nothing is visible.
pub const DEFAULT_EMPTY_MESSAGE: &str = "No data to display";

/// Tunables for a [`ListModel`](super::ListModel).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ListConfig {
    /// The filter box is shown when the list holds more items than this.
    #[serde(default = "default_min_element_count")]
    pub min_element_count: usize,
    /// Initial size of the rendered window. `None` renders every item.
    #[serde(default)]
    pub render_page_size: Option<usize>,
    /// Placeholder while data is still loading.
    #[serde(default = "default_loading_message")]
    pub loading_message: String,
    /// Placeholder when nothing is visible.
    #[serde(default = "default_empty_message")]
    pub empty_message: String,
    /// Class tokens composed by `get_item_class`.
    #[serde(default)]
    pub class_names: ItemClassNames,
}

fn default_min_element_count() -> usize {
    DEFAULT_MIN_ELEMENT_COUNT
}
fn default_loading_message() -> String {
    DEFAULT_LOADING_MESSAGE.to_string()
}
fn default_empty_message() -> String {
    DEFAULT_EMPTY_MESSAGE.to_string()
}

impl Default for ListConfig {
    fn default() -> Self {
        Self {
            min_element_count: default_min_element_count(),
            render_page_size: None,
            loading_message: default_loading_message(),
            empty_message: default_empty_message(),
            class_names: ItemClassNames::default(),
        }
    }
}

impl ListConfig {
    /// Checks the configuration for values the list cannot work with.
    pub fn validate(&self) -> Result<(), ListError> {
        if self.render_page_size == Some(0) {
            return Err(ListError::InvalidConfig(
                "render_page_size must be at least 1".to_string(),
            ));
        }
        if self.class_names.base.trim().is_empty() {
            return Err(ListError::InvalidConfig(
                "class_names.base must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

/// Class tokens for item state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ItemClassNames {
    /// Token every item carries.
    pub base: String,
    /// Token of the keyboard-focused item.
    pub focused: String,
    /// Token of the selected item.
    pub selected: String,
    /// Token of disabled items.
    pub disabled: String,
}

impl Default for ItemClassNames {
    fn default() -> Self {
        Self {
            base: "list__item".to_string(),
            focused: "list__item--focused".to_string(),
            selected: "list__item--selected".to_string(),
            disabled: "list__item--disabled".to_string(),
        }
    }
}
