//! Error type for the list component.
//!
//! Navigation, filtering and listener management never fail: an empty or fully
//! filtered list is a valid steady state. Errors are reserved for host calls that
//! would break a model invariant, such as focusing an item that is not part of
//! the master set.

use thiserror::Error;

/// Errors returned by fallible [`ListModel`](crate::list::ListModel) operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ListError {
    /// The referenced item id is not present in the master item set.
    #[error("item not found in list: {id}")]
    UnknownItem {
        /// Id of the item that was looked up.
        id: String,
    },

    /// The supplied configuration cannot be used.
    #[error("invalid list configuration: {0}")]
    InvalidConfig(String),
}
