use thiserror::Error;

/// Errors raised by [`SortedList`](super::SortedList) operations.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ListError {
    #[error("an element equal under the order already exists in the list")]
    DuplicateEntry,

    #[error("no element matching the requested key was found")]
    NotFound,
}
