//! Error types for shared list operations.
//!
//! Every fallible operation in this crate reports failure through
//! [`ListError`] immediately to its caller. Nothing is retried and no
//! default value is substituted.

/// Represents errors that can occur when working with a [`SharedList`] or
/// one of its iterators.
///
/// # Examples
///
/// ```rust
/// use shared_list::shared::{ListError, SharedList};
///
/// let list: SharedList<i32> = SharedList::new();
/// assert_eq!(list.get(0), Err(ListError::InvalidIterator));
/// assert_eq!(list.pop_front().err(), Some(ListError::EmptyList));
/// assert_eq!(format!("{}", ListError::InvalidIterator), "invalid iterator");
/// ```
///
/// [`SharedList`]: super::SharedList
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListError {
    /// The iterator does not refer to a live node.
    ///
    /// Raised when advancing or dereferencing an iterator whose node has been
    /// deallocated or that has already moved past the last node, and when
    /// indexing at or beyond the length of a list.
    InvalidIterator,
    /// A front element was requested from a list that has none.
    EmptyList,
}

impl std::fmt::Display for ListError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidIterator => write!(formatter, "invalid iterator"),
            Self::EmptyList => write!(formatter, "cannot pop from an empty list"),
        }
    }
}

impl std::error::Error for ListError {}

/// Result type returned by fallible list and iterator operations.
pub type Result<T> = std::result::Result<T, ListError>;
