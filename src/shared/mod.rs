//! Shared, reference-counted singly-linked lists.
//!
//! This module provides:
//!
//! - [`SharedList`]: the list handle, with persistent and in-place operations
//! - [`Node`]: a list cell, shared between lists through [`SharedNode`]
//! - [`SharedListIterator`]: a weak cursor that never keeps nodes alive
//! - [`ListError`]: the errors reported by list and iterator operations
//!
//! # Ownership Model
//!
//! Lists own their nodes through strong references, and nodes own their
//! successors the same way. Iterators only hold weak references, so they
//! observe a chain without extending its lifetime:
//!
//! ```rust
//! use shared_list::shared::SharedList;
//!
//! let mut list: SharedList<i32> = [1, 2, 3].into();
//! let at_head = list.begin();
//! let copy = list.clone();
//!
//! // `copy` still owns the old head, so the iterator stays valid.
//! list.pop_front_mut().unwrap();
//! assert!(at_head.valid());
//!
//! // Last owner gone: the node is deallocated.
//! drop(copy);
//! assert!(!at_head.valid());
//! ```
//!
//! # Threading
//!
//! Nothing here is `Send` or `Sync`. Callers sharing lists across threads
//! must wrap them in their own synchronization.

/// Reference-counted smart pointer owning list nodes.
pub(crate) type ReferenceCounter<T> = std::rc::Rc<T>;

/// Non-owning counterpart of [`ReferenceCounter`].
pub(crate) type WeakReference<T> = std::rc::Weak<T>;

mod error;
mod iterator;
mod list;
mod node;

pub use error::ListError;
pub use error::Result;
pub use iterator::SharedListIntoIterator;
pub use iterator::SharedListIterator;
pub use list::SharedList;
pub use node::Node;
pub use node::SharedNode;

/// Creates a [`SharedList`] containing the given elements in order.
///
/// # Examples
///
/// ```rust
/// use shared_list::shared_list;
/// use shared_list::shared::SharedList;
///
/// let list = shared_list![1, 2, 3];
/// assert_eq!(list.size(), 3);
/// assert_eq!(list.get(2), Ok(3));
///
/// let empty: SharedList<i32> = shared_list![];
/// assert!(empty.empty());
/// ```
#[macro_export]
macro_rules! shared_list {
    () => {
        $crate::shared::SharedList::new()
    };

    ($($element:expr),+ $(,)?) => {
        $crate::shared::SharedList::from_values([$($element),+])
    };
}

// =============================================================================
// Tests
// =============================================================================


#[cfg(test)]
mod macro_tests {
    use super::SharedList;
    use rstest::rstest;

    #[rstest]
    fn test_shared_list_macro_empty() {
        let list: SharedList<i32> = shared_list![];
        assert!(list.empty());
    }

    #[rstest]
    fn test_shared_list_macro_trailing_comma() {
        let list = shared_list![1, 2, 3,];
        assert_eq!(list.to_vec(), vec![1, 2, 3]);
    }
}
