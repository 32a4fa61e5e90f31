//! Weak cursor over a node chain.
//!
//! [`SharedListIterator`] observes a chain without owning it. It stays valid
//! exactly as long as the node it points at is still owned by someone (a list
//! handle, another node, or a [`SharedNode`] held by the caller). Once that
//! node is deallocated the iterator is invalid for good.
//!
//! # Examples
//!
//! ```rust
//! use shared_list::shared::{ListError, SharedList, SharedListIterator};
//!
//! let list: SharedList<i32> = [1, 2, 3].into();
//! let mut iterator = list.begin();
//!
//! assert_eq!(iterator.get(), Ok(1));
//! iterator.advance_by(2).unwrap();
//! assert_eq!(iterator.get(), Ok(3));
//!
//! // Past the last node: equal to the end sentinel.
//! iterator.advance().unwrap();
//! assert_eq!(iterator, SharedListIterator::end());
//! assert_eq!(iterator.advance().err(), Some(ListError::InvalidIterator));
//! ```
//!
//! An iterator does not keep its list alive:
//!
//! ```rust
//! use shared_list::shared::SharedList;
//!
//! let list: SharedList<i32> = [1, 2, 3].into();
//! let iterator = list.begin();
//! drop(list);
//! assert!(!iterator.valid());
//! ```

use std::fmt;
use std::iter::FusedIterator;

use super::error::{ListError, Result};
use super::node::{Node, SharedNode};
use super::{ReferenceCounter, WeakReference};

/// A non-owning cursor into a chain of [`Node`]s.
///
/// Dereferencing and advancing both require [`valid`](Self::valid) and fail
/// with [`ListError::InvalidIterator`] otherwise.
///
/// For `T: Clone` this is also a standard [`Iterator`] yielding clones of the
/// remaining elements. Since the cursor is weak, an iterator that outlives its
/// list yields nothing.
pub struct SharedListIterator<T> {
    current: WeakReference<Node<T>>,
}

impl<T> SharedListIterator<T> {
    /// Creates an iterator positioned at `node`.
    ///
    /// The iterator does not take ownership: it stays valid only while
    /// something else keeps `node` alive.
    #[inline]
    #[must_use]
    pub fn at(node: &SharedNode<T>) -> Self {
        Self {
            current: ReferenceCounter::downgrade(node),
        }
    }

    /// Returns the end sentinel, an iterator that is never valid.
    #[inline]
    #[must_use]
    pub const fn end() -> Self {
        Self {
            current: WeakReference::new(),
        }
    }

    pub(crate) fn from_link(link: Option<&SharedNode<T>>) -> Self {
        link.map_or_else(Self::end, Self::at)
    }

    /// Returns `true` if the referenced node is still allocated.
    #[inline]
    #[must_use]
    pub fn valid(&self) -> bool {
        self.current.strong_count() > 0
    }

    /// Returns `true` if this iterator compares equal to [`end`](Self::end),
    /// that is, if it is not valid.
    #[inline]
    #[must_use]
    pub fn is_end(&self) -> bool {
        !self.valid()
    }

    /// Returns a strong reference to the current node.
    ///
    /// Holding the returned node keeps it (and so this iterator) valid.
    ///
    /// # Errors
    ///
    /// Returns [`ListError::InvalidIterator`] if the node has been deallocated.
    #[inline]
    pub fn node(&self) -> Result<SharedNode<T>> {
        self.current.upgrade().ok_or(ListError::InvalidIterator)
    }

    /// Moves to the next node.
    ///
    /// Moving past the last node leaves the iterator invalid, which is how the
    /// end of a list is reached.
    ///
    /// # Errors
    ///
    /// Returns [`ListError::InvalidIterator`] if the iterator is not valid. The
    /// position is left unchanged in that case.
    pub fn advance(&mut self) -> Result<&mut Self> {
        let node = self.node()?;
        self.current = node.downgrade_next();
        Ok(self)
    }

    /// Moves to the next node and returns the position before the move.
    ///
    /// # Errors
    ///
    /// Returns [`ListError::InvalidIterator`] if the iterator is not valid.
    pub fn advance_post(&mut self) -> Result<Self> {
        let previous = self.clone();
        self.advance()?;
        Ok(previous)
    }

    /// Returns an iterator at the next node without moving `self`.
    ///
    /// # Errors
    ///
    /// Returns [`ListError::InvalidIterator`] if the iterator is not valid.
    pub fn successor(&self) -> Result<Self> {
        let node = self.node()?;
        Ok(Self {
            current: node.downgrade_next(),
        })
    }

    /// Advances exactly `steps` times.
    ///
    /// Zero steps always succeeds, even on an invalid iterator.
    ///
    /// # Errors
    ///
    /// Returns [`ListError::InvalidIterator`] at the first step taken from an
    /// invalid position. The steps already taken are not undone.
    ///
    /// # Complexity
    ///
    /// O(steps)
    pub fn advance_by(&mut self, steps: usize) -> Result<&mut Self> {
        for _ in 0..steps {
            self.advance()?;
        }
        Ok(self)
    }

    /// Calls `function` with a reference to the current element.
    ///
    /// # Errors
    ///
    /// Returns [`ListError::InvalidIterator`] if the iterator is not valid.
    ///
    /// # Panics
    ///
    /// Panics if `function` mutably borrows the same element again through
    /// another iterator or list handle.
    pub fn with<R, F>(&self, function: F) -> Result<R>
    where
        F: FnOnce(&T) -> R,
    {
        let node = self.node()?;
        let element = node.element();
        Ok(function(&*element))
    }

    /// Calls `function` with a mutable reference to the current element.
    ///
    /// The element is changed in place, so every list sharing the node sees
    /// the new value.
    ///
    /// # Errors
    ///
    /// Returns [`ListError::InvalidIterator`] if the iterator is not valid.
    ///
    /// # Panics
    ///
    /// Panics if `function` reaches the same element again through another
    /// iterator or list handle, since it stays borrowed during the call.
    pub fn with_mut<R, F>(&self, function: F) -> Result<R>
    where
        F: FnOnce(&mut T) -> R,
    {
        let node = self.node()?;
        let mut element = node.element_mut();
        Ok(function(&mut *element))
    }

    /// Replaces the current element in place, returning the previous one.
    ///
    /// # Errors
    ///
    /// Returns [`ListError::InvalidIterator`] if the iterator is not valid.
    ///
    /// # Panics
    ///
    /// Panics if the element is currently borrowed, for instance from inside
    /// a [`with`](Self::with) closure.
    pub fn set(&self, element: T) -> Result<T> {
        Ok(self.node()?.replace(element))
    }
}

impl<T: Clone> SharedListIterator<T> {
    /// Returns a clone of the current element.
    ///
    /// # Errors
    ///
    /// Returns [`ListError::InvalidIterator`] if the iterator is not valid.
    pub fn get(&self) -> Result<T> {
        self.with(T::clone)
    }
}

impl<T> Clone for SharedListIterator<T> {
    fn clone(&self) -> Self {
        Self {
            current: self.current.clone(),
        }
    }
}

impl<T> Default for SharedListIterator<T> {
    #[inline]
    fn default() -> Self {
        Self::end()
    }
}

/// Two iterators are equal when both are invalid, or when both are valid and
/// point at the same node.
impl<T> PartialEq for SharedListIterator<T> {
    fn eq(&self, other: &Self) -> bool {
        match (self.current.upgrade(), other.current.upgrade()) {
            (None, None) => true,
            (Some(left), Some(right)) => ReferenceCounter::ptr_eq(&left, &right),
            _ => false,
        }
    }
}

impl<T> Eq for SharedListIterator<T> {}

impl<T: fmt::Debug> fmt::Debug for SharedListIterator<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("SharedListIterator")
            .field("current", &self.current.upgrade())
            .finish()
    }
}

impl<T: Clone> Iterator for SharedListIterator<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.current.upgrade()?;
        self.current = node.downgrade_next();
        let element = node.element().clone();
        Some(element)
    }
}

impl<T: Clone> FusedIterator for SharedListIterator<T> {}

/// An owning iterator over the elements of a [`SharedList`](super::SharedList).
///
/// Holds a strong reference to the remaining chain, so it yields every element
/// even when the list it came from has been dropped.
pub struct SharedListIntoIterator<T> {
    remaining: Option<SharedNode<T>>,
}

impl<T> SharedListIntoIterator<T> {
    pub(crate) const fn new(head: Option<SharedNode<T>>) -> Self {
        Self { remaining: head }
    }
}

impl<T: Clone> Iterator for SharedListIntoIterator<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.remaining.take()?;
        self.remaining = node.next();
        let element = node.element().clone();
        Some(element)
    }
}

impl<T: Clone> FusedIterator for SharedListIntoIterator<T> {}

static_assertions::assert_not_impl_any!(SharedListIterator<i32>: Send, Sync);
static_assertions::assert_not_impl_any!(SharedListIntoIterator<i32>: Send, Sync);
