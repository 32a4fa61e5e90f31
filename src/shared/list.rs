//! Singly-linked list with persistent and in-place operations.
//!
//! This module provides [`SharedList`], a list handle over a chain of
//! reference-counted [`Node`]s.
//!
//! # Overview
//!
//! Most operations come in two flavours:
//!
//! - a persistent one taking `&self` and returning a new handle, leaving the
//!   original's contents untouched (`push_front`, `push_back`, `pop_front`)
//! - an in-place one taking `&mut self` and rewriting this handle
//!   (`push_front_mut`, `push_back_mut`, `pop_front_mut`)
//!
//! | Operation       | Complexity | Shares nodes with the source |
//! |-----------------|------------|------------------------------|
//! | `push_front`    | O(1)       | all of them                  |
//! | `pop_front`     | O(1)       | all but the first            |
//! | `push_back`     | O(n)       | none                         |
//! | `push_back_mut` | O(n)       | rewrites the shared tail     |
//! | `size`          | O(n)       | -                            |
//! | `empty`         | O(1)       | -                            |
//! | `get`           | O(n)       | -                            |
//!
//! # Structural Sharing
//!
//! ```text
//! list:                    1 -> 2 -> 3 -> nil
//! list.push_front(0): 0 -> [1 -> 2 -> 3 -> nil]   // shares [1, 2, 3]
//! list.pop_front():        [2 -> 3 -> nil]        // shares [2, 3]
//! ```
//!
//! # Aliasing
//!
//! `push_back_mut` rewrites the `next` edge of the last node. When another
//! handle shares that node, the other handle grows too:
//!
//! ```rust
//! use shared_list::shared::SharedList;
//!
//! let mut list: SharedList<i32> = [1, 2, 3].into();
//! let suffix = list.pop_front().unwrap(); // shares [2, 3]
//!
//! list.push_back_mut(4);
//!
//! assert_eq!(list.to_vec(), vec![1, 2, 3, 4]);
//! assert_eq!(suffix.to_vec(), vec![2, 3, 4]);
//! ```
//!
//! Element mutation through [`with_at_mut`](SharedList::with_at_mut) or
//! [`set`](SharedList::set) is visible the same way. The persistent
//! `push_back` never aliases: it copies the whole chain.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::iter::FromIterator;

use super::error::{ListError, Result};
use super::iterator::{SharedListIntoIterator, SharedListIterator};
use super::node::{Link, Node, SharedNode};
use super::ReferenceCounter;
use crate::trace::trace_event;

/// A singly-linked list over a shared, reference-counted node chain.
///
/// Cloning a `SharedList` is O(1): the clone shares every node with the
/// original.
///
/// # Examples
///
/// ```rust
/// use shared_list::shared::SharedList;
///
/// let list: SharedList<i32> = [1, 2, 3].into();
/// let extended = list.push_front(0);
///
/// assert_eq!(list.size(), 3);     // Original unchanged
/// assert_eq!(extended.size(), 4); // New list
/// assert_eq!(extended.get(0), Ok(0));
/// assert_eq!(extended.get(1), Ok(1));
/// ```
pub struct SharedList<T> {
    /// Reference to the head node (if any).
    head: Link<T>,
}

impl<T> SharedList<T> {
    /// Creates a new empty list.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use shared_list::shared::SharedList;
    ///
    /// let list: SharedList<i32> = SharedList::new();
    /// assert!(list.empty());
    /// assert_eq!(list.size(), 0);
    /// ```
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self { head: None }
    }

    /// Creates a list over an existing chain, sharing it.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use shared_list::shared::{Node, SharedList};
    ///
    /// let chain = Node::of(1, Some(Node::of(2, None)));
    /// let list = SharedList::from_node(chain);
    /// assert_eq!(list.to_vec(), vec![1, 2]);
    /// ```
    #[inline]
    #[must_use]
    pub const fn from_node(node: SharedNode<T>) -> Self {
        Self { head: Some(node) }
    }

    /// Creates a list holding `values` in order.
    ///
    /// Equivalent to calling [`push_back_mut`](Self::push_back_mut) for each
    /// value, but walks to the tail only once.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use shared_list::shared::SharedList;
    ///
    /// let list = SharedList::from_values(vec!["a", "b"]);
    /// assert_eq!(list.get(1), Ok("b"));
    /// ```
    #[must_use]
    pub fn from_values<I: IntoIterator<Item = T>>(values: I) -> Self {
        let mut list = Self::new();
        list.extend(values);
        list
    }

    /// Builds a fresh chain holding `elements` in order.
    fn build_from_vec(mut elements: Vec<T>) -> Self {
        let mut head: Link<T> = None;
        while let Some(element) = elements.pop() {
            head = Some(Node::of(element, head));
        }
        Self { head }
    }

    /// Returns a strong reference to the first node, if any.
    #[inline]
    #[must_use]
    pub fn head_node(&self) -> Option<SharedNode<T>> {
        self.head.clone()
    }

    /// Returns a new list with `element` in front of this one.
    ///
    /// The new list shares every node of `self`.
    ///
    /// # Complexity
    ///
    /// O(1) time and space
    ///
    /// # Examples
    ///
    /// ```rust
    /// use shared_list::shared::SharedList;
    ///
    /// let list: SharedList<i32> = SharedList::new();
    /// let one = list.push_front(1);
    /// assert!(list.empty());
    /// assert_eq!(one.get(0), Ok(1));
    /// ```
    #[inline]
    #[must_use]
    pub fn push_front(&self, element: T) -> Self {
        Self {
            head: Some(Node::of(element, self.head.clone())),
        }
    }

    /// Puts `element` in front of this list, in place.
    ///
    /// Other handles sharing the old head are unaffected.
    ///
    /// # Complexity
    ///
    /// O(1)
    #[inline]
    pub fn push_front_mut(&mut self, element: T) -> &mut Self {
        self.head = Some(Node::of(element, self.head.take()));
        self
    }

    /// Appends `element` at the end of this list, in place.
    ///
    /// An empty list behaves as [`push_front_mut`](Self::push_front_mut).
    /// Otherwise the `next` edge of the last node is rewritten, so every handle
    /// sharing that node sees the new element as well.
    ///
    /// # Complexity
    ///
    /// O(n)
    ///
    /// # Examples
    ///
    /// ```rust
    /// use shared_list::shared::SharedList;
    ///
    /// let mut list: SharedList<i32> = SharedList::new();
    /// list.push_back_mut(1).push_back_mut(2);
    /// assert_eq!(list.to_vec(), vec![1, 2]);
    /// ```
    pub fn push_back_mut(&mut self, element: T) -> &mut Self {
        match self.last_node() {
            None => self.push_front_mut(element),
            Some(last) => {
                // One strong count from the predecessor edge, one from `last`.
                trace_event!(
                    aliased = ReferenceCounter::strong_count(&last) > 2,
                    "rewriting tail link in place"
                );
                last.set_next(Some(Node::of(element, None)));
                self
            }
        }
    }

    /// Returns the list without its first element.
    ///
    /// The result shares every remaining node with `self`.
    ///
    /// # Errors
    ///
    /// Returns [`ListError::EmptyList`] if the list is empty.
    ///
    /// # Complexity
    ///
    /// O(1)
    ///
    /// # Examples
    ///
    /// ```rust
    /// use shared_list::shared::{ListError, SharedList};
    ///
    /// let list: SharedList<i32> = [1, 2, 3].into();
    /// let rest = list.pop_front().unwrap();
    /// assert_eq!(rest.get(0), Ok(2));
    /// assert_eq!(list.size(), 3);
    ///
    /// let empty: SharedList<i32> = SharedList::new();
    /// assert_eq!(empty.pop_front().err(), Some(ListError::EmptyList));
    /// ```
    pub fn pop_front(&self) -> Result<Self> {
        self.head
            .as_ref()
            .map(|node| Self { head: node.next() })
            .ok_or(ListError::EmptyList)
    }

    /// Removes the first element of this list, in place.
    ///
    /// The old head node is deallocated unless another handle still owns it.
    /// Once it is, iterators positioned on it are invalid.
    ///
    /// # Errors
    ///
    /// Returns [`ListError::EmptyList`] if the list is empty.
    pub fn pop_front_mut(&mut self) -> Result<&mut Self> {
        let node = self.head.take().ok_or(ListError::EmptyList)?;
        trace_event!(
            shared = ReferenceCounter::strong_count(&node) > 1,
            "popping front node in place"
        );
        self.head = node.next();
        Ok(self)
    }

    /// Returns the number of elements, counted by walking the chain.
    ///
    /// # Complexity
    ///
    /// O(n)
    #[must_use]
    pub fn size(&self) -> usize {
        let mut size = 0;
        let mut iterator = self.begin();
        while iterator.advance().is_ok() {
            size += 1;
        }
        size
    }

    /// Alias of [`size`](Self::size).
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.size()
    }

    /// Returns `true` if the list has no elements.
    ///
    /// # Complexity
    ///
    /// O(1)
    #[inline]
    #[must_use]
    pub const fn empty(&self) -> bool {
        self.head.is_none()
    }

    /// Alias of [`empty`](Self::empty).
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.empty()
    }

    /// Returns an iterator at the first node, invalid if the list is empty.
    #[inline]
    #[must_use]
    pub fn begin(&self) -> SharedListIterator<T> {
        SharedListIterator::from_link(self.head.as_ref())
    }

    /// Returns the end sentinel.
    #[inline]
    #[must_use]
    #[allow(clippy::unused_self)]
    pub const fn end(&self) -> SharedListIterator<T> {
        SharedListIterator::end()
    }

    /// Returns an iterator advanced `index` steps from [`begin`](Self::begin).
    fn position(&self, index: usize) -> Result<SharedListIterator<T>> {
        let mut iterator = self.begin();
        iterator.advance_by(index)?;
        Ok(iterator)
    }

    fn last_node(&self) -> Option<SharedNode<T>> {
        let steps = self.size().checked_sub(1)?;
        self.position(steps).ok()?.node().ok()
    }

    /// Calls `function` with a reference to the element at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`ListError::InvalidIterator`] if `index >= self.size()`.
    ///
    /// # Panics
    ///
    /// Panics if `function` mutably borrows the same element again through
    /// another handle.
    pub fn with_at<R, F>(&self, index: usize, function: F) -> Result<R>
    where
        F: FnOnce(&T) -> R,
    {
        self.position(index)?.with(function)
    }

    /// Calls `function` with a mutable reference to the element at `index`.
    ///
    /// The node is changed in place: every handle sharing it sees the change.
    ///
    /// # Errors
    ///
    /// Returns [`ListError::InvalidIterator`] if `index >= self.size()`.
    ///
    /// # Panics
    ///
    /// Panics if `function` reaches the same element again through another
    /// handle, since the element is borrowed for the duration of the call.
    pub fn with_at_mut<R, F>(&self, index: usize, function: F) -> Result<R>
    where
        F: FnOnce(&mut T) -> R,
    {
        self.position(index)?.with_mut(function)
    }

    /// Replaces the element at `index` in place, returning the previous one.
    ///
    /// # Errors
    ///
    /// Returns [`ListError::InvalidIterator`] if `index >= self.size()`.
    ///
    /// # Panics
    ///
    /// Panics if the element is currently borrowed, for instance from inside
    /// a [`with_at`](Self::with_at) closure.
    pub fn set(&self, index: usize, element: T) -> Result<T> {
        self.position(index)?.set(element)
    }
}

impl<T: Clone> SharedList<T> {
    /// Alias of [`begin`](Self::begin), for use with iterator adapters.
    #[inline]
    #[must_use]
    pub fn iter(&self) -> SharedListIterator<T> {
        self.begin()
    }

    /// Returns a new list with `element` appended.
    ///
    /// The whole chain is copied: the result shares no node with `self`, so
    /// later in-place changes to either list never show up in the other.
    ///
    /// # Complexity
    ///
    /// O(n) time and space
    ///
    /// # Examples
    ///
    /// ```rust
    /// use shared_list::shared::SharedList;
    ///
    /// let list: SharedList<i32> = [1, 2].into();
    /// let appended = list.push_back(3);
    /// assert_eq!(appended.to_vec(), vec![1, 2, 3]);
    /// assert_eq!(list.to_vec(), vec![1, 2]);
    /// ```
    #[must_use]
    pub fn push_back(&self, element: T) -> Self {
        let mut elements: Vec<T> = self.iter().collect();
        elements.push(element);
        Self::build_from_vec(elements)
    }

    /// Returns a clone of the element at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`ListError::InvalidIterator`] if `index >= self.size()`.
    ///
    /// # Complexity
    ///
    /// O(index)
    ///
    /// # Examples
    ///
    /// ```rust
    /// use shared_list::shared::{ListError, SharedList};
    ///
    /// let list: SharedList<i32> = [1, 2, 3].into();
    /// assert_eq!(list.get(2), Ok(3));
    /// assert_eq!(list.get(3), Err(ListError::InvalidIterator));
    /// ```
    pub fn get(&self, index: usize) -> Result<T> {
        self.position(index)?.get()
    }

    /// Collects clones of the elements into a `Vec`.
    #[must_use]
    pub fn to_vec(&self) -> Vec<T> {
        self.iter().collect()
    }
}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<T> Clone for SharedList<T> {
    #[inline]
    fn clone(&self) -> Self {
        Self {
            head: self.head.clone(),
        }
    }
}

impl<T> Default for SharedList<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<T> for SharedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::build_from_vec(iter.into_iter().collect())
    }
}

impl<T> From<Vec<T>> for SharedList<T> {
    fn from(elements: Vec<T>) -> Self {
        Self::build_from_vec(elements)
    }
}

impl<T, const N: usize> From<[T; N]> for SharedList<T> {
    fn from(elements: [T; N]) -> Self {
        Self::build_from_vec(Vec::from(elements))
    }
}

/// Appends in place, with the same aliasing as
/// [`push_back_mut`](SharedList::push_back_mut).
impl<T> Extend<T> for SharedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        // Drain the source first: it may walk this very chain.
        let elements: Vec<T> = iter.into_iter().collect();
        let mut tail = self.last_node();
        for element in elements {
            let node = Node::of(element, None);
            match &tail {
                Some(last) => {
                    last.set_next(Some(node.clone()));
                }
                None => self.head = Some(node.clone()),
            }
            tail = Some(node);
        }
    }
}

impl<T: Clone> IntoIterator for SharedList<T> {
    type Item = T;
    type IntoIter = SharedListIntoIterator<T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        SharedListIntoIterator::new(self.head)
    }
}

impl<T: Clone> IntoIterator for &SharedList<T> {
    type Item = T;
    type IntoIter = SharedListIterator<T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: PartialEq> PartialEq for SharedList<T> {
    fn eq(&self, other: &Self) -> bool {
        let mut left = self.head.clone();
        let mut right = other.head.clone();
        loop {
            match (left, right) {
                (None, None) => return true,
                (Some(left_node), Some(right_node)) => {
                    // Same node, same suffix.
                    if ReferenceCounter::ptr_eq(&left_node, &right_node) {
                        return true;
                    }
                    if *left_node.element() != *right_node.element() {
                        return false;
                    }
                    left = left_node.next();
                    right = right_node.next();
                }
                _ => return false,
            }
        }
    }
}

impl<T: Eq> Eq for SharedList<T> {}

impl<T: Hash> Hash for SharedList<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        let mut length = 0_usize;
        let mut current = self.head.clone();
        while let Some(node) = current {
            (*node.element()).hash(state);
            length += 1;
            current = node.next();
        }
        length.hash(state);
    }
}

impl<T: fmt::Debug> fmt::Debug for SharedList<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut entries = formatter.debug_list();
        let mut current = self.head.clone();
        while let Some(node) = current {
            entries.entry(&*node.element());
            current = node.next();
        }
        entries.finish()
    }
}

impl<T: fmt::Display> fmt::Display for SharedList<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "[")?;
        let mut current = self.head.clone();
        let mut first = true;
        while let Some(node) = current {
            if first {
                first = false;
            } else {
                write!(formatter, ", ")?;
            }
            write!(formatter, "{}", node.element())?;
            current = node.next();
        }
        write!(formatter, "]")
    }
}

static_assertions::assert_not_impl_any!(SharedList<i32>: Send, Sync);
static_assertions::assert_not_impl_any!(SharedList<String>: Send, Sync);

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<T: serde::Serialize> serde::Serialize for SharedList<T> {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeSeq;
        let mut seq = serializer.serialize_seq(None)?;
        let mut current = self.head.clone();
        while let Some(node) = current {
            seq.serialize_element(&*node.element())?;
            current = node.next();
        }
        seq.end()
    }
}

#[cfg(feature = "serde")]
struct SharedListVisitor<T> {
    marker: std::marker::PhantomData<T>,
}

#[cfg(feature = "serde")]
impl<T> SharedListVisitor<T> {
    const fn new() -> Self {
        Self {
            marker: std::marker::PhantomData,
        }
    }
}

#[cfg(feature = "serde")]
impl<'de, T> serde::de::Visitor<'de> for SharedListVisitor<T>
where
    T: serde::Deserialize<'de>,
{
    type Value = SharedList<T>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a sequence")
    }

    fn visit_seq<A>(self, mut seq: A) -> std::result::Result<Self::Value, A::Error>
    where
        A: serde::de::SeqAccess<'de>,
    {
        const MAX_PREALLOCATE: usize = 4096;
        let capacity = seq.size_hint().unwrap_or(0).min(MAX_PREALLOCATE);
        let mut elements = Vec::with_capacity(capacity);
        while let Some(element) = seq.next_element()? {
            elements.push(element);
        }
        Ok(SharedList::build_from_vec(elements))
    }
}

#[cfg(feature = "serde")]
impl<'de, T> serde::Deserialize<'de> for SharedList<T>
where
    T: serde::Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_seq(SharedListVisitor::new())
    }
}

// =============================================================================
// Tests
// =============================================================================
