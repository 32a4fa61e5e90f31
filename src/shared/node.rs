//! List cells and the ownership edges between them.
//!
//! A [`Node`] stores one element and a strong reference to its successor.
//! Any number of nodes and list handles may own the same successor, which is
//! what lets several lists share a suffix:
//!
//! ```text
//! list_a: 0 ──┐
//!             ├──> 1 -> 2 -> nil
//! list_b: 9 ──┘
//! ```
//!
//! A node is deallocated when its last strong owner goes away. The successor
//! only follows if that was also its last owner.

use std::cell::{Ref, RefCell, RefMut};
use std::fmt;

use super::{ReferenceCounter, WeakReference};

/// Strong, shared handle to a [`Node`].
pub type SharedNode<T> = ReferenceCounter<Node<T>>;

/// Ownership edge to the next node, `None` at the tail.
pub(crate) type Link<T> = Option<SharedNode<T>>;

/// A single list cell.
///
/// The element and the `next` edge sit behind `RefCell`s because both can be
/// rewritten through shared handles: elements by dereferencing an iterator,
/// `next` by the in-place `push_back_mut` of
/// [`SharedList`](super::SharedList).
pub struct Node<T> {
    /// The element stored in this node.
    element: RefCell<T>,
    /// Reference to the next node (if any).
    next: RefCell<Link<T>>,
}

impl<T> Node<T> {
    /// Allocates a new node holding `element` in front of `next`.
    ///
    /// `next` is shared, not copied: the returned node becomes one more owner
    /// of the given chain.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use shared_list::shared::Node;
    /// use std::rc::Rc;
    ///
    /// let tail = Node::of(2, None);
    /// let head = Node::of(1, Some(Rc::clone(&tail)));
    ///
    /// assert_eq!(*head.element(), 1);
    /// assert!(Rc::ptr_eq(&head.next().unwrap(), &tail));
    /// assert_eq!(Rc::strong_count(&tail), 2);
    /// ```
    #[inline]
    #[must_use]
    pub fn of(element: T, next: Option<SharedNode<T>>) -> SharedNode<T> {
        ReferenceCounter::new(Self {
            element: RefCell::new(element),
            next: RefCell::new(next),
        })
    }

    /// Borrows the stored element.
    ///
    /// # Panics
    ///
    /// Panics if the element is currently borrowed mutably.
    #[inline]
    pub fn element(&self) -> Ref<'_, T> {
        self.element.borrow()
    }

    /// Mutably borrows the stored element.
    ///
    /// Every list sharing this node observes the change.
    ///
    /// # Panics
    ///
    /// Panics if the element is currently borrowed.
    #[inline]
    pub fn element_mut(&self) -> RefMut<'_, T> {
        self.element.borrow_mut()
    }

    /// Replaces the stored element, returning the previous one.
    ///
    /// # Panics
    ///
    /// Panics if the element is currently borrowed.
    #[inline]
    pub fn replace(&self, element: T) -> T {
        self.element.replace(element)
    }

    /// Returns a new strong reference to the successor, if any.
    #[inline]
    #[must_use]
    pub fn next(&self) -> Option<SharedNode<T>> {
        self.next.borrow().clone()
    }

    /// Returns `true` if this node is the last of its chain.
    #[inline]
    #[must_use]
    pub fn is_tail(&self) -> bool {
        self.next.borrow().is_none()
    }

    /// Rewrites the successor edge, returning the previous one.
    pub(crate) fn set_next(&self, next: Link<T>) -> Link<T> {
        self.next.replace(next)
    }

    /// Weak reference to the successor; dangling at the tail.
    pub(crate) fn downgrade_next(&self) -> WeakReference<Self> {
        self.next
            .borrow()
            .as_ref()
            .map_or_else(WeakReference::new, ReferenceCounter::downgrade)
    }
}

impl<T> Drop for Node<T> {
    // Unlinks uniquely owned successors one by one so that dropping a long
    // chain does not recurse once per node.
    fn drop(&mut self) {
        let mut link = self.next.get_mut().take();
        while let Some(node) = link {
            match ReferenceCounter::try_unwrap(node) {
                Ok(mut node) => link = node.next.get_mut().take(),
                Err(_) => break,
            }
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Node<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Node")
            .field("element", &*self.element.borrow())
            .field("is_tail", &self.is_tail())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_of_creates_tail_node() {
        let node = Node::of(42, None);
        assert_eq!(*node.element(), 42);
        assert!(node.is_tail());
        assert!(node.next().is_none());
    }

    #[rstest]
    fn test_of_shares_next() {
        let tail = Node::of(2, None);
        let first = Node::of(1, Some(tail.clone()));
        let second = Node::of(0, Some(tail.clone()));

        assert_eq!(ReferenceCounter::strong_count(&tail), 3);
        assert!(ReferenceCounter::ptr_eq(&first.next().unwrap(), &tail));
        assert!(ReferenceCounter::ptr_eq(&second.next().unwrap(), &tail));
    }

    #[rstest]
    fn test_element_mut_is_seen_by_every_owner() {
        let tail = Node::of(String::from("tail"), None);
        let owner = Node::of(String::from("head"), Some(tail.clone()));

        tail.element_mut().push_str("-changed");

        let through_owner = owner.next().unwrap();
        assert_eq!(*through_owner.element(), "tail-changed");
    }

    #[rstest]
    fn test_replace_returns_previous_element() {
        let node = Node::of(1, None);
        assert_eq!(node.replace(5), 1);
        assert_eq!(*node.element(), 5);
    }

    #[rstest]
    fn test_set_next_returns_previous_link() {
        let tail = Node::of(3, None);
        let head = Node::of(1, Some(tail.clone()));

        let previous = head.set_next(Some(Node::of(2, None)));

        assert!(ReferenceCounter::ptr_eq(&previous.unwrap(), &tail));
        assert_eq!(*head.next().unwrap().element(), 2);
    }

    #[rstest]
    fn test_downgrade_next_at_tail_is_dangling() {
        let node = Node::of(1, None);
        assert!(node.downgrade_next().upgrade().is_none());
    }

    #[rstest]
    fn test_downgrade_next_does_not_keep_successor_alive() {
        let head = Node::of(1, Some(Node::of(2, None)));
        let weak = head.downgrade_next();
        assert!(weak.upgrade().is_some());

        head.set_next(None);
        assert!(weak.upgrade().is_none());
    }

    #[rstest]
    fn test_drop_stops_at_shared_successor() {
        let shared = Node::of(2, Some(Node::of(3, None)));
        let head = Node::of(1, Some(shared.clone()));
        let weak_head = ReferenceCounter::downgrade(&head);

        drop(head);

        assert!(weak_head.upgrade().is_none());
        assert_eq!(ReferenceCounter::strong_count(&shared), 1);
        assert_eq!(*shared.next().unwrap().element(), 3);
    }

    #[rstest]
    fn test_drop_long_chain_does_not_overflow() {
        let mut head: Link<usize> = None;
        for index in 0..200_000 {
            head = Some(Node::of(index, head));
        }
        drop(head);
    }

    #[rstest]
    fn test_debug_shows_element_only() {
        let node = Node::of(7, Some(Node::of(8, None)));
        assert_eq!(format!("{node:?}"), "Node { element: 7, is_tail: false }");
    }
}
