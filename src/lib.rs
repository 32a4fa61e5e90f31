//! # shared-list
//!
//! A singly-linked list whose nodes are shared between list handles through
//! reference counting.
//!
//! ## Overview
//!
//! - **Persistent operations** (`push_front`, `push_back`, `pop_front`) return
//!   a new list and leave the original's contents untouched. Prepending and
//!   popping share the existing nodes.
//! - **In-place operations** (`push_front_mut`, `push_back_mut`,
//!   `pop_front_mut`) rewrite the handle they are called on. Appending in place
//!   rewrites the shared tail node, which every list sharing it observes.
//! - **Weak iteration**: [`SharedListIterator`](shared::SharedListIterator)
//!   never keeps nodes alive and reports
//!   [`ListError::InvalidIterator`](shared::ListError::InvalidIterator) once
//!   its node is gone.
//!
//! ## Feature Flags
//!
//! - `serde`: `Serialize`/`Deserialize` for `SharedList` as a sequence
//! - `tracing`: `trace`-level events for in-place mutations
//!
//! ## Example
//!
//! ```rust
//! use shared_list::prelude::*;
//!
//! let list = shared_list![1, 2, 3];
//! let longer = list.push_front(0);
//! let shorter = list.pop_front().unwrap();
//!
//! assert_eq!(longer.to_vec(), vec![0, 1, 2, 3]);
//! assert_eq!(shorter.to_vec(), vec![2, 3]);
//! assert_eq!(list.to_vec(), vec![1, 2, 3]);
//! assert_eq!(list.get(3), Err(ListError::InvalidIterator));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports the list types and the [`shared_list!`] macro.
///
/// # Usage
///
/// ```rust
/// use shared_list::prelude::*;
/// ```
pub mod prelude {
    pub use crate::shared::{
        ListError, Node, SharedList, SharedListIntoIterator, SharedListIterator, SharedNode,
    };
    pub use crate::shared_list;
}

mod trace;

pub mod shared;
