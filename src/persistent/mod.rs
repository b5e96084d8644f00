//! Persistent (immutable) data structures.
//!
//! - [`PersistentList`]: persistent singly-linked list
//! - [`cons`]: curried prepend, the primitive behind [`curry`](crate::combinator::curry)
//!
//! # Examples
//!
//! ```rust
//! use fpkit::persistent::PersistentList;
//!
//! let list = PersistentList::new().cons(3).cons(2).cons(1);
//! assert_eq!(list.head(), Some(&1));
//!
//! let extended = list.cons(0);
//! assert_eq!(list.len(), 3);
//! assert_eq!(extended.len(), 4);
//! ```

mod list;

pub use list::{PersistentList, PersistentListIntoIterator, PersistentListIterator, cons};
