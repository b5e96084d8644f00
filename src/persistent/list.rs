//! Persistent (immutable) singly-linked list.
//!
//! This module provides [`PersistentList`], a cons-list that shares its tail
//! between versions, and the curried [`cons`] primitive.
//!
//! | Operation | Complexity |
//! |-----------|------------|
//! | `cons`    | O(1)       |
//! | `head`    | O(1)       |
//! | `tail`    | O(1)       |
//! | `len`     | O(1)       |
//! | `reverse` | O(n)       |
//!
//! # Examples
//!
//! ```rust
//! use fpkit::persistent::PersistentList;
//!
//! let list = PersistentList::new().cons(3).cons(2).cons(1);
//! assert_eq!(list.head(), Some(&1));
//!
//! // The original list is preserved
//! let extended = list.cons(0);
//! assert_eq!(list.len(), 3);
//! assert_eq!(extended.len(), 4);
//! ```
//!
//! # Structural Sharing
//!
//! ```text
//! list1: 1 -> 2 -> 3 -> nil
//! list2 = list1.cons(0): 0 -> [1 -> 2 -> 3 -> nil]
//! ```

use std::fmt;
use std::iter::FromIterator;
use std::rc::Rc;

struct Node<T> {
    element: T,
    next: Option<Rc<Self>>,
}

/// A persistent (immutable) singly-linked list.
///
/// Cloning a list is O(1): both copies share the same nodes.
///
/// # Examples
///
/// ```rust
/// use fpkit::persistent::PersistentList;
///
/// let list = PersistentList::singleton("only");
/// assert_eq!(list.head(), Some(&"only"));
/// ```
pub struct PersistentList<T> {
    head: Option<Rc<Node<T>>>,
    length: usize,
}

impl<T> PersistentList<T> {
    /// Creates a new empty list.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fpkit::persistent::PersistentList;
    ///
    /// let list: PersistentList<i32> = PersistentList::new();
    /// assert!(list.is_empty());
    /// ```
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            head: None,
            length: 0,
        }
    }

    /// Creates a list containing a single element.
    #[inline]
    #[must_use]
    pub fn singleton(element: T) -> Self {
        Self::new().cons(element)
    }

    /// Prepends an element, sharing the rest of the list.
    ///
    /// # Complexity
    ///
    /// O(1) time and space
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fpkit::persistent::PersistentList;
    ///
    /// let list = PersistentList::new().cons("b").cons("a");
    /// let collected: Vec<&&str> = list.iter().collect();
    /// assert_eq!(collected, vec![&"a", &"b"]);
    /// ```
    #[inline]
    #[must_use]
    pub fn cons(&self, element: T) -> Self {
        Self {
            head: Some(Rc::new(Node {
                element,
                next: self.head.clone(),
            })),
            length: self.length + 1,
        }
    }

    /// Returns the first element, or `None` for the empty list.
    #[inline]
    #[must_use]
    pub fn head(&self) -> Option<&T> {
        self.head.as_ref().map(|node| &node.element)
    }

    /// Returns the list without its first element.
    ///
    /// The tail of the empty list is the empty list.
    #[inline]
    #[must_use]
    pub fn tail(&self) -> Self {
        self.uncons().map_or_else(Self::new, |(_, tail)| tail)
    }

    /// Splits the list into its first element and the remaining list.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fpkit::persistent::PersistentList;
    ///
    /// let list = PersistentList::new().cons(2).cons(1);
    /// let (head, tail) = list.uncons().unwrap();
    /// assert_eq!(*head, 1);
    /// assert_eq!(tail.head(), Some(&2));
    /// ```
    #[must_use]
    pub fn uncons(&self) -> Option<(&T, Self)> {
        self.head.as_ref().map(|node| {
            let tail = Self {
                head: node.next.clone(),
                length: self.length - 1,
            };
            (&node.element, tail)
        })
    }

    /// Returns the number of elements.
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.length
    }

    /// Returns `true` if the list has no elements.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// Iterates over references to the elements, front to back.
    #[inline]
    pub fn iter(&self) -> PersistentListIterator<'_, T> {
        PersistentListIterator {
            current: self.head.as_ref(),
            remaining: self.length,
        }
    }
}

impl<T: Clone> PersistentList<T> {
    /// Returns a new list with the elements in reverse order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fpkit::persistent::PersistentList;
    ///
    /// let list: PersistentList<i32> = (1..=3).collect();
    /// let reversed: Vec<i32> = list.reverse().into_iter().collect();
    /// assert_eq!(reversed, vec![3, 2, 1]);
    /// ```
    #[must_use]
    pub fn reverse(&self) -> Self {
        self.iter()
            .fold(Self::new(), |reversed, element| reversed.cons(element.clone()))
    }
}

/// Curried form of [`PersistentList::cons`]: `cons(element)(list)`.
///
/// # Examples
///
/// ```rust
/// use fpkit::persistent::{PersistentList, cons};
///
/// let prepend_zero = cons(0);
/// let list = prepend_zero(&PersistentList::singleton(1));
/// assert_eq!(list.into_iter().collect::<Vec<_>>(), vec![0, 1]);
/// ```
pub fn cons<T: Clone>(element: T) -> impl Fn(&PersistentList<T>) -> PersistentList<T> {
    move |list: &PersistentList<T>| list.cons(element.clone())
}

// =============================================================================
// Iterators
// =============================================================================

/// An iterator over references to elements of a [`PersistentList`].
pub struct PersistentListIterator<'a, T> {
    current: Option<&'a Rc<Node<T>>>,
    remaining: usize,
}

impl<'a, T> Iterator for PersistentListIterator<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.current.map(|node| {
            self.current = node.next.as_ref();
            self.remaining -= 1;
            &node.element
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for PersistentListIterator<'_, T> {}

/// An owning iterator over elements of a [`PersistentList`].
///
/// Elements are cloned out because the nodes may be shared.
pub struct PersistentListIntoIterator<T> {
    list: PersistentList<T>,
}

impl<T: Clone> Iterator for PersistentListIntoIterator<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        let (element, tail) = self
            .list
            .uncons()
            .map(|(head, tail)| (head.clone(), tail))?;
        self.list = tail;
        Some(element)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.list.length, Some(self.list.length))
    }
}

impl<T: Clone> ExactSizeIterator for PersistentListIntoIterator<T> {}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<T> Clone for PersistentList<T> {
    fn clone(&self) -> Self {
        Self {
            head: self.head.clone(),
            length: self.length,
        }
    }
}

impl<T> Default for PersistentList<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<T> for PersistentList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut elements: Vec<T> = iter.into_iter().collect();
        let mut list = Self::new();
        while let Some(element) = elements.pop() {
            list = list.cons(element);
        }
        list
    }
}

impl<T: Clone> IntoIterator for PersistentList<T> {
    type Item = T;
    type IntoIter = PersistentListIntoIterator<T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        PersistentListIntoIterator { list: self }
    }
}

impl<'a, T> IntoIterator for &'a PersistentList<T> {
    type Item = &'a T;
    type IntoIter = PersistentListIterator<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: PartialEq> PartialEq for PersistentList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.length == other.length && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for PersistentList<T> {}

impl<T: fmt::Debug> fmt::Debug for PersistentList<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_list().entries(self.iter()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for PersistentList<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "[")?;
        for (index, element) in self.iter().enumerate() {
            if index > 0 {
                write!(formatter, ", ")?;
            }
            write!(formatter, "{element}")?;
        }
        write!(formatter, "]")
    }
}

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<T: serde::Serialize> serde::Serialize for PersistentList<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_seq(self.iter())
    }
}

#[cfg(feature = "serde")]
impl<'de, T: serde::Deserialize<'de>> serde::Deserialize<'de> for PersistentList<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let elements = <Vec<T> as serde::Deserialize>::deserialize(deserializer)?;
        Ok(elements.into_iter().collect())
    }
}

static_assertions::assert_not_impl_any!(PersistentList<i32>: Send, Sync);

// =============================================================================
// Tests
// =============================================================================
