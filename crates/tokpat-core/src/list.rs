//! Persistent singly linked list with structural sharing.
//!
//! A list is fully described by its head. `prepend` allocates one link and
//! shares the existing list as its tail, so any number of heads may coexist
//! over a common suffix without copying it. Links are never mutated after
//! construction, which makes cycles unrepresentable and lets lists cross
//! thread boundaries freely (`Arc` links, `Send + Sync` when `T` is).
//!
//! The matcher uses this to fork partial-match traces at every branching
//! combinator: each branch prepends onto the same shared trace.

use std::fmt;
use std::iter::FusedIterator;
use std::sync::Arc;

struct Link<T> {
    value: T,
    next: Option<Arc<Link<T>>>,
}

/// Immutable list handle. Cloning is O(1) and shares every link.
pub struct LinkList<T> {
    head: Option<Arc<Link<T>>>,
}

impl<T> LinkList<T> {
    /// The empty list. Allocates nothing.
    pub const fn empty() -> Self {
        Self { head: None }
    }

    /// One-element list.
    pub fn single(value: T) -> Self {
        Self::empty().prepend(value)
    }

    /// Two-element list with `second` at the head, `first` behind it.
    pub fn pair(first: T, second: T) -> Self {
        Self::single(first).prepend(second)
    }

    /// New list with `value` at the head and `self` as the shared tail.
    ///
    /// `self` is left untouched.
    pub fn prepend(&self, value: T) -> Self {
        Self {
            head: Some(Arc::new(Link {
                value,
                next: self.head.clone(),
            })),
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Number of elements. Walks the whole list.
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    #[inline]
    pub fn head(&self) -> Option<&T> {
        self.head.as_deref().map(|link| &link.value)
    }

    /// Everything after the head. The tail of the empty list is empty.
    pub fn tail(&self) -> Self {
        Self {
            head: self.head.as_ref().and_then(|link| link.next.clone()),
        }
    }

    /// Head-to-tail iteration. Each call starts fresh from this head.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            next: self.head.as_deref(),
        }
    }

    /// Whether both handles point at the very same head link.
    ///
    /// Two empty lists are considered identical.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        match (&self.head, &other.head) {
            (Some(a), Some(b)) => Arc::ptr_eq(a, b),
            (None, None) => true,
            _ => false,
        }
    }
}

impl<T: Clone> LinkList<T> {
    /// Elements in tail-to-head order, i.e. the order they were prepended.
    pub fn to_vec_rev(&self) -> Vec<T> {
        let mut items: Vec<T> = self.iter().cloned().collect();
        items.reverse();
        items
    }
}

impl<T> Clone for LinkList<T> {
    fn clone(&self) -> Self {
        Self {
            head: self.head.clone(),
        }
    }
}

impl<T> Default for LinkList<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T> Drop for LinkList<T> {
    // Unlink iteratively: the default recursive drop would use one stack
    // frame per uniquely owned link.
    fn drop(&mut self) {
        let mut next = self.head.take();
        while let Some(link) = next {
            match Arc::try_unwrap(link) {
                Ok(mut link) => next = link.next.take(),
                Err(_) => break,
            }
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for LinkList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: PartialEq> PartialEq for LinkList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other) || self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for LinkList<T> {}

impl<'a, T> IntoIterator for &'a LinkList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Borrowing iterator over a [`LinkList`].
pub struct Iter<'a, T> {
    next: Option<&'a Link<T>>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let link = self.next?;
        self.next = link.next.as_deref();
        Some(&link.value)
    }
}

impl<T> FusedIterator for Iter<'_, T> {}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self { next: self.next }
    }
}
