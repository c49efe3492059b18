//! Invariant checks excluded from coverage reports.

#![cfg_attr(coverage_nightly, coverage(off))]

use crate::LinkList;

impl<T> LinkList<T> {
    /// Head of a list the caller knows to be non-empty.
    ///
    /// # Panics
    /// Panics when called on the empty list.
    pub fn expect_head(&self) -> &T {
        self.head()
            .unwrap_or_else(|| panic!("LinkList: read past terminal node (list is empty)"))
    }
}
