//! Match results.

use indexmap::IndexMap;
use serde::Serialize;

use tokpat_core::LinkList;

/// End position mapped to the trace of token indices consumed to reach it.
///
/// Traces are stored head-first: the head is the last consumed index. Keys
/// keep the order in which ends were first found.
pub type Traces = IndexMap<usize, LinkList<usize>>;

/// Every way a pattern matched from one start position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchSet {
    start: usize,
    ends: Traces,
}

impl MatchSet {
    pub(crate) fn new(start: usize, ends: Traces) -> Self {
        Self { start, ends }
    }

    pub fn start(&self) -> usize {
        self.start
    }

    /// No match at all. A pattern that matches zero tokens is not empty: its
    /// set contains `start`.
    pub fn is_empty(&self) -> bool {
        self.ends.is_empty()
    }

    pub fn len(&self) -> usize {
        self.ends.len()
    }

    /// End indices (exclusive), in first-found order.
    pub fn ends(&self) -> impl Iterator<Item = usize> + '_ {
        self.ends.keys().copied()
    }

    pub fn contains(&self, end: usize) -> bool {
        self.ends.contains_key(&end)
    }

    /// Raw trace for `end`, last consumed index first.
    pub fn trace(&self, end: usize) -> Option<&LinkList<usize>> {
        self.ends.get(&end)
    }

    /// Token indices consumed on the way to `end`, in stream order.
    pub fn span(&self, end: usize) -> Option<Vec<usize>> {
        self.trace(end).map(LinkList::to_vec_rev)
    }

    /// Furthest end.
    pub fn longest(&self) -> Option<usize> {
        self.ends().max()
    }

    pub fn traces(&self) -> &Traces {
        &self.ends
    }

    pub fn report(&self) -> MatchReport {
        MatchReport {
            start: self.start,
            matches: self
                .ends
                .iter()
                .map(|(&end, trace)| MatchSpan {
                    end,
                    tokens: trace.to_vec_rev(),
                })
                .collect(),
        }
    }
}

/// Serializable view of a [`MatchSet`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchReport {
    pub start: usize,
    pub matches: Vec<MatchSpan>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchSpan {
    pub end: usize,
    pub tokens: Vec<usize>,
}
