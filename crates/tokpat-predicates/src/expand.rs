//! Expansion of a predicate tree into the concrete entry sequences it accepts.
//!
//! Prefixes are carried as [`LinkList`]s in reverse order, so every branch
//! point shares the prefix built so far instead of copying it.

use std::convert::Infallible;

use tokpat_core::LinkList;

use crate::node::{PredicateNode, TokenEntry};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ExpandError {
    #[error("pattern expands to more than {0} token sequences")]
    TooManyVariants(usize),
}

impl<K: Clone> PredicateNode<K> {
    /// Every entry sequence this pattern can match.
    ///
    /// Order is deterministic: the absent branch of an optional comes before
    /// the present one, and alternatives follow their listed order. The result
    /// grows exponentially with nested alternatives; see [`Self::expand_bounded`].
    pub fn expand(&self) -> Vec<Vec<TokenEntry<K>>> {
        let Ok(prefixes) = expand_from(self, |_| Ok::<(), Infallible>(()));
        prefixes.iter().map(LinkList::to_vec_rev).collect()
    }

    /// Like [`Self::expand`], failing once more than `limit` sequences exist.
    pub fn expand_bounded(&self, limit: usize) -> Result<Vec<Vec<TokenEntry<K>>>, ExpandError> {
        let prefixes = expand_from(self, |count| check_limit(count, limit))?;
        Ok(prefixes.iter().map(LinkList::to_vec_rev).collect())
    }
}

type Prefixes<K> = Vec<LinkList<TokenEntry<K>>>;

/// A combinator waiting on the prefixes produced by its current child.
enum Frame<'n, K> {
    Sequence {
        children: &'n [PredicateNode<K>],
        next: usize,
    },
    Alternative {
        children: &'n [PredicateNode<K>],
        next: usize,
        prefixes: Prefixes<K>,
        out: Prefixes<K>,
    },
    Optional {
        absent: Prefixes<K>,
    },
}

enum Step<'n, K> {
    Enter(&'n PredicateNode<K>, Prefixes<K>),
    Return(Prefixes<K>),
}

/// Extends every prefix with each way `root` can match. `check` sees the
/// size of every union as it grows.
fn expand_from<'n, K: Clone, E>(
    root: &'n PredicateNode<K>,
    check: impl Fn(usize) -> Result<(), E>,
) -> Result<Prefixes<K>, E> {
    let mut frames: Vec<Frame<'n, K>> = Vec::new();
    let mut step = Step::Enter(root, vec![LinkList::empty()]);
    loop {
        step = match step {
            Step::Enter(node, prefixes) => match node {
                PredicateNode::Entry(entry) => Step::Return(
                    prefixes
                        .iter()
                        .map(|prefix| prefix.prepend(entry.clone()))
                        .collect(),
                ),
                PredicateNode::Sequence(children) => {
                    frames.push(Frame::Sequence { children, next: 0 });
                    Step::Return(prefixes)
                }
                PredicateNode::Alternative(children) => {
                    frames.push(Frame::Alternative {
                        children,
                        next: 0,
                        prefixes,
                        out: Vec::new(),
                    });
                    Step::Return(Vec::new())
                }
                PredicateNode::Optional(child) => {
                    frames.push(Frame::Optional {
                        absent: prefixes.clone(),
                    });
                    Step::Enter(&**child, prefixes)
                }
            },
            Step::Return(found) => match frames.pop() {
                None => return Ok(found),
                Some(Frame::Sequence { children, next }) => match children.get(next) {
                    Some(child) => {
                        frames.push(Frame::Sequence {
                            children,
                            next: next + 1,
                        });
                        Step::Enter(child, found)
                    }
                    None => Step::Return(found),
                },
                Some(Frame::Alternative {
                    children,
                    next,
                    prefixes,
                    mut out,
                }) => {
                    out.extend(found);
                    check(out.len())?;
                    match children.get(next) {
                        Some(child) => {
                            let branch = prefixes.clone();
                            frames.push(Frame::Alternative {
                                children,
                                next: next + 1,
                                prefixes,
                                out,
                            });
                            Step::Enter(child, branch)
                        }
                        None => Step::Return(out),
                    }
                }
                Some(Frame::Optional { mut absent }) => {
                    absent.extend(found);
                    check(absent.len())?;
                    Step::Return(absent)
                }
            },
        };
    }
}

fn check_limit(count: usize, limit: usize) -> Result<(), ExpandError> {
    if count > limit {
        return Err(ExpandError::TooManyVariants(limit));
    }
    Ok(())
}
