//! Predicate node model.
//!
//! A pattern is a tree of [`PredicateNode`]s. Leaves are [`TokenEntry`]s that
//! test a single token; inner nodes combine children as a sequence, an
//! alternative, or an optional occurrence. Trees are immutable: children live
//! behind `Arc`, so cloning a node shares its subtrees and the same tree can be
//! matched from many threads at once.

use std::fmt;
use std::mem;
use std::sync::Arc;

use tokpat_core::TokenView;

/// Atomic predicate: matches one token by text, by kind, by both, or by neither.
///
/// An absent slot matches anything. An entry that requires a kind never
/// matches a token whose kind is unknown.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TokenEntry<K> {
    string: Option<String>,
    kind: Option<K>,
}

impl<K> TokenEntry<K> {
    pub fn new(string: Option<String>, kind: Option<K>) -> Self {
        Self { string, kind }
    }

    /// Full wildcard.
    pub fn any() -> Self {
        Self::new(None, None)
    }

    /// Exact text, any kind.
    pub fn text(string: impl Into<String>) -> Self {
        Self::new(Some(string.into()), None)
    }

    /// Any text of the given kind.
    pub fn of_kind(kind: K) -> Self {
        Self::new(None, Some(kind))
    }

    #[inline]
    pub fn string(&self) -> Option<&str> {
        self.string.as_deref()
    }

    #[inline]
    pub fn kind(&self) -> Option<&K> {
        self.kind.as_ref()
    }

    pub fn is_wildcard(&self) -> bool {
        self.string.is_none() && self.kind.is_none()
    }
}

impl<K: PartialEq> TokenEntry<K> {
    /// Whether `token` satisfies both constraints. Text comparison is exact.
    pub fn matches<T: TokenView<K> + ?Sized>(&self, token: &T) -> bool {
        if let Some(string) = &self.string
            && token.text() != string.as_str()
        {
            return false;
        }
        match &self.kind {
            Some(kind) => token.kind() == Some(kind),
            None => true,
        }
    }
}

/// Pattern tree over a token stream.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PredicateNode<K> {
    /// A single token.
    Entry(TokenEntry<K>),
    /// All children, in order.
    Sequence(Arc<[PredicateNode<K>]>),
    /// Any of the children, tried in listed order; every viable branch is kept.
    Alternative(Arc<[PredicateNode<K>]>),
    /// Zero or one occurrence of the child.
    Optional(Arc<PredicateNode<K>>),
}

impl<K> PredicateNode<K> {
    pub fn entry(entry: TokenEntry<K>) -> Self {
        Self::Entry(entry)
    }

    pub fn sequence(children: impl IntoIterator<Item = PredicateNode<K>>) -> Self {
        Self::Sequence(children.into_iter().collect())
    }

    pub fn alternative(children: impl IntoIterator<Item = PredicateNode<K>>) -> Self {
        Self::Alternative(children.into_iter().collect())
    }

    pub fn optional(child: PredicateNode<K>) -> Self {
        Self::Optional(Arc::new(child))
    }

    /// Children of a combinator; empty for entries.
    pub fn children(&self) -> &[PredicateNode<K>] {
        match self {
            Self::Entry(_) => &[],
            Self::Sequence(children) | Self::Alternative(children) => children,
            Self::Optional(child) => std::slice::from_ref(&**child),
        }
    }

    /// Nesting depth. A lone entry has depth 1, an empty combinator too.
    pub fn depth(&self) -> usize {
        let mut deepest = 0;
        let mut pending = vec![(self, 1)];
        while let Some((node, depth)) = pending.pop() {
            deepest = deepest.max(depth);
            pending.extend(node.children().iter().map(|child| (child, depth + 1)));
        }
        deepest
    }

    /// Short label of the node variant, for traces.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Entry(_) => "entry",
            Self::Sequence(_) => "seq",
            Self::Alternative(_) => "alt",
            Self::Optional(_) => "opt",
        }
    }
}

/// Moves uniquely owned combinator children into `out`, leaving wildcard
/// entries behind. Shared subtrees stay where they are.
fn take_children<K>(node: &mut PredicateNode<K>, out: &mut Vec<PredicateNode<K>>) {
    let slots: &mut [PredicateNode<K>] = match node {
        PredicateNode::Entry(_) => return,
        PredicateNode::Sequence(children) | PredicateNode::Alternative(children) => {
            match Arc::get_mut(children) {
                Some(children) => children,
                None => return,
            }
        }
        PredicateNode::Optional(child) => match Arc::get_mut(child) {
            Some(child) => std::slice::from_mut(child),
            None => return,
        },
    };
    for slot in slots {
        if !matches!(slot, PredicateNode::Entry(_)) {
            out.push(mem::replace(slot, PredicateNode::Entry(TokenEntry::any())));
        }
    }
}

// Deep trees are torn down without recursing.
impl<K> Drop for PredicateNode<K> {
    fn drop(&mut self) {
        let mut pending = Vec::new();
        take_children(self, &mut pending);
        while let Some(mut node) = pending.pop() {
            take_children(&mut node, &mut pending);
        }
    }
}

impl<K> From<TokenEntry<K>> for PredicateNode<K> {
    fn from(entry: TokenEntry<K>) -> Self {
        Self::Entry(entry)
    }
}

impl<K: fmt::Debug> fmt::Display for TokenEntry<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.string, &self.kind) {
            (None, None) => f.write_str("_"),
            (Some(s), None) => write!(f, "{s:?}"),
            (None, Some(k)) => write!(f, "<{k:?}>"),
            (Some(s), Some(k)) => write!(f, "{s:?}:<{k:?}>"),
        }
    }
}

enum Piece<'a, K> {
    Node(&'a PredicateNode<K>),
    Text(&'static str),
}

impl<K: fmt::Debug> fmt::Display for PredicateNode<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut pending = vec![Piece::Node(self)];
        while let Some(piece) = pending.pop() {
            let node = match piece {
                Piece::Text(text) => {
                    f.write_str(text)?;
                    continue;
                }
                Piece::Node(node) => node,
            };
            let (open, close) = match node {
                Self::Entry(entry) => {
                    write!(f, "{entry}")?;
                    continue;
                }
                Self::Sequence(_) => ("{", "}"),
                Self::Alternative(_) => ("[", "]"),
                Self::Optional(_) => ("", "?"),
            };
            f.write_str(open)?;
            pending.push(Piece::Text(close));
            for (i, child) in node.children().iter().enumerate().rev() {
                pending.push(Piece::Node(child));
                if i > 0 {
                    pending.push(Piece::Text(" "));
                }
            }
        }
        Ok(())
    }
}
