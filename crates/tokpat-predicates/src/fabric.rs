//! The predicate fabric: builds predicate trees from loosely typed inputs.
//!
//! Every producing method accepts [`PredicateInput`]s in any combination:
//! - nothing ([`any`], `None`): an entry matching any token
//! - a string: an entry matching exactly that token text, with the kind the
//!   dialect classifies it as
//! - a kind ([`Kind`]): an entry matching any token of that kind
//! - a [`PredicateNode`]: used as is
//!
//! Literal classification happens once, when the tree is built.

use tokpat_core::{RuleSet, TokenKind};

use crate::classify::TokenClassifier;
use crate::node::{PredicateNode, TokenEntry};

/// Wraps a token kind so it converts into a [`PredicateInput`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Kind<K>(pub K);

/// One raw argument to the fabric.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PredicateInput<K> {
    Any,
    Text(String),
    Kind(K),
    Node(PredicateNode<K>),
}

/// Input matching any token.
pub fn any<K>() -> PredicateInput<K> {
    PredicateInput::Any
}

impl<K> From<&str> for PredicateInput<K> {
    fn from(text: &str) -> Self {
        Self::Text(text.to_owned())
    }
}

impl<K> From<String> for PredicateInput<K> {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl<K> From<Kind<K>> for PredicateInput<K> {
    fn from(Kind(kind): Kind<K>) -> Self {
        Self::Kind(kind)
    }
}

impl<K> From<PredicateNode<K>> for PredicateInput<K> {
    fn from(node: PredicateNode<K>) -> Self {
        Self::Node(node)
    }
}

impl<K> From<TokenEntry<K>> for PredicateInput<K> {
    fn from(entry: TokenEntry<K>) -> Self {
        Self::Node(PredicateNode::Entry(entry))
    }
}

impl<K, T: Into<PredicateInput<K>>> From<Option<T>> for PredicateInput<K> {
    fn from(input: Option<T>) -> Self {
        input.map_or(Self::Any, Into::into)
    }
}

/// Builds a `[PredicateInput<_>; N]` from mixed arguments.
///
/// ```
/// use tokpat_predicates::{Kind, PredicateInput, any, inputs};
///
/// let items: [PredicateInput<u8>; 3] = inputs!["SELECT", Kind(1), any()];
/// assert_eq!(items[0], PredicateInput::Text("SELECT".into()));
/// ```
#[macro_export]
macro_rules! inputs {
    ($($item:expr),* $(,)?) => {
        [$($crate::PredicateInput::from($item)),*]
    };
}

/// Producer of predicate nodes, classifying literal entries per dialect.
#[derive(Debug, Clone)]
pub struct TokenPredicateFabric<K> {
    classifier: TokenClassifier<K>,
}

impl<K: TokenKind> TokenPredicateFabric<K> {
    /// Dialect-agnostic fabric: literals classify as [`TokenKind::UNKNOWN`].
    pub fn make_default() -> Self {
        Self::with_classifier(TokenClassifier::dialect_agnostic())
    }

    /// Fabric classifying literals with `provider`'s lexer rules.
    pub fn make_dialect_specific(provider: &impl RuleSet<K>) -> Self {
        Self::with_classifier(TokenClassifier::dialect_specific(provider))
    }

    pub fn with_classifier(classifier: TokenClassifier<K>) -> Self {
        Self { classifier }
    }

    pub fn classifier(&self) -> &TokenClassifier<K> {
        &self.classifier
    }

    /// Single entry (or the given node) for one input.
    pub fn token(&self, input: impl Into<PredicateInput<K>>) -> PredicateNode<K> {
        self.make_node(input.into())
    }

    pub fn sequence<I>(&self, items: I) -> PredicateNode<K>
    where
        I: IntoIterator,
        I::Item: Into<PredicateInput<K>>,
    {
        PredicateNode::Sequence(self.make_group(items).into())
    }

    pub fn alternative<I>(&self, items: I) -> PredicateNode<K>
    where
        I: IntoIterator,
        I::Item: Into<PredicateInput<K>>,
    {
        PredicateNode::Alternative(self.make_group(items).into())
    }

    /// Optional occurrence. A single item is the child itself; zero or several
    /// items are wrapped into a sequence first.
    pub fn optional<I>(&self, items: I) -> PredicateNode<K>
    where
        I: IntoIterator,
        I::Item: Into<PredicateInput<K>>,
    {
        let mut group = self.make_group(items);
        let child = if group.len() == 1 {
            group.swap_remove(0)
        } else {
            PredicateNode::Sequence(group.into())
        };
        PredicateNode::optional(child)
    }

    fn make_group<I>(&self, items: I) -> Vec<PredicateNode<K>>
    where
        I: IntoIterator,
        I::Item: Into<PredicateInput<K>>,
    {
        items
            .into_iter()
            .map(|item| self.make_node(item.into()))
            .collect()
    }

    fn make_node(&self, input: PredicateInput<K>) -> PredicateNode<K> {
        match input {
            PredicateInput::Any => TokenEntry::any().into(),
            PredicateInput::Node(node) => node,
            PredicateInput::Text(text) => {
                let (text, kind) = self.classifier.classify(&text).into_parts();
                TokenEntry::new(Some(text), kind).into()
            }
            PredicateInput::Kind(kind) => TokenEntry::of_kind(kind).into(),
        }
    }
}
