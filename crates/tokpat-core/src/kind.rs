//! Token kinds and classified tokens.
//!
//! The concrete kind taxonomy belongs to a dialect; the engine only needs
//! equality plus two reserved values.

use std::fmt::Debug;

/// Lexical category supplied by a dialect.
pub trait TokenKind: Clone + Eq + Debug {
    /// Kind assigned when no dialect is available to classify a token.
    const UNKNOWN: Self;
    /// Kind assigned when a rule recognized a token but carried no kind.
    const OTHER: Self;
}

/// What the matcher needs to know about a stream token.
pub trait TokenView<K> {
    fn text(&self) -> &str;

    /// `None` when nothing recognized the token.
    fn kind(&self) -> Option<&K>;
}

impl<K, T: TokenView<K> + ?Sized> TokenView<K> for &T {
    fn text(&self) -> &str {
        (*self).text()
    }

    fn kind(&self) -> Option<&K> {
        (*self).kind()
    }
}

/// Token text tagged with the kind a classifier resolved for it.
///
/// An absent kind means no rule recognized the text. This is not the
/// "any kind" wildcard of pattern entries.
#[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Serialize)]
pub struct Classified<K> {
    text: String,
    kind: Option<K>,
}

impl<K> Classified<K> {
    pub fn new(text: impl Into<String>, kind: Option<K>) -> Self {
        Self {
            text: text.into(),
            kind,
        }
    }

    /// Text that no rule recognized.
    pub fn unrecognized(text: impl Into<String>) -> Self {
        Self::new(text, None)
    }

    #[inline]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[inline]
    pub fn kind(&self) -> Option<&K> {
        self.kind.as_ref()
    }

    pub fn into_parts(self) -> (String, Option<K>) {
        (self.text, self.kind)
    }
}

impl<K> TokenView<K> for Classified<K> {
    fn text(&self) -> &str {
        &self.text
    }

    fn kind(&self) -> Option<&K> {
        self.kind.as_ref()
    }
}
