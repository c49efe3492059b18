//! Lexer-rule contracts consumed by the token classifier.
//!
//! Rules come from a dialect and are opaque to the engine: a rule is handed a
//! cursor and reports what it recognized at the cursor position.

use std::sync::Arc;

use crate::CharCursor;

/// Outcome of one rule attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Scan<K> {
    /// The rule recognized a token. `None` means the rule carries no kind.
    Token(Option<K>),
    /// The rule does not match here.
    Undefined,
    /// The rule needs context the text does not provide (for example an
    /// unterminated quote). Treated like `Undefined` by the classifier.
    Inapplicable,
}

impl<K> Scan<K> {
    /// Whether the rule produced a token.
    pub fn is_defined(&self) -> bool {
        matches!(self, Scan::Token(_))
    }
}

/// A single dialect lexer rule.
pub trait LexerRule<K>: Send + Sync {
    fn scan(&self, cursor: &mut dyn CharCursor) -> Scan<K>;

    /// Short name for diagnostics.
    fn name(&self) -> &str {
        "rule"
    }
}

/// Rule-set provider. The order of `rules` is significant: the first rule
/// that recognizes a string decides its kind.
pub trait RuleSet<K> {
    fn rules(&self) -> Vec<Arc<dyn LexerRule<K>>>;
}

impl<K, R: RuleSet<K> + ?Sized> RuleSet<K> for &R {
    fn rules(&self) -> Vec<Arc<dyn LexerRule<K>>> {
        (*self).rules()
    }
}

impl<K> RuleSet<K> for Vec<Arc<dyn LexerRule<K>>> {
    fn rules(&self) -> Vec<Arc<dyn LexerRule<K>>> {
        self.clone()
    }
}
