//! Dialect-aware token classification.
//!
//! Resolves the kind of a literal token string by replaying a dialect's lexer
//! rules over it. Without a dialect every string is [`TokenKind::UNKNOWN`].

use std::sync::Arc;

use tokpat_core::{Classified, LexerRule, RuleSet, Scan, StringCursor, TokenKind};

/// Maps literal token text to a token kind.
///
/// Holds the rule list captured at construction, or nothing for the
/// dialect-agnostic variant. Cheap to clone; rules are shared.
pub struct TokenClassifier<K> {
    rules: Option<Arc<[Arc<dyn LexerRule<K>>]>>,
}

impl<K: TokenKind> TokenClassifier<K> {
    /// Classifier that knows nothing about the dialect.
    pub fn dialect_agnostic() -> Self {
        Self { rules: None }
    }

    /// Classifier replaying `provider`'s rules in the order it returns them.
    pub fn dialect_specific(provider: &impl RuleSet<K>) -> Self {
        Self {
            rules: Some(provider.rules().into()),
        }
    }

    pub fn is_dialect_specific(&self) -> bool {
        self.rules.is_some()
    }

    /// Number of captured rules (zero when dialect-agnostic).
    pub fn rule_count(&self) -> usize {
        self.rules.as_ref().map_or(0, |rules| rules.len())
    }

    /// Classify `text`. The first rule that produces a token decides the kind.
    ///
    /// Rules reporting `Undefined` or `Inapplicable` are skipped. When no rule
    /// recognizes the text the kind is `None`.
    pub fn classify(&self, text: &str) -> Classified<K> {
        let Some(rules) = &self.rules else {
            return Classified::new(text, Some(K::UNKNOWN));
        };

        let mut cursor = StringCursor::new(text);
        for rule in rules.iter() {
            cursor.reset();
            match rule.scan(&mut cursor) {
                Scan::Token(kind) => {
                    return Classified::new(text, Some(kind.unwrap_or(K::OTHER)));
                }
                Scan::Undefined | Scan::Inapplicable => continue,
            }
        }
        Classified::unrecognized(text)
    }
}

impl<K> Clone for TokenClassifier<K> {
    fn clone(&self) -> Self {
        Self {
            rules: self.rules.clone(),
        }
    }
}

impl<K> std::fmt::Debug for TokenClassifier<K> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.rules {
            None => f.write_str("TokenClassifier(dialect-agnostic)"),
            Some(rules) => f
                .debug_tuple("TokenClassifier")
                .field(&rules.iter().map(|r| r.name()).collect::<Vec<_>>())
                .finish(),
        }
    }
}
