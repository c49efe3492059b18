//! Shared fixtures for predicate tests.

use std::sync::Arc;

use tokpat_core::{CharCursor, LexerRule, RuleSet, Scan, TokenKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tk {
    Unknown,
    Other,
    Keyword,
    Ident,
    Number,
}

impl TokenKind for Tk {
    const UNKNOWN: Self = Tk::Unknown;
    const OTHER: Self = Tk::Other;
}

/// Recognizes exactly `text` and reports `kind`.
pub struct ExactRule {
    pub text: &'static str,
    pub kind: Option<Tk>,
}

impl LexerRule<Tk> for ExactRule {
    fn scan(&self, cursor: &mut dyn CharCursor) -> Scan<Tk> {
        for expected in self.text.chars() {
            if cursor.read() != Some(expected) {
                return Scan::Undefined;
            }
        }
        if cursor.read().is_some() {
            return Scan::Undefined;
        }
        Scan::Token(self.kind)
    }

    fn name(&self) -> &str {
        self.text
    }
}

/// Recognizes any run of ASCII digits.
pub struct DigitsRule;

impl LexerRule<Tk> for DigitsRule {
    fn scan(&self, cursor: &mut dyn CharCursor) -> Scan<Tk> {
        let mut seen = 0;
        while let Some(c) = cursor.read() {
            if !c.is_ascii_digit() {
                cursor.unread();
                break;
            }
            seen += 1;
        }
        if seen == 0 {
            Scan::Undefined
        } else {
            Scan::Token(Some(Tk::Number))
        }
    }
}

/// Always gives up as if it needed more context.
pub struct InapplicableRule;

impl LexerRule<Tk> for InapplicableRule {
    fn scan(&self, _cursor: &mut dyn CharCursor) -> Scan<Tk> {
        Scan::Inapplicable
    }
}

/// Ordered rule list.
pub struct Rules(pub Vec<Arc<dyn LexerRule<Tk>>>);

impl RuleSet<Tk> for Rules {
    fn rules(&self) -> Vec<Arc<dyn LexerRule<Tk>>> {
        self.0.clone()
    }
}

pub fn exact(text: &'static str, kind: Option<Tk>) -> Arc<dyn LexerRule<Tk>> {
    Arc::new(ExactRule { text, kind })
}

/// `SELECT`/`FROM` keywords and digit runs.
pub fn keyword_rules() -> Rules {
    Rules(vec![
        exact("SELECT", Some(Tk::Keyword)),
        exact("FROM", Some(Tk::Keyword)),
        Arc::new(DigitsRule),
    ])
}
