//! Lexer rules classifying single SQL literals.
//!
//! These back the dialect-specific predicate fabric: each rule looks at the
//! start of a literal and reports the kind it recognizes there. Rules are
//! tried in [`SqlRuleSet`] order and the first defined result wins.

use std::sync::Arc;

use regex_automata::dfa::{Automaton, StartKind, dense};
use regex_automata::{Anchored, Input};

use tokpat_core::{CharCursor, LexerRule, RuleSet, Scan};

use crate::SqlTokenKind;
use crate::dialect::{OPERATORS, SqlDialect};
use crate::error::RuleError;

fn is_word_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == '$'
}

/// Text between an opening and a closing quote character.
///
/// An opening quote without its closing counterpart makes the rule
/// inapplicable rather than undefined: the literal is a fragment.
#[derive(Debug, Clone)]
pub struct QuotedRule {
    name: &'static str,
    open: char,
    close: char,
    escape: Option<char>,
    kind: SqlTokenKind,
}

impl QuotedRule {
    pub fn new(name: &'static str, open: char, close: char, kind: SqlTokenKind) -> Self {
        Self {
            name,
            open,
            close,
            escape: None,
            kind,
        }
    }

    pub fn with_escape(mut self, escape: char) -> Self {
        self.escape = Some(escape);
        self
    }
}

impl LexerRule<SqlTokenKind> for QuotedRule {
    fn scan(&self, cursor: &mut dyn CharCursor) -> Scan<SqlTokenKind> {
        match cursor.read() {
            Some(c) if c == self.open => {}
            _ => {
                cursor.unread();
                return Scan::Undefined;
            }
        }
        loop {
            match cursor.read() {
                None => return Scan::Inapplicable,
                Some(c) if Some(c) == self.escape => {
                    if cursor.read().is_none() {
                        return Scan::Inapplicable;
                    }
                }
                Some(c) if c == self.close => {
                    // A doubled closing quote stands for the quote itself.
                    if cursor.read() != Some(self.close) {
                        cursor.unread();
                        return Scan::Token(Some(self.kind));
                    }
                }
                Some(_) => {}
            }
        }
    }

    fn name(&self) -> &str {
        self.name
    }
}

/// Longest anchored regex match at the cursor.
pub struct PatternRule {
    name: &'static str,
    dfa: dense::DFA<Vec<u32>>,
    kind: SqlTokenKind,
}

impl PatternRule {
    pub fn new(name: &'static str, pattern: &str, kind: SqlTokenKind) -> Result<Self, RuleError> {
        let dfa = dense::DFA::builder()
            .configure(dense::DFA::config().start_kind(StartKind::Anchored))
            .build(pattern)
            .map_err(|err| RuleError::RegexCompile {
                name: name.to_owned(),
                pattern: pattern.to_owned(),
                message: err.to_string(),
            })?;
        Ok(Self { name, dfa, kind })
    }

    /// Byte length of the match at the start of `text`, if non-empty.
    fn match_len(&self, text: &str) -> Option<usize> {
        let input = Input::new(text).anchored(Anchored::Yes);
        match self.dfa.try_search_fwd(&input) {
            Ok(Some(half)) if half.offset() > 0 => Some(half.offset()),
            _ => None,
        }
    }
}

impl std::fmt::Debug for PatternRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PatternRule")
            .field("name", &self.name)
            .field("kind", &self.kind)
            .finish_non_exhaustive()
    }
}

impl LexerRule<SqlTokenKind> for PatternRule {
    fn scan(&self, cursor: &mut dyn CharCursor) -> Scan<SqlTokenKind> {
        // Drain the cursor, then give back whatever the match did not use.
        let mut buffer = String::new();
        let mut reads = 1;
        while let Some(c) = cursor.read() {
            buffer.push(c);
            reads += 1;
        }
        let used = self
            .match_len(&buffer)
            .map_or(0, |len| buffer[..len].chars().count());
        for _ in used..reads {
            cursor.unread();
        }
        if used == 0 {
            Scan::Undefined
        } else {
            Scan::Token(Some(self.kind))
        }
    }

    fn name(&self) -> &str {
        self.name
    }
}

/// Punctuation, operators and dialect delimiters, longest candidate first.
#[derive(Debug, Clone)]
pub struct DelimiterRule {
    candidates: Vec<(String, SqlTokenKind)>,
}

impl DelimiterRule {
    pub fn new(dialect: &SqlDialect) -> Self {
        let mut candidates: Vec<(String, SqlTokenKind)> = vec![
            (",".into(), SqlTokenKind::Comma),
            (";".into(), SqlTokenKind::Semicolon),
            ("(".into(), SqlTokenKind::ParenOpen),
            (")".into(), SqlTokenKind::ParenClose),
            (".".into(), SqlTokenKind::Dot),
        ];
        candidates.extend(OPERATORS.iter().map(|op| (op.to_string(), SqlTokenKind::Operator)));
        for delimiter in dialect.delimiters() {
            candidates.retain(|(text, _)| text != delimiter);
            candidates.push((delimiter.to_owned(), SqlTokenKind::Delimiter));
        }
        // Stable: equal lengths keep insertion order.
        candidates.sort_by_key(|(text, _)| std::cmp::Reverse(text.chars().count()));
        Self { candidates }
    }

    /// Reads `text` from the cursor. On mismatch every read is undone.
    fn accept(cursor: &mut dyn CharCursor, text: &str) -> bool {
        let mut reads = 0;
        for expected in text.chars() {
            reads += 1;
            match cursor.read() {
                Some(c) if c.eq_ignore_ascii_case(&expected) => {}
                _ => {
                    (0..reads).for_each(|_| cursor.unread());
                    return false;
                }
            }
        }
        // A word delimiter must not be the prefix of a longer word.
        if text.chars().next_back().is_some_and(is_word_char) {
            let next = cursor.read();
            cursor.unread();
            if next.is_some_and(is_word_char) {
                (0..reads).for_each(|_| cursor.unread());
                return false;
            }
        }
        true
    }
}

impl LexerRule<SqlTokenKind> for DelimiterRule {
    fn scan(&self, cursor: &mut dyn CharCursor) -> Scan<SqlTokenKind> {
        self.candidates
            .iter()
            .find(|(text, _)| Self::accept(cursor, text))
            .map_or(Scan::Undefined, |(_, kind)| Scan::Token(Some(*kind)))
    }

    fn name(&self) -> &str {
        "delimiter"
    }
}

/// A word, classified through the dialect's word sets.
#[derive(Debug, Clone)]
pub struct WordRule {
    dialect: Arc<SqlDialect>,
}

impl WordRule {
    pub fn new(dialect: Arc<SqlDialect>) -> Self {
        Self { dialect }
    }
}

impl LexerRule<SqlTokenKind> for WordRule {
    fn scan(&self, cursor: &mut dyn CharCursor) -> Scan<SqlTokenKind> {
        let mut word = String::new();
        match cursor.read() {
            Some(c) if is_word_start(c) => word.push(c),
            _ => {
                cursor.unread();
                return Scan::Undefined;
            }
        }
        loop {
            match cursor.read() {
                Some(c) if is_word_char(c) => word.push(c),
                _ => {
                    cursor.unread();
                    break;
                }
            }
        }
        Scan::Token(Some(self.dialect.word_kind(&word)))
    }

    fn name(&self) -> &str {
        "word"
    }
}

/// The ordered lexer rules of one SQL dialect.
#[derive(Clone)]
pub struct SqlRuleSet {
    rules: Vec<Arc<dyn LexerRule<SqlTokenKind>>>,
}

impl SqlRuleSet {
    pub fn new(dialect: &SqlDialect) -> Result<Self, RuleError> {
        let dialect = Arc::new(dialect.clone());
        let rules: Vec<Arc<dyn LexerRule<SqlTokenKind>>> = vec![
            Arc::new(QuotedRule::new("string", '\'', '\'', SqlTokenKind::String).with_escape('\\')),
            Arc::new(
                QuotedRule::new("quoted-identifier", '"', '"', SqlTokenKind::QuotedIdentifier)
                    .with_escape('\\'),
            ),
            Arc::new(QuotedRule::new(
                "backtick-identifier",
                '`',
                '`',
                SqlTokenKind::QuotedIdentifier,
            )),
            Arc::new(PatternRule::new(
                "variable",
                r"\$\{[a-zA-Z_][a-zA-Z0-9_]*\}",
                SqlTokenKind::Variable,
            )?),
            Arc::new(PatternRule::new(
                "parameter",
                r":[a-zA-Z_][a-zA-Z0-9_]*|\?",
                SqlTokenKind::Parameter,
            )?),
            Arc::new(PatternRule::new(
                "number",
                r"[0-9]+(?:\.[0-9]+)?(?:[eE][+-]?[0-9]+)?|\.[0-9]+",
                SqlTokenKind::Number,
            )?),
            Arc::new(DelimiterRule::new(&dialect)),
            Arc::new(WordRule::new(dialect)),
        ];
        Ok(Self { rules })
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl std::fmt::Debug for SqlRuleSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list()
            .entries(self.rules.iter().map(|rule| rule.name()))
            .finish()
    }
}

impl RuleSet<SqlTokenKind> for SqlRuleSet {
    fn rules(&self) -> Vec<Arc<dyn LexerRule<SqlTokenKind>>> {
        self.rules.clone()
    }
}
