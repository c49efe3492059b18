//! Source lexer for SQL text.
//!
//! Produces span-based tokens the matcher can run over. Post-processes the
//! Logos output:
//! - Coalesces consecutive lexer errors into single `Garbage` tokens
//! - Re-kinds words through the dialect (keyword, type, function)
//! - Marks the dialect's extra delimiters as `Delimiter`

use std::ops::Range;

use logos::Logos;

use tokpat_core::TokenView;

use crate::{SqlDialect, SqlTokenKind};

/// Token borrowed from the lexed source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceToken<'s> {
    pub kind: SqlTokenKind,
    pub span: Range<usize>,
    pub text: &'s str,
}

impl<'s> SourceToken<'s> {
    fn new(source: &'s str, kind: SqlTokenKind, span: Range<usize>) -> Self {
        Self {
            kind,
            text: &source[span.clone()],
            span,
        }
    }
}

impl TokenView<SqlTokenKind> for SourceToken<'_> {
    fn text(&self) -> &str {
        self.text
    }

    fn kind(&self) -> Option<&SqlTokenKind> {
        Some(&self.kind)
    }
}

/// Tokenizes `source`, trivia included.
pub fn lex<'s>(source: &'s str, dialect: &SqlDialect) -> Vec<SourceToken<'s>> {
    let mut tokens = Vec::new();
    let mut lexer = SqlTokenKind::lexer(source);
    let mut error_start: Option<usize> = None;

    loop {
        match lexer.next() {
            Some(Ok(kind)) => {
                if let Some(start) = error_start.take() {
                    let end = lexer.span().start;
                    tokens.push(SourceToken::new(source, SqlTokenKind::Garbage, start..end));
                }
                let text = lexer.slice();
                let kind = if dialect.is_delimiter(text) {
                    SqlTokenKind::Delimiter
                } else if kind == SqlTokenKind::Identifier {
                    dialect.word_kind(text)
                } else {
                    kind
                };
                tokens.push(SourceToken::new(source, kind, lexer.span()));
            }
            Some(Err(())) => {
                if error_start.is_none() {
                    error_start = Some(lexer.span().start);
                }
            }
            None => {
                if let Some(start) = error_start.take() {
                    tokens.push(SourceToken::new(
                        source,
                        SqlTokenKind::Garbage,
                        start..source.len(),
                    ));
                }
                break;
            }
        }
    }

    tokens
}

/// Drops whitespace and comments.
pub fn significant<'s>(tokens: impl IntoIterator<Item = SourceToken<'s>>) -> Vec<SourceToken<'s>> {
    tokens
        .into_iter()
        .filter(|token| !token.kind.is_trivia())
        .collect()
}
