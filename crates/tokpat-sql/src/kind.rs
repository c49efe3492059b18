//! SQL token kinds.
//!
//! `SqlTokenKind` serves two roles: the token-kind domain patterns are written
//! against, and the Logos token set that segments SQL source. Word-like kinds
//! (`Keyword`, `Type`, `Function`) carry no Logos attributes; the lexer
//! assigns them to `Identifier` tokens through the dialect word sets.

use logos::Logos;

use tokpat_core::TokenKind;

#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SqlTokenKind {
    Keyword,
    Type,
    Function,

    #[regex(r"[a-zA-Z_][a-zA-Z0-9_$]*")]
    Identifier,

    #[regex(r#""(?:[^"\\]|\\.|"")*""#)]
    #[regex(r"`(?:[^`]|``)*`")]
    QuotedIdentifier,

    #[regex(r"'(?:[^'\\]|\\.|'')*'")]
    String,

    #[regex(r"[0-9]+(?:\.[0-9]+)?(?:[eE][+-]?[0-9]+)?")]
    #[regex(r"\.[0-9]+")]
    Number,

    /// Named (`:name`) or positional (`?`) parameter.
    #[regex(r":[a-zA-Z_][a-zA-Z0-9_]*")]
    #[token("?")]
    Parameter,

    /// Client-side variable, `${name}`.
    #[regex(r"\$\{[a-zA-Z_][a-zA-Z0-9_]*\}")]
    Variable,

    #[token("=")]
    #[token("<>")]
    #[token("!=")]
    #[token("<")]
    #[token("<=")]
    #[token(">")]
    #[token(">=")]
    #[token("+")]
    #[token("-")]
    #[token("*")]
    #[token("/")]
    #[token("%")]
    #[token("||")]
    #[token("::")]
    Operator,

    /// Statement delimiter other than `;`, configured per dialect.
    Delimiter,

    #[token(",")]
    Comma,

    #[token(";")]
    Semicolon,

    #[token("(")]
    ParenOpen,

    #[token(")")]
    ParenClose,

    #[token(".")]
    Dot,

    #[regex(r"--[^\n]*", allow_greedy = true)]
    LineComment,

    #[regex(r"/\*[^*]*\*+(?:[^/*][^*]*\*+)*/")]
    BlockComment,

    #[regex(r"[ \t\r\n]+")]
    Whitespace,

    /// Coalesced unrecognized characters
    Garbage,

    /// A rule recognized the token but gave no kind.
    Other,

    /// No dialect was available to classify the token.
    Unknown,
}

impl TokenKind for SqlTokenKind {
    const UNKNOWN: Self = SqlTokenKind::Unknown;
    const OTHER: Self = SqlTokenKind::Other;
}

impl SqlTokenKind {
    /// Whitespace and comments.
    pub fn is_trivia(self) -> bool {
        matches!(
            self,
            Self::Whitespace | Self::LineComment | Self::BlockComment
        )
    }

    /// Kinds a word can take once the dialect has looked at it.
    pub fn is_word(self) -> bool {
        matches!(
            self,
            Self::Keyword | Self::Type | Self::Function | Self::Identifier
        )
    }
}
