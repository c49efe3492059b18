#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! SQL dialect support for tokpat.
//!
//! - [`SqlTokenKind`]: kinds SQL patterns are written against
//! - [`SqlDialect`]: keyword, type, function and delimiter vocabulary
//! - [`SqlRuleSet`]: lexer rules for the dialect-specific predicate fabric
//! - [`lex`]: turns SQL source into tokens a matcher can run over

mod dialect;
mod error;
mod kind;
mod lexer;
mod rules;

#[cfg(test)]
mod dialect_tests;

pub use dialect::{OPERATORS, SqlDialect};
pub use error::RuleError;
pub use kind::SqlTokenKind;
pub use lexer::{SourceToken, lex, significant};
pub use rules::{DelimiterRule, PatternRule, QuotedRule, SqlRuleSet, WordRule};
