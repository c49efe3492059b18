#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Core data structures shared by the tokpat crates.
//!
//! - [`LinkList`]: persistent list carrying partial-match traces
//! - [`TokenKind`], [`TokenView`], [`Classified`]: the token-kind contract
//! - [`CharCursor`], [`LexerRule`], [`RuleSet`]: what a dialect provides to
//!   classify literal token text

mod colors;
mod cursor;
mod invariants;
mod kind;
mod list;
mod rule;

#[cfg(test)]
mod cursor_tests;

pub use colors::Colors;
pub use cursor::{CharCursor, StringCursor};
pub use kind::{Classified, TokenKind, TokenView};
pub use list::{Iter, LinkList};
pub use rule::{LexerRule, RuleSet, Scan};
