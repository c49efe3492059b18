#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Token predicate trees and the fabric that builds them.
//!
//! ```
//! use tokpat_core::TokenKind;
//! use tokpat_predicates::{Kind, TokenPredicateFabric, inputs};
//!
//! #[derive(Debug, Clone, PartialEq, Eq)]
//! enum Tk { Unknown, Other, Ident }
//!
//! impl TokenKind for Tk {
//!     const UNKNOWN: Self = Tk::Unknown;
//!     const OTHER: Self = Tk::Other;
//! }
//!
//! let fabric = TokenPredicateFabric::<Tk>::make_default();
//! let pattern = fabric.sequence(inputs![
//!     "DROP",
//!     fabric.optional(["IF", "EXISTS"]),
//!     Kind(Tk::Ident),
//! ]);
//! assert_eq!(
//!     pattern.to_string(),
//!     r#"{"DROP":<Unknown> {"IF":<Unknown> "EXISTS":<Unknown>}? <Ident>}"#
//! );
//! ```

mod classify;
mod expand;
mod fabric;
mod node;

#[cfg(test)]
mod test_utils;

#[cfg(test)]
mod classify_tests;
#[cfg(test)]
mod expand_tests;

pub use classify::TokenClassifier;
pub use expand::ExpandError;
pub use fabric::{Kind, PredicateInput, TokenPredicateFabric, any};
pub use node::{PredicateNode, TokenEntry};
