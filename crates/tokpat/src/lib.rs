//! tokpat: structural patterns over query-language token streams.
//!
//! # Example
//!
//! ```
//! # #[cfg(feature = "sql")]
//! # fn main() -> tokpat::Result<()> {
//! use tokpat::sql::{self, SqlDialect, SqlTokenKind};
//! use tokpat::{Kind, inputs};
//!
//! let dialect = SqlDialect::ansi();
//! let fabric = sql::fabric(&dialect)?;
//! let pattern = fabric.sequence(inputs![
//!     "DROP",
//!     "TABLE",
//!     fabric.optional(["IF", "EXISTS"]),
//!     Kind(SqlTokenKind::Identifier),
//! ]);
//!
//! let found = sql::find_all("DROP TABLE IF EXISTS orders;", &dialect, &pattern)?;
//! assert_eq!(found[0].longest(), Some(5));
//! # Ok(())
//! # }
//! # #[cfg(not(feature = "sql"))]
//! # fn main() {}
//! ```

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

#[cfg(feature = "sql")]
pub mod sql;


pub use tokpat_core::{
    CharCursor, Classified, Colors, LexerRule, LinkList, RuleSet, Scan, StringCursor, TokenKind,
    TokenView,
};
pub use tokpat_predicates::{
    ExpandError, Kind, PredicateInput, PredicateNode, TokenClassifier, TokenEntry,
    TokenPredicateFabric, any, inputs,
};
pub use tokpat_vm::{
    FuelLimits, MatchReport, MatchSet, MatchSpan, Matcher, MatcherBuilder, NoopTracer,
    PrintTracer, RuntimeError, Tracer, Verbosity,
};

/// Errors surfaced by the tokpat crates.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Runtime(#[from] RuntimeError),

    #[error(transparent)]
    Expand(#[from] ExpandError),

    #[cfg(feature = "sql")]
    #[error(transparent)]
    Rule(#[from] tokpat_sql::RuleError),
}

/// Result type for tokpat operations.
pub type Result<T> = std::result::Result<T, Error>;
