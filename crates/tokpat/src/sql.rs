//! SQL dialect support and shortcuts for matching SQL source.

pub use tokpat_sql::{
    RuleError, SourceToken, SqlDialect, SqlRuleSet, SqlTokenKind, lex, significant,
};

use crate::{FuelLimits, MatchSet, Matcher, PredicateNode, Result, TokenPredicateFabric};

/// Fabric classifying literals with `dialect`'s rules.
pub fn fabric(dialect: &SqlDialect) -> Result<TokenPredicateFabric<SqlTokenKind>> {
    let rules = SqlRuleSet::new(dialect)?;
    Ok(TokenPredicateFabric::make_dialect_specific(&rules))
}

/// Every match of `pattern` in `source`, ignoring whitespace and comments.
pub fn find_all(
    source: &str,
    dialect: &SqlDialect,
    pattern: &PredicateNode<SqlTokenKind>,
) -> Result<Vec<MatchSet>> {
    find_all_with_limits(source, dialect, pattern, FuelLimits::default())
}

pub fn find_all_with_limits(
    source: &str,
    dialect: &SqlDialect,
    pattern: &PredicateNode<SqlTokenKind>,
    limits: FuelLimits,
) -> Result<Vec<MatchSet>> {
    let tokens = significant(lex(source, dialect));
    let matcher = Matcher::builder(&tokens).limits(limits).build();
    Ok(matcher.find_all(pattern)?)
}
