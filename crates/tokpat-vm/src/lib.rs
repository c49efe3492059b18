#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Matcher for token predicate trees.
//!
//! Evaluates a [`tokpat_predicates::PredicateNode`] against a slice of tokens
//! and reports every position where the pattern can end, together with the
//! tokens each match consumed.

pub mod engine;

pub use engine::{
    FuelLimits, MatchReport, MatchSet, MatchSpan, Matcher, MatcherBuilder, NoopTracer,
    PrintTracer, RuntimeError, Tracer, Traces, Verbosity,
};
