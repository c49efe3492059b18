//! Runtime engine: matcher, match sets, limits and tracing.

mod error;
mod match_set;
mod matcher;
mod trace;

#[cfg(test)]
mod match_set_tests;

pub use error::RuntimeError;
pub use match_set::{MatchReport, MatchSet, MatchSpan, Traces};
pub use matcher::{FuelLimits, Matcher, MatcherBuilder};
pub use trace::{NoopTracer, PrintTracer, Tracer, Verbosity};
