//! Errors that can occur while matching.

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RuntimeError {
    /// Execution fuel exhausted (too many node visits and token tests).
    #[error("runtime execution limit of {0} steps exceeded")]
    ExecFuelExhausted(u32),

    /// Pattern nesting deeper than the recursion limit.
    #[error("pattern nesting exceeds recursion limit of {0}")]
    RecursionLimitExceeded(u32),
}
