//! Errors raised while assembling dialect rules.

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RuleError {
    #[error("rule `{name}`: invalid pattern `{pattern}`: {message}")]
    RegexCompile {
        name: String,
        pattern: String,
        message: String,
    },
}
