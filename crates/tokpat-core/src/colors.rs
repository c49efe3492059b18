//! ANSI color codes for trace output.
//!
//! Three semantic colors with orthogonal dim modifier:
//! - Blue: combinator labels and token kinds
//! - Green: matched token text
//! - Red: failed entry tests
//! - Dim: positions and candidate counts
//! - Reset: Return to default

/// ANSI color palette for match traces.
///
/// Uses only standard 16-color ANSI codes (no RGB), so traces read the same
/// on light and dark terminals.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Colors {
    /// Combinator labels and token kinds.
    pub blue: &'static str,
    /// Matched token text.
    pub green: &'static str,
    /// Failed entry tests.
    pub red: &'static str,
    /// Positions and candidate counts.
    pub dim: &'static str,
    pub reset: &'static str,
}

impl Default for Colors {
    fn default() -> Self {
        Self::OFF
    }
}

impl Colors {
    /// Colors enabled (ANSI escape codes).
    pub const ON: Self = Self {
        blue: "\x1b[34m",
        green: "\x1b[32m",
        red: "\x1b[31m",
        dim: "\x1b[2m",
        reset: "\x1b[0m",
    };

    /// Colors disabled (empty strings).
    pub const OFF: Self = Self {
        blue: "",
        green: "",
        red: "",
        dim: "",
        reset: "",
    };

    /// Create colors based on enabled flag.
    pub fn new(enabled: bool) -> Self {
        if enabled { Self::ON } else { Self::OFF }
    }

    /// Check if colors are enabled.
    pub fn is_enabled(&self) -> bool {
        !self.blue.is_empty()
    }
}
