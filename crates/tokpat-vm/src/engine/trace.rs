//! Tracing infrastructure for debugging pattern evaluation.
//!
//! The tracer is a zero-cost abstraction. With `NoopTracer` every method is
//! an `#[inline(always)]` empty function and the calls disappear. No
//! tracing state lives in the matcher itself: whatever a tracer wants to show
//! it derives from the arguments of each call.

use std::fmt;

use tokpat_core::Colors;
use tokpat_predicates::{PredicateNode, TokenEntry};

use super::match_set::Traces;

/// Verbosity level for trace output.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Verbosity {
    /// Entry tests only, without token text.
    #[default]
    Default,
    /// Entry tests with the text of the token tested.
    Verbose,
    /// Everything, including combinator enter and exit lines.
    VeryVerbose,
}

/// Instrumentation hooks of the matcher.
///
/// `depth` is the nesting depth of the node, 1 for the root.
pub trait Tracer<K> {
    /// Called before a node is evaluated at `candidates`.
    fn trace_enter(&mut self, node: &PredicateNode<K>, depth: u32, candidates: &Traces);

    /// Called after a token satisfied an entry.
    fn trace_entry_success(&mut self, entry: &TokenEntry<K>, depth: u32, pos: usize, text: &str);

    /// Called after an entry test failed. `text` is `None` past the last token.
    fn trace_entry_failure(
        &mut self,
        entry: &TokenEntry<K>,
        depth: u32,
        pos: usize,
        text: Option<&str>,
    );

    /// Called when a node is done, with the ends it produced.
    fn trace_exit(&mut self, node: &PredicateNode<K>, depth: u32, ends: &Traces);
}

/// No-op tracer that gets optimized away completely.
pub struct NoopTracer;

impl<K> Tracer<K> for NoopTracer {
    #[inline(always)]
    fn trace_enter(&mut self, _node: &PredicateNode<K>, _depth: u32, _candidates: &Traces) {}

    #[inline(always)]
    fn trace_entry_success(
        &mut self,
        _entry: &TokenEntry<K>,
        _depth: u32,
        _pos: usize,
        _text: &str,
    ) {
    }

    #[inline(always)]
    fn trace_entry_failure(
        &mut self,
        _entry: &TokenEntry<K>,
        _depth: u32,
        _pos: usize,
        _text: Option<&str>,
    ) {
    }

    #[inline(always)]
    fn trace_exit(&mut self, _node: &PredicateNode<K>, _depth: u32, _ends: &Traces) {}
}

/// Tracer that collects an indented line per event.
#[derive(Debug, Clone, Default)]
pub struct PrintTracer {
    verbosity: Verbosity,
    colors: Colors,
    lines: Vec<String>,
}

fn positions(traces: &Traces) -> String {
    if traces.is_empty() {
        return "none".to_owned();
    }
    traces
        .keys()
        .map(usize::to_string)
        .collect::<Vec<_>>()
        .join(",")
}

impl PrintTracer {
    pub fn new(verbosity: Verbosity, colors: Colors) -> Self {
        Self {
            verbosity,
            colors,
            lines: Vec::new(),
        }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// All lines joined with newlines.
    pub fn dump(&self) -> String {
        self.lines.join("\n")
    }

    /// Print all trace lines.
    pub fn print(&self) {
        for line in &self.lines {
            println!("{}", line);
        }
    }

    fn push(&mut self, depth: u32, content: fmt::Arguments<'_>) {
        let indent = "  ".repeat(depth.saturating_sub(1) as usize);
        self.lines.push(format!("{indent}{content}"));
    }

    fn with_text(&self, text: Option<&str>) -> String {
        if self.verbosity == Verbosity::Default {
            return String::new();
        }
        let c = &self.colors;
        match text {
            Some(text) => format!(" {}{}{}{}", c.dim, c.green, text, c.reset),
            None => format!(" {}<end>{}", c.dim, c.reset),
        }
    }
}

impl<K: fmt::Debug> Tracer<K> for PrintTracer {
    fn trace_enter(&mut self, node: &PredicateNode<K>, depth: u32, candidates: &Traces) {
        if self.verbosity != Verbosity::VeryVerbose || matches!(node, PredicateNode::Entry(_)) {
            return;
        }
        let c = self.colors;
        self.push(
            depth,
            format_args!(
                "{}{}{} {}@{}{}",
                c.blue,
                node.label(),
                c.reset,
                c.dim,
                positions(candidates),
                c.reset
            ),
        );
    }

    fn trace_entry_success(&mut self, entry: &TokenEntry<K>, depth: u32, pos: usize, text: &str) {
        let c = self.colors;
        let text = self.with_text(Some(text));
        self.push(
            depth,
            format_args!("{}✓{} {entry} {}@{pos}{}{text}", c.green, c.reset, c.dim, c.reset),
        );
    }

    fn trace_entry_failure(
        &mut self,
        entry: &TokenEntry<K>,
        depth: u32,
        pos: usize,
        text: Option<&str>,
    ) {
        let c = self.colors;
        let text = self.with_text(text);
        self.push(
            depth,
            format_args!("{}✗{} {entry} {}@{pos}{}{text}", c.red, c.reset, c.dim, c.reset),
        );
    }

    fn trace_exit(&mut self, node: &PredicateNode<K>, depth: u32, ends: &Traces) {
        if self.verbosity != Verbosity::VeryVerbose || matches!(node, PredicateNode::Entry(_)) {
            return;
        }
        let c = self.colors;
        self.push(
            depth,
            format_args!(
                "{}{}{} → {}{}{}",
                c.blue,
                node.label(),
                c.reset,
                c.dim,
                positions(ends),
                c.reset
            ),
        );
    }
}
