//! Pattern evaluation over a token window.
//!
//! Evaluation threads a set of candidate positions through the tree. Each
//! candidate carries the trace of token indices consumed so far as a shared
//! [`LinkList`]: branching combinators prepend onto the same trace instead of
//! copying it. No branch is ever retried; every viable continuation is
//! carried forward at once.

use tokpat_core::{LinkList, TokenView};
use tokpat_predicates::{PredicateNode, TokenEntry};

use super::error::RuntimeError;
use super::match_set::{MatchSet, Traces};
use super::trace::{NoopTracer, Tracer};

/// Runtime limits for a single match attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FuelLimits {
    /// Maximum node visits plus entry tests (default: 1,000,000).
    pub(crate) exec_fuel: u32,
    /// Maximum pattern nesting depth (default: 1,024).
    pub(crate) recursion_limit: u32,
}

impl Default for FuelLimits {
    fn default() -> Self {
        Self {
            exec_fuel: 1_000_000,
            recursion_limit: 1024,
        }
    }
}

impl FuelLimits {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn exec_fuel(mut self, fuel: u32) -> Self {
        self.exec_fuel = fuel;
        self
    }

    pub fn recursion_limit(mut self, limit: u32) -> Self {
        self.recursion_limit = limit;
        self
    }

    pub fn get_exec_fuel(&self) -> u32 {
        self.exec_fuel
    }
    pub fn get_recursion_limit(&self) -> u32 {
        self.recursion_limit
    }
}

/// Builder for [`Matcher`] instances.
pub struct MatcherBuilder<'t, T> {
    tokens: &'t [T],
    limits: FuelLimits,
}

impl<'t, T> MatcherBuilder<'t, T> {
    pub fn new(tokens: &'t [T]) -> Self {
        Self {
            tokens,
            limits: FuelLimits::default(),
        }
    }

    pub fn limits(mut self, limits: FuelLimits) -> Self {
        self.limits = limits;
        self
    }

    pub fn exec_fuel(mut self, fuel: u32) -> Self {
        self.limits = self.limits.exec_fuel(fuel);
        self
    }

    pub fn recursion_limit(mut self, limit: u32) -> Self {
        self.limits = self.limits.recursion_limit(limit);
        self
    }

    pub fn build(self) -> Matcher<'t, T> {
        Matcher {
            tokens: self.tokens,
            limits: self.limits,
        }
    }
}

/// Matches predicate trees against a fixed token window.
///
/// A matcher only borrows its tokens and never mutates anything, so one
/// matcher (or one tree) can serve many threads at once.
#[derive(Debug)]
pub struct Matcher<'t, T> {
    tokens: &'t [T],
    limits: FuelLimits,
}

impl<T> Clone for Matcher<'_, T> {
    fn clone(&self) -> Self {
        Self {
            tokens: self.tokens,
            limits: self.limits,
        }
    }
}

impl<'t, T> Matcher<'t, T> {
    pub fn builder(tokens: &'t [T]) -> MatcherBuilder<'t, T> {
        MatcherBuilder::new(tokens)
    }

    /// Matcher with default limits.
    pub fn new(tokens: &'t [T]) -> Self {
        Self::builder(tokens).build()
    }

    pub fn tokens(&self) -> &'t [T] {
        self.tokens
    }

    pub fn limits(&self) -> FuelLimits {
        self.limits
    }

    /// Every end position `node` can reach from `start`.
    ///
    /// Uses `NoopTracer`, which is optimized away at compile time.
    pub fn match_at<K>(
        &self,
        node: &PredicateNode<K>,
        start: usize,
    ) -> Result<MatchSet, RuntimeError>
    where
        K: PartialEq,
        T: TokenView<K>,
    {
        self.match_at_with(node, start, &mut NoopTracer)
    }

    /// Same as [`Matcher::match_at`], reporting every step to `tracer`.
    pub fn match_at_with<K, R>(
        &self,
        node: &PredicateNode<K>,
        start: usize,
        tracer: &mut R,
    ) -> Result<MatchSet, RuntimeError>
    where
        K: PartialEq,
        T: TokenView<K>,
        R: Tracer<K>,
    {
        let mut run = Run {
            tokens: self.tokens,
            limits: self.limits,
            fuel: self.limits.exec_fuel,
            tracer,
        };
        let mut candidates = Traces::new();
        candidates.insert(start, LinkList::empty());
        let ends = run.eval(node, candidates)?;
        Ok(MatchSet::new(start, ends))
    }

    /// Match sets for every start position of the window where `node` matches.
    ///
    /// Each start gets a fresh fuel budget.
    pub fn find_all<K>(&self, node: &PredicateNode<K>) -> Result<Vec<MatchSet>, RuntimeError>
    where
        K: PartialEq,
        T: TokenView<K>,
    {
        let mut found = Vec::new();
        for start in 0..self.tokens.len() {
            let set = self.match_at(node, start)?;
            if !set.is_empty() {
                found.push(set);
            }
        }
        Ok(found)
    }
}

/// State of one match attempt.
struct Run<'r, 't, T, R> {
    tokens: &'t [T],
    limits: FuelLimits,
    fuel: u32,
    tracer: &'r mut R,
}

/// A combinator waiting on the result of its current child.
///
/// Frames live on the heap, so nesting is bounded by `recursion_limit`
/// rather than by the native stack.
enum Frame<'n, K> {
    Sequence {
        node: &'n PredicateNode<K>,
        depth: u32,
        children: &'n [PredicateNode<K>],
        next: usize,
    },
    Alternative {
        node: &'n PredicateNode<K>,
        depth: u32,
        children: &'n [PredicateNode<K>],
        next: usize,
        candidates: Traces,
        ends: Traces,
    },
    Optional {
        node: &'n PredicateNode<K>,
        depth: u32,
        candidates: Traces,
    },
}

enum Step<'n, K> {
    /// Evaluate a node from the given candidates.
    Enter(&'n PredicateNode<K>, u32, Traces),
    /// Hand a result to the innermost frame.
    Return(Traces),
}

/// Adds `traces` to `into`, keeping the first trace found for each end.
fn merge(into: &mut Traces, traces: Traces) {
    for (end, trace) in traces {
        into.entry(end).or_insert(trace);
    }
}

impl<T, R> Run<'_, '_, T, R> {
    fn burn(&mut self) -> Result<(), RuntimeError> {
        if self.fuel == 0 {
            return Err(RuntimeError::ExecFuelExhausted(self.limits.exec_fuel));
        }
        self.fuel -= 1;
        Ok(())
    }

    fn eval<'n, K>(
        &mut self,
        root: &'n PredicateNode<K>,
        candidates: Traces,
    ) -> Result<Traces, RuntimeError>
    where
        K: PartialEq,
        T: TokenView<K>,
        R: Tracer<K>,
    {
        let mut frames: Vec<Frame<'n, K>> = Vec::new();
        let mut step = Step::Enter(root, 1, candidates);
        loop {
            step = match step {
                Step::Enter(node, depth, candidates) => {
                    self.enter(node, depth, candidates, &mut frames)?
                }
                Step::Return(found) => match frames.pop() {
                    Some(frame) => self.resume(frame, found, &mut frames),
                    None => return Ok(found),
                },
            };
        }
    }

    fn enter<'n, K>(
        &mut self,
        node: &'n PredicateNode<K>,
        depth: u32,
        candidates: Traces,
        frames: &mut Vec<Frame<'n, K>>,
    ) -> Result<Step<'n, K>, RuntimeError>
    where
        K: PartialEq,
        T: TokenView<K>,
        R: Tracer<K>,
    {
        if depth > self.limits.recursion_limit {
            return Err(RuntimeError::RecursionLimitExceeded(
                self.limits.recursion_limit,
            ));
        }
        self.burn()?;
        self.tracer.trace_enter(node, depth, &candidates);

        let step: Step<'n, K> = match node {
            PredicateNode::Entry(entry) => {
                let ends = self.eval_entry(entry, depth, &candidates)?;
                self.exit(node, depth, ends)
            }
            PredicateNode::Sequence(children) => {
                frames.push(Frame::Sequence {
                    node,
                    depth,
                    children,
                    next: 0,
                });
                Step::Return(candidates)
            }
            PredicateNode::Alternative(children) => {
                frames.push(Frame::Alternative {
                    node,
                    depth,
                    children,
                    next: 0,
                    candidates,
                    ends: Traces::new(),
                });
                Step::Return(Traces::new())
            }
            PredicateNode::Optional(child) => {
                frames.push(Frame::Optional {
                    node,
                    depth,
                    candidates: candidates.clone(),
                });
                Step::Enter(child, depth + 1, candidates)
            }
        };
        Ok(step)
    }

    fn resume<'n, K>(
        &mut self,
        frame: Frame<'n, K>,
        found: Traces,
        frames: &mut Vec<Frame<'n, K>>,
    ) -> Step<'n, K>
    where
        R: Tracer<K>,
    {
        match frame {
            Frame::Sequence {
                node,
                depth,
                children,
                next,
            } => match children.get(next) {
                Some(child) if !found.is_empty() => {
                    frames.push(Frame::Sequence {
                        node,
                        depth,
                        children,
                        next: next + 1,
                    });
                    Step::Enter(child, depth + 1, found)
                }
                _ => self.exit(node, depth, found),
            },
            Frame::Alternative {
                node,
                depth,
                children,
                next,
                candidates,
                mut ends,
            } => {
                merge(&mut ends, found);
                match children.get(next) {
                    Some(child) => {
                        let branch = candidates.clone();
                        frames.push(Frame::Alternative {
                            node,
                            depth,
                            children,
                            next: next + 1,
                            candidates,
                            ends,
                        });
                        Step::Enter(child, depth + 1, branch)
                    }
                    None => self.exit(node, depth, ends),
                }
            }
            Frame::Optional {
                node,
                depth,
                mut candidates,
            } => {
                merge(&mut candidates, found);
                self.exit(node, depth, candidates)
            }
        }
    }

    fn exit<'n, K>(&mut self, node: &'n PredicateNode<K>, depth: u32, ends: Traces) -> Step<'n, K>
    where
        R: Tracer<K>,
    {
        self.tracer.trace_exit(node, depth, &ends);
        Step::Return(ends)
    }

    fn eval_entry<K>(
        &mut self,
        entry: &TokenEntry<K>,
        depth: u32,
        candidates: &Traces,
    ) -> Result<Traces, RuntimeError>
    where
        K: PartialEq,
        T: TokenView<K>,
        R: Tracer<K>,
    {
        let mut ends = Traces::new();
        for (&pos, trace) in candidates {
            self.burn()?;
            match self.tokens.get(pos) {
                Some(token) if entry.matches(token) => {
                    self.tracer
                        .trace_entry_success(entry, depth, pos, token.text());
                    ends.entry(pos + 1).or_insert_with(|| trace.prepend(pos));
                }
                token => {
                    self.tracer.trace_entry_failure(
                        entry,
                        depth,
                        pos,
                        token.map(|t| t.text()),
                    );
                }
            }
        }
        Ok(ends)
    }
}
