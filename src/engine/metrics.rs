//! Run metrics.
//!
//! Opt-in trace of a single run, one [`StepTrace`] per rule. The plain
//! [`Pipeline::transform`](crate::Pipeline::transform) path does not allocate
//! any of this; [`Pipeline::transform_verbose`](crate::Pipeline::transform_verbose)
//! does.
//!
//! `samples` holds at most [`SAMPLE_LIMIT`] candidates per step and is meant
//! for rule debugging, not for reconstructing the full candidate history.

use std::time::Duration;

/// Maximum number of candidates copied into a [`StepTrace`].
pub const SAMPLE_LIMIT: usize = 8;

/// What a rule did to the candidate set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// The predicate rejected the token's tag (or the token had no tag).
    Skipped,
    /// The rule ran but the pattern matched no candidate.
    Unmatched,
    /// The rule rewrote at least one candidate.
    Applied,
}

#[derive(Debug, Clone)]
pub struct StepTrace {
    pub rule: String,
    pub section: Option<String>,
    pub outcome: StepOutcome,
    pub candidates_in: usize,
    pub candidates_out: usize,
    /// Candidates dropped by `Options::max_candidates` after this step.
    pub truncated: usize,
    pub duration: Duration,
    pub samples: Vec<String>,
}

/// Candidates bundled with the trace that produced them.
#[derive(Debug, Clone)]
pub struct RunResult {
    pub candidates: Vec<String>,
    pub metrics: RunMetrics,
}

#[derive(Debug, Clone, Default)]
pub struct RunMetrics {
    pub total: Duration,
    pub steps: Vec<StepTrace>,
}

impl RunMetrics {
    /// Names of the rules that rewrote something, in pipeline order.
    pub fn applied_rules(&self) -> Vec<&str> {
        self.steps.iter().filter(|s| s.outcome == StepOutcome::Applied).map(|s| s.rule.as_str()).collect()
    }

    /// Largest candidate set seen after any step.
    pub fn peak_candidates(&self) -> usize {
        self.steps.iter().map(|s| s.candidates_out).max().unwrap_or(0)
    }
}
