//! Candidate set executor.
//!
//! Runs a [`Pipeline`] over one [`Token`]. Each rule maps the current
//! generation of candidates to the next one:
//!
//! ```text
//! gen 0: {"pisati"}
//!   rule "ti\b" -> [ų, jų, m, ...]     (pattern, 7 templates, 1 match)
//! gen 1: {"pisaų", "pisajų", "pisam", ...}
//!   rule "ų\b"  -> [a]                 (matches 2 of 7; the rest pass through)
//! gen 2: {"pisaa", "pisaja", "pisam", ...}
//!   rule map    -> one output per candidate
//! gen 3: {"писаа", "писая", "писам", ...}
//! ```
//!
//! Per candidate:
//!
//! - pattern with no match: the candidate passes through, once;
//! - pattern with matches: one new candidate per template;
//! - map: exactly one new candidate;
//! - case primitives: lowercase (recording the casing) or restore.
//!
//! A rule whose predicate rejects the token's tag is skipped as a whole. Each
//! generation is deduplicated in first-seen order (see `dedup.rs`), so the
//! output is deterministic and never empty.

use super::case::CaseMemory;
use super::dedup::CandidateSet;
use super::metrics::{RunMetrics, RunResult, SAMPLE_LIMIT, StepOutcome, StepTrace};
use super::pipeline::Pipeline;
use super::rule::{Primitive, Rule};
use crate::api::{Options, Token};
use std::time::Instant;

pub(crate) struct Executor<'a> {
    pipeline: &'a Pipeline,
    options: &'a Options,
}

impl<'a> Executor<'a> {
    pub(crate) fn new(pipeline: &'a Pipeline, options: &'a Options) -> Self {
        Executor { pipeline, options }
    }

    pub(crate) fn run(&self, token: &Token) -> Vec<String> {
        self.execute(token, None)
    }

    pub(crate) fn run_with_metrics(&self, token: &Token) -> RunResult {
        let start = Instant::now();
        let mut metrics = RunMetrics::default();
        let candidates = self.execute(token, Some(&mut metrics));
        metrics.total = start.elapsed();
        RunResult { candidates, metrics }
    }

    fn execute(&self, token: &Token, mut metrics: Option<&mut RunMetrics>) -> Vec<String> {
        let mut current = CandidateSet::with_seed(token.text.clone());
        let mut case: Option<CaseMemory> = None;
        // Zero would empty the set.
        let cap = self.options.max_candidates.map(|max| max.max(1));

        for rule in self.pipeline.rules() {
            let step_start = Instant::now();
            let candidates_in = current.len();

            let (mut next, outcome) = if rule.applies_to(token.tag.as_ref()) {
                apply_rule(rule, &current, token, &mut case)
            } else {
                (current, StepOutcome::Skipped)
            };
            let truncated = cap.map_or(0, |max| next.truncate(max));

            tracing::trace!(
                rule = %rule.name(),
                outcome = ?outcome,
                candidates_in,
                candidates_out = next.len(),
                truncated,
                "rule step"
            );

            if let Some(metrics) = metrics.as_deref_mut() {
                metrics.steps.push(StepTrace {
                    rule: rule.name().to_string(),
                    section: rule.section().map(str::to_string),
                    outcome,
                    candidates_in,
                    candidates_out: next.len(),
                    truncated,
                    duration: step_start.elapsed(),
                    samples: next.iter().take(SAMPLE_LIMIT).map(str::to_string).collect(),
                });
            }

            current = next;
        }

        tracing::debug!(
            pipeline = %self.pipeline.name(),
            input = %token.text,
            candidates = current.len(),
            "token transformed"
        );
        current.into_vec()
    }
}

/// Apply one (non-skipped) rule to every candidate of `current`.
fn apply_rule(
    rule: &Rule,
    current: &CandidateSet,
    token: &Token,
    case: &mut Option<CaseMemory>,
) -> (CandidateSet, StepOutcome) {
    let mut next = CandidateSet::new();
    let mut changed = false;

    match &rule.primitive {
        Primitive::Pattern(pattern) => {
            for candidate in current.iter() {
                match pattern.apply(candidate) {
                    Some(outputs) => {
                        changed = true;
                        for output in outputs {
                            next.insert(output);
                        }
                    }
                    None => {
                        next.insert(candidate.to_string());
                    }
                }
            }
        }
        Primitive::Map(map) => {
            for candidate in current.iter() {
                let output = map.apply(candidate);
                changed |= output != candidate;
                next.insert(output);
            }
        }
        Primitive::LowerCase => {
            let memory = CaseMemory::record(&token.text);
            tracing::trace!(rule = %rule.name(), pattern = ?memory.pattern(), "casing recorded");
            *case = Some(memory);
            changed = true;
            for candidate in current.iter() {
                next.insert(candidate.to_lowercase());
            }
        }
        Primitive::RestoreCase => {
            for candidate in current.iter() {
                let output = match case.as_ref() {
                    Some(memory) => memory.restore(candidate),
                    None => candidate.to_string(),
                };
                changed |= output != candidate;
                next.insert(output);
            }
        }
    }

    let outcome = if changed { StepOutcome::Applied } else { StepOutcome::Unmatched };
    (next, outcome)
}
