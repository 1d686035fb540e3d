//! Rule-application engine.
//!
//! ## How the parts work together
//!
//! ```text
//! RuleSpec (descriptors) ──┐
//!                          │  PipelineBuilder::push      (builder.rs)
//!                          │   - compile regex + templates (pattern.rs, template.rs)
//!                          │   - index map entries         (scanner.rs)
//!                          └──────────────┬──────────────
//!                                         │  build(): check case-rule placement
//!                                         v
//!                                  Pipeline (immutable, shareable)
//!                                         │
//! Token ─────────────── Executor::run (executor.rs)
//!                         - lower_case: record CasePattern (case.rs)
//!                         - per rule: gate on tag, rewrite every candidate
//!                         - dedup each generation         (dedup.rs)
//!                         - restore_case
//!                                         │
//!                                         v
//!                                   Vec<String>
//! ```
//!
//! ## Responsibilities by module
//!
//! - `builder.rs`: `PipelineBuilder`; the only place rules are validated.
//! - `pipeline.rs`: `Pipeline`, the built, immutable rule list and its
//!   `transform*` entry points.
//! - `rule.rs`: compiled `Rule` and `Primitive`.
//! - `template.rs`: replacement templates parsed into literal/group segments.
//! - `pattern.rs`: pattern primitive (regex + alternative templates).
//! - `scanner.rs`: map primitive (ordered literal substitution).
//! - `case.rs`: case classification and restoration.
//! - `dedup.rs`: ordered, deduplicated candidate generations.
//! - `executor.rs`: the per-token run loop.
//! - `metrics.rs`: optional per-rule trace.
//!
//! ## Debugging
//!
//! The executor emits a `tracing` event per rule step at `TRACE` level and a
//! summary per token at `DEBUG` level. Install any subscriber to see them.

#[path = "engine/builder.rs"]
mod builder;
#[path = "engine/case.rs"]
mod case;
#[path = "engine/dedup.rs"]
mod dedup;
#[path = "engine/executor.rs"]
mod executor;
#[path = "engine/metrics.rs"]
mod metrics;
#[path = "engine/pattern.rs"]
mod pattern;
#[path = "engine/pipeline.rs"]
mod pipeline;
#[path = "engine/rule.rs"]
mod rule;
#[path = "engine/scanner.rs"]
mod scanner;
#[path = "engine/template.rs"]
mod template;

pub use builder::PipelineBuilder;
pub use case::CasePattern;
pub use metrics::{RunMetrics, RunResult, SAMPLE_LIMIT, StepOutcome, StepTrace};
pub use pattern::PatternPrimitive;
pub use pipeline::Pipeline;
pub use rule::{Primitive, Rule};
pub use scanner::MapPrimitive;
