//! Rule-based word flavorization.
//!
//! A [`Pipeline`] is an ordered list of rules. Running it over a [`Token`]
//! (a word plus an optional grammatical [`Tag`]) applies every rule in order
//! to a growing set of candidate spellings:
//!
//! - **pattern rules** ([`regexp`]) rewrite regex matches, one candidate per
//!   replacement template, so ambiguous rules branch;
//! - **map rules** ([`map`]) substitute literal sequences left to right, first
//!   declared key wins;
//! - [`lower_case`] / [`restore_case`] frame the pipeline so rules can be
//!   written in lowercase while the output keeps the input's casing.
//!
//! The crate ships the Interslavic → Bulgarian table (see [`rules::bulgarian`])
//! behind [`flavorize`].
//!
//! ```
//! use flavorizer::{Pipeline, Token, map, part_of_speech, regexp};
//!
//! let pipeline = Pipeline::builder("demo")
//!     .rule_when("ADJ -y -> -", regexp(r"([^n])y\b", "$1"), part_of_speech("adj."))?
//!     .rule("letters", map([("n", "н"), ("o", "о"), ("v", "в")]))?
//!     .build()?;
//!
//! assert_eq!(pipeline.transform(&Token::tagged("novy", "adj.")), ["нов"]);
//! # Ok::<(), flavorizer::ConfigurationError>(())
//! ```

#[macro_use]
mod macros;
mod api;
mod engine;
mod error;
mod primitive;
pub mod rules;
mod tag;

pub use api::{Options, Token, bulgarian, flavorize, flavorize_verbose, flavorize_with};
pub use engine::{
    CasePattern, MapPrimitive, PatternPrimitive, Pipeline, PipelineBuilder, Primitive, Rule, RunMetrics, RunResult,
    SAMPLE_LIMIT, StepOutcome, StepTrace,
};
pub use error::{ConfigurationError, Result};
pub use primitive::{IntoTemplates, PrimitiveSpec, ReplaceMode, RuleSpec, lower_case, map, regexp, restore_case, section};
pub use tag::{Predicate, Tag, TagFlags, part_of_speech};
