//! Built pipelines.

use super::builder::PipelineBuilder;
use super::executor::Executor;
use super::metrics::RunResult;
use super::rule::Rule;
use crate::api::{Options, Token};
use crate::{Result, RuleSpec};
use std::sync::Arc;

/// An immutable, named, ordered list of rules.
///
/// A pipeline holds no per-call state. It is cheap to clone (the rules are
/// shared) and can be used from any number of threads at once.
///
/// ```
/// use flavorizer::{Pipeline, Token, map, regexp};
///
/// let pipeline = Pipeline::builder("demo")
///     .rule("ending", regexp(r"ti\b", ["m", "š"]))?
///     .rule("letters", map([("š", "ш")]))?
///     .build()?;
///
/// assert_eq!(pipeline.transform(&Token::new("dati")), ["dam", "daш"]);
/// # Ok::<(), flavorizer::ConfigurationError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Pipeline {
    name: String,
    rules: Arc<[Rule]>,
}

impl Pipeline {
    pub(crate) fn new(name: String, rules: Vec<Rule>) -> Self {
        Pipeline { name, rules: rules.into() }
    }

    /// Shorthand for [`PipelineBuilder::named`].
    pub fn builder(name: impl Into<String>) -> PipelineBuilder {
        PipelineBuilder::named(name)
    }

    /// Build a pipeline from a plain, ordered list of rule descriptors.
    pub fn from_rules(name: impl Into<String>, specs: impl IntoIterator<Item = RuleSpec>) -> Result<Self> {
        PipelineBuilder::named(name).extend(specs)?.build()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Run every rule over `token` and return the surviving candidates in
    /// first-seen order. Never empty.
    pub fn transform(&self, token: &Token) -> Vec<String> {
        self.transform_with(token, &Options::default())
    }

    pub fn transform_with(&self, token: &Token, options: &Options) -> Vec<String> {
        Executor::new(self, options).run(token)
    }

    /// Like [`transform_with`](Self::transform_with), also returning a
    /// per-rule trace.
    pub fn transform_verbose(&self, token: &Token, options: &Options) -> RunResult {
        Executor::new(self, options).run_with_metrics(token)
    }
}
