//! Rule descriptors and primitive factories.
//!
//! Rule tables are written as plain, ordered lists of [`RuleSpec`]s (usually
//! through the [`rule!`](crate::rule) macro). Nothing is compiled here: the
//! descriptors are checked and turned into runnable rules by the
//! [`PipelineBuilder`](crate::PipelineBuilder).

use crate::tag::Predicate;
use std::fmt;

/// How many matches of a pattern rule are rewritten per candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReplaceMode {
    /// Every non-overlapping match, left to right.
    #[default]
    All,
    /// Only the leftmost match.
    First,
}

/// Uncompiled primitive, as written by a rule-table author.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PrimitiveSpec {
    Regexp { pattern: String, templates: Vec<String>, mode: ReplaceMode },
    Map { entries: Vec<(String, String)> },
    LowerCase,
    RestoreCase,
}

impl PrimitiveSpec {
    /// Set the replace mode of a pattern primitive. No effect on other kinds.
    pub fn with_replace_mode(mut self, replace: ReplaceMode) -> Self {
        if let PrimitiveSpec::Regexp { mode, .. } = &mut self {
            *mode = replace;
        }
        self
    }

    /// Shorthand for `with_replace_mode(ReplaceMode::First)`.
    pub fn replace_first(self) -> Self {
        self.with_replace_mode(ReplaceMode::First)
    }

    pub(crate) fn kind(&self) -> &'static str {
        match self {
            PrimitiveSpec::Regexp { .. } => "regexp",
            PrimitiveSpec::Map { .. } => "map",
            PrimitiveSpec::LowerCase => "lower_case",
            PrimitiveSpec::RestoreCase => "restore_case",
        }
    }
}

/// One or several replacement templates.
///
/// Lets [`regexp`] take either a single template or a list of alternatives.
pub trait IntoTemplates {
    fn into_templates(self) -> Vec<String>;
}

impl IntoTemplates for &str {
    fn into_templates(self) -> Vec<String> {
        vec![self.to_string()]
    }
}

impl IntoTemplates for String {
    fn into_templates(self) -> Vec<String> {
        vec![self]
    }
}

impl<S: Into<String>, const N: usize> IntoTemplates for [S; N] {
    fn into_templates(self) -> Vec<String> {
        self.into_iter().map(Into::into).collect()
    }
}

impl<S: Into<String>> IntoTemplates for Vec<S> {
    fn into_templates(self) -> Vec<String> {
        self.into_iter().map(Into::into).collect()
    }
}

impl<S: Into<String> + Clone> IntoTemplates for &[S] {
    fn into_templates(self) -> Vec<String> {
        self.iter().cloned().map(Into::into).collect()
    }
}

/// Pattern rule: every match of `pattern` is rewritten with each template in
/// turn, one candidate per template.
///
/// Templates reference capture groups with `$1`, `${1}` or `${name}`; `$$` is
/// a literal dollar. A numbered reference takes the longest run of digits, so
/// `$1en` is group 1 followed by `en`.
pub fn regexp(pattern: &str, templates: impl IntoTemplates) -> PrimitiveSpec {
    PrimitiveSpec::Regexp {
        pattern: pattern.to_string(),
        templates: templates.into_templates(),
        mode: ReplaceMode::default(),
    }
}

/// Map rule: literal substitutions tried in the given order, first match wins.
pub fn map<K, V>(entries: impl IntoIterator<Item = (K, V)>) -> PrimitiveSpec
where
    K: Into<String>,
    V: Into<String>,
{
    PrimitiveSpec::Map { entries: entries.into_iter().map(|(k, v)| (k.into(), v.into())).collect() }
}

/// Record the input's casing and lowercase it. Must be the first rule.
pub fn lower_case() -> PrimitiveSpec {
    PrimitiveSpec::LowerCase
}

/// Re-apply the casing recorded by [`lower_case`]. Must be the last rule.
pub fn restore_case() -> PrimitiveSpec {
    PrimitiveSpec::RestoreCase
}

/// Descriptor of one rule: name, optional section and predicate, primitive.
#[derive(Clone)]
pub struct RuleSpec {
    name: String,
    section: Option<String>,
    predicate: Option<Predicate>,
    primitive: PrimitiveSpec,
}

impl RuleSpec {
    pub fn new(name: impl Into<String>, primitive: PrimitiveSpec) -> Self {
        RuleSpec { name: name.into(), section: None, predicate: None, primitive }
    }

    /// Only apply the rule to tokens whose tag satisfies `predicate`.
    pub fn when(mut self, predicate: Predicate) -> Self {
        self.predicate = Some(predicate);
        self
    }

    pub fn in_section(mut self, section: impl Into<String>) -> Self {
        self.section = Some(section.into());
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn section(&self) -> Option<&str> {
        self.section.as_deref()
    }

    pub fn predicate(&self) -> Option<&Predicate> {
        self.predicate.as_ref()
    }

    pub fn primitive(&self) -> &PrimitiveSpec {
        &self.primitive
    }

    pub(crate) fn into_parts(self) -> (String, Option<String>, Option<Predicate>, PrimitiveSpec) {
        (self.name, self.section, self.predicate, self.primitive)
    }
}

impl fmt::Debug for RuleSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RuleSpec")
            .field("name", &self.name)
            .field("section", &self.section)
            .field("predicate", &self.predicate.as_ref().map(|_| "<predicate>"))
            .field("primitive", &self.primitive)
            .finish()
    }
}

/// Put every spec of `rules` without an explicit section under `name`.
pub fn section(name: &str, rules: Vec<RuleSpec>) -> Vec<RuleSpec> {
    rules
        .into_iter()
        .map(|spec| if spec.section.is_some() { spec } else { spec.in_section(name) })
        .collect()
}
