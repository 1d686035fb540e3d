//! Pipeline builder.
//!
//! The builder is the only place rules are checked. Each added rule is compiled
//! immediately (regex, templates, map keys) so a malformed rule is reported by
//! the call that added it; [`PipelineBuilder::build`] then checks whole-pipeline
//! constraints (placement of the case primitives) and seals the rule list.
//!
//! `build` takes the builder by value, so nothing can be added to a pipeline
//! once it exists:
//!
//! ```compile_fail
//! use flavorizer::{PipelineBuilder, map};
//!
//! let builder = PipelineBuilder::named("sealed");
//! let pipeline = builder.build().unwrap();
//! let builder = builder.rule("too late", map([("a", "b")]));
//! ```

use super::pattern::PatternPrimitive;
use super::pipeline::Pipeline;
use super::rule::{Primitive, Rule};
use super::scanner::MapPrimitive;
use crate::tag::Predicate;
use crate::{ConfigurationError, PrimitiveSpec, Result, RuleSpec};

/// Accumulates rules, in order, into a [`Pipeline`].
#[derive(Debug)]
pub struct PipelineBuilder {
    name: String,
    section: Option<String>,
    rules: Vec<Rule>,
}

impl PipelineBuilder {
    /// Start a pipeline with a display name.
    pub fn named(name: impl Into<String>) -> Self {
        PipelineBuilder { name: name.into(), section: None, rules: Vec::new() }
    }

    /// Label subsequently added rules with `name` (until changed).
    pub fn section(mut self, name: impl Into<String>) -> Self {
        self.section = Some(name.into());
        self
    }

    /// Append an ungated rule.
    pub fn rule(self, name: impl Into<String>, primitive: PrimitiveSpec) -> Result<Self> {
        self.push(RuleSpec::new(name, primitive))
    }

    /// Append a rule that only runs when the token's tag satisfies `predicate`.
    pub fn rule_when(self, name: impl Into<String>, primitive: PrimitiveSpec, predicate: Predicate) -> Result<Self> {
        self.push(RuleSpec::new(name, primitive).when(predicate))
    }

    /// Append a rule descriptor. A descriptor without its own section takes
    /// the builder's current one.
    pub fn push(mut self, spec: RuleSpec) -> Result<Self> {
        let (name, section, predicate, primitive) = spec.into_parts();
        let primitive = compile_primitive(&name, primitive)?;
        let section = section.or_else(|| self.section.clone());
        self.rules.push(Rule { name, section, predicate, primitive });
        Ok(self)
    }

    /// Append every descriptor of `specs`, in order.
    pub fn extend(self, specs: impl IntoIterator<Item = RuleSpec>) -> Result<Self> {
        specs.into_iter().try_fold(self, PipelineBuilder::push)
    }

    /// Seal the rules into an immutable [`Pipeline`].
    pub fn build(self) -> Result<Pipeline> {
        check_case_rules(&self.rules)?;
        tracing::debug!(pipeline = %self.name, rules = self.rules.len(), "pipeline built");
        Ok(Pipeline::new(self.name, self.rules))
    }
}

fn compile_primitive(rule: &str, spec: PrimitiveSpec) -> Result<Primitive> {
    tracing::trace!(rule, kind = spec.kind(), "compiling rule");
    let primitive = match spec {
        PrimitiveSpec::Regexp { pattern, templates, mode } => {
            Primitive::Pattern(PatternPrimitive::compile(rule, &pattern, &templates, mode)?)
        }
        PrimitiveSpec::Map { entries } => Primitive::Map(MapPrimitive::compile(rule, &entries)?),
        PrimitiveSpec::LowerCase => Primitive::LowerCase,
        PrimitiveSpec::RestoreCase => Primitive::RestoreCase,
    };
    Ok(primitive)
}

/// `lower_case` may only open the pipeline and `restore_case` may only close
/// it, after a `lower_case`.
fn check_case_rules(rules: &[Rule]) -> Result<()> {
    let last = rules.len().saturating_sub(1);
    let mut lowered = false;

    for (position, rule) in rules.iter().enumerate() {
        match rule.primitive {
            Primitive::LowerCase if position != 0 => {
                return Err(ConfigurationError::MisplacedCaseRule {
                    rule: rule.name.clone(),
                    primitive: "lower_case",
                    expected: "first",
                    position,
                });
            }
            Primitive::LowerCase => lowered = true,
            Primitive::RestoreCase if position != last => {
                return Err(ConfigurationError::MisplacedCaseRule {
                    rule: rule.name.clone(),
                    primitive: "restore_case",
                    expected: "last",
                    position,
                });
            }
            Primitive::RestoreCase if !lowered => {
                return Err(ConfigurationError::RestoreWithoutLower { rule: rule.name.clone() });
            }
            _ => {}
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{lower_case, map, part_of_speech, regexp, restore_case};

    #[test]
    fn sections_apply_to_following_rules() {
        let pipeline = PipelineBuilder::named("sections")
            .rule("a", map([("a", "b")]))
            .unwrap()
            .section("Nouns")
            .rule("b", map([("b", "c")]))
            .unwrap()
            .push(RuleSpec::new("c", map([("c", "d")])).in_section("Own"))
            .unwrap()
            .build()
            .unwrap();

        let sections: Vec<Option<&str>> = pipeline.rules().iter().map(|r| r.section()).collect();
        assert_eq!(sections, [None, Some("Nouns"), Some("Own")]);
        assert_eq!(pipeline.name(), "sections");
    }

    #[test]
    fn rule_reports_undefined_group_immediately() {
        let err = PipelineBuilder::named("p").rule("bad", regexp(r"(a)b", ["$1", "$2"])).unwrap_err();
        match err {
            ConfigurationError::UndefinedGroup { rule, template, index, groups } => {
                assert_eq!(rule, "bad");
                assert_eq!(template, "$2");
                assert_eq!(index, 2);
                assert_eq!(groups, 1);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn gated_rules_keep_their_predicate() {
        let pipeline = PipelineBuilder::named("p")
            .rule_when("adj", regexp(r"y\b", ""), part_of_speech("adj."))
            .unwrap()
            .build()
            .unwrap();
        assert!(pipeline.rules()[0].is_gated());
    }

    #[test]
    fn lower_case_must_come_first() {
        let err = PipelineBuilder::named("p")
            .rule("x", map([("a", "b")]))
            .unwrap()
            .rule("lower", lower_case())
            .unwrap()
            .build()
            .unwrap_err();
        assert!(matches!(err, ConfigurationError::MisplacedCaseRule { position: 1, expected: "first", .. }));
    }

    #[test]
    fn restore_case_must_come_last_and_after_lower() {
        let err = PipelineBuilder::named("p")
            .rule("lower", lower_case())
            .unwrap()
            .rule("restore", restore_case())
            .unwrap()
            .rule("x", map([("a", "b")]))
            .unwrap()
            .build()
            .unwrap_err();
        assert!(matches!(err, ConfigurationError::MisplacedCaseRule { expected: "last", .. }));

        let err = PipelineBuilder::named("p").rule("restore", restore_case()).unwrap().build().unwrap_err();
        assert!(matches!(err, ConfigurationError::RestoreWithoutLower { .. }));
    }

    #[test]
    fn extend_stops_at_first_bad_rule() {
        let specs = vec![
            RuleSpec::new("ok", map([("a", "b")])),
            RuleSpec::new("broken", regexp("(", "x")),
            RuleSpec::new("never", map([("", "b")])),
        ];
        let err = PipelineBuilder::named("p").extend(specs).unwrap_err();
        assert!(matches!(err, ConfigurationError::InvalidPattern { ref rule, .. } if rule == "broken"));
    }
}
