//! Compiled rules.

use super::pattern::PatternPrimitive;
use super::scanner::MapPrimitive;
use crate::tag::{Predicate, Tag};
use std::fmt;

/// A checked, runnable primitive.
#[derive(Debug, Clone)]
pub enum Primitive {
    Pattern(PatternPrimitive),
    Map(MapPrimitive),
    LowerCase,
    RestoreCase,
}

/// One step of a [`Pipeline`](crate::Pipeline).
#[derive(Clone)]
pub struct Rule {
    pub(crate) name: String,
    pub(crate) section: Option<String>,
    pub(crate) predicate: Option<Predicate>,
    pub(crate) primitive: Primitive,
}

impl Rule {
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Section label; informational only.
    pub fn section(&self) -> Option<&str> {
        self.section.as_deref()
    }

    pub fn primitive(&self) -> &Primitive {
        &self.primitive
    }

    pub fn is_gated(&self) -> bool {
        self.predicate.is_some()
    }

    /// Whether the rule runs for a token carrying `tag`.
    ///
    /// Ungated rules always run. Gated rules never run for untagged tokens.
    pub fn applies_to(&self, tag: Option<&Tag>) -> bool {
        match (&self.predicate, tag) {
            (None, _) => true,
            (Some(pred), Some(tag)) => pred(tag),
            (Some(_), None) => false,
        }
    }
}

impl fmt::Debug for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rule")
            .field("name", &self.name)
            .field("section", &self.section)
            .field("predicate", &self.predicate.as_ref().map(|_| "<predicate>"))
            .field("primitive", &self.primitive)
            .finish()
    }
}
