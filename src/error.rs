//! Build-time configuration errors.
//!
//! Everything that can be wrong with a rule is detected while the pipeline is
//! being assembled, so a built [`Pipeline`](crate::Pipeline) never fails on a
//! particular input.

use thiserror::Error;

/// A malformed rule, reported by [`PipelineBuilder`](crate::PipelineBuilder).
#[derive(Debug, Clone, Error)]
pub enum ConfigurationError {
    /// The rule's regular expression does not compile.
    #[error("rule \"{rule}\": invalid pattern: {source}")]
    InvalidPattern {
        rule: String,
        #[source]
        source: regex::Error,
    },

    /// A template references a numbered group the pattern does not define.
    #[error("rule \"{rule}\": template \"{template}\" references group ${index}, but the pattern has {groups} group(s)")]
    UndefinedGroup { rule: String, template: String, index: usize, groups: usize },

    /// A template references a named group the pattern does not define.
    #[error("rule \"{rule}\": template \"{template}\" references unknown group \"{name}\"")]
    UnknownGroupName { rule: String, template: String, name: String },

    /// A pattern rule was declared without any replacement template.
    #[error("rule \"{rule}\": pattern rule needs at least one template")]
    NoTemplates { rule: String },

    /// A map rule contains an empty key, which would never advance the scanner.
    #[error("rule \"{rule}\": map entry {position} has an empty key")]
    EmptyMapKey { rule: String, position: usize },

    /// `lower_case` not in first position, or `restore_case` not in last position.
    #[error("rule \"{rule}\": {primitive} must be the {expected} rule of the pipeline (found at position {position})")]
    MisplacedCaseRule { rule: String, primitive: &'static str, expected: &'static str, position: usize },

    /// `restore_case` was used in a pipeline that never lowered the input.
    #[error("rule \"{rule}\": restore_case requires a leading lower_case rule")]
    RestoreWithoutLower { rule: String },
}

/// Result alias for pipeline construction.
pub type Result<T> = std::result::Result<T, ConfigurationError>;
