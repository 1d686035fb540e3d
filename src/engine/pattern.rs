//! Pattern primitive: capture-group regex with alternative templates.

use super::template::Template;
use crate::{ConfigurationError, ReplaceMode};
use regex::{Captures, Regex};

#[derive(Debug, Clone)]
pub struct PatternPrimitive {
    source: Regex,
    templates: Vec<Template>,
    mode: ReplaceMode,
}

impl PatternPrimitive {
    pub(crate) fn compile(
        rule: &str,
        pattern: &str,
        templates: &[String],
        mode: ReplaceMode,
    ) -> Result<Self, ConfigurationError> {
        let source = Regex::new(pattern)
            .map_err(|source| ConfigurationError::InvalidPattern { rule: rule.to_string(), source })?;
        if templates.is_empty() {
            return Err(ConfigurationError::NoTemplates { rule: rule.to_string() });
        }
        let templates =
            templates.iter().map(|t| Template::compile(rule, t, &source)).collect::<Result<Vec<_>, _>>()?;
        Ok(PatternPrimitive { source, templates, mode })
    }

    pub fn pattern(&self) -> &str {
        self.source.as_str()
    }

    pub fn template_count(&self) -> usize {
        self.templates.len()
    }

    pub fn mode(&self) -> ReplaceMode {
        self.mode
    }

    /// Rewrite `text` once per template.
    ///
    /// Returns `None` when the pattern does not match, so the caller can pass
    /// the candidate through untouched. Otherwise the result holds exactly one
    /// string per template, in template order (duplicates included).
    pub(crate) fn apply(&self, text: &str) -> Option<Vec<String>> {
        let matches: Vec<Captures<'_>> = match self.mode {
            ReplaceMode::All => self.source.captures_iter(text).collect(),
            ReplaceMode::First => self.source.captures(text).into_iter().collect(),
        };
        if matches.is_empty() {
            return None;
        }

        let outputs = self
            .templates
            .iter()
            .map(|template| {
                let mut out = String::with_capacity(text.len());
                let mut last = 0;
                for caps in &matches {
                    // Group 0 always participates in a match.
                    let Some(whole) = caps.get(0) else { continue };
                    out.push_str(&text[last..whole.start()]);
                    template.expand_into(caps, &mut out);
                    last = whole.end();
                }
                out.push_str(&text[last..]);
                out
            })
            .collect();
        Some(outputs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn primitive(pattern: &str, templates: &[&str]) -> PatternPrimitive {
        let templates: Vec<String> = templates.iter().map(|t| t.to_string()).collect();
        PatternPrimitive::compile("test", pattern, &templates, ReplaceMode::All).unwrap()
    }

    #[test]
    fn no_match_signals_pass_through() {
        let p = primitive(r"ti\b", &["m", "am"]);
        assert_eq!(p.apply("novy"), None);
    }

    #[test]
    fn one_output_per_template() {
        let p = primitive(r"([^aeiouy])ny\b", &["$1en", "$1oven"]);
        assert_eq!(p.apply("mirny"), Some(vec!["miren".to_string(), "miroven".to_string()]));
    }

    #[test]
    fn every_match_is_rewritten_by_default() {
        let p = primitive(r"ě", &["e", "ja"]);
        assert_eq!(p.apply("děvě"), Some(vec!["deve".to_string(), "djavja".to_string()]));
    }

    #[test]
    fn first_mode_rewrites_leftmost_match_only() {
        let templates = vec!["e".to_string()];
        let p = PatternPrimitive::compile("test", r"ě", &templates, ReplaceMode::First).unwrap();
        assert_eq!(p.apply("děvě"), Some(vec!["devě".to_string()]));
    }

    #[test]
    fn duplicate_outputs_are_kept_for_the_executor() {
        let p = primitive(r"[òȯ]", &["ȯ", "ȯ"]);
        assert_eq!(p.apply("sȯn"), Some(vec!["sȯn".to_string(), "sȯn".to_string()]));
    }

    #[test]
    fn empty_template_deletes_the_match() {
        let p = primitive(r"[òȯ]", &["ȯ", ""]);
        assert_eq!(p.apply("dȯm"), Some(vec!["dȯm".to_string(), "dm".to_string()]));
    }

    #[test]
    fn invalid_pattern_and_missing_templates_are_rejected() {
        let templates = vec!["x".to_string()];
        let err = PatternPrimitive::compile("broken", r"(a", &templates, ReplaceMode::All).unwrap_err();
        assert!(matches!(err, ConfigurationError::InvalidPattern { ref rule, .. } if rule == "broken"));

        let err = PatternPrimitive::compile("empty", r"a", &[], ReplaceMode::All).unwrap_err();
        assert!(matches!(err, ConfigurationError::NoTemplates { .. }));
    }
}
