use crate::engine::{Pipeline, RunResult};
use crate::tag::Tag;
use once_cell::sync::Lazy;

static BULGARIAN: Lazy<Pipeline> = Lazy::new(|| {
    crate::rules::bulgarian::pipeline().expect("built-in Interslavic → Bulgarian table is well-formed")
});

/// One input word plus its optional grammatical tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub text: String,
    pub tag: Option<Tag>,
}

impl Token {
    /// An untagged token. Rules gated on a tag predicate never apply to it.
    pub fn new(text: impl Into<String>) -> Self {
        Token { text: text.into(), tag: None }
    }

    pub fn tagged(text: impl Into<String>, tag: impl Into<Tag>) -> Self {
        Token { text: text.into(), tag: Some(tag.into()) }
    }
}

/// Options that affect a run.
#[derive(Debug, Clone, Default)]
pub struct Options {
    /// Keep at most this many candidates after each rule (first-seen order).
    /// `None` means unbounded; `Some(0)` behaves like `Some(1)`.
    pub max_candidates: Option<usize>,
}

/// The built-in Interslavic → Bulgarian pipeline, built on first use.
pub fn bulgarian() -> &'static Pipeline {
    &BULGARIAN
}

/// Flavorize `text` into Bulgarian Cyrillic with the default pipeline.
///
/// `tag` is the word's part of speech in dictionary notation (`"adj."`,
/// `"v. ipf."`, `"m.pl."`, ...), if known.
///
/// # Example
/// ```
/// use flavorizer::flavorize;
///
/// assert_eq!(flavorize("novy", Some("adj.")), ["нов"]);
/// ```
pub fn flavorize(text: &str, tag: Option<&str>) -> Vec<String> {
    flavorize_with(text, tag, &Options::default())
}

pub fn flavorize_with(text: &str, tag: Option<&str>, options: &Options) -> Vec<String> {
    bulgarian().transform_with(&token(text, tag), options)
}

/// Like [`flavorize_with`], also returning the per-rule trace.
pub fn flavorize_verbose(text: &str, tag: Option<&str>, options: &Options) -> RunResult {
    bulgarian().transform_verbose(&token(text, tag), options)
}

fn token(text: &str, tag: Option<&str>) -> Token {
    match tag {
        Some(tag) => Token::tagged(text, tag),
        None => Token::new(text),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::StepOutcome;

    #[test]
    fn flavorize_uses_the_bulgarian_table() {
        assert_eq!(flavorize("novy", Some("adj.")), ["нов"]);
        assert_eq!(flavorize("Novy", Some("adj.")), ["Нов"]);
    }

    #[test]
    fn flavorize_verbose_includes_rule_trace() {
        let run = flavorize_verbose("novy", Some("adj."), &Options::default());
        assert_eq!(run.candidates, ["нов"]);
        assert_eq!(run.metrics.steps.len(), bulgarian().len());

        let applied = run.metrics.applied_rules();
        assert!(applied.contains(&"ADJ -y -> -"));
        assert!(applied.contains(&"Cyrillic mapping - standard latin"));

        let infinitive = run.metrics.steps.iter().find(|s| s.rule == "Infinitive -> 1st person").unwrap();
        assert_eq!(infinitive.outcome, StepOutcome::Skipped);
        assert_eq!(infinitive.section.as_deref(), Some("Verbs"));
    }

    #[test]
    fn untagged_words_skip_gated_rules() {
        // Without a tag the adjective ending stays and y maps to и.
        assert_eq!(flavorize("novy", None), ["нови"]);
    }
}
