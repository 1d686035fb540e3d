//! Grammatical tags and tag predicates.
//!
//! Tags are assigned outside this crate (by a dictionary or a tagger) and are
//! opaque strings such as `"adj."`, `"v. tr. ipf."`, `"m.pl."` or
//! `"noun, masculine plural"`. A [`Tag`] keeps that raw text and a coarse set
//! of [`TagFlags`] parsed from it, which is what rule predicates look at.

use std::fmt;
use std::sync::Arc;

bitflags::bitflags! {
    /// Grammatical features recognised in a tag.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct TagFlags: u32 {
        const NOUN         = 1 << 0;
        const VERB         = 1 << 1;
        const ADJECTIVE    = 1 << 2;
        const ADVERB       = 1 << 3;
        const PRONOUN      = 1 << 4;
        const NUMERAL      = 1 << 5;
        const PREPOSITION  = 1 << 6;
        const CONJUNCTION  = 1 << 7;
        const MASCULINE    = 1 << 8;
        const FEMININE     = 1 << 9;
        const NEUTER       = 1 << 10;
        const SINGULAR     = 1 << 11;
        const PLURAL       = 1 << 12;
        const TRANSITIVE   = 1 << 13;
        const INTRANSITIVE = 1 << 14;
        const PERFECTIVE   = 1 << 15;
        const IMPERFECTIVE = 1 << 16;
    }
}

/// Tag predicate attached to a rule.
pub type Predicate = Arc<dyn Fn(&Tag) -> bool + Send + Sync>;

/// An externally assigned grammatical category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tag {
    raw: String,
    flags: TagFlags,
}

impl Tag {
    /// Parse `raw` into a tag. Words that are not recognised are kept in the
    /// raw text but contribute no flags.
    pub fn new(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let flags = parse_flags(&raw);
        Tag { raw, flags }
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub fn flags(&self) -> TagFlags {
        self.flags
    }

    /// True when every flag of `query` is present on this tag.
    pub fn has(&self, query: TagFlags) -> bool {
        !query.is_empty() && self.flags.contains(query)
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl From<&str> for Tag {
    fn from(raw: &str) -> Self {
        Tag::new(raw)
    }
}

impl From<String> for Tag {
    fn from(raw: String) -> Self {
        Tag::new(raw)
    }
}

/// Predicate matching tags that carry every feature named by `query`.
///
/// `query` uses the same notation as tags: `part_of_speech("adj.")` matches
/// `"adj."` and `"adjective"`, `part_of_speech("m.pl.")` matches masculine
/// plural nouns. A query with no recognisable feature never matches.
///
/// ```
/// use flavorizer::{Tag, part_of_speech};
///
/// let masc_pl = part_of_speech("m.pl.");
/// assert!(masc_pl(&Tag::new("noun, masculine plural")));
/// assert!(!masc_pl(&Tag::new("m.")));
/// ```
pub fn part_of_speech(query: &str) -> Predicate {
    let wanted = parse_flags(query);
    Arc::new(move |tag: &Tag| tag.has(wanted))
}

fn parse_flags(raw: &str) -> TagFlags {
    crate::regex!(r"[\s.,/;]+")
        .split(&raw.to_lowercase())
        .filter(|word| !word.is_empty())
        .fold(TagFlags::empty(), |flags, word| flags | word_flags(word))
}

fn word_flags(word: &str) -> TagFlags {
    match word {
        "noun" | "subst" => TagFlags::NOUN,
        "v" | "verb" => TagFlags::VERB,
        "adj" | "adjective" => TagFlags::ADJECTIVE,
        "adv" | "adverb" => TagFlags::ADVERB,
        "pron" | "pronoun" => TagFlags::PRONOUN,
        "num" | "numeral" => TagFlags::NUMERAL,
        "prep" | "preposition" => TagFlags::PREPOSITION,
        "conj" | "conjunction" => TagFlags::CONJUNCTION,
        // Bare gender abbreviations are noun genders in dictionary notation.
        "m" | "masc" | "masculine" => TagFlags::NOUN | TagFlags::MASCULINE,
        "f" | "fem" | "feminine" => TagFlags::NOUN | TagFlags::FEMININE,
        "n" | "neut" | "neuter" => TagFlags::NOUN | TagFlags::NEUTER,
        "sg" | "sing" | "singular" => TagFlags::SINGULAR,
        "pl" | "plural" => TagFlags::PLURAL,
        "tr" | "transitive" => TagFlags::TRANSITIVE,
        "intr" | "intransitive" => TagFlags::INTRANSITIVE,
        "pf" | "perf" | "perfective" => TagFlags::PERFECTIVE,
        "ipf" | "impf" | "imperfective" => TagFlags::IMPERFECTIVE,
        _ => TagFlags::empty(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_dictionary_abbreviations() {
        assert_eq!(Tag::new("adj.").flags(), TagFlags::ADJECTIVE);
        assert_eq!(
            Tag::new("v. tr. ipf.").flags(),
            TagFlags::VERB | TagFlags::TRANSITIVE | TagFlags::IMPERFECTIVE
        );
        assert_eq!(Tag::new("m.pl.").flags(), TagFlags::NOUN | TagFlags::MASCULINE | TagFlags::PLURAL);
        assert_eq!(Tag::new("f.").flags(), TagFlags::NOUN | TagFlags::FEMININE);
    }

    #[test]
    fn parses_spelled_out_tags() {
        assert_eq!(Tag::new("Adjective").flags(), TagFlags::ADJECTIVE);
        assert_eq!(
            Tag::new("noun, masculine plural").flags(),
            TagFlags::NOUN | TagFlags::MASCULINE | TagFlags::PLURAL
        );
    }

    #[test]
    fn unknown_words_carry_no_flags() {
        let tag = Tag::new("interjection");
        assert!(tag.flags().is_empty());
        assert_eq!(tag.as_str(), "interjection");
        assert_eq!(tag.to_string(), "interjection");
    }

    #[test]
    fn part_of_speech_requires_all_query_flags() {
        let masc_pl = part_of_speech("m.pl.");
        assert!(masc_pl(&Tag::new("m.pl.")));
        assert!(masc_pl(&Tag::new("noun, masculine plural")));
        assert!(!masc_pl(&Tag::new("m.")));
        assert!(!masc_pl(&Tag::new("f.pl.")));

        let noun = part_of_speech("noun");
        assert!(noun(&Tag::new("f.")));
        assert!(!noun(&Tag::new("adj.")));
    }

    #[test]
    fn unrecognised_query_never_matches() {
        let pred = part_of_speech("interjection");
        assert!(!pred(&Tag::new("interjection")));
        assert!(!pred(&Tag::new("adj.")));
    }
}
