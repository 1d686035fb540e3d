//! Case normalizer.
//!
//! Rules are written against lowercase text. Before the first rule the
//! original casing is reduced to a coarse [`CasePattern`]; after the last rule
//! that pattern is re-applied to every surviving candidate. There is no
//! per-character memory: substitutions change lengths, so positions in a
//! candidate do not line up with positions in the input.
//!
//! The one exception is a candidate that is still exactly the lowercased input.
//! Nothing structural happened to it, so it is restored to the input verbatim.

/// Coarse classification of a word's original casing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CasePattern {
    AllLower,
    AllUpper,
    Capitalized,
    Mixed,
}

impl CasePattern {
    /// Classify `text` by its cased letters; uncased characters are ignored.
    ///
    /// A word with no cased letters at all counts as lowercase.
    pub fn classify(text: &str) -> Self {
        let mut cased = text.chars().filter(|c| c.is_uppercase() || c.is_lowercase());
        let Some(first) = cased.next() else {
            return CasePattern::AllLower;
        };

        let (mut upper, mut lower) = (0usize, 0usize);
        for c in cased {
            if c.is_uppercase() {
                upper += 1;
            } else {
                lower += 1;
            }
        }

        match (first.is_uppercase(), upper, lower) {
            (true, _, 0) => CasePattern::AllUpper,
            (false, 0, _) => CasePattern::AllLower,
            (true, 0, _) => CasePattern::Capitalized,
            _ => CasePattern::Mixed,
        }
    }

    /// Re-case `candidate` according to this pattern.
    pub fn apply(self, candidate: &str) -> String {
        match self {
            CasePattern::AllUpper => candidate.to_uppercase(),
            CasePattern::Capitalized => capitalize(candidate),
            // Mixed casing has no safe positional mapping.
            CasePattern::AllLower | CasePattern::Mixed => candidate.to_string(),
        }
    }
}

/// Casing recorded for one token by a `lower_case` rule.
#[derive(Debug, Clone)]
pub(crate) struct CaseMemory {
    pattern: CasePattern,
    original: String,
    lowered: String,
}

impl CaseMemory {
    pub(crate) fn record(original: &str) -> Self {
        CaseMemory {
            pattern: CasePattern::classify(original),
            original: original.to_string(),
            lowered: original.to_lowercase(),
        }
    }

    pub(crate) fn pattern(&self) -> CasePattern {
        self.pattern
    }

    pub(crate) fn restore(&self, candidate: &str) -> String {
        if candidate == self.lowered {
            return self.original.clone();
        }
        self.pattern.apply(candidate)
    }
}

fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_basic_shapes() {
        assert_eq!(CasePattern::classify("novy"), CasePattern::AllLower);
        assert_eq!(CasePattern::classify("NOVY"), CasePattern::AllUpper);
        assert_eq!(CasePattern::classify("Novy"), CasePattern::Capitalized);
        assert_eq!(CasePattern::classify("NoVy"), CasePattern::Mixed);
        assert_eq!(CasePattern::classify("nOVY"), CasePattern::Mixed);
    }

    #[test]
    fn uncased_characters_are_ignored() {
        assert_eq!(CasePattern::classify(""), CasePattern::AllLower);
        assert_eq!(CasePattern::classify("123-’"), CasePattern::AllLower);
        assert_eq!(CasePattern::classify("’Člověk"), CasePattern::Capitalized);
        assert_eq!(CasePattern::classify("A"), CasePattern::AllUpper);
        assert_eq!(CasePattern::classify("ČŘ-2"), CasePattern::AllUpper);
    }

    #[test]
    fn applies_patterns_to_new_text() {
        assert_eq!(CasePattern::AllUpper.apply("нов"), "НОВ");
        assert_eq!(CasePattern::Capitalized.apply("щем"), "Щем");
        assert_eq!(CasePattern::Mixed.apply("нов"), "нов");
        assert_eq!(CasePattern::Capitalized.apply(""), "");
    }

    #[test]
    fn unchanged_candidate_gets_original_back() {
        let memory = CaseMemory::record("iPhone");
        assert_eq!(memory.pattern(), CasePattern::Mixed);
        assert_eq!(memory.restore("iphone"), "iPhone");
        assert_eq!(memory.restore("ифоне"), "ифоне");
    }
}
