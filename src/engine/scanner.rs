//! Deterministic map scanner.
//!
//! Literal key→value substitution, scanned left to right. At each position the
//! entries are tried **in declaration order** and the first key that matches is
//! consumed; when nothing matches, one character is copied unchanged.
//!
//! ```text
//! entries: [("ja", "я"), ("j", "й"), ("a", "а")]
//! input:   "jaj"
//!           ^^ "ja" declared before "j" -> "я"
//!             ^ only "j" matches       -> "й"
//! output:  "яй"
//! ```
//!
//! Order is the only precedence rule: if "j" were declared before "ja", the
//! longer key could never match. Tables that mix multi-character keys with
//! their single-character prefixes must list the longer key first.
//!
//! ## Invariants
//!
//! - `entries` is never reordered.
//! - `by_first_char` holds indices into `entries` in ascending order, so
//!   filtering by first character does not change precedence.
//! - Keys are non-empty (checked at compile time), so every step advances.

use crate::ConfigurationError;
use std::collections::HashMap;

#[derive(Debug, Clone)]
pub struct MapPrimitive {
    entries: Vec<(String, String)>,
    by_first_char: HashMap<char, Vec<usize>>,
}

impl MapPrimitive {
    pub(crate) fn compile(rule: &str, entries: &[(String, String)]) -> Result<Self, ConfigurationError> {
        let mut by_first_char: HashMap<char, Vec<usize>> = HashMap::new();
        for (position, (key, _)) in entries.iter().enumerate() {
            let Some(first) = key.chars().next() else {
                return Err(ConfigurationError::EmptyMapKey { rule: rule.to_string(), position });
            };
            by_first_char.entry(first).or_default().push(position);
        }
        Ok(MapPrimitive { entries: entries.to_vec(), by_first_char })
    }

    pub fn entries(&self) -> &[(String, String)] {
        &self.entries
    }

    /// Scan `text` and return the substituted string. Total: never fails.
    pub(crate) fn apply(&self, text: &str) -> String {
        let mut out = String::with_capacity(text.len());
        let mut rest = text;

        while let Some(c) = rest.chars().next() {
            let hit = self.by_first_char.get(&c).and_then(|ids| {
                ids.iter().map(|&id| &self.entries[id]).find(|(key, _)| rest.starts_with(key.as_str()))
            });

            match hit {
                Some((key, value)) => {
                    out.push_str(value);
                    rest = &rest[key.len()..];
                }
                None => {
                    out.push(c);
                    rest = &rest[c.len_utf8()..];
                }
            }
        }

        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scanner(entries: &[(&str, &str)]) -> MapPrimitive {
        let entries: Vec<(String, String)> = entries.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        MapPrimitive::compile("test", &entries).unwrap()
    }

    #[test]
    fn earlier_entries_shadow_their_prefixes() {
        let m = scanner(&[("ja", "я"), ("j", "й"), ("a", "а")]);
        assert_eq!(m.apply("jaj"), "яй");
    }

    #[test]
    fn reversing_overlapping_keys_changes_output() {
        let longer_first = scanner(&[("ja", "я"), ("j", "й")]);
        let shorter_first = scanner(&[("j", "й"), ("ja", "я")]);
        assert_eq!(longer_first.apply("moja"), "moя");
        assert_eq!(shorter_first.apply("moja"), "moйa");
    }

    #[test]
    fn unmatched_characters_are_copied() {
        let m = scanner(&[("a", "а")]);
        assert_eq!(m.apply("bač-1"), "bаč-1");
        assert_eq!(m.apply(""), "");
    }

    #[test]
    fn multi_codepoint_keys_match_as_a_unit() {
        // "t\u{301}" is t + combining acute; the precomposed "ť" is a separate key.
        let m = scanner(&[("ť", "т"), ("t\u{301}", "т"), ("t", "т")]);
        assert_eq!(m.apply("ťt\u{301}t"), "ттт");
    }

    #[test]
    fn values_may_be_empty() {
        let m = scanner(&[("ь", ""), ("’", "")]);
        assert_eq!(m.apply("ь’x"), "x");
    }

    #[test]
    fn disjoint_table_is_idempotent() {
        let m = scanner(&[("n", "X"), ("o", "Y"), ("v", "Z")]);
        let once = m.apply("novo vino");
        assert_eq!(once, "XYZY ZiXY");
        assert_eq!(m.apply(&once), once);
    }

    #[test]
    fn empty_key_is_rejected() {
        let entries = vec![("a".to_string(), "b".to_string()), (String::new(), "c".to_string())];
        let err = MapPrimitive::compile("bad map", &entries).unwrap_err();
        assert!(matches!(err, ConfigurationError::EmptyMapKey { position: 1, .. }));
    }
}
