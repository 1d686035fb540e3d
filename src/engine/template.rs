//! Replacement templates.
//!
//! A template string such as `"$1oven"` is parsed once, at build time, into a
//! sequence of literal segments and capture-group references:
//!
//! ```text
//! "$1oven"     -> [Group(1), Literal("oven")]
//! "${2}x$$"    -> [Group(2), Literal("x$")]
//! "${stem}ie"  -> [Group(<index of stem>), Literal("ie")]
//! ```
//!
//! Named references are resolved to indices against the owning regex, and
//! every index is checked against its group count, so expansion can never
//! refer to a group that does not exist.

use crate::ConfigurationError;
use regex::{Captures, Regex};

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Segment {
    Literal(String),
    Group(usize),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Template {
    segments: Vec<Segment>,
}

/// Reference as written, before it is checked against a regex.
enum RawRef {
    Index(usize),
    Name(String),
}

impl Template {
    /// Parse `source` and validate its group references against `regex`.
    pub(crate) fn compile(rule: &str, source: &str, regex: &Regex) -> Result<Self, ConfigurationError> {
        let groups = regex.captures_len();
        let mut segments = Vec::new();
        let mut literal = String::new();
        let mut chars = source.chars().peekable();

        while let Some(c) = chars.next() {
            if c != '$' {
                literal.push(c);
                continue;
            }

            let reference = match chars.peek().copied() {
                Some('$') => {
                    chars.next();
                    literal.push('$');
                    continue;
                }
                Some('{') => {
                    chars.next();
                    let mut name = String::new();
                    let mut closed = false;
                    for c in chars.by_ref() {
                        if c == '}' {
                            closed = true;
                            break;
                        }
                        name.push(c);
                    }
                    if !closed || name.is_empty() {
                        // Not a reference after all; keep it verbatim.
                        literal.push_str("${");
                        literal.push_str(&name);
                        if closed {
                            literal.push('}');
                        }
                        continue;
                    }
                    match name.parse::<usize>() {
                        Ok(index) => RawRef::Index(index),
                        Err(_) => RawRef::Name(name),
                    }
                }
                Some(d) if d.is_ascii_digit() => {
                    let mut digits = String::new();
                    while let Some(&d) = chars.peek() {
                        if !d.is_ascii_digit() {
                            break;
                        }
                        digits.push(d);
                        chars.next();
                    }
                    // Overflowing indices are out of range anyway.
                    RawRef::Index(digits.parse::<usize>().unwrap_or(usize::MAX))
                }
                Some(n) if n.is_ascii_alphabetic() || n == '_' => {
                    let mut name = String::new();
                    while let Some(&n) = chars.peek() {
                        if !(n.is_ascii_alphanumeric() || n == '_') {
                            break;
                        }
                        name.push(n);
                        chars.next();
                    }
                    RawRef::Name(name)
                }
                _ => {
                    literal.push('$');
                    continue;
                }
            };

            let index = match reference {
                RawRef::Index(index) if index < groups => index,
                RawRef::Index(index) => {
                    return Err(ConfigurationError::UndefinedGroup {
                        rule: rule.to_string(),
                        template: source.to_string(),
                        index,
                        groups: groups - 1,
                    });
                }
                RawRef::Name(name) => {
                    match regex.capture_names().position(|candidate| candidate == Some(name.as_str())) {
                        Some(index) => index,
                        None => {
                            return Err(ConfigurationError::UnknownGroupName {
                                rule: rule.to_string(),
                                template: source.to_string(),
                                name,
                            });
                        }
                    }
                }
            };

            if !literal.is_empty() {
                segments.push(Segment::Literal(std::mem::take(&mut literal)));
            }
            segments.push(Segment::Group(index));
        }

        if !literal.is_empty() {
            segments.push(Segment::Literal(literal));
        }

        Ok(Template { segments })
    }

    /// Append the expansion of this template for one match to `out`.
    ///
    /// A group that exists but did not take part in the match expands to
    /// nothing.
    pub(crate) fn expand_into(&self, caps: &Captures<'_>, out: &mut String) {
        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => out.push_str(text),
                Segment::Group(index) => {
                    if let Some(m) = caps.get(*index) {
                        out.push_str(m.as_str());
                    }
                }
            }
        }
    }

    #[cfg(test)]
    pub(crate) fn segments(&self) -> &[Segment] {
        &self.segments
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn compile(pattern: &str, template: &str) -> Result<Template, ConfigurationError> {
        let regex = Regex::new(pattern).unwrap();
        Template::compile("test", template, &regex)
    }

    #[test]
    fn digits_end_at_first_non_digit() {
        let t = compile(r"([^n])ny\b", "$1oven").unwrap();
        assert_eq!(t.segments(), &[Segment::Group(1), Segment::Literal("oven".into())]);
    }

    #[test]
    fn braces_and_escapes() {
        let t = compile(r"(a)(b)", "${2}x$$").unwrap();
        assert_eq!(t.segments(), &[Segment::Group(2), Segment::Literal("x$".into())]);
    }

    #[test]
    fn named_groups_resolve_to_indices() {
        let t = compile(r"(?P<stem>\w+)je\b", "${stem}ie").unwrap();
        assert_eq!(t.segments(), &[Segment::Group(1), Segment::Literal("ie".into())]);

        let t = compile(r"(?P<stem>\w+)je\b", "$stem-").unwrap();
        assert_eq!(t.segments(), &[Segment::Group(1), Segment::Literal("-".into())]);
    }

    #[test]
    fn whole_match_is_group_zero() {
        let t = compile(r"ab", "[$0]").unwrap();
        assert_eq!(
            t.segments(),
            &[Segment::Literal("[".into()), Segment::Group(0), Segment::Literal("]".into())]
        );
    }

    #[test]
    fn lone_dollar_is_literal() {
        let t = compile(r"a", "$-$").unwrap();
        assert_eq!(t.segments(), &[Segment::Literal("$-$".into())]);

        let t = compile(r"a", "${").unwrap();
        assert_eq!(t.segments(), &[Segment::Literal("${".into())]);
    }

    #[test]
    fn undefined_index_is_rejected() {
        let err = compile(r"(a)", "$2").unwrap_err();
        assert!(matches!(err, ConfigurationError::UndefinedGroup { index: 2, groups: 1, .. }));
    }

    #[test]
    fn unknown_name_is_rejected() {
        let err = compile(r"(?P<stem>a)", "${root}").unwrap_err();
        assert!(matches!(err, ConfigurationError::UnknownGroupName { ref name, .. } if name == "root"));
    }

    #[test]
    fn unmatched_group_expands_to_nothing() {
        let regex = Regex::new(r"\b(ht)|(hć)").unwrap();
        let t = Template::compile("test", "[$1|$2]", &regex).unwrap();
        let caps = regex.captures("hćeti").unwrap();
        let mut out = String::new();
        t.expand_into(&caps, &mut out);
        assert_eq!(out, "[|hć]");
    }
}
