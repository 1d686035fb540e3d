//! Ordered candidate set.
//!
//! Every rule step turns one generation of candidates into the next. Branching
//! rules routinely produce the same spelling from different parents (or twice
//! from one parent), so each generation is deduplicated by exact text while
//! keeping first-seen order. Keeping the order is what makes the output
//! deterministic for a given input and pipeline.

use std::collections::HashSet;

#[derive(Debug, Clone, Default)]
pub(crate) struct CandidateSet {
    items: Vec<String>,
    seen: HashSet<String>,
}

impl CandidateSet {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn with_seed(text: String) -> Self {
        let mut set = Self::new();
        set.insert(text);
        set
    }

    /// Insert `text` unless an equal candidate is already present. Returns
    /// whether it was added.
    pub(crate) fn insert(&mut self, text: String) -> bool {
        if self.seen.contains(&text) {
            return false;
        }
        self.seen.insert(text.clone());
        self.items.push(text);
        true
    }

    pub(crate) fn len(&self) -> usize {
        self.items.len()
    }

    pub(crate) fn iter(&self) -> impl Iterator<Item = &str> {
        self.items.iter().map(String::as_str)
    }

    /// Keep the first `max` candidates. Returns how many were dropped.
    pub(crate) fn truncate(&mut self, max: usize) -> usize {
        if self.items.len() <= max {
            return 0;
        }
        let dropped = self.items.split_off(max);
        for text in &dropped {
            self.seen.remove(text);
        }
        dropped.len()
    }

    pub(crate) fn into_vec(self) -> Vec<String> {
        self.items
    }
}
