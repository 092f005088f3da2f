//! Tag utilities
//!
//! A word's `tags` column is a comma-separated label list. These helpers
//! treat it as a set: listing the distinct labels of a collection and
//! selecting the words that carry a given label.

use std::collections::HashSet;

use crate::types::Word;

/// Distinct labels across `words`, in first-seen order.
pub fn unique_tags(words: &[Word]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut tags = Vec::new();

    for tag in words.iter().flat_map(|word| word.tags.iter()) {
        if seen.insert(tag) {
            tags.push(tag.to_string());
        }
    }

    tags
}

/// Words whose label set contains `tag`. An empty `tag` selects everything.
pub fn filter_by_tag(words: &[Word], tag: &str) -> Vec<Word> {
    if tag.is_empty() {
        return words.to_vec();
    }

    words
        .iter()
        .filter(|word| word.tags.contains(tag))
        .cloned()
        .collect()
}
