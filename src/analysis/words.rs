use log::debug;

use crate::models::{FrequencyTable, Message};

/// Characters deleted from message text before tokenizing
pub const STRIPPED_PUNCTUATION: &[char] =
    &[',', '.', '?', '!', '/', '(', ')', '+', '"', '*', '@', ':'];

/// Strip punctuation, lower-case and split on whitespace.
pub fn tokenize(text: &str) -> Vec<String> {
    let stripped: String = text.chars().filter(|c| !STRIPPED_PUNCTUATION.contains(c)).collect();
    stripped.to_lowercase().split_whitespace().map(str::to_owned).collect()
}

/// Count tokens across all message bodies.
///
/// A token already in the table is always incremented; a new token is only
/// inserted when it is at least `min_length` characters long. Messages without
/// text content are skipped.
pub fn count_words(messages: &[Message], min_length: usize) -> FrequencyTable {
    let mut table = FrequencyTable::new();
    let mut bodies = 0usize;

    for content in messages.iter().filter_map(|m| m.content.as_deref()) {
        bodies += 1;
        for token in tokenize(content) {
            if !table.increment(&token) && token.chars().count() >= min_length {
                table.insert(token);
            }
        }
    }

    debug!("Counted {} distinct token(s) across {} message body(ies)", table.len(), bodies);
    table
}
