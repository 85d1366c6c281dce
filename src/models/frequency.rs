use std::collections::HashMap;

/// Token counts that remember the order in which tokens were first inserted.
///
/// Insertion order is the tie-breaker when ranking, so it has to survive
/// alongside the hash lookup.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyTable {
    entries: Vec<(String, usize)>,
    index: HashMap<String, usize>,
}

impl FrequencyTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Increment `token` if it is already present. Returns `false` when absent.
    pub fn increment(&mut self, token: &str) -> bool {
        match self.index.get(token) {
            Some(&slot) => {
                self.entries[slot].1 += 1;
                true
            }
            None => false,
        }
    }

    /// Insert a new token with a count of one. Existing tokens are incremented instead.
    pub fn insert(&mut self, token: String) {
        if self.increment(&token) {
            return;
        }
        self.index.insert(token.clone(), self.entries.len());
        self.entries.push((token, 1));
    }

    pub fn get(&self, token: &str) -> Option<usize> {
        self.index.get(token).map(|&slot| self.entries[slot].1)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in first-insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> + '_ {
        self.entries.iter().map(|(token, count)| (token.as_str(), *count))
    }

    /// All entries by descending count; equal counts keep first-insertion order.
    pub fn ranked(&self) -> Vec<(String, usize)> {
        let mut ranked = self.entries.clone();
        // sort_by is stable
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked
    }

    pub fn top(&self, n: usize) -> Vec<(String, usize)> {
        let mut ranked = self.ranked();
        ranked.truncate(n);
        ranked
    }
}
