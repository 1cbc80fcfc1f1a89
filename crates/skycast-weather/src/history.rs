//! In-memory search history and favorite locations.
//!
//! Both keep insertion order and never hold the same query twice.

/// Queries that produced a successful lookup, oldest first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchHistory {
    entries: Vec<String>,
}

impl SearchHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `query` unless already present. Returns true if it was added.
    pub fn record(&mut self, query: &str) -> bool {
        if self.contains(query) {
            return false;
        }
        self.entries.push(query.to_string());
        true
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn contains(&self, query: &str) -> bool {
        self.entries.iter().any(|e| e == query)
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.entries.get(index).map(String::as_str)
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// User-curated locations, in the order they were saved.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FavoriteSet {
    entries: Vec<String>,
}

impl FavoriteSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns false if `query` was already a favorite
    pub fn insert(&mut self, query: &str) -> bool {
        if self.contains(query) {
            return false;
        }
        self.entries.push(query.to_string());
        true
    }

    /// Returns false if `query` wasn't a favorite
    pub fn remove(&mut self, query: &str) -> bool {
        let before = self.entries.len();
        self.entries.retain(|e| e != query);
        self.entries.len() != before
    }

    pub fn contains(&self, query: &str) -> bool {
        self.entries.iter().any(|e| e == query)
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.entries.get(index).map(String::as_str)
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
