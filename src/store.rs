//! Per-user log of submitted searches
//!
//! Append-only and held in process memory; everything is lost on restart.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

/// Key-value append log of raw query submissions, keyed by user
pub trait SearchStore: Send + Sync {
    /// All submissions for `user`, oldest first
    fn get(&self, user: &str) -> Vec<String>;

    /// Record one raw submission for `user`
    fn append(&self, user: &str, query_text: String);
}

/// In-memory `SearchStore` shared across request handlers
#[derive(Debug, Default)]
pub struct InMemorySearchStore {
    searches: Mutex<HashMap<String, Vec<String>>>,
}

impl InMemorySearchStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<String, Vec<String>>> {
        // Appends are single pushes; a poisoned map is still consistent.
        self.searches
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl SearchStore for InMemorySearchStore {
    fn get(&self, user: &str) -> Vec<String> {
        self.lock().get(user).cloned().unwrap_or_default()
    }

    fn append(&self, user: &str, query_text: String) {
        let mut searches = self.lock();
        let entries = searches.entry(user.to_string()).or_default();
        entries.push(query_text);
        log::debug!("Saved search #{} for user {}", entries.len(), user);
    }
}
