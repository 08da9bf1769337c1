// Pasted-text query parsing
use crate::model::{QueryKey, normalize_key};
use std::collections::HashSet;

pub struct QueryParser;

impl QueryParser {
    pub fn new() -> Self {
        Self
    }

    /// Splits pasted text on newlines, commas, tabs and semicolons, trims
    /// every token, drops empties, and deduplicates case-insensitively.
    /// The first surface form of each key is kept, in input order; later
    /// duplicates are discarded entirely.
    pub fn parse(&self, raw: &str) -> Vec<QueryKey> {
        let mut seen = HashSet::new();
        let mut keys = Vec::new();

        for token in raw.split(|c: char| matches!(c, '\n' | ',' | '\t' | ';')) {
            let token = token.trim();
            if token.is_empty() {
                continue;
            }
            let key = normalize_key(token);
            if seen.insert(key.clone()) {
                keys.push(QueryKey {
                    raw: token.to_string(),
                    key,
                });
            }
        }

        keys
    }
}
