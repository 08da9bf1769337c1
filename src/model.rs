// Core structs: CatalogEntry, QueryKey, ResultEntry
use thiserror::Error;

/// One row of the reference catalog. Immutable once loaded.
#[derive(Debug, Clone)]
pub struct CatalogEntry {
    pub model: String,
    pub mlp: String,
    pub description: String,
}

/// A query token as the user typed it, paired with its normalized form.
/// The surface form of the first occurrence is kept for display.
#[derive(Debug, Clone)]
pub struct QueryKey {
    pub raw: String,
    pub key: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchStatus {
    Ok,
    NotFound,
}

impl MatchStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            MatchStatus::Ok => "OK",
            MatchStatus::NotFound => "Not found",
        }
    }
}

/// One output row, in 1:1 correspondence with the query keys.
#[derive(Debug, Clone)]
pub struct ResultEntry {
    pub display_model: String,
    pub mlp: Option<String>,
    pub description: Option<String>,
    pub status: MatchStatus,
}

/// Uppercased, trimmed form of a model token; the join key for all
/// equality comparisons.
pub fn normalize_key(raw: &str) -> String {
    raw.trim().to_uppercase()
}

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("catalog schema error: {0}")]
    Schema(String),
    #[error("failed to read catalog: {0}")]
    Csv(#[from] csv::Error),
}

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("failed to write results: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to encode results: {0}")]
    Csv(#[from] csv::Error),
}
