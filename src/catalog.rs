// Catalog loading and lookup
use crate::model::{CatalogEntry, CatalogError, normalize_key};
use std::collections::HashMap;
use std::path::Path;

/// Normalized index over the reference catalog. Built once per catalog
/// file and read-only afterward; a reload is a fresh build swapped in
/// whole, never an in-place mutation.
#[derive(Debug)]
pub struct CatalogIndex {
    rows: Vec<CatalogEntry>,
    upper_models: Vec<String>,
    by_key: HashMap<String, usize>,
}

impl CatalogIndex {
    /// Reads a CSV catalog. A `Model` column is required (exact header
    /// spelling); `MLP` and `Description` are optional and blank-fill.
    /// Missing cells become empty strings, never null.
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let mut reader = csv::ReaderBuilder::new().flexible(true).from_path(path)?;
        let headers = reader.headers()?.clone();

        let model_col = headers
            .iter()
            .position(|h| h == "Model")
            .ok_or_else(|| CatalogError::Schema("missing required 'Model' column".into()))?;
        let mlp_col = headers.iter().position(|h| h == "MLP");
        let desc_col = headers.iter().position(|h| h == "Description");

        let mut rows = Vec::new();
        let mut upper_models = Vec::new();
        let mut by_key = HashMap::new();

        for record in reader.records() {
            let record = record?;
            let cell = |col: Option<usize>| {
                col.and_then(|c| record.get(c)).unwrap_or("").to_string()
            };

            let entry = CatalogEntry {
                model: cell(Some(model_col)),
                mlp: cell(mlp_col),
                description: cell(desc_col),
            };

            let key = normalize_key(&entry.model);
            let position = rows.len();
            upper_models.push(entry.model.to_uppercase());
            rows.push(entry);
            // Duplicate normalized keys: the first catalog row wins, later
            // rows are silently shadowed. Known behavior, kept as is.
            by_key.entry(key).or_insert(position);
        }

        Ok(Self {
            rows,
            upper_models,
            by_key,
        })
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Exact match on the normalized key.
    pub fn lookup_exact(&self, key: &str) -> Option<&CatalogEntry> {
        self.by_key.get(key).map(|&position| &self.rows[position])
    }

    /// First catalog row, in original row order, whose uppercased model
    /// contains `key` as a literal substring. Linear scan; the catalog is
    /// assumed small enough that no substring index is worth building.
    pub fn lookup_contains(&self, key: &str) -> Option<&CatalogEntry> {
        self.upper_models
            .iter()
            .position(|model| model.contains(key))
            .map(|position| &self.rows[position])
    }
}
