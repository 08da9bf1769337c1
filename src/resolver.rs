// Key resolution against the catalog: exact join plus contains fallback
use crate::catalog::CatalogIndex;
use crate::model::{CatalogEntry, MatchStatus, QueryKey, ResultEntry};

#[derive(Debug, Clone, Copy, Default)]
pub struct ResolveOptions {
    /// Fall back to substring matching for keys without an exact hit.
    pub allow_contains: bool,
}

/// Trait defining the interface for a query resolver.
pub trait Resolver {
    fn resolve(
        &self,
        keys: &[QueryKey],
        index: &CatalogIndex,
        options: ResolveOptions,
    ) -> Vec<ResultEntry>;
    fn filter_not_found(&self, entries: Vec<ResultEntry>) -> Vec<ResultEntry>;
    fn summarize(&self, entries: &[ResultEntry]) -> (usize, usize);
}

pub struct ResolverImpl;

impl ResolverImpl {
    pub fn new() -> Self {
        Self
    }
}

fn is_resolved(entry: &CatalogEntry) -> bool {
    !entry.mlp.trim().is_empty()
}

impl Resolver for ResolverImpl {
    /// Resolves each key in order: exact lookup first, then (when enabled)
    /// a contains scan for every key still lacking a non-blank MLP. A row
    /// whose MLP is blank counts the same as no row at all, so the fallback
    /// may rebind it; a successful exact match is never reconsidered.
    fn resolve(
        &self,
        keys: &[QueryKey],
        index: &CatalogIndex,
        options: ResolveOptions,
    ) -> Vec<ResultEntry> {
        keys.iter()
            .map(|query| {
                let mut hit = index.lookup_exact(&query.key);

                let unresolved = !hit.is_some_and(is_resolved);
                if options.allow_contains && unresolved {
                    if let Some(fallback) = index.lookup_contains(&query.key) {
                        hit = Some(fallback);
                    }
                }

                match hit {
                    Some(entry) => ResultEntry {
                        display_model: entry.model.clone(),
                        mlp: Some(entry.mlp.clone()),
                        description: Some(entry.description.clone()),
                        status: if is_resolved(entry) {
                            MatchStatus::Ok
                        } else {
                            MatchStatus::NotFound
                        },
                    },
                    None => ResultEntry {
                        display_model: query.raw.clone(),
                        mlp: None,
                        description: None,
                        status: MatchStatus::NotFound,
                    },
                }
            })
            .collect()
    }

    /// Keeps only unmatched entries, preserving relative order.
    fn filter_not_found(&self, entries: Vec<ResultEntry>) -> Vec<ResultEntry> {
        entries
            .into_iter()
            .filter(|entry| entry.status == MatchStatus::NotFound)
            .collect()
    }

    /// Returns (matched, total) over a result set.
    fn summarize(&self, entries: &[ResultEntry]) -> (usize, usize) {
        let matched = entries
            .iter()
            .filter(|entry| entry.status == MatchStatus::Ok)
            .count();
        (matched, entries.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::QueryParser;
    use pretty_assertions::assert_eq;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn index_from(contents: &str) -> CatalogIndex {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file.flush().unwrap();
        CatalogIndex::load(file.path()).unwrap()
    }

    fn resolve(raw: &str, catalog: &str, allow_contains: bool) -> Vec<ResultEntry> {
        let keys = QueryParser::new().parse(raw);
        let index = index_from(catalog);
        ResolverImpl::new().resolve(&keys, &index, ResolveOptions { allow_contains })
    }

    #[test]
    fn exact_match_binds_catalog_row() {
        let results = resolve(
            "prd-1001\nPRD-1001",
            "Model,MLP,Description\nPRD-1001,M1,Widget\n",
            false,
        );
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].display_model, "PRD-1001");
        assert_eq!(results[0].mlp.as_deref(), Some("M1"));
        assert_eq!(results[0].description.as_deref(), Some("Widget"));
        assert_eq!(results[0].status, MatchStatus::Ok);
    }

    #[test]
    fn blank_mlp_counts_as_not_found() {
        let results = resolve(
            "PRD-1001",
            "Model,MLP,Description\nPRD-1001,,Widget\n",
            false,
        );
        assert_eq!(results[0].status, MatchStatus::NotFound);
        // The row itself was still found, so its text is displayed.
        assert_eq!(results[0].display_model, "PRD-1001");
    }

    #[test]
    fn contains_fallback_binds_first_matching_row() {
        let results = resolve(
            "PRD-1001",
            "Model,MLP,Description\nABC-PRD-1001-X,M9,Gadget\n",
            true,
        );
        assert_eq!(results[0].display_model, "ABC-PRD-1001-X");
        assert_eq!(results[0].mlp.as_deref(), Some("M9"));
        assert_eq!(results[0].status, MatchStatus::Ok);
    }

    #[test]
    fn contains_disabled_leaves_key_unresolved() {
        let results = resolve(
            "PRD-1001",
            "Model,MLP,Description\nABC-PRD-1001-X,M9,Gadget\n",
            false,
        );
        assert_eq!(results[0].display_model, "PRD-1001");
        assert_eq!(results[0].mlp, None);
        assert_eq!(results[0].status, MatchStatus::NotFound);
    }

    #[test]
    fn exact_match_takes_precedence_over_contains() {
        let results = resolve(
            "PRD-1001",
            "Model,MLP,Description\nABC-PRD-1001-X,M9,Gadget\nPRD-1001,M1,Widget\n",
            true,
        );
        assert_eq!(results[0].mlp.as_deref(), Some("M1"));
        assert_eq!(results[0].display_model, "PRD-1001");
    }

    #[test]
    fn contains_retries_exact_hit_with_blank_mlp() {
        let results = resolve(
            "PRD-1001",
            "Model,MLP,Description\nPRD-1001,,Widget\nABC-PRD-1001-X,M9,Gadget\n",
            true,
        );
        // The exact row has no MLP, so the fallback rebinds the key.
        // The scan itself still runs in row order, so the blank exact row
        // wins the contains scan here and the key stays unmatched.
        assert_eq!(results[0].display_model, "PRD-1001");
        assert_eq!(results[0].status, MatchStatus::NotFound);
    }

    #[test]
    fn blank_mlp_exact_hit_rebinds_to_earlier_contains_row() {
        let results = resolve(
            "PRD-1001",
            "Model,MLP,Description\nABC-PRD-1001-X,M9,Gadget\nPRD-1001,,Widget\n",
            true,
        );
        assert_eq!(results[0].display_model, "ABC-PRD-1001-X");
        assert_eq!(results[0].mlp.as_deref(), Some("M9"));
        assert_eq!(results[0].status, MatchStatus::Ok);
    }

    #[test]
    fn duplicate_catalog_keys_resolve_to_first_row() {
        let results = resolve(
            "PRD-1001",
            "Model,MLP,Description\nPRD-1001,M1,First\nPRD-1001,M2,Second\n",
            false,
        );
        assert_eq!(results[0].mlp.as_deref(), Some("M1"));
    }

    #[test]
    fn one_result_per_key_in_input_order() {
        let results = resolve(
            "x\nPRD-1002,PRD-1001;y",
            "Model,MLP,Description\nPRD-1001,M1,Widget\nPRD-1002,M2,Widget\n",
            false,
        );
        let display: Vec<_> = results.iter().map(|r| r.display_model.as_str()).collect();
        assert_eq!(display, vec!["x", "PRD-1002", "PRD-1001", "y"]);
        for entry in &results {
            assert!(matches!(
                entry.status,
                MatchStatus::Ok | MatchStatus::NotFound
            ));
        }
    }

    #[test]
    fn empty_input_resolves_to_empty_results() {
        let results = resolve("   ", "Model,MLP\nPRD-1001,M1\n", true);
        assert!(results.is_empty());
    }

    #[test]
    fn filter_and_summary() {
        let resolver = ResolverImpl::new();
        let results = resolve(
            "PRD-1001\nmissing",
            "Model,MLP,Description\nPRD-1001,M1,Widget\n",
            false,
        );
        assert_eq!(resolver.summarize(&results), (1, 2));

        let not_found = resolver.filter_not_found(results);
        assert_eq!(not_found.len(), 1);
        assert_eq!(not_found[0].display_model, "missing");
    }
}
