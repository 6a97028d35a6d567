//! Search-as-you-type filtering over the catalog.
use crate::catalog::{Catalog, CatalogItem};

/// Default cap on the number of results returned for one query.
pub const MAX_RESULTS: usize = 8;

/// Case-insensitive substring search capped at [`MAX_RESULTS`].
#[must_use]
pub fn search<'a>(catalog: &'a Catalog, query: &str) -> Vec<&'a CatalogItem> {
    search_with_limit(catalog, query, MAX_RESULTS)
}

/// Case-insensitive substring search returning at most `limit` items.
///
/// A blank query matches nothing. Results keep catalog order; the cut-off is
/// the first `limit` matches, not the best.
#[must_use]
pub fn search_with_limit<'a>(
    catalog: &'a Catalog,
    query: &str,
    limit: usize,
) -> Vec<&'a CatalogItem> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return Vec::new();
    }
    catalog
        .all_products()
        .iter()
        .filter(|item| item.name.to_lowercase().contains(&needle))
        .take(limit)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::RawCard;

    fn catalog(names: &[&str]) -> Catalog {
        Catalog::from_cards(
            names
                .iter()
                .map(|name| RawCard::new(Some(name), Some("1000"), None)),
        )
    }

    #[test]
    fn blank_query_returns_nothing() {
        let cat = catalog(&["Batik Parang", "Batik Kawung"]);
        assert!(search(&cat, "").is_empty());
        assert!(search(&cat, "   ").is_empty());
    }

    #[test]
    fn match_is_case_insensitive_and_trimmed() {
        let cat = catalog(&["Batik Parang", "Kain Tenun", "BATIK Kawung"]);
        let hits: Vec<&str> = search(&cat, "  baTik ")
            .iter()
            .map(|item| item.name.as_str())
            .collect();
        assert_eq!(hits, ["Batik Parang", "BATIK Kawung"]);
        assert!(search(&cat, "xyz-no-match").is_empty());
    }

    #[test]
    fn results_are_first_n_in_catalog_order() {
        let names: Vec<String> = (0..12).map(|i| format!("Tenun {i}")).collect();
        let refs: Vec<&str> = names.iter().map(String::as_str).collect();
        let cat = catalog(&refs);
        let hits = search(&cat, "tenun");
        assert_eq!(hits.len(), MAX_RESULTS);
        assert_eq!(hits[0].name, "Tenun 0");
        assert_eq!(hits[7].name, "Tenun 7");
        assert_eq!(search_with_limit(&cat, "tenun", 3).len(), 3);
    }
}
