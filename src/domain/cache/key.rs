//! Cache key construction
//!
//! Keys are derived from a query's identity fields only. The pagination
//! cursor is never part of a key, so a cached entry always reflects the
//! first page of a query. The two query modes use disjoint namespaces.

/// Namespace for country/category headline queries
const HEADLINES_NAMESPACE: &str = "headlines";

/// Namespace for free-text search queries
const SEARCH_NAMESPACE: &str = "search";

/// Key segment delimiter
const DELIMITER: char = ':';

/// Escapes a key component so values containing the delimiter cannot
/// collide with another query's key. `%` is escaped first so the encoding
/// round-trips unambiguously.
fn encode_component(value: &str) -> String {
    value.replace('%', "%25").replace(DELIMITER, "%3A")
}

/// Builds the cache key for a country/category headlines query.
pub fn headlines_key(country: &str, category: &str) -> String {
    format!(
        "{}{}{}{}{}",
        HEADLINES_NAMESPACE,
        DELIMITER,
        encode_component(country),
        DELIMITER,
        encode_component(category)
    )
}

/// Builds the cache key for a free-text search query.
pub fn search_key(term: &str) -> String {
    format!("{}{}{}", SEARCH_NAMESPACE, DELIMITER, encode_component(term))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_headlines_key_is_deterministic() {
        assert_eq!(headlines_key("in", "business"), "headlines:in:business");
        assert_eq!(headlines_key("in", "business"), headlines_key("in", "business"));
    }

    #[test]
    fn test_search_key_is_deterministic() {
        assert_eq!(search_key("election"), "search:election");
    }

    #[test]
    fn test_namespaces_are_disjoint() {
        // A search term equal to a country/category pair must not share a key
        assert_ne!(search_key("in:business"), headlines_key("in", "business"));
    }

    #[test]
    fn test_delimiter_in_component_does_not_collide() {
        assert_ne!(headlines_key("a:b", "c"), headlines_key("a", "b:c"));
    }

    #[test]
    fn test_escape_round_trips_percent() {
        // "a%3Ab" as a literal value differs from "a:b" escaped
        assert_ne!(search_key("a%3Ab"), search_key("a:b"));
    }
}
