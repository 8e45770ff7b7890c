//! # Table Search
//!
//! Free-text filtering over the reference tables. A row matches when any of
//! its text fields contains the query as a case-insensitive substring.
//! Results keep table order; there is no relevance ranking.
//!
//! ## Example
//!
//! ```rust
//! use stitch_core::search::filter_rows;
//! use stitch_core::tables::YARN_WEIGHTS;
//!
//! let bulky: Vec<_> = filter_rows(YARN_WEIGHTS, "bulky").iter().map(|w| w.id).collect();
//! assert_eq!(bulky, vec!["bulky", "super_bulky"]);
//! ```

/// A table row that can be matched against a free-text query.
pub trait Searchable {
    /// Text fields the query is matched against
    fn search_fields(&self) -> Vec<&str>;

    /// True if any field contains `needle`, which must already be lowercase.
    fn matches_lowercase(&self, needle: &str) -> bool {
        self.search_fields()
            .iter()
            .any(|field| field.to_lowercase().contains(needle))
    }
}

/// Normalize a user query. Returns `None` for an empty or blank query.
pub fn normalize_query(query: &str) -> Option<String> {
    let trimmed = query.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_lowercase())
    }
}

/// Rows whose fields contain `query`, in table order.
///
/// An empty query returns every row; no match returns an empty vector.
pub fn filter_rows<'a, T: Searchable>(rows: &'a [T], query: &str) -> Vec<&'a T> {
    match normalize_query(query) {
        None => rows.iter().collect(),
        Some(needle) => rows.iter().filter(|row| row.matches_lowercase(&needle)).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Row(&'static str, &'static str);

    impl Searchable for Row {
        fn search_fields(&self) -> Vec<&str> {
            vec![self.0, self.1]
        }
    }

    const ROWS: [Row; 3] = [
        Row("Alpha", "first letter"),
        Row("Beta", "second LETTER"),
        Row("Gamma", "third"),
    ];

    #[test]
    fn test_empty_query_returns_all() {
        assert_eq!(filter_rows(&ROWS, "").len(), 3);
        assert_eq!(filter_rows(&ROWS, "   ").len(), 3);
    }

    #[test]
    fn test_case_insensitive_any_field() {
        let hits: Vec<_> = filter_rows(&ROWS, "Letter").iter().map(|r| r.0).collect();
        assert_eq!(hits, vec!["Alpha", "Beta"]);
    }

    #[test]
    fn test_no_match_is_empty() {
        assert!(filter_rows(&ROWS, "omega").is_empty());
    }

    #[test]
    fn test_query_is_trimmed() {
        assert_eq!(normalize_query("  GaMma "), Some("gamma".to_string()));
        assert_eq!(filter_rows(&ROWS, " gamma ").len(), 1);
    }
}
