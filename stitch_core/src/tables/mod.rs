//! # Reference Tables
//!
//! Static lookup data for the calculators. Every table is a `static` slice
//! built at compile time and never mutated.
//!
//! ## Tables
//!
//! - **Yarn weights**: CYC weight classes with yardage factors
//! - **Hook sizes**: metric to US/UK conversion, sorted by metric size
//! - **Thread sizes**: cotton thread numbers with steel hook pairings
//! - **Glossary**: US/UK stitch abbreviations with skill tiers
//!
//! Lookups return `Option`; a `None` for an identifier that the code itself
//! supplies is a data defect and is covered by the table tests.

pub mod glossary;
pub mod hook_sizes;
pub mod thread_sizes;
pub mod yarn_weights;

pub use glossary::{find_term, search_glossary, Difficulty, GlossaryTerm, GLOSSARY};
pub use hook_sizes::{
    find_hook_by_metric, find_hook_by_uk_label, find_hook_by_us_label, hooks_for_weight,
    nearest_hook, HookSize, HOOK_SIZES,
};
pub use thread_sizes::{find_thread, ThreadSize, THREAD_SIZES};
pub use yarn_weights::{find_weight, find_weight_by_cyc, YarnWeight, YARN_WEIGHTS};

use crate::search::Searchable;

/// Normalize an identifier for lookup: trimmed, lowercase, with spaces and
/// hyphens folded to underscores.
pub(crate) fn normalize_key(identifier: &str) -> String {
    identifier
        .trim()
        .to_lowercase()
        .replace([' ', '-'], "_")
}

impl Searchable for YarnWeight {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.id, self.display_name, self.recommended_hook]
    }
}

impl Searchable for HookSize {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.us_label, self.uk_label, self.recommended_weight]
    }
}

impl Searchable for ThreadSize {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.steel_hook_label, self.typical_use]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::filter_rows;

    #[test]
    fn test_normalize_key() {
        assert_eq!(normalize_key(" Super-Bulky "), "super_bulky");
        assert_eq!(normalize_key("super bulky"), "super_bulky");
    }

    #[test]
    fn test_filter_hooks() {
        let hits: Vec<_> = filter_rows(HOOK_SIZES, "worsted").iter().map(|h| h.metric_mm).collect();
        assert_eq!(hits, vec![5.0, 5.5, 6.0]);
    }

    #[test]
    fn test_filter_threads() {
        let hits: Vec<_> = filter_rows(THREAD_SIZES, "doilies").iter().map(|t| t.size).collect();
        assert_eq!(hits, vec![10, 20]);
    }
}
