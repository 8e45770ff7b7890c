//! Standard Yarn Weights
//!
//! Craft Yarn Council weight classes with the yardage factor used by the
//! estimator. The factor is yards of yarn consumed per square inch of
//! finished fabric at a typical crochet tension.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use serde::Serialize;

use super::normalize_key;

/// One yarn weight class.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct YarnWeight {
    /// Stable identifier (e.g., "worsted", "super_bulky")
    pub id: &'static str,
    /// Display name (e.g., "Super Bulky")
    pub display_name: &'static str,
    /// CYC standard weight number, 0 (lace) through 7 (jumbo)
    pub cyc_number: u8,
    /// Yards consumed per square inch of fabric
    pub yards_per_sq_in: f64,
    /// Recommended hook range for this weight
    pub recommended_hook: &'static str,
}

/// All yarn weights, thinnest first.
pub static YARN_WEIGHTS: &[YarnWeight] = &[
    YarnWeight {
        id: "lace",
        display_name: "Lace",
        cyc_number: 0,
        yards_per_sq_in: 3.0,
        recommended_hook: "1.5-2.25 mm (steel 6 to B/1)",
    },
    YarnWeight {
        id: "fingering",
        display_name: "Fingering",
        cyc_number: 1,
        yards_per_sq_in: 2.4,
        recommended_hook: "2.25-3.5 mm (B/1 to E/4)",
    },
    YarnWeight {
        id: "sport",
        display_name: "Sport",
        cyc_number: 2,
        yards_per_sq_in: 2.0,
        recommended_hook: "3.5-4.5 mm (E/4 to 7)",
    },
    YarnWeight {
        id: "dk",
        display_name: "DK",
        cyc_number: 3,
        yards_per_sq_in: 1.75,
        recommended_hook: "4.5-5.5 mm (7 to I/9)",
    },
    YarnWeight {
        id: "worsted",
        display_name: "Worsted",
        cyc_number: 4,
        yards_per_sq_in: 1.5,
        recommended_hook: "5.0-6.5 mm (H/8 to K/10.5)",
    },
    YarnWeight {
        id: "bulky",
        display_name: "Bulky",
        cyc_number: 5,
        yards_per_sq_in: 1.1,
        recommended_hook: "6.5-9 mm (K/10.5 to M/N-13)",
    },
    YarnWeight {
        id: "super_bulky",
        display_name: "Super Bulky",
        cyc_number: 6,
        yards_per_sq_in: 0.8,
        recommended_hook: "9-15 mm (M/N-13 to Q)",
    },
    YarnWeight {
        id: "jumbo",
        display_name: "Jumbo",
        cyc_number: 7,
        yards_per_sq_in: 0.5,
        recommended_hook: "15 mm and larger (Q and up)",
    },
];

/// Lookup index keyed by normalized id and normalized display name.
static WEIGHT_INDEX: Lazy<HashMap<String, &'static YarnWeight>> = Lazy::new(|| {
    let mut index = HashMap::new();
    for weight in YARN_WEIGHTS {
        index.insert(normalize_key(weight.id), weight);
        index.insert(normalize_key(weight.display_name), weight);
    }
    index
});

/// Look up a yarn weight by identifier or display name.
///
/// Matching ignores case and treats spaces, hyphens and underscores alike.
/// Returns `None` when the identifier is not in the table.
///
/// # Example
///
/// ```rust
/// use stitch_core::tables::find_weight;
///
/// assert_eq!(find_weight("Super-Bulky").unwrap().id, "super_bulky");
/// assert!(find_weight("mohair").is_none());
/// ```
pub fn find_weight(identifier: &str) -> Option<&'static YarnWeight> {
    WEIGHT_INDEX.get(&normalize_key(identifier)).copied()
}

/// Look up a yarn weight by its CYC number.
pub fn find_weight_by_cyc(cyc_number: u8) -> Option<&'static YarnWeight> {
    YARN_WEIGHTS.iter().find(|w| w.cyc_number == cyc_number)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_factors_positive() {
        for weight in YARN_WEIGHTS {
            assert!(weight.yards_per_sq_in > 0.0, "{} has a non-positive factor", weight.id);
        }
    }

    #[test]
    fn test_ids_unique() {
        let ids: HashSet<_> = YARN_WEIGHTS.iter().map(|w| w.id).collect();
        assert_eq!(ids.len(), YARN_WEIGHTS.len());
    }

    #[test]
    fn test_thinner_yarn_uses_more_yardage() {
        for pair in YARN_WEIGHTS.windows(2) {
            assert!(pair[0].yards_per_sq_in > pair[1].yards_per_sq_in);
            assert!(pair[0].cyc_number < pair[1].cyc_number);
        }
    }

    #[test]
    fn test_worsted_factor() {
        let worsted = find_weight("worsted").unwrap();
        assert_eq!(worsted.yards_per_sq_in, 1.5);
        assert_eq!(worsted.display_name, "Worsted");
    }

    #[test]
    fn test_lookup_by_display_name() {
        assert_eq!(find_weight("Super Bulky").unwrap().id, "super_bulky");
        assert_eq!(find_weight("DK").unwrap().id, "dk");
        assert_eq!(find_weight("  WORSTED ").unwrap().id, "worsted");
    }

    #[test]
    fn test_lookup_missing() {
        assert!(find_weight("").is_none());
        assert!(find_weight("aran weight").is_none());
    }

    #[test]
    fn test_lookup_by_cyc() {
        assert_eq!(find_weight_by_cyc(4).unwrap().id, "worsted");
        assert!(find_weight_by_cyc(8).is_none());
    }
}
