//! Crochet Hook Sizes
//!
//! Metric to US/UK hook size conversion chart.
//!
//! ## Regional Labels
//!
//! - US labels combine a letter and a number (e.g., "H/8"); a few sizes
//!   only carry a number ("7")
//! - UK labels are the old imperial gauge numbers, which run in the
//!   opposite direction: larger numbers are smaller hooks

use serde::Serialize;

use super::yarn_weights::{find_weight, YarnWeight};

/// Metric values closer than this are treated as the same size.
const METRIC_TOLERANCE_MM: f64 = 1e-6;

/// One row of the hook conversion chart.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HookSize {
    /// Shaft diameter in millimeters
    pub metric_mm: f64,
    /// US label (e.g., "H/8")
    pub us_label: &'static str,
    /// UK label (e.g., "6")
    pub uk_label: &'static str,
    /// Identifier of the yarn weight this hook is usually paired with
    pub recommended_weight: &'static str,
}

impl HookSize {
    /// The recommended yarn weight, resolved against the weight table.
    pub fn recommended_weight(&self) -> Option<&'static YarnWeight> {
        find_weight(self.recommended_weight)
    }

    /// True if `label` is the full US label or one of its letter/number parts.
    fn matches_us_label(&self, label: &str) -> bool {
        let label = label.trim();
        self.us_label.eq_ignore_ascii_case(label)
            || self
                .us_label
                .split('/')
                .any(|part| part.eq_ignore_ascii_case(label))
    }
}

/// Hook chart, sorted ascending by metric size.
pub static HOOK_SIZES: &[HookSize] = &[
    HookSize { metric_mm: 2.25, us_label: "B/1", uk_label: "13", recommended_weight: "fingering" },
    HookSize { metric_mm: 2.75, us_label: "C/2", uk_label: "12", recommended_weight: "fingering" },
    HookSize { metric_mm: 3.25, us_label: "D/3", uk_label: "10", recommended_weight: "sport" },
    HookSize { metric_mm: 3.5, us_label: "E/4", uk_label: "9", recommended_weight: "sport" },
    HookSize { metric_mm: 3.75, us_label: "F/5", uk_label: "9", recommended_weight: "dk" },
    HookSize { metric_mm: 4.0, us_label: "G/6", uk_label: "8", recommended_weight: "dk" },
    HookSize { metric_mm: 4.5, us_label: "7", uk_label: "7", recommended_weight: "dk" },
    HookSize { metric_mm: 5.0, us_label: "H/8", uk_label: "6", recommended_weight: "worsted" },
    HookSize { metric_mm: 5.5, us_label: "I/9", uk_label: "5", recommended_weight: "worsted" },
    HookSize { metric_mm: 6.0, us_label: "J/10", uk_label: "4", recommended_weight: "worsted" },
    HookSize { metric_mm: 6.5, us_label: "K/10.5", uk_label: "3", recommended_weight: "bulky" },
    HookSize { metric_mm: 8.0, us_label: "L/11", uk_label: "0", recommended_weight: "bulky" },
    HookSize { metric_mm: 9.0, us_label: "M/N-13", uk_label: "00", recommended_weight: "super_bulky" },
    HookSize { metric_mm: 10.0, us_label: "N/P-15", uk_label: "000", recommended_weight: "super_bulky" },
];

/// Find the chart row for an exact metric size.
///
/// # Example
///
/// ```rust
/// use stitch_core::tables::find_hook_by_metric;
///
/// let hook = find_hook_by_metric(5.0).unwrap();
/// assert_eq!(hook.us_label, "H/8");
/// assert_eq!(hook.recommended_weight().unwrap().display_name, "Worsted");
/// ```
pub fn find_hook_by_metric(metric_mm: f64) -> Option<&'static HookSize> {
    HOOK_SIZES
        .iter()
        .find(|h| (h.metric_mm - metric_mm).abs() < METRIC_TOLERANCE_MM)
}

/// Find a hook by US label, letter, or number ("H/8", "h", "8").
pub fn find_hook_by_us_label(label: &str) -> Option<&'static HookSize> {
    HOOK_SIZES.iter().find(|h| h.matches_us_label(label))
}

/// Find the first (smallest) hook carrying a UK label.
pub fn find_hook_by_uk_label(label: &str) -> Option<&'static HookSize> {
    let label = label.trim();
    HOOK_SIZES.iter().find(|h| h.uk_label == label)
}

/// The chart row closest to an arbitrary metric size. Ties go to the smaller hook.
pub fn nearest_hook(metric_mm: f64) -> Option<&'static HookSize> {
    if !metric_mm.is_finite() {
        return None;
    }
    HOOK_SIZES.iter().fold(None, |best: Option<&'static HookSize>, hook| match best {
        Some(b) if (b.metric_mm - metric_mm).abs() <= (hook.metric_mm - metric_mm).abs() => Some(b),
        _ => Some(hook),
    })
}

/// Hooks usually paired with a yarn weight, smallest first.
pub fn hooks_for_weight(weight_id: &str) -> Vec<&'static HookSize> {
    match find_weight(weight_id) {
        Some(weight) => HOOK_SIZES
            .iter()
            .filter(|h| h.recommended_weight == weight.id)
            .collect(),
        None => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sorted_ascending_and_unique() {
        for pair in HOOK_SIZES.windows(2) {
            assert!(
                pair[0].metric_mm < pair[1].metric_mm,
                "{} mm is not below {} mm",
                pair[0].metric_mm,
                pair[1].metric_mm
            );
        }
    }

    #[test]
    fn test_recommended_weights_resolve() {
        for hook in HOOK_SIZES {
            assert!(
                hook.recommended_weight().is_some(),
                "{} references unknown weight '{}'",
                hook.us_label,
                hook.recommended_weight
            );
        }
    }

    #[test]
    fn test_metric_lookup_h8() {
        let hook = find_hook_by_metric(5.0).unwrap();
        assert_eq!(hook.us_label, "H/8");
        assert_eq!(hook.uk_label, "6");
        assert_eq!(hook.recommended_weight().unwrap().display_name, "Worsted");
    }

    #[test]
    fn test_metric_lookup_missing() {
        assert!(find_hook_by_metric(5.25).is_none());
        assert!(find_hook_by_metric(f64::NAN).is_none());
    }

    #[test]
    fn test_us_label_lookup() {
        assert_eq!(find_hook_by_us_label("h/8").unwrap().metric_mm, 5.0);
        assert_eq!(find_hook_by_us_label("K").unwrap().metric_mm, 6.5);
        assert_eq!(find_hook_by_us_label("10.5").unwrap().metric_mm, 6.5);
        assert_eq!(find_hook_by_us_label("7").unwrap().metric_mm, 4.5);
        assert!(find_hook_by_us_label("Z").is_none());
    }

    #[test]
    fn test_uk_label_lookup() {
        assert_eq!(find_hook_by_uk_label("6").unwrap().us_label, "H/8");
        // Two rows share UK 9; the smaller one wins
        assert_eq!(find_hook_by_uk_label("9").unwrap().metric_mm, 3.5);
    }

    #[test]
    fn test_nearest_hook() {
        assert_eq!(nearest_hook(5.1).unwrap().us_label, "H/8");
        assert_eq!(nearest_hook(7.0).unwrap().us_label, "K/10.5");
        assert_eq!(nearest_hook(100.0).unwrap().metric_mm, 10.0);
        assert!(nearest_hook(f64::INFINITY).is_none());
    }

    #[test]
    fn test_hooks_for_weight() {
        let worsted: Vec<_> = hooks_for_weight("Worsted").iter().map(|h| h.us_label).collect();
        assert_eq!(worsted, vec!["H/8", "I/9", "J/10"]);
        assert!(hooks_for_weight("jumbo").is_empty());
        assert!(hooks_for_weight("mohair").is_empty());
    }
}
