//! Crochet Thread Sizes
//!
//! Cotton thread sizes with the steel hook usually paired with them.
//! Higher thread numbers are finer, so the hook shrinks as the size grows.

use serde::Serialize;

/// One row of the thread chart.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ThreadSize {
    /// Thread size number (e.g., 10)
    pub size: u8,
    /// Recommended steel hook in millimeters
    pub steel_hook_mm: f64,
    /// US steel hook label
    pub steel_hook_label: &'static str,
    /// Typical projects for this thread
    pub typical_use: &'static str,
}

/// Thread chart, sorted ascending by size (thickest thread first).
pub static THREAD_SIZES: &[ThreadSize] = &[
    ThreadSize { size: 3, steel_hook_mm: 2.1, steel_hook_label: "Steel 0", typical_use: "Bags, placemats, heavier lace" },
    ThreadSize { size: 5, steel_hook_mm: 1.9, steel_hook_label: "Steel 2", typical_use: "Edgings and light accessories" },
    ThreadSize { size: 10, steel_hook_mm: 1.5, steel_hook_label: "Steel 7", typical_use: "Doilies, tablecloths, general lace" },
    ThreadSize { size: 20, steel_hook_mm: 1.25, steel_hook_label: "Steel 9", typical_use: "Fine doilies and edgings" },
    ThreadSize { size: 30, steel_hook_mm: 1.0, steel_hook_label: "Steel 11", typical_use: "Fine lace and ornaments" },
    ThreadSize { size: 40, steel_hook_mm: 0.9, steel_hook_label: "Steel 12", typical_use: "Heirloom lace" },
    ThreadSize { size: 80, steel_hook_mm: 0.75, steel_hook_label: "Steel 13", typical_use: "Tatting and very fine lace" },
    ThreadSize { size: 100, steel_hook_mm: 0.6, steel_hook_label: "Steel 14", typical_use: "Miniatures and tatting" },
];

/// Look up a thread by its size number.
pub fn find_thread(size: u8) -> Option<&'static ThreadSize> {
    THREAD_SIZES.iter().find(|t| t.size == size)
}
