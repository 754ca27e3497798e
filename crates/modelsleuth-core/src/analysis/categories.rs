/// Per-category breakdown of a catalog.
///
/// Groups entries by category and totals their count and default cost, so
/// the report can show how a model folder splits across the build menu.
use crate::model::{Catalog, Category};

/// Count and summed default cost for a single category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryStats {
    pub category: Category,
    pub count: u64,
    pub total_cost: u64,
}

/// Compute per-category stats for the catalog.
///
/// Only categories with at least one entry are returned, sorted by count
/// descending; ties keep classifier priority (special first).
pub fn category_breakdown(catalog: &Catalog) -> Vec<CategoryStats> {
    let mut stats: Vec<CategoryStats> = Category::ALL
        .iter()
        .map(|&category| CategoryStats {
            category,
            count: 0,
            total_cost: 0,
        })
        .collect();

    for (_, entry) in catalog.iter() {
        // ALL is in declaration order, so the discriminant is the slot.
        let slot = &mut stats[entry.category as usize];
        slot.count += 1;
        slot.total_cost += u64::from(entry.cost);
    }

    stats.retain(|s| s.count > 0);
    stats.sort_by(|a, b| b.count.cmp(&a.count).then(b.category.cmp(&a.category)));
    stats
}
