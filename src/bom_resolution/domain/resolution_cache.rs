use super::{Barcode, ProductRecord, ViewNode};
use std::collections::HashMap;

/// The expanded children of one barcode, as first built.
#[derive(Debug, Clone)]
pub struct CachedSubtree {
    /// Level of the node that owned these children when they were built
    pub level: usize,
    pub children: Vec<ViewNode>,
    /// Height of the owning node's subtree (1 when `children` is empty)
    pub height: usize,
}

impl CachedSubtree {
    /// Copies the children for an occurrence of the owning barcode at `level`.
    pub fn children_at(&self, level: usize) -> Vec<ViewNode> {
        let mut children = self.children.clone();
        for child in &mut children {
            child.restamp(level + 1);
        }
        children
    }
}

/// Request-scoped memoization for one root resolution.
///
/// Holds every product record fetched so far and every subtree already
/// expanded. A fresh cache is created per root and dropped with it.
#[derive(Debug, Default)]
pub struct ResolutionCache {
    products: HashMap<Barcode, ProductRecord>,
    views: HashMap<Barcode, CachedSubtree>,
}

impl ResolutionCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn product(&self, barcode: &Barcode) -> Option<&ProductRecord> {
        self.products.get(barcode)
    }

    /// Stores `record` under the barcode it was looked up by, which the
    /// store may spell differently from `record.barcode`.
    pub fn insert_product(&mut self, barcode: Barcode, record: ProductRecord) {
        self.products.insert(barcode, record);
    }

    pub fn subtree(&self, barcode: &Barcode) -> Option<&CachedSubtree> {
        self.views.get(barcode)
    }

    /// Records the expanded children of `barcode`. The first entry wins.
    pub fn insert_subtree(&mut self, barcode: Barcode, level: usize, children: &[ViewNode]) {
        self.views.entry(barcode).or_insert_with(|| CachedSubtree {
            level,
            children: children.to_vec(),
            height: 1 + children.iter().map(ViewNode::height).max().unwrap_or(0),
        });
    }

    pub fn product_count(&self) -> usize {
        self.products.len()
    }

    pub fn subtree_count(&self) -> usize {
        self.views.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bom_resolution::domain::LocalizedName;

    fn barcode(value: &str) -> Barcode {
        Barcode::new(value.to_string()).unwrap()
    }

    fn leaf(value: &str, level: usize) -> ViewNode {
        ViewNode {
            level,
            guid_fixed: String::new(),
            barcode: barcode(value),
            names: vec![LocalizedName::new("en", value)],
            item_unit_code: String::new(),
            item_unit_names: vec![],
            image_uri: String::new(),
            qty: Some(1.0),
            condition: false,
            divide_value: 1.0,
            stand_value: 1.0,
            components: vec![],
        }
    }

    #[test]
    fn test_product_cache_round_trip() {
        let mut cache = ResolutionCache::new();
        assert!(cache.product(&barcode("01")).is_none());

        cache.insert_product(
            barcode("01"),
            ProductRecord::new(barcode("01")).with_name("en", "Burger"),
        );

        assert_eq!(
            cache.product(&barcode("01")).unwrap().display_name(None),
            Some("Burger")
        );
        assert_eq!(cache.product_count(), 1);
    }

    #[test]
    fn test_subtree_height() {
        let mut cache = ResolutionCache::new();
        let mut mid = leaf("03", 3);
        mid.components.push(leaf("04", 4));

        cache.insert_subtree(barcode("02"), 2, &[mid]);
        cache.insert_subtree(barcode("04"), 4, &[]);

        assert_eq!(cache.subtree(&barcode("02")).unwrap().height, 3);
        assert_eq!(cache.subtree(&barcode("04")).unwrap().height, 1);
        assert_eq!(cache.subtree_count(), 2);
    }

    #[test]
    fn test_first_subtree_wins() {
        let mut cache = ResolutionCache::new();
        cache.insert_subtree(barcode("02"), 2, &[leaf("03", 3)]);
        cache.insert_subtree(barcode("02"), 5, &[]);

        let cached = cache.subtree(&barcode("02")).unwrap();
        assert_eq!(cached.level, 2);
        assert_eq!(cached.children.len(), 1);
    }

    #[test]
    fn test_children_at_relevels_copy() {
        let mut cache = ResolutionCache::new();
        let mut mid = leaf("03", 3);
        mid.components.push(leaf("04", 4));
        cache.insert_subtree(barcode("02"), 2, &[mid]);

        let cached = cache.subtree(&barcode("02")).unwrap();
        let copy = cached.children_at(5);

        assert_eq!(copy[0].level, 6);
        assert_eq!(copy[0].components[0].level, 7);
        // the cached original keeps its levels
        assert_eq!(cached.children[0].level, 3);
    }

    #[test]
    fn test_product_cache_keyed_by_requested_barcode() {
        let mut cache = ResolutionCache::new();
        cache.insert_product(barcode("p-1"), ProductRecord::new(barcode("P-1")));

        assert_eq!(cache.product(&barcode("p-1")).unwrap().barcode.as_str(), "P-1");
        assert!(cache.product(&barcode("P-1")).is_none());
    }
}
