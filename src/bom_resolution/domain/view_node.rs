use super::product_record::null_as_empty;
use super::{Barcode, LocalizedName};
use crate::shared::Result;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::collections::BTreeSet;

/// One node of a resolved composition tree.
///
/// Identity, names, unit and image come from the component's own product
/// record; `qty`, `condition` and the conversion pair come from the edge
/// that produced the node. The root has no incoming edge, so its `qty` is
/// `None` and its conversion is the identity.
///
/// Nodes are plain values. A subtree taken from the resolution cache is
/// cloned and re-levelled, so editing one occurrence never shows up at
/// another.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewNode {
    pub level: usize,
    #[serde(rename = "guidfixed")]
    pub guid_fixed: String,
    pub barcode: Barcode,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub names: Vec<LocalizedName>,
    #[serde(rename = "itemunitcode")]
    pub item_unit_code: String,
    #[serde(rename = "itemunitnames", default, deserialize_with = "null_as_empty")]
    pub item_unit_names: Vec<LocalizedName>,
    #[serde(rename = "imageuri")]
    pub image_uri: String,
    pub qty: Option<f64>,
    pub condition: bool,
    #[serde(rename = "dividevalue")]
    pub divide_value: f64,
    #[serde(rename = "standvalue")]
    pub stand_value: f64,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub components: Vec<ViewNode>,
}

impl ViewNode {
    /// Rewrites the level of this node to `level` and of every descendant
    /// to its parent's level plus one.
    pub fn restamp(&mut self, level: usize) {
        self.level = level;
        for child in &mut self.components {
            child.restamp(level + 1);
        }
    }

    /// Number of levels in this subtree (1 for a leaf).
    pub fn height(&self) -> usize {
        1 + self
            .components
            .iter()
            .map(ViewNode::height)
            .max()
            .unwrap_or(0)
    }

    /// Deepest level present in this subtree.
    pub fn max_level(&self) -> usize {
        self.level + self.height() - 1
    }

    /// Total number of nodes in this subtree, including this one.
    pub fn node_count(&self) -> usize {
        1 + self
            .components
            .iter()
            .map(ViewNode::node_count)
            .sum::<usize>()
    }

    pub fn is_leaf(&self) -> bool {
        self.components.is_empty()
    }

    /// Distinct barcodes used anywhere below this node, sorted.
    pub fn component_barcodes(&self) -> Vec<Barcode> {
        let mut barcodes = BTreeSet::new();
        for child in &self.components {
            child.collect_barcodes(&mut barcodes);
        }
        barcodes.into_iter().collect()
    }

    fn collect_barcodes(&self, barcodes: &mut BTreeSet<Barcode>) {
        barcodes.insert(self.barcode.clone());
        for child in &self.components {
            child.collect_barcodes(barcodes);
        }
    }

    /// Depth-first, pre-order walk over this subtree.
    pub fn walk<'a>(&'a self, visit: &mut impl FnMut(&'a ViewNode)) {
        visit(self);
        for child in &self.components {
            child.walk(visit);
        }
    }

    /// SHA-256 (hex) over the JSON serialization of this subtree.
    ///
    /// Consumers that persist a resolved view store this value and compare
    /// it against a fresh resolution to decide whether the view changed.
    pub fn checksum(&self) -> Result<String> {
        let bytes = serde_json::to_vec(self)?;
        Ok(hex::encode(Sha256::digest(&bytes)))
    }

    /// Recomputes the checksum and compares it with `expected`.
    pub fn matches_checksum(&self, expected: &str) -> Result<bool> {
        Ok(self.checksum()?.eq_ignore_ascii_case(expected))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn node(barcode: &str, level: usize, components: Vec<ViewNode>) -> ViewNode {
        ViewNode {
            level,
            guid_fixed: format!("guid-{}", barcode),
            barcode: Barcode::new(barcode.to_string()).unwrap(),
            names: vec![LocalizedName::new("en", barcode)],
            item_unit_code: "PCS".to_string(),
            item_unit_names: vec![],
            image_uri: String::new(),
            qty: Some(1.0),
            condition: false,
            divide_value: 1.0,
            stand_value: 1.0,
            components,
        }
    }

    fn sample_tree() -> ViewNode {
        node(
            "01",
            1,
            vec![node(
                "02",
                2,
                vec![node("03", 3, vec![node("04", 4, vec![]), node("05", 4, vec![])])],
            )],
        )
    }

    #[test]
    fn test_height_and_max_level() {
        let tree = sample_tree();
        assert_eq!(tree.height(), 4);
        assert_eq!(tree.max_level(), 4);
        assert_eq!(tree.components[0].height(), 3);
        assert_eq!(node("X", 7, vec![]).height(), 1);
    }

    #[test]
    fn test_node_count() {
        assert_eq!(sample_tree().node_count(), 5);
    }

    #[test]
    fn test_restamp_relevels_whole_subtree() {
        let mut subtree = sample_tree().components[0].clone();
        subtree.restamp(6);

        assert_eq!(subtree.level, 6);
        assert_eq!(subtree.components[0].level, 7);
        assert_eq!(subtree.components[0].components[0].level, 8);
        assert_eq!(subtree.components[0].components[1].level, 8);
        assert_eq!(subtree.max_level(), 8);
    }

    #[test]
    fn test_component_barcodes_excludes_root_and_dedups() {
        let tree = node(
            "R",
            1,
            vec![node("X", 2, vec![]), node("Y", 2, vec![node("X", 3, vec![])])],
        );
        let barcodes: Vec<String> = tree
            .component_barcodes()
            .into_iter()
            .map(String::from)
            .collect();
        assert_eq!(barcodes, vec!["X", "Y"]);
    }

    #[test]
    fn test_walk_is_preorder() {
        let tree = sample_tree();
        let mut seen = Vec::new();
        tree.walk(&mut |n| seen.push(n.barcode.as_str().to_string()));
        assert_eq!(seen, vec!["01", "02", "03", "04", "05"]);
    }

    #[test]
    fn test_leaf_serializes_empty_components_array() {
        let json = serde_json::to_value(node("04", 4, vec![])).unwrap();
        assert_eq!(json["components"], serde_json::json!([]));
        assert_eq!(json["itemunitcode"], "PCS");
        assert_eq!(json["dividevalue"], 1.0);
    }

    #[test]
    fn test_root_qty_serializes_as_null() {
        let mut root = node("01", 1, vec![]);
        root.qty = None;
        let json = serde_json::to_value(&root).unwrap();
        assert!(json["qty"].is_null());
    }

    #[test]
    fn test_deserialize_null_lists_as_empty() {
        let json = r#"{
            "level": 2,
            "guidfixed": "g-02",
            "barcode": "02",
            "names": null,
            "itemunitcode": "PCS",
            "itemunitnames": null,
            "imageuri": "",
            "qty": 1.0,
            "condition": false,
            "dividevalue": 1.0,
            "standvalue": 1.0,
            "components": null
        }"#;

        let node: ViewNode = serde_json::from_str(json).unwrap();
        assert!(node.names.is_empty());
        assert!(node.item_unit_names.is_empty());
        assert!(node.is_leaf());
    }

    #[test]
    fn test_checksum_is_stable_and_sensitive() {
        let tree = sample_tree();
        let first = tree.checksum().unwrap();
        assert_eq!(first.len(), 64);
        assert_eq!(first, sample_tree().checksum().unwrap());

        let mut changed = sample_tree();
        changed.components[0].qty = Some(2.0);
        assert_ne!(first, changed.checksum().unwrap());
    }

    #[test]
    fn test_matches_checksum() {
        let tree = sample_tree();
        let checksum = tree.checksum().unwrap();
        assert!(tree.matches_checksum(&checksum).unwrap());
        assert!(tree.matches_checksum(&checksum.to_uppercase()).unwrap());
        assert!(!tree.matches_checksum("deadbeef").unwrap());
    }
}
