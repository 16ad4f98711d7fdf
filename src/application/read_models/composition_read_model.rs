//! Composition read model for output formatting

use crate::bom_resolution::domain::ViewNode;
use serde::Serialize;

/// Everything a formatter needs for one resolution run
#[derive(Debug, Clone, Serialize)]
pub struct CompositionReadModel {
    pub metadata: ResolutionMetadataView,
    pub compositions: Vec<CompositionView>,
}

/// View representation of the run metadata
#[derive(Debug, Clone, Serialize)]
pub struct ResolutionMetadataView {
    pub timestamp: String,
    pub tool_name: String,
    pub tool_version: String,
    pub tenant: String,
    pub resolution_id: String,
}

/// One resolved root with its derived figures
#[derive(Debug, Clone, Serialize)]
pub struct CompositionView {
    pub barcode: String,
    /// Display name of the root in the requested language
    pub name: Option<String>,
    /// SHA-256 of the serialized tree, for change detection
    pub checksum: String,
    pub node_count: usize,
    pub max_level: usize,
    /// Distinct component barcodes below the root, sorted
    pub component_barcodes: Vec<String>,
    pub tree: ViewNode,
    /// Preorder rows for tabular output
    #[serde(skip)]
    pub rows: Vec<ComponentRowView>,
}

/// Flattened view of a single tree node
#[derive(Debug, Clone, PartialEq)]
pub struct ComponentRowView {
    pub level: usize,
    pub barcode: String,
    pub name: Option<String>,
    pub qty: Option<f64>,
    pub unit: Option<String>,
    pub condition: bool,
    pub divide_value: f64,
    pub stand_value: f64,
}
