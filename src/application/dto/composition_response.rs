use super::ResolutionMetadata;
use crate::bom_resolution::domain::ViewNode;

/// CompositionResponse - Response DTO from the resolution use case
///
/// Holds the resolved trees in request order. Adapters turn it into a
/// read model before formatting.
#[derive(Debug, Clone)]
pub struct CompositionResponse {
    pub compositions: Vec<ViewNode>,
    pub metadata: ResolutionMetadata,
}

impl CompositionResponse {
    pub fn new(compositions: Vec<ViewNode>, metadata: ResolutionMetadata) -> Self {
        Self {
            compositions,
            metadata,
        }
    }

    /// Total number of nodes across all trees.
    pub fn node_count(&self) -> usize {
        self.compositions.iter().map(ViewNode::node_count).sum()
    }
}
