//! Builder for constructing CompositionReadModel from a resolution response

use super::composition_read_model::{
    ComponentRowView, CompositionReadModel, CompositionView, ResolutionMetadataView,
};
use crate::application::dto::{CompositionResponse, ResolutionMetadata};
use crate::bom_resolution::domain::{display_name, ViewNode};
use crate::shared::Result;

/// Builder for constructing CompositionReadModel from a response
pub struct CompositionReadModelBuilder;

impl CompositionReadModelBuilder {
    /// Builds the read model for `response`.
    ///
    /// # Arguments
    /// * `response` - Resolved trees and run metadata
    /// * `lang` - Preferred language code for display names; the first
    ///   name of each list is used when it has no match
    ///
    /// # Errors
    /// Returns an error if a tree cannot be serialized for its checksum
    pub fn build(response: &CompositionResponse, lang: Option<&str>) -> Result<CompositionReadModel> {
        let compositions = response
            .compositions
            .iter()
            .map(|tree| Self::build_composition(tree, lang))
            .collect::<Result<Vec<_>>>()?;

        Ok(CompositionReadModel {
            metadata: Self::build_metadata(&response.metadata),
            compositions,
        })
    }

    fn build_metadata(metadata: &ResolutionMetadata) -> ResolutionMetadataView {
        ResolutionMetadataView {
            timestamp: metadata.timestamp().to_string(),
            tool_name: metadata.tool_name().to_string(),
            tool_version: metadata.tool_version().to_string(),
            tenant: metadata.tenant().to_string(),
            resolution_id: metadata.resolution_id().to_string(),
        }
    }

    fn build_composition(tree: &ViewNode, lang: Option<&str>) -> Result<CompositionView> {
        let mut rows = Vec::with_capacity(tree.node_count());
        tree.walk(&mut |node| rows.push(Self::build_row(node, lang)));

        Ok(CompositionView {
            barcode: tree.barcode.to_string(),
            name: display_name(&tree.names, lang).map(str::to_string),
            checksum: tree.checksum()?,
            node_count: tree.node_count(),
            max_level: tree.max_level(),
            component_barcodes: tree
                .component_barcodes()
                .into_iter()
                .map(String::from)
                .collect(),
            tree: tree.clone(),
            rows,
        })
    }

    fn build_row(node: &ViewNode, lang: Option<&str>) -> ComponentRowView {
        let unit = display_name(&node.item_unit_names, lang)
            .map(str::to_string)
            .or_else(|| (!node.item_unit_code.is_empty()).then(|| node.item_unit_code.clone()));

        ComponentRowView {
            level: node.level,
            barcode: node.barcode.to_string(),
            name: display_name(&node.names, lang).map(str::to_string),
            qty: node.qty,
            unit,
            condition: node.condition,
            divide_value: node.divide_value,
            stand_value: node.stand_value,
        }
    }
}
