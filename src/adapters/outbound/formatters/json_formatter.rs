use crate::application::read_models::{CompositionReadModel, CompositionView, ResolutionMetadataView};
use crate::ports::outbound::CompositionFormatter;
use crate::shared::Result;
use serde::Serialize;

/// Version of the JSON document layout
const DOCUMENT_VERSION: u32 = 1;

#[derive(Debug, Serialize)]
struct Document<'a> {
    #[serde(rename = "documentVersion")]
    document_version: u32,
    metadata: &'a ResolutionMetadataView,
    compositions: &'a [CompositionView],
}

/// JsonFormatter adapter rendering compositions as pretty-printed JSON
///
/// Each composition carries the full nested tree in the store's field
/// naming (`guidfixed`, `itemunitcode`, ...), so consumers can persist it
/// as-is and compare checksums later.
pub struct JsonFormatter;

impl JsonFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl CompositionFormatter for JsonFormatter {
    fn format(&self, model: &CompositionReadModel) -> Result<String> {
        let document = Document {
            document_version: DOCUMENT_VERSION,
            metadata: &model.metadata,
            compositions: &model.compositions,
        };
        Ok(serde_json::to_string_pretty(&document)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::dto::{CompositionResponse, ResolutionMetadata};
    use crate::application::read_models::CompositionReadModelBuilder;
    use crate::bom_resolution::domain::{Barcode, ComponentEdge, ProductRecord, TenantId};
    use crate::bom_resolution::services::ViewAssembler;

    fn model() -> CompositionReadModel {
        let barcode = |v: &str| Barcode::new(v.to_string()).unwrap();
        let root_record = ProductRecord::new(barcode("01")).with_name("en", "Burger");
        let child_record = ProductRecord::new(barcode("02"))
            .with_name("en", "Patty")
            .with_unit("PCS", "Piece");

        let mut root = ViewAssembler::assemble_root(&root_record);
        let edge = ComponentEdge::new(barcode("02"), 2.0).with_condition(true);
        root.components
            .push(ViewAssembler::assemble(&child_record, Some(&edge), 2));

        let tenant = TenantId::new("shop-1".to_string()).unwrap();
        let response = CompositionResponse::new(vec![root], ResolutionMetadata::new(&tenant));
        CompositionReadModelBuilder::build(&response, None).unwrap()
    }

    #[test]
    fn test_format_document_layout() {
        let model = model();
        let output = JsonFormatter::new().format(&model).unwrap();
        let json: serde_json::Value = serde_json::from_str(&output).unwrap();

        assert_eq!(json["documentVersion"], 1);
        assert_eq!(json["metadata"]["tenant"], "shop-1");
        assert_eq!(json["metadata"]["tool_name"], "bom-resolver");

        let composition = &json["compositions"][0];
        assert_eq!(composition["barcode"], "01");
        assert_eq!(composition["name"], "Burger");
        assert_eq!(composition["node_count"], 2);
        assert_eq!(composition["component_barcodes"], serde_json::json!(["02"]));
        assert_eq!(composition["checksum"], model.compositions[0].checksum.as_str());
    }

    #[test]
    fn test_format_tree_uses_store_field_names() {
        let output = JsonFormatter::new().format(&model()).unwrap();
        let json: serde_json::Value = serde_json::from_str(&output).unwrap();
        let tree = &json["compositions"][0]["tree"];

        assert_eq!(tree["level"], 1);
        assert!(tree["qty"].is_null());
        let child = &tree["components"][0];
        assert_eq!(child["level"], 2);
        assert_eq!(child["qty"], 2.0);
        assert_eq!(child["condition"], true);
        assert_eq!(child["itemunitcode"], "PCS");
        assert_eq!(child["components"], serde_json::json!([]));
    }
}
