use crate::bom_resolution::domain::{ComponentEdge, ProductRecord, ViewNode};

/// ViewAssembler service turning product records into view nodes
///
/// Pure transformation with no I/O. Children are attached by the caller.
pub struct ViewAssembler;

impl ViewAssembler {
    /// Builds the node for `record` at `level`.
    ///
    /// With an incoming `edge` the node carries that edge's quantity,
    /// condition and conversion pair. Without one (the root) the quantity is
    /// absent, the condition is off and the conversion is the identity.
    pub fn assemble(record: &ProductRecord, edge: Option<&ComponentEdge>, level: usize) -> ViewNode {
        let (qty, condition, divide_value, stand_value) = match edge {
            Some(edge) => (
                Some(edge.qty),
                edge.condition,
                edge.divide_value,
                edge.stand_value,
            ),
            None => (None, false, 1.0, 1.0),
        };

        ViewNode {
            level,
            guid_fixed: record.guid_fixed.clone(),
            barcode: record.barcode.clone(),
            names: record.names.clone(),
            item_unit_code: record.item_unit_code.clone(),
            item_unit_names: record.item_unit_names.clone(),
            image_uri: record.image_uri.clone(),
            qty,
            condition,
            divide_value,
            stand_value,
            components: Vec::new(),
        }
    }

    /// Builds the level-1 node for a root record.
    pub fn assemble_root(record: &ProductRecord) -> ViewNode {
        Self::assemble(record, None, 1)
    }
}
