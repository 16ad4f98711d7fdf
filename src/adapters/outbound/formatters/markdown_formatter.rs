use crate::application::read_models::{
    ComponentRowView, CompositionReadModel, CompositionView, ResolutionMetadataView,
};
use crate::ports::outbound::CompositionFormatter;
use crate::shared::Result;
use std::fmt::Write;

/// Markdown table header for composition rows
const TABLE_HEADER: &str = "| Level | Barcode | Name | Qty | Unit | Divide | Stand | Conditional |\n";

/// Markdown table separator line
const TABLE_SEPARATOR: &str = "|-------|---------|------|-----|------|--------|-------|-------------|\n";

/// Indentation added per level below the root in the Barcode column
const LEVEL_INDENT: &str = "&nbsp;&nbsp;";

/// MarkdownFormatter adapter rendering compositions as Markdown
///
/// One section per root: an indented table of the whole tree in preorder,
/// followed by the component inventory and the checksum.
pub struct MarkdownFormatter;

impl MarkdownFormatter {
    pub fn new() -> Self {
        Self
    }

    /// Escapes pipe characters and newlines for safe Markdown table rendering
    fn escape_markdown_table_cell(text: &str) -> String {
        text.replace('|', "\\|").replace('\n', " ")
    }

    fn render_header(output: &mut String, metadata: &ResolutionMetadataView) {
        output.push_str("# Bill of Materials\n\n");
        let _ = writeln!(output, "- Tenant: {}", metadata.tenant);
        let _ = writeln!(output, "- Generated: {}", metadata.timestamp);
        let _ = writeln!(output, "- Tool: {} {}", metadata.tool_name, metadata.tool_version);
        let _ = writeln!(output, "- Resolution: {}", metadata.resolution_id);
        output.push('\n');
    }

    fn render_composition(output: &mut String, composition: &CompositionView) {
        match &composition.name {
            Some(name) => {
                let _ = writeln!(
                    output,
                    "## {} ({})\n",
                    Self::escape_markdown_table_cell(name),
                    composition.barcode
                );
            }
            None => {
                let _ = writeln!(output, "## {}\n", composition.barcode);
            }
        }

        output.push_str(TABLE_HEADER);
        output.push_str(TABLE_SEPARATOR);
        for row in &composition.rows {
            Self::render_row(output, row);
        }
        output.push('\n');

        let _ = writeln!(
            output,
            "Nodes: {} | Depth: {} | Checksum: `{}`\n",
            composition.node_count, composition.max_level, composition.checksum
        );

        if composition.component_barcodes.is_empty() {
            output.push_str("**Components:** none\n\n");
        } else {
            let _ = writeln!(
                output,
                "**Components:** {}\n",
                composition.component_barcodes.join(", ")
            );
        }
    }

    fn render_row(output: &mut String, row: &ComponentRowView) {
        let indent = LEVEL_INDENT.repeat(row.level.saturating_sub(1));
        let _ = writeln!(
            output,
            "| {} | {}{} | {} | {} | {} | {} | {} | {} |",
            row.level,
            indent,
            Self::escape_markdown_table_cell(&row.barcode),
            Self::escape_markdown_table_cell(row.name.as_deref().unwrap_or("-")),
            row.qty.map(|q| q.to_string()).unwrap_or_else(|| "-".to_string()),
            Self::escape_markdown_table_cell(row.unit.as_deref().unwrap_or("-")),
            row.divide_value,
            row.stand_value,
            if row.condition { "yes" } else { "no" },
        );
    }
}

impl Default for MarkdownFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl CompositionFormatter for MarkdownFormatter {
    fn format(&self, model: &CompositionReadModel) -> Result<String> {
        let mut output = String::new();
        Self::render_header(&mut output, &model.metadata);
        for composition in &model.compositions {
            Self::render_composition(&mut output, composition);
        }
        Ok(output)
    }
}
