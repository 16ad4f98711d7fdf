use crate::application::read_models::CompositionReadModel;
use crate::shared::Result;

/// CompositionFormatter port for rendering resolved compositions
///
/// This port abstracts the output document format (JSON, Markdown, etc.).
pub trait CompositionFormatter {
    /// Renders the read model into a document.
    ///
    /// # Errors
    /// Returns an error if serialization fails
    fn format(&self, model: &CompositionReadModel) -> Result<String>;
}
