use crate::adapters::outbound::formatters::{JsonFormatter, MarkdownFormatter};
use crate::application::dto::OutputFormat;
use crate::ports::outbound::CompositionFormatter;

/// Factory for creating composition formatters
///
/// Keeps the choice of formatter adapter out of the CLI.
pub struct FormatterFactory;

impl FormatterFactory {
    /// Creates a formatter for `format`.
    ///
    /// # Examples
    /// ```
    /// use bom_resolver::application::dto::OutputFormat;
    /// use bom_resolver::application::factories::FormatterFactory;
    ///
    /// let formatter = FormatterFactory::create(OutputFormat::Markdown);
    /// ```
    pub fn create(format: OutputFormat) -> Box<dyn CompositionFormatter> {
        match format {
            OutputFormat::Json => Box::new(JsonFormatter::new()),
            OutputFormat::Markdown => Box::new(MarkdownFormatter::new()),
        }
    }

    /// Progress line shown while the document is rendered.
    pub fn progress_message(format: OutputFormat) -> &'static str {
        match format {
            OutputFormat::Json => "📝 Generating JSON output...",
            OutputFormat::Markdown => "📝 Generating Markdown output...",
        }
    }
}
