use crate::shared::Result;

/// OutputPresenter port for delivering the rendered document
///
/// Implementations decide where the document goes (stdout, a file, ...).
pub trait OutputPresenter {
    /// Presents the rendered document.
    ///
    /// # Errors
    /// Returns an error if the destination cannot be written
    fn present(&self, content: &str) -> Result<()>;
}
