use crate::application::dto::{CompositionRequest, CompositionResponse};
use crate::shared::Result;
use async_trait::async_trait;

/// CompositionResolutionPort - Inbound port for resolving compositions
///
/// This is the application's public entry point: a request naming a tenant
/// and one or more root barcodes goes in, enriched composition trees come out.
#[async_trait(?Send)]
pub trait CompositionResolutionPort {
    /// Resolves every root barcode in `request`.
    ///
    /// # Errors
    /// Returns a `ResolveError` (wrapped in `anyhow::Error`) when any root
    /// fails to resolve, or another error for infrastructure failures.
    async fn resolve(&self, request: CompositionRequest) -> Result<CompositionResponse>;
}
