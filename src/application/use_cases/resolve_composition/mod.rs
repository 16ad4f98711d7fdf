use crate::application::dto::{CompositionRequest, CompositionResponse, ResolutionMetadata};
use crate::bom_resolution::domain::ViewNode;
use crate::bom_resolution::services::CompositionResolver;
use crate::ports::inbound::CompositionResolutionPort;
use crate::ports::outbound::{ProductLookup, ProgressReporter};
use crate::shared::Result;
use async_trait::async_trait;

/// ResolveCompositionUseCase - Core use case for composition resolution
///
/// Turns a validated request into resolved trees, reporting progress on the
/// way. A resolver is configured per request from its timeout and cycle
/// settings; the lookup is shared across requests.
///
/// # Type Parameters
/// * `L` - ProductLookup implementation
/// * `PR` - ProgressReporter implementation
pub struct ResolveCompositionUseCase<L, PR> {
    lookup: L,
    progress_reporter: PR,
}

impl<L, PR> ResolveCompositionUseCase<L, PR>
where
    L: ProductLookup,
    PR: ProgressReporter,
{
    pub fn new(lookup: L, progress_reporter: PR) -> Self {
        Self {
            lookup,
            progress_reporter,
        }
    }

    /// Executes the resolution use case
    ///
    /// # Returns
    /// One tree per requested barcode, in request order, plus run metadata
    ///
    /// # Errors
    /// The first `ResolveError` aborts the whole request.
    pub async fn execute(&self, request: CompositionRequest) -> Result<CompositionResponse> {
        self.progress_reporter.report(&format!(
            "🔍 Resolving {} composition(s) for tenant: {}",
            request.barcodes.len(),
            request.tenant
        ));

        let resolver = CompositionResolver::new(&self.lookup)
            .with_timeout(request.timeout)
            .with_cycle_detection(request.detect_cycles);

        let trees = self.resolve_all(&resolver, &request).await?;

        let response = CompositionResponse::new(trees, ResolutionMetadata::new(&request.tenant));

        self.progress_reporter.report_completion(&format!(
            "✅ Resolved {} composition(s) with {} node(s) in total",
            response.compositions.len(),
            response.node_count()
        ));

        Ok(response)
    }

    /// Resolves the roots one after another so progress can be shown per root.
    ///
    /// Each root still gets its own caches and deadline.
    async fn resolve_all(
        &self,
        resolver: &CompositionResolver<&L>,
        request: &CompositionRequest,
    ) -> Result<Vec<ViewNode>> {
        let total = request.barcodes.len();
        let mut trees = Vec::with_capacity(total);

        for (index, barcode) in request.barcodes.iter().enumerate() {
            match resolver.resolve_composition(&request.tenant, barcode).await {
                Ok(tree) => {
                    trees.push(tree);
                    if request.is_batch() {
                        self.progress_reporter
                            .report_progress(index + 1, total, Some(barcode.as_str()));
                    }
                }
                Err(e) => {
                    if request.is_batch() {
                        self.progress_reporter.report_error(&format!(
                            "❌ Stopped at {} ({}/{})",
                            barcode,
                            index + 1,
                            total
                        ));
                    }
                    return Err(e.into());
                }
            }
        }

        Ok(trees)
    }
}

#[async_trait(?Send)]
impl<L, PR> CompositionResolutionPort for ResolveCompositionUseCase<L, PR>
where
    L: ProductLookup,
    PR: ProgressReporter,
{
    async fn resolve(&self, request: CompositionRequest) -> Result<CompositionResponse> {
        self.execute(request).await
    }
}
