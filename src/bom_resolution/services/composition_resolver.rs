use crate::bom_resolution::domain::{Barcode, ResolutionCache, TenantId, ViewNode};
use crate::bom_resolution::policies::DepthGuard;
use crate::bom_resolution::services::bom_expander::{find_within_deadline, LookupFailure};
use crate::bom_resolution::services::{BomExpander, ViewAssembler};
use crate::ports::outbound::{LookupContext, ProductLookup};
use crate::shared::error::ResolveError;
use futures::future::try_join_all;
use std::time::Duration;
use tracing::{debug, info, warn};

/// Deadline applied to one composition when the caller sets none.
pub const DEFAULT_RESOLUTION_TIMEOUT: Duration = Duration::from_secs(15);

/// CompositionResolver service producing enriched composition trees
///
/// Every call to [`resolve_composition`](Self::resolve_composition) owns a
/// fresh [`ResolutionCache`] and its own deadline, so concurrent resolutions
/// never share state. The lookup itself is shared and must be thread-safe.
pub struct CompositionResolver<L: ProductLookup> {
    lookup: L,
    guard: DepthGuard,
    timeout: Option<Duration>,
}

impl<L: ProductLookup> CompositionResolver<L> {
    pub fn new(lookup: L) -> Self {
        Self {
            lookup,
            guard: DepthGuard::default(),
            timeout: Some(DEFAULT_RESOLUTION_TIMEOUT),
        }
    }

    /// Sets the per-root deadline. `None` disables it.
    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_cycle_detection(mut self, enabled: bool) -> Self {
        self.guard = DepthGuard::new(enabled);
        self
    }

    pub fn lookup(&self) -> &L {
        &self.lookup
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    /// Resolves the full composition tree of `root` for `tenant`.
    ///
    /// The root record is looked up first and becomes the level-1 node. Its
    /// component edges are expanded from level 2 downwards.
    ///
    /// # Errors
    /// * `RootNotFound` when the store has no such barcode for the tenant
    /// * `RootLookupFailed` when the root lookup itself fails
    /// * any error raised while expanding components
    pub async fn resolve_composition(
        &self,
        tenant: &TenantId,
        root: &Barcode,
    ) -> Result<ViewNode, ResolveError> {
        let result = self.resolve_root(tenant, root).await;

        match &result {
            Ok(tree) => info!(
                tenant = %tenant,
                barcode = %root,
                nodes = tree.node_count(),
                depth = tree.max_level(),
                "composition resolved"
            ),
            Err(e) => warn!(tenant = %tenant, barcode = %root, error = %e, "composition resolution aborted"),
        }

        result
    }

    /// Resolves several roots concurrently.
    ///
    /// Each root gets its own caches and deadline. Results come back in
    /// input order; the first failure aborts the batch.
    pub async fn resolve_compositions(
        &self,
        tenant: &TenantId,
        roots: &[Barcode],
    ) -> Result<Vec<ViewNode>, ResolveError> {
        try_join_all(roots.iter().map(|root| self.resolve_composition(tenant, root))).await
    }

    async fn resolve_root(&self, tenant: &TenantId, root: &Barcode) -> Result<ViewNode, ResolveError> {
        let ctx = self.context_for(tenant);

        let record = match find_within_deadline(&self.lookup, &ctx, root).await {
            Ok(Some(record)) => record,
            Ok(None) => {
                return Err(ResolveError::RootNotFound {
                    tenant: tenant.to_string(),
                    barcode: root.to_string(),
                })
            }
            Err(LookupFailure::Deadline) => {
                return Err(ResolveError::DeadlineExceeded {
                    barcode: root.to_string(),
                })
            }
            Err(LookupFailure::Error(e)) => {
                return Err(ResolveError::RootLookupFailed {
                    barcode: root.to_string(),
                    reason: format!("{:#}", e),
                })
            }
        };

        let mut tree = ViewAssembler::assemble_root(&record);
        if !record.has_components() {
            return Ok(tree);
        }

        let mut cache = ResolutionCache::new();
        cache.insert_product(root.clone(), record.clone());
        let mut ancestors = vec![root.clone()];

        let expander = BomExpander::new(&self.lookup, &ctx, self.guard);
        tree.components = expander
            .expand(&record.bom, 2, &mut cache, &mut ancestors)
            .await?;

        debug!(
            barcode = %root,
            products = cache.product_count(),
            subtrees = cache.subtree_count(),
            "resolution cache released"
        );

        Ok(tree)
    }

    fn context_for(&self, tenant: &TenantId) -> LookupContext {
        match self.timeout {
            Some(timeout) => LookupContext::with_timeout(tenant.clone(), timeout),
            None => LookupContext::new(tenant.clone(), None),
        }
    }
}
