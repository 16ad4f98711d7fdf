use crate::bom_resolution::domain::{Barcode, ComponentEdge, ProductRecord, ResolutionCache, ViewNode};
use crate::bom_resolution::policies::DepthGuard;
use crate::bom_resolution::services::ViewAssembler;
use crate::ports::outbound::{LookupContext, ProductLookup};
use crate::shared::error::ResolveError;
use futures::future::BoxFuture;
use futures::FutureExt;
use tracing::debug;

/// Why a single lookup produced no answer
#[derive(Debug)]
pub(crate) enum LookupFailure {
    Deadline,
    Error(anyhow::Error),
}

/// Runs one lookup, bounded by the context deadline.
///
/// An already expired context fails without calling the lookup at all.
pub(crate) async fn find_within_deadline<L: ProductLookup + ?Sized>(
    lookup: &L,
    ctx: &LookupContext,
    barcode: &Barcode,
) -> Result<Option<ProductRecord>, LookupFailure> {
    if ctx.is_expired() {
        return Err(LookupFailure::Deadline);
    }

    let pending = lookup.find_product(ctx, barcode);
    let outcome = match ctx.deadline() {
        Some(deadline) => tokio::time::timeout_at(deadline, pending)
            .await
            .map_err(|_| LookupFailure::Deadline)?,
        None => pending.await,
    };

    outcome.map_err(LookupFailure::Error)
}

/// BomExpander service walking the composition graph below one root
///
/// Siblings are visited strictly in order so that memoized records and
/// subtrees produced by earlier siblings are visible to later ones.
pub struct BomExpander<'a, L: ProductLookup + ?Sized> {
    lookup: &'a L,
    ctx: &'a LookupContext,
    guard: DepthGuard,
}

impl<'a, L: ProductLookup + ?Sized> BomExpander<'a, L> {
    pub fn new(lookup: &'a L, ctx: &'a LookupContext, guard: DepthGuard) -> Self {
        Self { lookup, ctx, guard }
    }

    /// Expands `edges` into view nodes placed at `level`.
    ///
    /// # Arguments
    /// * `edges` - Ordered component edges of the parent
    /// * `level` - Level of the nodes being built (the root's children are level 2)
    /// * `cache` - Request-scoped memoization, shared by the whole resolution
    /// * `ancestors` - Barcodes on the active branch, used for cycle detection
    ///
    /// # Returns
    /// One node per edge, in edge order
    ///
    /// # Errors
    /// The first `ResolveError` hit anywhere below aborts the expansion.
    pub fn expand<'b>(
        &'b self,
        edges: &'b [ComponentEdge],
        level: usize,
        cache: &'b mut ResolutionCache,
        ancestors: &'b mut Vec<Barcode>,
    ) -> BoxFuture<'b, Result<Vec<ViewNode>, ResolveError>> {
        async move {
            let mut nodes = Vec::with_capacity(edges.len());
            for edge in edges {
                let node = self.expand_edge(edge, level, cache, ancestors).await?;
                nodes.push(node);
            }
            Ok(nodes)
        }
        .boxed()
    }

    async fn expand_edge(
        &self,
        edge: &ComponentEdge,
        level: usize,
        cache: &mut ResolutionCache,
        ancestors: &mut Vec<Barcode>,
    ) -> Result<ViewNode, ResolveError> {
        let barcode = &edge.barcode;
        self.guard.check_ancestors(ancestors, barcode)?;

        let record = self.resolve_record(barcode, cache).await?;
        let mut node = ViewAssembler::assemble(&record, Some(edge), level);

        if let Some(cached) = cache.subtree(barcode) {
            self.guard.check_reuse(level, cached.height, barcode)?;
            debug!(barcode = %barcode, level, "reusing expanded subtree");
            node.components = cached.children_at(level);
            return Ok(node);
        }

        if record.has_components() {
            self.guard.check_descend(level + 1, barcode)?;

            ancestors.push(barcode.clone());
            let expanded = self.expand(&record.bom, level + 1, cache, ancestors).await;
            ancestors.pop();

            node.components = expanded?;
        }

        cache.insert_subtree(barcode.clone(), level, &node.components);
        Ok(node)
    }

    /// Returns the record for `barcode`, looking it up at most once per resolution.
    async fn resolve_record(
        &self,
        barcode: &Barcode,
        cache: &mut ResolutionCache,
    ) -> Result<ProductRecord, ResolveError> {
        if let Some(record) = cache.product(barcode) {
            return Ok(record.clone());
        }

        debug!(tenant = %self.ctx.tenant(), barcode = %barcode, "looking up component");

        let record = match find_within_deadline(self.lookup, self.ctx, barcode).await {
            Ok(Some(record)) => record,
            Ok(None) => {
                return Err(ResolveError::ComponentUnresolved {
                    barcode: barcode.to_string(),
                    reason: format!("barcode not found for tenant {}", self.ctx.tenant()),
                })
            }
            Err(LookupFailure::Deadline) => {
                return Err(ResolveError::DeadlineExceeded {
                    barcode: barcode.to_string(),
                })
            }
            Err(LookupFailure::Error(e)) => {
                return Err(ResolveError::ComponentUnresolved {
                    barcode: barcode.to_string(),
                    reason: format!("{:#}", e),
                })
            }
        };

        cache.insert_product(barcode.clone(), record.clone());
        Ok(record)
    }
}
