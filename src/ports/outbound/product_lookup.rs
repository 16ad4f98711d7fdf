use crate::bom_resolution::domain::{Barcode, ProductRecord, TenantId};
use crate::shared::Result;
use async_trait::async_trait;
use std::time::Duration;
use tokio::time::Instant;

/// Scope and deadline handed to every product lookup of one resolution.
#[derive(Debug, Clone)]
pub struct LookupContext {
    tenant: TenantId,
    deadline: Option<Instant>,
}

impl LookupContext {
    pub fn new(tenant: TenantId, deadline: Option<Instant>) -> Self {
        Self { tenant, deadline }
    }

    /// Context whose deadline is `timeout` from now. A timeout too large to
    /// be represented as an instant leaves the context without a deadline.
    pub fn with_timeout(tenant: TenantId, timeout: Duration) -> Self {
        Self::new(tenant, Instant::now().checked_add(timeout))
    }

    pub fn tenant(&self) -> &TenantId {
        &self.tenant
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// Time left before the deadline; `None` when there is no deadline.
    pub fn remaining(&self) -> Option<Duration> {
        self.deadline
            .map(|deadline| deadline.saturating_duration_since(Instant::now()))
    }

    pub fn is_expired(&self) -> bool {
        self.remaining().is_some_and(|left| left.is_zero())
    }
}

/// ProductLookup port for fetching product records by barcode
///
/// This port abstracts the document store that owns products and their
/// direct component lists.
///
/// # Contract
/// - `Ok(Some(record))` when the barcode exists for the context's tenant
/// - `Ok(None)` when it does not
/// - `Err(_)` for transport or storage failures
///
/// Results must not change for a barcode during one resolution.
/// Implementations must be `Send + Sync`; several resolutions may read
/// concurrently. Retrying transient failures is the implementation's job
/// and should respect `LookupContext::remaining()`.
#[async_trait]
pub trait ProductLookup: Send + Sync {
    async fn find_product(
        &self,
        ctx: &LookupContext,
        barcode: &Barcode,
    ) -> Result<Option<ProductRecord>>;
}

#[async_trait]
impl<T: ProductLookup + ?Sized> ProductLookup for std::sync::Arc<T> {
    async fn find_product(
        &self,
        ctx: &LookupContext,
        barcode: &Barcode,
    ) -> Result<Option<ProductRecord>> {
        (**self).find_product(ctx, barcode).await
    }
}

#[async_trait]
impl<T: ProductLookup + ?Sized> ProductLookup for &T {
    async fn find_product(
        &self,
        ctx: &LookupContext,
        barcode: &Barcode,
    ) -> Result<Option<ProductRecord>> {
        (**self).find_product(ctx, barcode).await
    }
}
