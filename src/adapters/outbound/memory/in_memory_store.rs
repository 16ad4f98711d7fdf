use crate::bom_resolution::domain::{Barcode, ProductRecord, TenantId};
use crate::ports::outbound::{LookupContext, ProductLookup};
use crate::shared::Result;
use async_trait::async_trait;
use dashmap::DashMap;
use std::sync::Arc;

/// Store key: products are only visible within their own tenant
#[derive(Debug, Clone, Hash, Eq, PartialEq)]
struct StoreKey {
    tenant: TenantId,
    barcode: Barcode,
}

impl StoreKey {
    fn new(tenant: &TenantId, barcode: &Barcode) -> Self {
        Self {
            tenant: tenant.clone(),
            barcode: barcode.clone(),
        }
    }
}

/// InMemoryProductStore adapter holding product records in process memory
///
/// Implements the ProductLookup port over a concurrent map, so one store can
/// serve many resolutions at once. Cloning shares the underlying map.
#[derive(Debug, Clone, Default)]
pub struct InMemoryProductStore {
    records: Arc<DashMap<StoreKey, ProductRecord>>,
}

impl InMemoryProductStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `record` for `tenant`, returning the record it replaced.
    pub fn insert(&self, tenant: &TenantId, record: ProductRecord) -> Option<ProductRecord> {
        let key = StoreKey::new(tenant, &record.barcode);
        self.records.insert(key, record)
    }

    pub fn contains(&self, tenant: &TenantId, barcode: &Barcode) -> bool {
        self.records.contains_key(&StoreKey::new(tenant, barcode))
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[async_trait]
impl ProductLookup for InMemoryProductStore {
    async fn find_product(
        &self,
        ctx: &LookupContext,
        barcode: &Barcode,
    ) -> Result<Option<ProductRecord>> {
        let key = StoreKey::new(ctx.tenant(), barcode);
        Ok(self.records.get(&key).map(|entry| entry.value().clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tenant(value: &str) -> TenantId {
        TenantId::new(value.to_string()).unwrap()
    }

    fn barcode(value: &str) -> Barcode {
        Barcode::new(value.to_string()).unwrap()
    }

    #[tokio::test]
    async fn test_find_product_within_tenant() {
        let store = InMemoryProductStore::new();
        store.insert(&tenant("shop-1"), ProductRecord::new(barcode("01")).with_name("en", "Burger"));

        let ctx = LookupContext::new(tenant("shop-1"), None);
        let found = store.find_product(&ctx, &barcode("01")).await.unwrap();
        assert_eq!(found.unwrap().names[0].name, "Burger");

        let missing = store.find_product(&ctx, &barcode("02")).await.unwrap();
        assert!(missing.is_none());
    }

    #[tokio::test]
    async fn test_tenants_are_isolated() {
        let store = InMemoryProductStore::new();
        store.insert(&tenant("shop-1"), ProductRecord::new(barcode("01")));

        let other = LookupContext::new(tenant("shop-2"), None);
        assert!(store.find_product(&other, &barcode("01")).await.unwrap().is_none());
        assert!(store.contains(&tenant("shop-1"), &barcode("01")));
        assert!(!store.contains(&tenant("shop-2"), &barcode("01")));
    }

    #[test]
    fn test_insert_replaces_and_clones_share_data() {
        let store = InMemoryProductStore::new();
        assert!(store.is_empty());

        let shared = store.clone();
        assert!(store.insert(&tenant("shop-1"), ProductRecord::new(barcode("01"))).is_none());
        let previous = shared.insert(
            &tenant("shop-1"),
            ProductRecord::new(barcode("01")).with_name("en", "New"),
        );

        assert!(previous.is_some());
        assert_eq!(store.len(), 1);
    }
}
