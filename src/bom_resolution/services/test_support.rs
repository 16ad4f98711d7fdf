//! In-memory lookup shared by the service unit tests.

use crate::bom_resolution::domain::{Barcode, ComponentEdge, ProductRecord, TenantId};
use crate::ports::outbound::{LookupContext, ProductLookup};
use crate::shared::Result;
use async_trait::async_trait;
use std::collections::{HashMap, HashSet};
use std::sync::Mutex;
use std::time::Duration;

pub(crate) fn barcode(value: &str) -> Barcode {
    Barcode::new(value.to_string()).unwrap()
}

pub(crate) fn tenant() -> TenantId {
    TenantId::new("shop-1".to_string()).unwrap()
}

/// Record named after its barcode, with one unit of each listed component.
pub(crate) fn product(code: &str, components: &[&str]) -> ProductRecord {
    components.iter().fold(
        ProductRecord::new(barcode(code)).with_name("en", &format!("Product {}", code)),
        |record, child| record.with_component(ComponentEdge::new(barcode(child), 1.0)),
    )
}

/// Lookup over a fixed set of records that counts every call
#[derive(Default)]
pub(crate) struct CatalogLookup {
    records: HashMap<Barcode, ProductRecord>,
    failing: HashSet<String>,
    delay: Option<Duration>,
    calls: Mutex<Vec<String>>,
}

impl CatalogLookup {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn with(mut self, record: ProductRecord) -> Self {
        self.records.insert(record.barcode.clone(), record);
        self
    }

    /// Answers lookups of `code` with `record`, whatever its own barcode.
    pub(crate) fn with_stored_as(mut self, code: &str, record: ProductRecord) -> Self {
        self.records.insert(barcode(code), record);
        self
    }

    pub(crate) fn failing_on(mut self, code: &str) -> Self {
        self.failing.insert(code.to_string());
        self
    }

    pub(crate) fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub(crate) fn calls_for(&self, code: &str) -> usize {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .filter(|c| c.as_str() == code)
            .count()
    }

    pub(crate) fn total_calls(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait]
impl ProductLookup for CatalogLookup {
    async fn find_product(
        &self,
        _ctx: &LookupContext,
        barcode: &Barcode,
    ) -> Result<Option<ProductRecord>> {
        self.calls.lock().unwrap().push(barcode.to_string());

        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        if self.failing.contains(barcode.as_str()) {
            anyhow::bail!("connection reset by peer");
        }
        Ok(self.records.get(barcode).cloned())
    }
}
