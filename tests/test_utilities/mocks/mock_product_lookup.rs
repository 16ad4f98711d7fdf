use async_trait::async_trait;
use bom_resolver::prelude::*;
use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;

/// Mock ProductLookup for testing
///
/// Serves records for a single tenant, counts every lookup per barcode, and
/// can be told to fail or stall on specific barcodes.
pub struct MockProductLookup {
    tenant: String,
    records: HashMap<String, ProductRecord>,
    failing: HashSet<String>,
    delay: Option<Duration>,
    calls: Mutex<HashMap<String, usize>>,
    total_calls: AtomicUsize,
}

#[allow(dead_code)]
impl MockProductLookup {
    pub fn new(tenant: &str) -> Self {
        Self {
            tenant: tenant.to_string(),
            records: HashMap::new(),
            failing: HashSet::new(),
            delay: None,
            calls: Mutex::new(HashMap::new()),
            total_calls: AtomicUsize::new(0),
        }
    }

    /// Adds a product whose components are `(barcode, qty)` pairs.
    pub fn with_product(mut self, barcode: &str, name: &str, components: &[(&str, f64)]) -> Self {
        let mut record = ProductRecord::new(Barcode::new(barcode.to_string()).unwrap())
            .with_name("en", name);
        for (child, qty) in components {
            record = record.with_component(ComponentEdge::new(
                Barcode::new(child.to_string()).unwrap(),
                *qty,
            ));
        }
        self.records.insert(barcode.to_string(), record);
        self
    }

    pub fn with_record(mut self, record: ProductRecord) -> Self {
        self.records.insert(record.barcode.to_string(), record);
        self
    }

    pub fn with_failure_on(mut self, barcode: &str) -> Self {
        self.failing.insert(barcode.to_string());
        self
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn calls_for(&self, barcode: &str) -> usize {
        self.calls.lock().unwrap().get(barcode).copied().unwrap_or(0)
    }

    pub fn total_calls(&self) -> usize {
        self.total_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ProductLookup for MockProductLookup {
    async fn find_product(
        &self,
        ctx: &LookupContext,
        barcode: &Barcode,
    ) -> Result<Option<ProductRecord>> {
        self.total_calls.fetch_add(1, Ordering::SeqCst);
        *self
            .calls
            .lock()
            .unwrap()
            .entry(barcode.to_string())
            .or_insert(0) += 1;

        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }

        if self.failing.contains(barcode.as_str()) {
            anyhow::bail!("Mock document store failure");
        }

        if ctx.tenant().as_str() != self.tenant {
            return Ok(None);
        }

        Ok(self.records.get(barcode.as_str()).cloned())
    }
}
