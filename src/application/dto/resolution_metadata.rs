use crate::bom_resolution::domain::TenantId;
use chrono::Utc;
use serde::Serialize;
use uuid::Uuid;

const TOOL_NAME: &str = env!("CARGO_PKG_NAME");
const TOOL_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Provenance of one resolution run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolutionMetadata {
    timestamp: String,
    tool_name: String,
    tool_version: String,
    tenant: String,
    resolution_id: String,
}

impl ResolutionMetadata {
    /// Stamps a new run for `tenant` with the current time and a fresh id.
    pub fn new(tenant: &TenantId) -> Self {
        Self {
            timestamp: Utc::now().to_rfc3339(),
            tool_name: TOOL_NAME.to_string(),
            tool_version: TOOL_VERSION.to_string(),
            tenant: tenant.to_string(),
            resolution_id: format!("urn:uuid:{}", Uuid::new_v4()),
        }
    }

    pub fn timestamp(&self) -> &str {
        &self.timestamp
    }

    pub fn tool_name(&self) -> &str {
        &self.tool_name
    }

    pub fn tool_version(&self) -> &str {
        &self.tool_version
    }

    pub fn tenant(&self) -> &str {
        &self.tenant
    }

    pub fn resolution_id(&self) -> &str {
        &self.resolution_id
    }
}
