use crate::bom_resolution::domain::{Barcode, TenantId};
use crate::bom_resolution::services::DEFAULT_RESOLUTION_TIMEOUT;
use crate::shared::error::BomError;
use crate::shared::Result;
use std::time::Duration;

/// CompositionRequest - Request DTO for the resolution use case
///
/// Only constructed through [`CompositionRequestBuilder`], so every instance
/// carries a valid tenant and at least one valid barcode.
#[derive(Debug, Clone)]
pub struct CompositionRequest {
    /// Tenant whose catalog the barcodes belong to
    pub tenant: TenantId,
    /// Root barcodes, resolved in this order
    pub barcodes: Vec<Barcode>,
    /// Deadline for each root; `None` waits indefinitely
    pub timeout: Option<Duration>,
    /// Reject cyclic compositions instead of running into the depth cap
    pub detect_cycles: bool,
}

impl CompositionRequest {
    pub fn builder() -> CompositionRequestBuilder {
        CompositionRequestBuilder::new()
    }

    pub fn is_batch(&self) -> bool {
        self.barcodes.len() > 1
    }
}

/// Builder for CompositionRequest
#[derive(Debug, Clone)]
pub struct CompositionRequestBuilder {
    tenant: Option<String>,
    barcodes: Vec<String>,
    timeout: Option<Duration>,
    detect_cycles: bool,
}

impl CompositionRequestBuilder {
    pub fn new() -> Self {
        Self {
            tenant: None,
            barcodes: Vec::new(),
            timeout: Some(DEFAULT_RESOLUTION_TIMEOUT),
            detect_cycles: false,
        }
    }

    pub fn tenant(mut self, tenant: impl Into<String>) -> Self {
        self.tenant = Some(tenant.into());
        self
    }

    pub fn barcode(mut self, barcode: impl Into<String>) -> Self {
        self.barcodes.push(barcode.into());
        self
    }

    pub fn barcodes<I, S>(mut self, barcodes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.barcodes.extend(barcodes.into_iter().map(Into::into));
        self
    }

    pub fn timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn detect_cycles(mut self, enabled: bool) -> Self {
        self.detect_cycles = enabled;
        self
    }

    /// Validates the collected values and builds the request.
    ///
    /// # Errors
    /// Returns `BomError::Validation` for a missing or malformed tenant, an
    /// empty barcode list, a malformed barcode, or a zero timeout.
    pub fn build(self) -> Result<CompositionRequest> {
        let tenant = self.tenant.ok_or_else(|| BomError::Validation {
            message: "A tenant is required (use --tenant or set 'tenant' in the config file)"
                .to_string(),
        })?;
        let tenant = TenantId::new(tenant).map_err(|e| BomError::Validation {
            message: e.to_string(),
        })?;

        if self.barcodes.is_empty() {
            return Err(BomError::Validation {
                message: "At least one barcode is required".to_string(),
            }
            .into());
        }

        let barcodes = self
            .barcodes
            .into_iter()
            .map(|b| {
                Barcode::new(b).map_err(|e| BomError::Validation {
                    message: e.to_string(),
                })
            })
            .collect::<std::result::Result<Vec<_>, _>>()?;

        if self.timeout.is_some_and(|t| t.is_zero()) {
            return Err(BomError::Validation {
                message: "Timeout must be greater than zero".to_string(),
            }
            .into());
        }

        Ok(CompositionRequest {
            tenant,
            barcodes,
            timeout: self.timeout,
            detect_cycles: self.detect_cycles,
        })
    }
}

impl Default for CompositionRequestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
