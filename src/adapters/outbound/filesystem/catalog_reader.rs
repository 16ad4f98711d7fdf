use crate::adapters::outbound::memory::InMemoryProductStore;
use crate::bom_resolution::domain::{ProductRecord, TenantId};
use crate::shared::error::BomError;
use crate::shared::security::{validate_catalog_file, MAX_CATALOG_SIZE};
use crate::shared::Result;
use serde::Deserialize;
use std::collections::{BTreeMap, HashSet};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// Catalog document: product records grouped by tenant
#[derive(Debug, Deserialize)]
struct CatalogDocument {
    #[serde(default)]
    tenants: BTreeMap<String, Vec<ProductRecord>>,
}

/// Serialization of a catalog file, chosen by extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogFormat {
    Json,
    Yaml,
    Toml,
}

impl CatalogFormat {
    pub fn from_path(path: &Path) -> Option<Self> {
        let extension = path.extension()?.to_str()?.to_lowercase();
        match extension.as_str() {
            "json" => Some(CatalogFormat::Json),
            "yml" | "yaml" => Some(CatalogFormat::Yaml),
            "toml" => Some(CatalogFormat::Toml),
            _ => None,
        }
    }
}

/// FileSystemCatalogReader adapter loading a product catalog from disk
///
/// The catalog is parsed in full and every record is validated before the
/// store is returned; a broken catalog never yields a partial store.
pub struct FileSystemCatalogReader {
    max_size: u64,
}

impl FileSystemCatalogReader {
    pub fn new() -> Self {
        Self {
            max_size: MAX_CATALOG_SIZE,
        }
    }

    /// Overrides the size limit (used by tests).
    pub fn with_max_size(max_size: u64) -> Self {
        Self { max_size }
    }

    /// Reads the catalog at `path` into a fresh store.
    ///
    /// # Errors
    /// - `BomError::CatalogNotFound`, `SecurityError` or `InvalidCatalogPath`
    ///   when the path fails the file checks
    /// - `BomError::InvalidCatalogPath` for an unsupported extension
    /// - `BomError::CatalogParseError` for malformed content, invalid tenant
    ///   ids, or a barcode listed twice for one tenant
    pub fn read_catalog(&self, path: &Path) -> Result<InMemoryProductStore> {
        let format = CatalogFormat::from_path(path).ok_or_else(|| BomError::InvalidCatalogPath {
            path: path.to_path_buf(),
            reason: "Unsupported catalog extension (expected .json, .yml, .yaml or .toml)"
                .to_string(),
        })?;

        validate_catalog_file(path, self.max_size)?;

        let content = fs::read_to_string(path).map_err(|e| BomError::FileReadError {
            path: path.to_path_buf(),
            details: e.to_string(),
        })?;

        let document = Self::parse(&content, format).map_err(|details| BomError::CatalogParseError {
            path: path.to_path_buf(),
            details,
        })?;

        let store = Self::load(path, document)?;
        info!(path = %path.display(), products = store.len(), "catalog loaded");
        Ok(store)
    }

    fn parse(content: &str, format: CatalogFormat) -> std::result::Result<CatalogDocument, String> {
        match format {
            CatalogFormat::Json => serde_json::from_str(content).map_err(|e| e.to_string()),
            CatalogFormat::Yaml => serde_yaml_ng::from_str(content).map_err(|e| e.to_string()),
            CatalogFormat::Toml => toml::from_str(content).map_err(|e| e.to_string()),
        }
    }

    fn load(path: &Path, document: CatalogDocument) -> Result<InMemoryProductStore> {
        let parse_error = |details: String| BomError::CatalogParseError {
            path: PathBuf::from(path),
            details,
        };

        let store = InMemoryProductStore::new();
        for (tenant, records) in document.tenants {
            let tenant_id = TenantId::new(tenant.clone())
                .map_err(|e| parse_error(format!("Invalid tenant '{}': {}", tenant, e)))?;

            let mut seen = HashSet::new();
            for record in records {
                if !seen.insert(record.barcode.clone()) {
                    return Err(parse_error(format!(
                        "Duplicate barcode '{}' for tenant '{}'",
                        record.barcode, tenant
                    ))
                    .into());
                }
                store.insert(&tenant_id, record);
            }
        }

        Ok(store)
    }
}

impl Default for FileSystemCatalogReader {
    fn default() -> Self {
        Self::new()
    }
}
