use crate::shared::error::BomError;
use crate::shared::Result;
use std::fs;
use std::path::Path;

/// Maximum catalog file size (100 MB)
pub const MAX_CATALOG_SIZE: u64 = 100 * 1024 * 1024;

/// Validates a catalog path before it is read and returns its size in bytes.
///
/// # Security
/// Uses `symlink_metadata()` so the link itself is inspected rather than
/// its target. Rejects symbolic links, anything that is not a regular file,
/// and files larger than `max_size`.
///
/// # Errors
/// - `BomError::CatalogNotFound` if nothing exists at `path`
/// - `BomError::SecurityError` for symlinks and oversized files
/// - `BomError::InvalidCatalogPath` for directories and other non-files
pub fn validate_catalog_file(path: &Path, max_size: u64) -> Result<u64> {
    let metadata = match fs::symlink_metadata(path) {
        Ok(metadata) => metadata,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(BomError::CatalogNotFound {
                path: path.to_path_buf(),
                suggestion: "Specify an existing catalog with --catalog, or point --store-url at a document store".to_string(),
            }
            .into());
        }
        Err(e) => {
            return Err(BomError::FileReadError {
                path: path.to_path_buf(),
                details: format!("Failed to read metadata: {}", e),
            }
            .into());
        }
    };

    if metadata.is_symlink() {
        return Err(BomError::SecurityError {
            path: path.to_path_buf(),
            reason: "Catalog path is a symbolic link".to_string(),
            hint: "Pass the real file path instead of a link to it".to_string(),
        }
        .into());
    }

    if !metadata.is_file() {
        return Err(BomError::InvalidCatalogPath {
            path: path.to_path_buf(),
            reason: "Not a regular file".to_string(),
        }
        .into());
    }

    let size = metadata.len();
    if size > max_size {
        return Err(BomError::SecurityError {
            path: path.to_path_buf(),
            reason: format!(
                "Catalog is too large ({} bytes). Maximum allowed size is {} bytes.",
                size, max_size
            ),
            hint: "Split the catalog per tenant or serve it from a document store".to_string(),
        }
        .into());
    }

    Ok(size)
}

/// Validates that an output path is not a symbolic link (if it exists).
pub fn validate_output_not_symlink(path: &Path) -> Result<()> {
    if let Ok(metadata) = fs::symlink_metadata(path) {
        if metadata.is_symlink() {
            return Err(BomError::SecurityError {
                path: path.to_path_buf(),
                reason: "Output path is a symbolic link".to_string(),
                hint: "Write to a regular file path".to_string(),
            }
            .into());
        }
    }
    Ok(())
}
