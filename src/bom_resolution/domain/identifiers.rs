use crate::shared::Result;
use serde::{Deserialize, Serialize};

/// Maximum length for barcodes (security limit)
const MAX_BARCODE_LENGTH: usize = 128;

/// Maximum length for tenant identifiers (security limit)
const MAX_TENANT_ID_LENGTH: usize = 128;

/// NewType wrapper for a product barcode with validation
///
/// Barcodes are the stable identity of a node in the composition graph.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Barcode(String);

impl Barcode {
    pub fn new(barcode: String) -> Result<Self> {
        if barcode.is_empty() {
            anyhow::bail!("Barcode cannot be empty");
        }

        // Security: Length limit to prevent DoS
        if barcode.len() > MAX_BARCODE_LENGTH {
            anyhow::bail!(
                "Barcode is too long ({} bytes). Maximum allowed: {} bytes",
                barcode.len(),
                MAX_BARCODE_LENGTH
            );
        }

        if barcode.trim() != barcode {
            anyhow::bail!("Barcode '{}' has leading or trailing whitespace", barcode);
        }

        if barcode.chars().any(char::is_control) {
            anyhow::bail!("Barcode contains control characters");
        }

        Ok(Self(barcode))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Barcode {
    type Error = anyhow::Error;

    fn try_from(value: String) -> Result<Self> {
        Self::new(value)
    }
}

impl From<Barcode> for String {
    fn from(barcode: Barcode) -> Self {
        barcode.0
    }
}

impl std::fmt::Display for Barcode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// NewType wrapper for the tenant (shop) identifier that scopes every lookup
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TenantId(String);

impl TenantId {
    pub fn new(tenant: String) -> Result<Self> {
        if tenant.is_empty() {
            anyhow::bail!("Tenant id cannot be empty");
        }

        if tenant.len() > MAX_TENANT_ID_LENGTH {
            anyhow::bail!(
                "Tenant id is too long ({} bytes). Maximum allowed: {} bytes",
                tenant.len(),
                MAX_TENANT_ID_LENGTH
            );
        }

        // Tenant ids end up in HTTP headers and map keys
        if !tenant
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_' || c == '.')
        {
            anyhow::bail!(
                "Tenant id contains invalid characters. Only ASCII alphanumeric, hyphens, underscores and dots are allowed."
            );
        }

        Ok(Self(tenant))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for TenantId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_barcode_new_valid() {
        let barcode = Barcode::new("8850999320014".to_string()).unwrap();
        assert_eq!(barcode.as_str(), "8850999320014");
    }

    #[test]
    fn test_barcode_allows_inner_spaces_and_symbols() {
        assert!(Barcode::new("BUN 4IN/2".to_string()).is_ok());
    }

    #[test]
    fn test_barcode_new_empty() {
        assert!(Barcode::new("".to_string()).is_err());
    }

    #[test]
    fn test_barcode_too_long() {
        let result = Barcode::new("9".repeat(MAX_BARCODE_LENGTH + 1));
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("too long"));
    }

    #[test]
    fn test_barcode_surrounding_whitespace() {
        assert!(Barcode::new(" 01".to_string()).is_err());
        assert!(Barcode::new("01\t".to_string()).is_err());
    }

    #[test]
    fn test_barcode_control_characters() {
        assert!(Barcode::new("01\u{0007}02".to_string()).is_err());
    }

    #[test]
    fn test_barcode_deserialize_validates() {
        let ok: Barcode = serde_json::from_str("\"01\"").unwrap();
        assert_eq!(ok.as_str(), "01");

        let err = serde_json::from_str::<Barcode>("\"\"");
        assert!(err.is_err());
    }

    #[test]
    fn test_barcode_serializes_as_plain_string() {
        let barcode = Barcode::new("01".to_string()).unwrap();
        assert_eq!(serde_json::to_string(&barcode).unwrap(), "\"01\"");
    }

    #[test]
    fn test_barcode_display() {
        let barcode = Barcode::new("01".to_string()).unwrap();
        assert_eq!(format!("{}", barcode), "01");
    }

    #[test]
    fn test_tenant_id_new_valid() {
        let tenant = TenantId::new("shop-2024_a.b".to_string()).unwrap();
        assert_eq!(tenant.as_str(), "shop-2024_a.b");
    }

    #[test]
    fn test_tenant_id_empty() {
        assert!(TenantId::new("".to_string()).is_err());
    }

    #[test]
    fn test_tenant_id_invalid_characters() {
        let result = TenantId::new("shop/../other".to_string());
        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("invalid characters"));
    }
}
