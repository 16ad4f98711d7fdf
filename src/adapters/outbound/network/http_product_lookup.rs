use crate::bom_resolution::domain::{Barcode, ProductRecord};
use crate::ports::outbound::{LookupContext, ProductLookup};
use crate::shared::Result;
use async_trait::async_trait;
use reqwest::StatusCode;
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, warn};

/// Header carrying the tenant scope of every request
const TENANT_HEADER: &str = "X-Tenant-ID";

/// Base delay between retries, multiplied by the attempt number
const RETRY_BACKOFF_MS: u64 = 100;

/// Response envelope of the document store API
#[derive(Debug, Deserialize)]
struct ApiEnvelope {
    #[serde(default)]
    success: bool,
    #[serde(default)]
    data: Option<ProductRecord>,
}

/// Failure of a single request attempt
#[derive(Debug)]
struct AttemptError {
    retryable: bool,
    source: anyhow::Error,
}

impl AttemptError {
    fn transient(source: anyhow::Error) -> Self {
        Self {
            retryable: true,
            source,
        }
    }

    fn permanent(source: anyhow::Error) -> Self {
        Self {
            retryable: false,
            source,
        }
    }
}

/// HttpProductLookup adapter reading product records from a document store
///
/// Fetches `GET {base}/product/barcode/pk/{barcode}` with the tenant in the
/// `X-Tenant-ID` header. A 404 or an envelope with `success: false` means the
/// barcode does not exist. Connection failures, 5xx and 429 responses are
/// retried with linear back-off, but never past the lookup deadline.
pub struct HttpProductLookup {
    client: reqwest::Client,
    base_url: String,
    token: Option<String>,
    max_retries: u32,
}

impl HttpProductLookup {
    /// Creates a lookup against the store at `base_url`.
    ///
    /// # Errors
    /// Returns an error if `base_url` is not an http(s) URL or the client
    /// cannot be built
    pub fn new(base_url: &str, token: Option<String>) -> Result<Self> {
        let base_url = base_url.trim().trim_end_matches('/');
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            anyhow::bail!(
                "Invalid store URL: {}. The URL must start with http:// or https://",
                base_url
            );
        }

        let user_agent = format!("bom-resolver/{}", env!("CARGO_PKG_VERSION"));
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.to_string(),
            token: token.filter(|t| !t.trim().is_empty()),
            max_retries: 3,
        })
    }

    pub fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries.max(1);
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Validates a barcode before it becomes part of a URL path
    fn validate_url_component(component: &str) -> Result<()> {
        if component.contains('/') || component.contains('\\') {
            anyhow::bail!("Security: Barcode contains path separators which are not allowed");
        }

        if component.contains("..") {
            anyhow::bail!("Security: Barcode contains '..' which is not allowed");
        }

        if component.contains('#') || component.contains('?') {
            anyhow::bail!("Security: Barcode contains URL-unsafe characters");
        }

        Ok(())
    }

    fn product_url(&self, barcode: &Barcode) -> Result<String> {
        Self::validate_url_component(barcode.as_str())?;
        Ok(format!(
            "{}/product/barcode/pk/{}",
            self.base_url,
            urlencoding::encode(barcode.as_str())
        ))
    }

    async fn fetch_with_retry(
        &self,
        ctx: &LookupContext,
        url: &str,
    ) -> Result<Option<ProductRecord>> {
        let mut last_error = None;

        for attempt in 1..=self.max_retries {
            match self.fetch_once(ctx, url).await {
                Ok(found) => return Ok(found),
                Err(e) if !e.retryable => return Err(e.source),
                Err(e) => {
                    warn!(url, attempt, error = %e.source, "product lookup attempt failed");
                    last_error = Some(e.source);

                    if attempt < self.max_retries {
                        let backoff = Duration::from_millis(RETRY_BACKOFF_MS * attempt as u64);
                        if ctx.remaining().is_some_and(|left| left <= backoff) {
                            break;
                        }
                        tokio::time::sleep(backoff).await;
                    }
                }
            }
        }

        Err(last_error.unwrap_or_else(|| anyhow::anyhow!("No lookup attempt was made for {}", url)))
    }

    async fn fetch_once(
        &self,
        ctx: &LookupContext,
        url: &str,
    ) -> std::result::Result<Option<ProductRecord>, AttemptError> {
        let mut request = self
            .client
            .get(url)
            .header(TENANT_HEADER, ctx.tenant().as_str());
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }
        if let Some(left) = ctx.remaining() {
            request = request.timeout(left);
        }

        let response = request
            .send()
            .await
            .map_err(|e| AttemptError::transient(e.into()))?;

        let status = response.status();
        debug!(url, status = status.as_u16(), "document store responded");

        if status == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !status.is_success() {
            let error = anyhow::anyhow!("Document store returned status code {}", status);
            return Err(if status.is_server_error() || status == StatusCode::TOO_MANY_REQUESTS {
                AttemptError::transient(error)
            } else {
                AttemptError::permanent(error)
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| AttemptError::transient(e.into()))?;
        Self::parse_envelope(&body).map_err(AttemptError::permanent)
    }

    fn parse_envelope(body: &str) -> Result<Option<ProductRecord>> {
        let envelope: ApiEnvelope = serde_json::from_str(body)
            .map_err(|e| anyhow::anyhow!("Invalid response from document store: {}", e))?;

        if !envelope.success {
            return Ok(None);
        }
        Ok(envelope.data)
    }
}

#[async_trait]
impl ProductLookup for HttpProductLookup {
    async fn find_product(
        &self,
        ctx: &LookupContext,
        barcode: &Barcode,
    ) -> Result<Option<ProductRecord>> {
        let url = self.product_url(barcode)?;
        self.fetch_with_retry(ctx, &url).await
    }
}
