//! Open Food Facts product API client.

use async_trait::async_trait;
use lens_config::CatalogConfig;
use lens_core::Barcode;

use crate::{ProductSource, SourceKind, error::CatalogError, http::check_response, product::RawProduct};

/// Envelope of `GET /api/v2/product/{barcode}.json`.
///
/// `status` is `1` when the product exists. Anything else, including a
/// missing `product`, means the catalog does not know the barcode.
#[derive(serde::Deserialize)]
struct OffResponse {
    #[serde(default)]
    status: Option<serde_json::Value>,
    #[serde(default)]
    product: Option<RawProduct>,
}

impl OffResponse {
    fn into_product(self) -> Option<RawProduct> {
        let found = self
            .status
            .as_ref()
            .and_then(serde_json::Value::as_i64)
            .is_some_and(|s| s == 1);
        if found { self.product } else { None }
    }
}

/// HTTP client for the Open Food Facts product endpoint.
pub struct CatalogClient {
    http: reqwest::Client,
    base_url: String,
    timeout_secs: u64,
}

impl CatalogClient {
    /// Build a client bounded by the configured timeout.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Http`] if the underlying `reqwest::Client`
    /// cannot be built (e.g. TLS backend initialization fails).
    pub fn new(config: &CatalogConfig) -> Result<Self, CatalogError> {
        let http = reqwest::Client::builder()
            .user_agent(config.user_agent.as_str())
            .timeout(config.timeout())
            .build()?;
        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            timeout_secs: config.timeout_secs,
        })
    }

    fn product_url(&self, barcode: &Barcode) -> String {
        format!(
            "{}/{}.json",
            self.base_url,
            urlencoding::encode(barcode.as_str())
        )
    }

    fn transport_error(&self, err: reqwest::Error) -> CatalogError {
        if err.is_timeout() {
            CatalogError::Timeout {
                timeout_secs: self.timeout_secs,
            }
        } else {
            CatalogError::Http(err)
        }
    }
}

#[async_trait]
impl ProductSource for CatalogClient {
    async fn fetch_canonical(&self, barcode: &Barcode) -> Result<Option<RawProduct>, CatalogError> {
        let url = self.product_url(barcode);
        tracing::debug!(%barcode, %url, "fetching product from catalog");

        let resp = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| self.transport_error(e))?;
        let Some(resp) = check_response(resp) else {
            return Ok(None);
        };

        let body = resp.text().await.map_err(|e| self.transport_error(e))?;
        let data: OffResponse =
            serde_json::from_str(&body).map_err(|e| CatalogError::Parse(e.to_string()))?;
        Ok(data.into_product())
    }

    fn kind(&self) -> SourceKind {
        SourceKind::OpenFoodFacts
    }
}
