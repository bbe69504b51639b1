use const_format::concatcp;
use reqwest::Client;
use serde_json::Value;
use tracing::debug;

use crate::error::{EolError, Result};
use crate::types::Cycle;

/// Prefix shared by every endoflife.date endpoint.
pub const API_BASE: &str = "https://endoflife.date/api/";

pub const ALL_PRODUCTS_URL: &str = concatcp!(API_BASE, "all.json");

/// Client for the endoflife.date API.
///
/// Holds no state besides the HTTP connection pool and the base URL; every
/// call goes to the network.
#[derive(Debug, Clone)]
pub struct EolClient {
    http: Client,
    base_url: String,
}

impl Default for EolClient {
    fn default() -> Self {
        Self::new()
    }
}

impl EolClient {
    pub fn new() -> Self {
        Self::with_base_url(API_BASE)
    }

    /// Point the client at another `.../api/` prefix (a mirror or a test server).
    /// The prefix is used verbatim, so it should end with `/`.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Use a preconfigured HTTP client, e.g. one with a timeout or proxy.
    pub fn with_http(mut self, http: Client) -> Self {
        self.http = http;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn products_url(&self) -> String {
        format!("{}all.json", self.base_url)
    }

    /// URL of a product's cycle list. The product name is not escaped.
    pub fn cycles_url(&self, product: &str) -> String {
        format!("{}{product}.json", self.base_url)
    }

    /// Fetch the names of all products the API knows about, in API order.
    pub async fn list_products(&self) -> Result<Vec<String>> {
        let url = self.products_url();
        let body = self.get(&url).await?;

        let products: Vec<String> =
            serde_json::from_str(&body).map_err(|source| EolError::Parse {
                url: url.clone(),
                source,
            })?;

        debug!(count = products.len(), %url, "fetched product list");
        Ok(products)
    }

    /// Fetch every release cycle of `product`, in API order.
    ///
    /// Fails as a whole if any element does not match the [`Cycle`] schema.
    pub async fn cycles(&self, product: &str) -> Result<Vec<Cycle>> {
        let url = self.cycles_url(product);
        let body = self.get(&url).await?;

        let elements: Vec<Value> =
            serde_json::from_str(&body).map_err(|source| EolError::Parse {
                url: url.clone(),
                source,
            })?;

        let cycles = elements
            .into_iter()
            .enumerate()
            .map(|(index, element)| {
                serde_json::from_value(element).map_err(|source| EolError::SchemaMismatch {
                    url: url.clone(),
                    index,
                    source,
                })
            })
            .collect::<Result<Vec<Cycle>>>()?;

        debug!(count = cycles.len(), %url, product, "fetched cycles");
        Ok(cycles)
    }

    async fn get(&self, url: &str) -> Result<String> {
        debug!(%url, "GET");

        let response = self.http.get(url).send().await?;
        let status = response.status();

        if !status.is_success() {
            debug!(%url, %status, "request rejected");
            return Err(EolError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        Ok(response.text().await?)
    }
}

/// List all products known to endoflife.date.
pub async fn list_all_products() -> Result<Vec<String>> {
    EolClient::new().list_products().await
}

/// Fetch all release cycles of `product` from endoflife.date.
pub async fn get_all_details(product: &str) -> Result<Vec<Cycle>> {
    EolClient::new().cycles(product).await
}
