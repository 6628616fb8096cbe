/// HTTP client for the remote store API
///
/// One attempt per call, no retries. Bodies are read as bytes and
/// decoded separately so that transport failures and malformed payloads
/// end up as different `FetchError` kinds.

use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use serde_json::Value;

use super::FetchError;
use crate::config::CatalogConfig;
use crate::state::data::{NewProduct, Product, ProductId};

#[derive(Debug, Clone)]
pub struct CatalogClient {
    client: Client,
    base_url: String,
}

impl CatalogClient {
    /// Create a client from configuration
    pub fn new(config: &CatalogConfig) -> Result<Self, FetchError> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// `GET /products`
    pub async fn list_products(&self) -> Result<Vec<Product>, FetchError> {
        let body = self.get("products").await?;
        decode(&body)
    }

    /// `GET /products/{id}`
    ///
    /// The store answers an unknown id with 200 and an empty body; that
    /// is reported as a remote not-found error.
    pub async fn get_product(&self, id: ProductId) -> Result<Product, FetchError> {
        let body = self.get(&format!("products/{}", id)).await?;
        if is_blank(&body) {
            return Err(FetchError::Remote {
                status: 404,
                message: format!("product {} not found", id),
            });
        }
        decode(&body)
    }

    /// `POST /products` with the fields form-encoded
    ///
    /// The confirmation is returned untouched; an empty body is `Null`.
    pub async fn create_product(&self, product: &NewProduct) -> Result<Value, FetchError> {
        tracing::debug!(id = product.id, title = %product.title, "submitting product");
        let response = self
            .client
            .post(self.url("products"))
            .form(product)
            .send()
            .await?;

        let body = read_body(response).await?;
        if is_blank(&body) {
            return Ok(Value::Null);
        }
        decode(&body)
    }

    async fn get(&self, path: &str) -> Result<Vec<u8>, FetchError> {
        let url = self.url(path);
        tracing::debug!(%url, "GET");
        let response = self.client.get(&url).send().await?;
        read_body(response).await
    }
}

/// Read the full body, turning non-2xx statuses into remote errors
async fn read_body(response: Response) -> Result<Vec<u8>, FetchError> {
    let status = response.status();
    let body = response.bytes().await?;

    if !status.is_success() {
        return Err(FetchError::Remote {
            status: status.as_u16(),
            message: String::from_utf8_lossy(&body).trim().to_string(),
        });
    }

    Ok(body.to_vec())
}

fn decode<T: DeserializeOwned>(body: &[u8]) -> Result<T, FetchError> {
    serde_json::from_slice(body).map_err(Into::into)
}

/// Empty or `null` bodies carry no payload
fn is_blank(body: &[u8]) -> bool {
    let text = String::from_utf8_lossy(body);
    let text = text.trim();
    text.is_empty() || text == "null"
}
