/// The two reads the browser issues, with their cache keys
use super::{CatalogClient, FetchError};
use crate::state::data::{Product, ProductId};
use crate::state::query::QueryKey;

/// Root segment shared by every catalog key
const PRODUCTS: &str = "products";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogQuery {
    /// `GET /products`
    Products,
    /// `GET /products/{id}`
    Product(ProductId),
}

/// Payload stored in the query cache
#[derive(Debug, Clone, PartialEq)]
pub enum CatalogData {
    Products(Vec<Product>),
    Product(Product),
}

impl CatalogData {
    pub fn products(&self) -> Option<&[Product]> {
        match self {
            CatalogData::Products(products) => Some(products),
            CatalogData::Product(_) => None,
        }
    }

    pub fn product(&self) -> Option<&Product> {
        match self {
            CatalogData::Product(product) => Some(product),
            CatalogData::Products(_) => None,
        }
    }
}

impl CatalogQuery {
    /// `["products"]` for the list, `["products", "<id>"]` for a detail
    pub fn key(&self) -> QueryKey {
        match self {
            CatalogQuery::Products => QueryKey::new([PRODUCTS]),
            CatalogQuery::Product(id) => QueryKey::new([PRODUCTS.to_string(), id.to_string()]),
        }
    }

    /// Run the query against the store
    ///
    /// Takes the client by value so the future is `'static` and can be
    /// handed to the runtime as-is.
    pub async fn fetch(self, client: CatalogClient) -> Result<CatalogData, FetchError> {
        match self {
            CatalogQuery::Products => client.list_products().await.map(CatalogData::Products),
            CatalogQuery::Product(id) => client.get_product(id).await.map(CatalogData::Product),
        }
    }
}
