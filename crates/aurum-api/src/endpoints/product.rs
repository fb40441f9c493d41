//! # Product Endpoint
//!
//! CRUD against `/produtos` (the jewelry catalog).

use aurum_core::Product;
use tracing::debug;

use crate::dto::{ProdutoDto, ProdutoPayload};
use crate::error::ApiResult;
use crate::http::HttpClient;

/// Client for the `/produtos` endpoint family.
#[derive(Debug, Clone)]
pub struct ProductApi {
    http: HttpClient,
}

impl ProductApi {
    pub(crate) fn new(http: HttpClient) -> Self {
        ProductApi { http }
    }

    /// Lists the whole catalog.
    pub async fn list(&self) -> ApiResult<Vec<Product>> {
        let rows: Vec<ProdutoDto> = self.http.get_json("/produtos").await?;
        rows.into_iter().map(Product::try_from).collect()
    }

    /// Fetches a single product by id.
    pub async fn get(&self, id: i64) -> ApiResult<Product> {
        let dto: ProdutoDto = self.http.get_json(&format!("/produtos/{}", id)).await?;
        dto.try_into()
    }

    /// Creates a product; the backend assigns the id.
    pub async fn create(&self, product: &Product) -> ApiResult<Product> {
        debug!(name = %product.name, "creating product");
        let dto: ProdutoDto = self
            .http
            .post_json("/produtos", &ProdutoPayload::from(product))
            .await?;
        dto.try_into()
    }

    /// Replaces a product with the full payload.
    pub async fn update(&self, id: i64, product: &Product) -> ApiResult<Product> {
        debug!(id, "updating product");
        let dto: ProdutoDto = self
            .http
            .put_json(&format!("/produtos/{}", id), &ProdutoPayload::from(product))
            .await?;
        dto.try_into()
    }

    /// Deletes a product.
    pub async fn delete(&self, id: i64) -> ApiResult<()> {
        debug!(id, "deleting product");
        self.http.delete(&format!("/produtos/{}", id)).await
    }
}
