//! # Customer Endpoint
//!
//! CRUD against `/clientes`.
//!
//! The backend rejects deleting a customer that still owns opportunities or
//! orders; that rejection surfaces verbatim as `ApiError::Rejected` so the
//! form can show the backend's own message.

use aurum_core::Customer;
use tracing::debug;

use crate::dto::{ClienteDto, ClientePayload};
use crate::error::ApiResult;
use crate::http::HttpClient;

/// Client for the `/clientes` endpoint family.
#[derive(Debug, Clone)]
pub struct CustomerApi {
    http: HttpClient,
}

impl CustomerApi {
    pub(crate) fn new(http: HttpClient) -> Self {
        CustomerApi { http }
    }

    /// Lists all customers.
    pub async fn list(&self) -> ApiResult<Vec<Customer>> {
        let rows: Vec<ClienteDto> = self.http.get_json("/clientes").await?;
        Ok(rows.into_iter().map(Customer::from).collect())
    }

    /// Fetches a single customer by id.
    pub async fn get(&self, id: i64) -> ApiResult<Customer> {
        let dto: ClienteDto = self.http.get_json(&format!("/clientes/{}", id)).await?;
        Ok(dto.into())
    }

    /// Creates a customer; the backend assigns the id.
    pub async fn create(&self, customer: &Customer) -> ApiResult<Customer> {
        debug!(name = %customer.name, "creating customer");
        let dto: ClienteDto = self
            .http
            .post_json("/clientes", &ClientePayload::from(customer))
            .await?;
        Ok(dto.into())
    }

    /// Replaces a customer with the full payload.
    pub async fn update(&self, id: i64, customer: &Customer) -> ApiResult<Customer> {
        debug!(id, "updating customer");
        let dto: ClienteDto = self
            .http
            .put_json(&format!("/clientes/{}", id), &ClientePayload::from(customer))
            .await?;
        Ok(dto.into())
    }

    /// Deletes a customer.
    pub async fn delete(&self, id: i64) -> ApiResult<()> {
        debug!(id, "deleting customer");
        self.http.delete(&format!("/clientes/{}", id)).await
    }
}
