//! # aurum-api: REST/JSON Client for Aurum CRM
//!
//! This crate owns the wire contract with the remote CRM backend.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Aurum CRM Data Flow                              │
//! │                                                                         │
//! │  aurum-store (synchronizer, gateway)                                    │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                     aurum-api (THIS CRATE)                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌───────────────┐    ┌──────────────┐   │   │
//! │  │   │     Api       │    │   endpoints   │    │     dto      │   │   │
//! │  │   │  (facade)     │    │ (customer.rs) │    │ (wire names) │   │   │
//! │  │   │               │    │               │    │              │   │   │
//! │  │   │ HttpClient    │◄───│ CustomerApi   │◄───│ ClienteDto   │   │   │
//! │  │   │ token cell    │    │ OrderApi ...  │    │ payloads     │   │   │
//! │  │   └───────────────┘    └───────────────┘    └──────────────┘   │   │
//! │  │                                                                 │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │          Remote CRM backend (HTTP, JSON, bearer token)          │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`http`] - transport, token cell, response classification
//! - [`dto`] - wire DTOs and the per-entity normalization boundary
//! - [`endpoints`] - one client per endpoint family
//! - [`error`] - the error taxonomy every call resolves to
//!
//! ## Usage
//!
//! ```rust,ignore
//! use aurum_api::Api;
//!
//! let api = Api::new("http://localhost:8080")?;
//! let token = api.auth().login("ana@aurum.com", "secret").await?.token;
//! api.http().set_token(token).await;
//!
//! let customers = api.customers().list().await?;
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod dto;
pub mod endpoints;
pub mod error;
pub mod http;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{ApiError, ApiResult};
pub use http::{HttpClient, TokenCell};

pub use endpoints::{
    AuthApi, CustomerApi, EmployeeApi, LogApi, OpportunityApi, OrderApi, ProductApi, UserApi,
};

// =============================================================================
// Api Facade
// =============================================================================

/// Entry point bundling every endpoint client over one transport.
///
/// Cheap to clone; all clones share the same connection pool and token cell.
#[derive(Debug, Clone)]
pub struct Api {
    http: HttpClient,
}

impl Api {
    /// Creates an API handle for the given backend base URL.
    pub fn new(base_url: &str) -> ApiResult<Self> {
        Ok(Api {
            http: HttpClient::new(base_url)?,
        })
    }

    /// The underlying transport (token management lives there).
    pub fn http(&self) -> &HttpClient {
        &self.http
    }

    /// `/auth` endpoint client.
    pub fn auth(&self) -> AuthApi {
        AuthApi::new(self.http.clone())
    }

    /// `/clientes` endpoint client.
    pub fn customers(&self) -> CustomerApi {
        CustomerApi::new(self.http.clone())
    }

    /// `/produtos` endpoint client.
    pub fn products(&self) -> ProductApi {
        ProductApi::new(self.http.clone())
    }

    /// `/pedidos` endpoint client.
    pub fn orders(&self) -> OrderApi {
        OrderApi::new(self.http.clone())
    }

    /// `/oportunidades` endpoint client.
    pub fn opportunities(&self) -> OpportunityApi {
        OpportunityApi::new(self.http.clone())
    }

    /// `/funcionarios` endpoint client.
    pub fn employees(&self) -> EmployeeApi {
        EmployeeApi::new(self.http.clone())
    }

    /// `/logs` endpoint client.
    pub fn logs(&self) -> LogApi {
        LogApi::new(self.http.clone())
    }

    /// `/usuarios` endpoint client.
    pub fn users(&self) -> UserApi {
        UserApi::new(self.http.clone())
    }
}
