//! # aurum-store: Client-Side State for Aurum CRM
//!
//! Session store, entity collections, synchronizer and mutation gateway —
//! everything mutable on the client side lives in this crate, owned by one
//! explicitly constructed [`CrmClient`] per session.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Aurum CRM State Flow                             │
//! │                                                                         │
//! │  Browser UI (external): reads snapshots, calls gateway/session          │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    aurum-store (THIS CRATE)                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐   ┌───────────────┐   ┌──────────────────┐ │   │
//! │  │   │ SessionStore  │   │ Synchronizer  │   │ MutationGateway  │ │   │
//! │  │   │ login/logout  │──►│ settle-all    │◄──│ CRUD + composite │ │   │
//! │  │   │ token vault   │   │ refresh()     │   │ direct-sale op   │ │   │
//! │  │   └───────┬───────┘   └───────┬───────┘   └──────────────────┘ │   │
//! │  │           │                   │                                 │   │
//! │  │           ▼                   ▼                                 │   │
//! │  │   ┌─────────────────────────────────────────────────────────┐  │   │
//! │  │   │  EntityStore: customers, opportunities, orders,         │  │   │
//! │  │   │  products, employees, logs (six independent locks)      │  │   │
//! │  │   └─────────────────────────────────────────────────────────┘  │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  aurum-api ──► remote CRM backend                                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use aurum_store::{ClientConfig, CrmClient};
//!
//! let client = CrmClient::new(ClientConfig::load()?)?;
//!
//! // adopt a persisted session, or log in fresh
//! if !client.session().restore().await {
//!     client.session().login("ana@aurum.com", "secret").await;
//! }
//!
//! // render from snapshots
//! let customers = client.store().customers().snapshot().await;
//!
//! // mutate through the gateway; the refresh is part of the result
//! let saved = client.gateway().create_customer(&draft).await?;
//! assert!(saved.refresh.all_ok());
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

mod activity;
pub mod collections;
pub mod config;
pub mod error;
pub mod gateway;
pub mod session;
pub mod sync;
pub mod token;

// =============================================================================
// Re-exports
// =============================================================================

pub use collections::{Collection, EntityStore};
pub use config::ClientConfig;
pub use error::{StoreError, StoreResult};
pub use gateway::{MutationGateway, Saved};
pub use session::SessionStore;
pub use sync::{EntityKind, FetchOutcome, RefreshReport, Synchronizer};
pub use token::TokenVault;

use std::sync::Arc;

use aurum_api::Api;

// =============================================================================
// CrmClient Facade
// =============================================================================

/// One client instance: the session, the collections, and the gateway,
/// wired over a single API transport.
///
/// Deliberately not a global — construct exactly one per active session and
/// hand it (or its cheap clones) down to whoever renders.
#[derive(Clone)]
pub struct CrmClient {
    api: Api,
    store: EntityStore,
    sync: Synchronizer,
    session: SessionStore,
    gateway: MutationGateway,
}

impl CrmClient {
    /// Wires a client against the configured backend.
    pub fn new(config: ClientConfig) -> StoreResult<Self> {
        let api = Api::new(&config.api_url)?;
        let store = EntityStore::new();
        let sync = Synchronizer::new(api.clone(), store.clone());
        let vault = Arc::new(TokenVault::new(&config.data_dir));
        let session = SessionStore::new(api.clone(), sync.clone(), store.clone(), vault);
        let gateway = MutationGateway::new(api.clone(), sync.clone(), store.clone(), session.clone());

        Ok(CrmClient {
            api,
            store,
            sync,
            session,
            gateway,
        })
    }

    /// Authentication state and lifecycle.
    pub fn session(&self) -> &SessionStore {
        &self.session
    }

    /// The six collections (read-side).
    pub fn store(&self) -> &EntityStore {
        &self.store
    }

    /// Create/update/delete operations (write-side).
    pub fn gateway(&self) -> &MutationGateway {
        &self.gateway
    }

    /// Manually re-fetches all six collections (settle-all).
    pub async fn refresh(&self) -> RefreshReport {
        self.sync.refresh().await
    }

    /// The underlying API handle.
    pub fn api(&self) -> &Api {
        &self.api
    }
}
