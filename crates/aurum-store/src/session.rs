//! # Session Store
//!
//! Tracks whether a valid bearer token is held and owns the login/logout
//! lifecycle.
//!
//! ## Session Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Session Lifecycle                                 │
//! │                                                                         │
//! │  startup ──► restore()                                                  │
//! │                 │ vault has token?                                      │
//! │                 ├── no  ──► logged out                                  │
//! │                 └── yes ──► adopt token ──► refresh()                   │
//! │                                                                         │
//! │  login(id, secret)                                                      │
//! │     │ POST /auth/login                                                  │
//! │     ├── failure ──► false, nothing changed                              │
//! │     └── success ──► vault.save ──► token cell ──► logged_in = true      │
//! │                        ──► refresh() ──► true                           │
//! │                                                                         │
//! │  logout() / 401 anywhere                                                │
//! │     └── clear token cell ──► vault.clear ──► logged_in = false          │
//! │            ──► clear all six collections (immediately, not lazily)      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Invariant
//! `is_logged_in()` always agrees with "a token is currently persisted",
//! except inside the narrow window of a 401 response — and even there the
//! transport clears the token cell synchronously before the error
//! propagates, and whoever sees the error calls [`SessionStore::invalidate`]
//! on the same call path.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use aurum_api::Api;
use tokio::sync::RwLock;
use tracing::{info, warn};

use crate::activity;
use crate::collections::EntityStore;
use crate::sync::Synchronizer;
use crate::token::TokenVault;

/// Authentication state for one client instance.
///
/// Cheap to clone; clones observe the same session.
#[derive(Clone)]
pub struct SessionStore {
    api: Api,
    sync: Synchronizer,
    store: EntityStore,
    vault: Arc<TokenVault>,
    logged_in: Arc<AtomicBool>,
    current_user: Arc<RwLock<Option<String>>>,
}

impl SessionStore {
    pub(crate) fn new(
        api: Api,
        sync: Synchronizer,
        store: EntityStore,
        vault: Arc<TokenVault>,
    ) -> Self {
        SessionStore {
            api,
            sync,
            store,
            vault,
            logged_in: Arc::new(AtomicBool::new(false)),
            current_user: Arc::new(RwLock::new(None)),
        }
    }

    /// Whether a session is currently active.
    pub fn is_logged_in(&self) -> bool {
        self.logged_in.load(Ordering::SeqCst)
    }

    /// Email of the logged-in user, when known.
    pub async fn current_user(&self) -> Option<String> {
        self.current_user.read().await.clone()
    }

    /// Exchanges credentials for a session.
    ///
    /// On success: persists the token, flips logged-in to true, triggers a
    /// full refresh, and returns `true`. On any failure — bad credentials,
    /// network trouble, or a vault that cannot be written — returns `false`
    /// with no state changed.
    pub async fn login(&self, identifier: &str, secret: &str) -> bool {
        let response = match self.api.auth().login(identifier, secret).await {
            Ok(response) => response,
            Err(err) => {
                warn!(user = %identifier, error = %err, "login failed");
                return false;
            }
        };

        // Persist before flipping state: logged-in must never be true
        // without a durably stored token.
        if let Err(err) = self.vault.save(&response.token) {
            warn!(error = %err, "could not persist token, aborting login");
            return false;
        }

        self.api.http().set_token(response.token).await;
        *self.current_user.write().await = Some(identifier.to_string());
        self.logged_in.store(true, Ordering::SeqCst);
        info!(user = %identifier, "login succeeded");

        activity::record(
            &self.api,
            Some(identifier.to_string()),
            "Login realizado",
            &format!("Usuário {} entrou no sistema", identifier),
        )
        .await;

        let report = self.sync.refresh().await;
        if report.auth_expired() {
            // token rejected immediately after issue; treat as failed login
            self.invalidate().await;
            return false;
        }

        true
    }

    /// Ends the session: clears the token (durable and in-memory), flips
    /// logged-in to false, and empties all six collections immediately so
    /// no data lingers into the next session.
    pub async fn logout(&self) {
        if self.is_logged_in() {
            let actor = self.current_user().await;
            let who = actor.clone().unwrap_or_else(|| "desconhecido".into());
            activity::record(
                &self.api,
                actor,
                "Logout realizado",
                &format!("Usuário {} saiu do sistema", who),
            )
            .await;
        }

        info!("logout");
        self.invalidate().await;
    }

    /// Adopts a previously persisted token on startup.
    ///
    /// Returns `true` when a session was restored (and the initial refresh
    /// triggered); `false` when no token was persisted or the token turned
    /// out to be stale.
    pub async fn restore(&self) -> bool {
        let Some(token) = self.vault.load() else {
            return false;
        };

        self.api.http().set_token(token).await;
        self.logged_in.store(true, Ordering::SeqCst);
        info!("persisted session restored");

        let report = self.sync.refresh().await;
        if report.auth_expired() {
            self.invalidate().await;
            return false;
        }

        true
    }

    /// Tears the session down without talking to the backend.
    ///
    /// Shared by logout and the 401 path: token cell, vault, logged-in flag
    /// and all six collections are cleared synchronously.
    pub async fn invalidate(&self) {
        self.api.http().clear_token().await;
        if let Err(err) = self.vault.clear() {
            warn!(error = %err, "could not remove persisted token");
        }
        self.logged_in.store(false, Ordering::SeqCst);
        *self.current_user.write().await = None;
        self.store.clear_all().await;
    }
}
