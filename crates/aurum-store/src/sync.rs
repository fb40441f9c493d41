//! # Synchronizer
//!
//! Re-fetches all six collections and replaces them in memory.
//!
//! ## Refresh Semantics
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        refresh() Semantics                              │
//! │                                                                         │
//! │  GET /clientes ──────┐                                                  │
//! │  GET /oportunidades ─┤   all six issued concurrently                    │
//! │  GET /pedidos ───────┤   each settles on its own:                       │
//! │  GET /produtos ──────┤     Ok  → collection replaced                    │
//! │  GET /funcionarios ──┤     Err → warn!, previous value kept             │
//! │  GET /logs ──────────┘                                                  │
//! │          │                                                              │
//! │          ▼                                                              │
//! │  settle-all join (never fail-fast) ──► RefreshReport                    │
//! │                                                                         │
//! │  • No cancellation: overlapping refreshes both apply; whichever         │
//! │    fetch settles last wins per collection.                              │
//! │  • No timeouts: a hung fetch leaves that collection stale.              │
//! │  • Never throws: failures become report entries, not panics.            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Triggers
//! The session store calls `refresh()` when logged-in state becomes true,
//! and the mutation gateway calls it after every committed mutation. There
//! is no optimistic patching path anywhere.

use std::fmt;
use std::future::Future;

use aurum_api::{Api, ApiError, ApiResult};
use tracing::{debug, info, warn};

use crate::collections::{Collection, EntityStore};

// =============================================================================
// Refresh Report
// =============================================================================

/// The six entity collections, for reporting purposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Customers,
    Opportunities,
    Orders,
    Products,
    Employees,
    Logs,
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            EntityKind::Customers => "customers",
            EntityKind::Opportunities => "opportunities",
            EntityKind::Orders => "orders",
            EntityKind::Products => "products",
            EntityKind::Employees => "employees",
            EntityKind::Logs => "logs",
        };
        f.write_str(name)
    }
}

/// Outcome of one collection fetch within a refresh.
#[derive(Debug)]
pub struct FetchOutcome {
    pub kind: EntityKind,
    /// `None` when the collection was replaced; the isolated failure
    /// otherwise.
    pub error: Option<ApiError>,
}

impl FetchOutcome {
    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }
}

/// Settle-all result of one `refresh()` call, one outcome per collection.
///
/// Mutation results carry this report, so tests (and forms that care) can
/// observe that the refresh completed without timing hacks.
#[derive(Debug)]
pub struct RefreshReport {
    pub outcomes: Vec<FetchOutcome>,
}

impl RefreshReport {
    /// True when every collection was replaced.
    pub fn all_ok(&self) -> bool {
        self.outcomes.iter().all(FetchOutcome::is_ok)
    }

    /// True when the named collection was replaced in this refresh.
    pub fn succeeded(&self, kind: EntityKind) -> bool {
        self.outcomes
            .iter()
            .any(|outcome| outcome.kind == kind && outcome.is_ok())
    }

    /// The outcomes that failed, in collection order.
    pub fn failures(&self) -> Vec<&FetchOutcome> {
        self.outcomes
            .iter()
            .filter(|outcome| !outcome.is_ok())
            .collect()
    }

    /// True when any fetch came back 401; the session must be invalidated.
    pub fn auth_expired(&self) -> bool {
        self.outcomes
            .iter()
            .any(|outcome| matches!(outcome.error, Some(ref err) if err.is_auth_expired()))
    }
}

// =============================================================================
// Synchronizer
// =============================================================================

/// Re-fetches the six collections against one [`EntityStore`].
#[derive(Debug, Clone)]
pub struct Synchronizer {
    api: Api,
    store: EntityStore,
}

impl Synchronizer {
    pub fn new(api: Api, store: EntityStore) -> Self {
        Synchronizer { api, store }
    }

    /// Issues all six list fetches concurrently and waits for every one of
    /// them to settle. Failures are isolated per collection and reported,
    /// never raised.
    pub async fn refresh(&self) -> RefreshReport {
        debug!("refreshing all entity collections");
        let api = &self.api;

        let (customers, opportunities, orders, products, employees, logs) = tokio::join!(
            Self::pull(
                EntityKind::Customers,
                async move { api.customers().list().await },
                self.store.customers(),
            ),
            Self::pull(
                EntityKind::Opportunities,
                async move { api.opportunities().list().await },
                self.store.opportunities(),
            ),
            Self::pull(
                EntityKind::Orders,
                async move { api.orders().list().await },
                self.store.orders(),
            ),
            Self::pull(
                EntityKind::Products,
                async move { api.products().list().await },
                self.store.products(),
            ),
            Self::pull(
                EntityKind::Employees,
                async move { api.employees().list().await },
                self.store.employees(),
            ),
            Self::pull(
                EntityKind::Logs,
                async move { api.logs().list().await },
                self.store.logs(),
            ),
        );

        let report = RefreshReport {
            outcomes: vec![customers, opportunities, orders, products, employees, logs],
        };
        info!(failed = report.failures().len(), "collection refresh settled");
        report
    }

    /// Settles one collection fetch: replace on success, keep the previous
    /// value and log on failure.
    async fn pull<T, F>(kind: EntityKind, fetch: F, target: &Collection<T>) -> FetchOutcome
    where
        T: Clone,
        F: Future<Output = ApiResult<Vec<T>>>,
    {
        match fetch.await {
            Ok(records) => {
                debug!(collection = %kind, rows = records.len(), "collection replaced");
                target.replace(records).await;
                FetchOutcome { kind, error: None }
            }
            Err(err) => {
                warn!(collection = %kind, error = %err, "fetch failed, keeping previous value");
                FetchOutcome {
                    kind,
                    error: Some(err),
                }
            }
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn report(errors: [Option<ApiError>; 6]) -> RefreshReport {
        let kinds = [
            EntityKind::Customers,
            EntityKind::Opportunities,
            EntityKind::Orders,
            EntityKind::Products,
            EntityKind::Employees,
            EntityKind::Logs,
        ];
        RefreshReport {
            outcomes: kinds
                .into_iter()
                .zip(errors)
                .map(|(kind, error)| FetchOutcome { kind, error })
                .collect(),
        }
    }

    #[test]
    fn test_report_all_ok() {
        let report = report([None, None, None, None, None, None]);
        assert!(report.all_ok());
        assert!(report.failures().is_empty());
        assert!(!report.auth_expired());
    }

    #[test]
    fn test_report_isolated_failure() {
        let report = report([
            None,
            None,
            None,
            Some(ApiError::Network("connection refused".into())),
            None,
            None,
        ]);
        assert!(!report.all_ok());
        assert!(report.succeeded(EntityKind::Customers));
        assert!(!report.succeeded(EntityKind::Products));
        assert_eq!(report.failures().len(), 1);
        assert_eq!(report.failures()[0].kind, EntityKind::Products);
    }

    #[test]
    fn test_report_detects_expired_session() {
        let report = report([Some(ApiError::Unauthorized), None, None, None, None, None]);
        assert!(report.auth_expired());
    }
}
