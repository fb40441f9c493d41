//! # Mutation Gateway
//!
//! Create/update/delete operations per entity type, all following the same
//! contract: forward the payload, and on success re-fetch everything.
//!
//! ## Mutation Contract
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Mutation Contract                                 │
//! │                                                                         │
//! │  gateway.create_x(draft)                                                │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  POST /x ── failure ──► error propagated, local state untouched         │
//! │       │                 (401 additionally invalidates the session)      │
//! │       ▼ success                                                         │
//! │  best-effort audit entry (POST /logs, warn-only)                        │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  refresh() awaited ──► Saved { record, refresh }                        │
//! │                                                                         │
//! │  NO OPTIMISTIC PATCHING: collections change only via refresh().         │
//! │  The backend stays the single source of truth; latency is traded       │
//! │  for the impossibility of client/server drift.                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The gateway validates nothing beyond what the transport enforces; the
//! backend owns every business rule and its rejection messages surface to
//! the caller verbatim.

use std::sync::Arc;

use aurum_api::{Api, ApiResult};
use aurum_core::{
    ActivityLog, Customer, Employee, FunnelStage, Opportunity, Order, OrderDraft, OrderSource,
    OrderStatus, Product,
};
use tracing::{debug, warn};

use crate::activity;
use crate::collections::EntityStore;
use crate::error::{StoreError, StoreResult};
use crate::session::SessionStore;
use crate::sync::{RefreshReport, Synchronizer};

/// Result of a committed create/update: the backend-assigned record plus
/// the settled refresh that followed it.
///
/// The refresh has completed (all six fetches settled) by the time this
/// value exists, so callers can assert ordering structurally.
#[derive(Debug)]
pub struct Saved<T> {
    pub record: T,
    pub refresh: RefreshReport,
}

/// Write-side of the client: one create/update/delete per entity type
/// (activity logs are append-only, so no delete there).
#[derive(Clone)]
pub struct MutationGateway {
    api: Api,
    sync: Synchronizer,
    store: EntityStore,
    session: SessionStore,
}

impl MutationGateway {
    pub(crate) fn new(
        api: Api,
        sync: Synchronizer,
        store: EntityStore,
        session: SessionStore,
    ) -> Self {
        MutationGateway {
            api,
            sync,
            store,
            session,
        }
    }

    // =========================================================================
    // Customers
    // =========================================================================

    pub async fn create_customer(&self, draft: &Customer) -> StoreResult<Saved<Customer>> {
        let created = self.guard(self.api.customers().create(draft).await).await?;
        let description = format!("Novo cliente \"{}\" cadastrado no sistema", created.name);
        self.commit(created, "Cliente adicionado", description).await
    }

    pub async fn update_customer(&self, customer: &Customer) -> StoreResult<Saved<Customer>> {
        let id = customer.id.ok_or(StoreError::MissingId { entity: "cliente" })?;
        let updated = self
            .guard(self.api.customers().update(id, customer).await)
            .await?;
        let description = format!("Cliente \"{}\" atualizado", updated.name);
        self.commit(updated, "Cliente atualizado", description).await
    }

    pub async fn delete_customer(&self, id: i64) -> StoreResult<RefreshReport> {
        self.guard(self.api.customers().delete(id).await).await?;
        self.commit_removal("Cliente removido", format!("Cliente {} removido", id))
            .await
    }

    // =========================================================================
    // Products
    // =========================================================================

    pub async fn create_product(&self, draft: &Product) -> StoreResult<Saved<Product>> {
        let created = self.guard(self.api.products().create(draft).await).await?;
        let description = format!("Novo produto \"{}\" cadastrado no sistema", created.name);
        self.commit(created, "Produto adicionado", description).await
    }

    pub async fn update_product(&self, product: &Product) -> StoreResult<Saved<Product>> {
        let id = product.id.ok_or(StoreError::MissingId { entity: "produto" })?;
        let updated = self
            .guard(self.api.products().update(id, product).await)
            .await?;
        let description = format!("Produto \"{}\" atualizado", updated.name);
        self.commit(updated, "Produto atualizado", description).await
    }

    pub async fn delete_product(&self, id: i64) -> StoreResult<RefreshReport> {
        self.guard(self.api.products().delete(id).await).await?;
        self.commit_removal("Produto removido", format!("Produto {} removido", id))
            .await
    }

    // =========================================================================
    // Employees
    // =========================================================================

    pub async fn create_employee(&self, draft: &Employee) -> StoreResult<Saved<Employee>> {
        let created = self.guard(self.api.employees().create(draft).await).await?;
        let description = format!("Novo funcionário \"{}\" cadastrado no sistema", created.name);
        self.commit(created, "Funcionário adicionado", description)
            .await
    }

    pub async fn update_employee(&self, employee: &Employee) -> StoreResult<Saved<Employee>> {
        let id = employee.id.ok_or(StoreError::MissingId {
            entity: "funcionário",
        })?;
        let updated = self
            .guard(self.api.employees().update(id, employee).await)
            .await?;
        let description = format!("Funcionário \"{}\" atualizado", updated.name);
        self.commit(updated, "Funcionário atualizado", description)
            .await
    }

    pub async fn delete_employee(&self, id: i64) -> StoreResult<RefreshReport> {
        self.guard(self.api.employees().delete(id).await).await?;
        self.commit_removal(
            "Funcionário removido",
            format!("Funcionário {} removido", id),
        )
        .await
    }

    // =========================================================================
    // Opportunities
    // =========================================================================

    pub async fn create_opportunity(&self, draft: &Opportunity) -> StoreResult<Saved<Opportunity>> {
        let created = self
            .guard(self.api.opportunities().create(draft).await)
            .await?;
        let description = format!(
            "Nova oportunidade \"{}\" criada - Valor: {}",
            created.name, created.estimated_value
        );
        self.commit(created, "Oportunidade criada", description).await
    }

    pub async fn update_opportunity(
        &self,
        opportunity: &Opportunity,
    ) -> StoreResult<Saved<Opportunity>> {
        let id = opportunity.id.ok_or(StoreError::MissingId {
            entity: "oportunidade",
        })?;
        let updated = self
            .guard(self.api.opportunities().update(id, opportunity).await)
            .await?;
        let description = format!("Oportunidade \"{}\" atualizada", updated.name);
        self.commit(updated, "Oportunidade atualizada", description)
            .await
    }

    pub async fn delete_opportunity(&self, id: i64) -> StoreResult<RefreshReport> {
        self.guard(self.api.opportunities().delete(id).await).await?;
        self.commit_removal(
            "Oportunidade removida",
            format!("Oportunidade {} removida", id),
        )
        .await
    }

    /// Convenience: re-submits an opportunity with a new funnel stage.
    ///
    /// Advisory only — nothing here checks whether the hop is legal.
    pub async fn set_opportunity_stage(
        &self,
        id: i64,
        stage: FunnelStage,
    ) -> StoreResult<Saved<Opportunity>> {
        let mut opportunity = self
            .store
            .opportunities()
            .snapshot()
            .await
            .into_iter()
            .find(|candidate| candidate.id == Some(id))
            .ok_or(StoreError::NotFound {
                entity: "oportunidade",
                id,
            })?;
        opportunity.stage = stage;

        let updated = self
            .guard(self.api.opportunities().update(id, &opportunity).await)
            .await?;
        let description = format!(
            "Oportunidade \"{}\" avançou para \"{}\"",
            updated.name,
            stage.label()
        );
        self.commit(updated, "Status da oportunidade atualizado", description)
            .await
    }

    // =========================================================================
    // Orders
    // =========================================================================

    /// Creates an order from a draft, synthesizing the funnel reference when
    /// the sale never went through one.
    ///
    /// ## Direct Sales
    /// ```text
    /// OrderSource::DirectSale { customer_id }
    ///       │
    ///       ▼
    /// POST /oportunidades  { stage: FECHADA, value: order total,
    ///                        close date: today, cliente: { id } }
    ///       │ failure ──► whole operation fails, NO order is submitted
    ///       ▼ success
    /// POST /pedidos        { oportunidade: { id: <new> }, ... }
    /// ```
    /// An order can therefore never reach the backend with a dangling
    /// opportunity reference.
    pub async fn create_order(&self, draft: &OrderDraft) -> StoreResult<Saved<Order>> {
        let opportunity_id = match draft.source {
            OrderSource::Opportunity { opportunity_id } => opportunity_id,
            OrderSource::DirectSale { customer_id } => {
                debug!(customer_id, "synthesizing direct-sale opportunity");
                let synthetic = Opportunity {
                    id: None,
                    name: "Venda direta".to_string(),
                    estimated_value: draft.total(),
                    stage: FunnelStage::Closed,
                    expected_close: chrono::Local::now().date_naive(),
                    customer_id,
                };
                let created = self
                    .guard(self.api.opportunities().create(&synthetic).await)
                    .await?;
                created.id.ok_or(StoreError::IdentityMissing {
                    entity: "oportunidade",
                })?
            }
        };

        let order = Order {
            id: None,
            date: draft.date,
            total: draft.total(),
            status: draft.status,
            opportunity_id,
            items: draft.items.clone(),
        };

        let created = self.guard(self.api.orders().create(&order).await).await?;
        let description = format!("Novo pedido criado - Valor: {}", created.total);
        self.commit(created, "Pedido criado", description).await
    }

    pub async fn update_order(&self, order: &Order) -> StoreResult<Saved<Order>> {
        let id = order.id.ok_or(StoreError::MissingId { entity: "pedido" })?;
        let updated = self.guard(self.api.orders().update(id, order).await).await?;
        let description = format!("Pedido {} atualizado", id);
        self.commit(updated, "Pedido atualizado", description).await
    }

    pub async fn delete_order(&self, id: i64) -> StoreResult<RefreshReport> {
        self.guard(self.api.orders().delete(id).await).await?;
        self.commit_removal("Pedido removido", format!("Pedido {} removido", id))
            .await
    }

    /// Convenience: re-submits an order with a new status. Advisory only.
    pub async fn set_order_status(&self, id: i64, status: OrderStatus) -> StoreResult<Saved<Order>> {
        let mut order = self
            .store
            .orders()
            .snapshot()
            .await
            .into_iter()
            .find(|candidate| candidate.id == Some(id))
            .ok_or(StoreError::NotFound {
                entity: "pedido",
                id,
            })?;
        order.status = status;

        let updated = self.guard(self.api.orders().update(id, &order).await).await?;
        let description = format!("Pedido {} teve status alterado para \"{}\"", id, status.label());
        self.commit(updated, "Status do pedido atualizado", description)
            .await
    }

    // =========================================================================
    // Activity Logs
    // =========================================================================

    /// Appends a user-authored activity entry (meetings, calls, ...).
    ///
    /// Append-only: there is deliberately no update or delete counterpart.
    /// No audit entry about the entry itself — that way lies recursion.
    pub async fn append_activity(&self, entry: &ActivityLog) -> StoreResult<Saved<ActivityLog>> {
        let created = self.guard(self.api.logs().create(entry).await).await?;
        let refresh = self.refresh_after_commit().await;
        Ok(Saved {
            record: created,
            refresh,
        })
    }

    // =========================================================================
    // Shared Plumbing
    // =========================================================================

    /// Classifies a backend result: a 401 invalidates the session on this
    /// same call path before the error reaches the caller.
    async fn guard<T>(&self, result: ApiResult<T>) -> StoreResult<T> {
        match result {
            Ok(value) => Ok(value),
            Err(err) => {
                if err.is_auth_expired() {
                    self.session.invalidate().await;
                }
                Err(err.into())
            }
        }
    }

    /// Finishes a committed create/update: audit entry, then the awaited
    /// refresh, then the combined result.
    async fn commit<T>(&self, record: T, title: &str, description: String) -> StoreResult<Saved<T>> {
        activity::record(
            &self.api,
            self.session.current_user().await,
            title,
            &description,
        )
        .await;

        let refresh = self.refresh_after_commit().await;
        Ok(Saved { record, refresh })
    }

    /// Finishes a committed delete (no record to return).
    async fn commit_removal(&self, title: &str, description: String) -> StoreResult<RefreshReport> {
        activity::record(
            &self.api,
            self.session.current_user().await,
            title,
            &description,
        )
        .await;

        Ok(self.refresh_after_commit().await)
    }

    async fn refresh_after_commit(&self) -> RefreshReport {
        let refresh = self.sync.refresh().await;
        if refresh.auth_expired() {
            // the mutation itself committed; only the session died
            warn!("session expired during post-mutation refresh");
            self.session.invalidate().await;
        }
        refresh
    }
}
