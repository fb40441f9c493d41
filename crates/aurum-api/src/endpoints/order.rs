//! # Order Endpoint
//!
//! CRUD against `/pedidos`.
//!
//! Line items travel inside the order payload; the backend owns the
//! composite (order id, product id) keys.

use aurum_core::Order;
use tracing::debug;

use crate::dto::{PedidoDto, PedidoPayload};
use crate::error::ApiResult;
use crate::http::HttpClient;

/// Client for the `/pedidos` endpoint family.
#[derive(Debug, Clone)]
pub struct OrderApi {
    http: HttpClient,
}

impl OrderApi {
    pub(crate) fn new(http: HttpClient) -> Self {
        OrderApi { http }
    }

    /// Lists all orders.
    pub async fn list(&self) -> ApiResult<Vec<Order>> {
        let rows: Vec<PedidoDto> = self.http.get_json("/pedidos").await?;
        rows.into_iter().map(Order::try_from).collect()
    }

    /// Fetches a single order by id.
    pub async fn get(&self, id: i64) -> ApiResult<Order> {
        let dto: PedidoDto = self.http.get_json(&format!("/pedidos/{}", id)).await?;
        dto.try_into()
    }

    /// Creates an order; the backend assigns the id.
    ///
    /// The order must already reference an existing opportunity — the
    /// gateway guarantees that, synthesizing one for direct sales.
    pub async fn create(&self, order: &Order) -> ApiResult<Order> {
        debug!(opportunity_id = order.opportunity_id, "creating order");
        let dto: PedidoDto = self
            .http
            .post_json("/pedidos", &PedidoPayload::from(order))
            .await?;
        dto.try_into()
    }

    /// Replaces an order with the full payload.
    pub async fn update(&self, id: i64, order: &Order) -> ApiResult<Order> {
        debug!(id, "updating order");
        let dto: PedidoDto = self
            .http
            .put_json(&format!("/pedidos/{}", id), &PedidoPayload::from(order))
            .await?;
        dto.try_into()
    }

    /// Deletes an order.
    pub async fn delete(&self, id: i64) -> ApiResult<()> {
        debug!(id, "deleting order");
        self.http.delete(&format!("/pedidos/{}", id)).await
    }
}
