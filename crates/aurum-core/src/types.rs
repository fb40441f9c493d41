//! # Domain Types
//!
//! Canonical entity records and enums used throughout Aurum CRM.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Records                                  │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Customer     │   │   Opportunity   │   │     Order       │       │
//! │  │  ─────────────  │◄──│  ─────────────  │◄──│  ─────────────  │       │
//! │  │  id             │   │  id             │   │  id             │       │
//! │  │  name, tax_id   │   │  customer_id    │   │  opportunity_id │       │
//! │  │  email, account │   │  stage, value   │   │  status, items  │       │
//! │  └─────────────────┘   └─────────────────┘   └────────┬────────┘       │
//! │                                                       │                 │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌────────▼────────┐       │
//! │  │    Employee     │   │   ActivityLog   │   │   OrderItem     │       │
//! │  │  name, role     │   │  title, kind    │   │  product_id     │──►Product
//! │  │  tax_id, email  │   │  recorded_at    │   │  qty, size      │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Identity
//! Every record's `id` is assigned by the backend and is `None` until the
//! record has been created there. A record therefore doubles as its own
//! creation draft: build it with `id: None` and hand it to the gateway.
//!
//! ## Wire Encoding
//! Enum variants serialize to the backend's SCREAMING-case Portuguese values
//! (`PROSPECCAO`, `PENDENTE`, ...). Those strings are the contract; the
//! `label()` methods carry the human-readable pt-BR labels the views render.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;

// =============================================================================
// Funnel Stage
// =============================================================================

/// Sales funnel stage of an [`Opportunity`].
///
/// ## Stage Flow
/// ```text
/// PROSPECTING ──► QUALIFICATION ──► PROPOSAL ──► NEGOTIATION ──► CLOSED
///                                                      │
///                                                      └────────► LOST
/// ```
///
/// `Closed` and `Lost` are terminal. Transitions are advisory: the UI offers
/// "advance to next stage" as a convenience, the client never enforces
/// legality and the backend has the final word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum FunnelStage {
    #[serde(rename = "PROSPECCAO")]
    Prospecting,
    #[serde(rename = "QUALIFICACAO")]
    Qualification,
    #[serde(rename = "PROPOSTA")]
    Proposal,
    #[serde(rename = "NEGOCIACAO")]
    Negotiation,
    #[serde(rename = "FECHADA")]
    Closed,
    #[serde(rename = "PERDIDA")]
    Lost,
}

impl FunnelStage {
    /// True for stages no convenience control should advance past.
    pub const fn is_terminal(&self) -> bool {
        matches!(self, FunnelStage::Closed | FunnelStage::Lost)
    }

    /// The next stage on the winning path, if any.
    ///
    /// `Lost` is only ever entered explicitly, so it is nobody's `next()`.
    pub const fn next(&self) -> Option<FunnelStage> {
        match self {
            FunnelStage::Prospecting => Some(FunnelStage::Qualification),
            FunnelStage::Qualification => Some(FunnelStage::Proposal),
            FunnelStage::Proposal => Some(FunnelStage::Negotiation),
            FunnelStage::Negotiation => Some(FunnelStage::Closed),
            FunnelStage::Closed | FunnelStage::Lost => None,
        }
    }

    /// Display label (pt-BR), as rendered by the views.
    pub const fn label(&self) -> &'static str {
        match self {
            FunnelStage::Prospecting => "Prospecção",
            FunnelStage::Qualification => "Qualificação",
            FunnelStage::Proposal => "Proposta",
            FunnelStage::Negotiation => "Negociação",
            FunnelStage::Closed => "Fechada",
            FunnelStage::Lost => "Perdida",
        }
    }
}

// =============================================================================
// Order Status
// =============================================================================

/// Fulfilment status of an [`Order`].
///
/// ## Status Flow
/// ```text
/// PENDING ──► CONFIRMED ──► PRODUCTION ──► PAID ──► SHIPPED ──► DELIVERED
///     │
///     └──────────────────────► CANCELLED (from any non-terminal status)
/// ```
///
/// `Delivered` and `Cancelled` are terminal. As with funnel stages,
/// transitions are advisory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum OrderStatus {
    #[serde(rename = "PENDENTE")]
    Pending,
    #[serde(rename = "CONFIRMADO")]
    Confirmed,
    #[serde(rename = "PRODUCAO")]
    Production,
    #[serde(rename = "PAGO")]
    Paid,
    #[serde(rename = "ENVIADO")]
    Shipped,
    #[serde(rename = "ENTREGUE")]
    Delivered,
    #[serde(rename = "CANCELADO")]
    Cancelled,
}

impl OrderStatus {
    /// True for statuses no convenience control should advance past.
    pub const fn is_terminal(&self) -> bool {
        matches!(self, OrderStatus::Delivered | OrderStatus::Cancelled)
    }

    /// The next status on the happy path, if any.
    pub const fn next(&self) -> Option<OrderStatus> {
        match self {
            OrderStatus::Pending => Some(OrderStatus::Confirmed),
            OrderStatus::Confirmed => Some(OrderStatus::Production),
            OrderStatus::Production => Some(OrderStatus::Paid),
            OrderStatus::Paid => Some(OrderStatus::Shipped),
            OrderStatus::Shipped => Some(OrderStatus::Delivered),
            OrderStatus::Delivered | OrderStatus::Cancelled => None,
        }
    }

    /// Display label (pt-BR), as rendered by the views.
    pub const fn label(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "Pendente",
            OrderStatus::Confirmed => "Confirmado",
            OrderStatus::Production => "Em Produção",
            OrderStatus::Paid => "Pago",
            OrderStatus::Shipped => "Enviado",
            OrderStatus::Delivered => "Entregue",
            OrderStatus::Cancelled => "Cancelado",
        }
    }
}

// =============================================================================
// Access Level
// =============================================================================

/// Backend access level of a [`UserAccount`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum AccessLevel {
    #[serde(rename = "ADMINISTRADOR")]
    Administrator,
    #[serde(rename = "GERENTE")]
    Manager,
    #[serde(rename = "PADRAO")]
    Standard,
}

// =============================================================================
// Activity Kind
// =============================================================================

/// Kind of an [`ActivityLog`] entry.
///
/// The backend stores this as a small integer code; [`ActivityKind::code`]
/// and [`ActivityKind::from_code`] translate at the wire boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum ActivityKind {
    Meeting,
    Call,
    Email,
    System,
    Other,
}

impl ActivityKind {
    /// Wire code of this kind.
    pub const fn code(&self) -> i32 {
        match self {
            ActivityKind::Meeting => 1,
            ActivityKind::Call => 2,
            ActivityKind::Email => 3,
            ActivityKind::System => 4,
            ActivityKind::Other => 5,
        }
    }

    /// Decodes a wire code.
    ///
    /// Unknown codes collapse to `Other`: activity entries are advisory
    /// audit data and one bad code must not poison a whole log fetch.
    pub const fn from_code(code: i32) -> ActivityKind {
        match code {
            1 => ActivityKind::Meeting,
            2 => ActivityKind::Call,
            3 => ActivityKind::Email,
            4 => ActivityKind::System,
            _ => ActivityKind::Other,
        }
    }

    /// Display label (pt-BR), as rendered by the views.
    pub const fn label(&self) -> &'static str {
        match self {
            ActivityKind::Meeting => "Reunião",
            ActivityKind::Call => "Ligação",
            ActivityKind::Email => "Email",
            ActivityKind::System => "Sistema",
            ActivityKind::Other => "Outro",
        }
    }
}

// =============================================================================
// Product Category
// =============================================================================

/// Jewelry category of a [`Product`].
///
/// The backend stores this as a small integer code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum ProductCategory {
    Ring,
    Necklace,
    Earring,
    Bracelet,
    Set,
}

impl ProductCategory {
    /// Wire code of this category.
    pub const fn code(&self) -> i32 {
        match self {
            ProductCategory::Ring => 1,
            ProductCategory::Necklace => 2,
            ProductCategory::Earring => 3,
            ProductCategory::Bracelet => 4,
            ProductCategory::Set => 5,
        }
    }

    /// Decodes a wire code. Categories are business-meaningful, so an
    /// unknown code is a contract violation and surfaces as `None`.
    pub const fn from_code(code: i32) -> Option<ProductCategory> {
        match code {
            1 => Some(ProductCategory::Ring),
            2 => Some(ProductCategory::Necklace),
            3 => Some(ProductCategory::Earring),
            4 => Some(ProductCategory::Bracelet),
            5 => Some(ProductCategory::Set),
            _ => None,
        }
    }

    /// Display label (pt-BR), as rendered by the views.
    pub const fn label(&self) -> &'static str {
        match self {
            ProductCategory::Ring => "Anel",
            ProductCategory::Necklace => "Colar",
            ProductCategory::Earring => "Brinco",
            ProductCategory::Bracelet => "Pulseira",
            ProductCategory::Set => "Conjunto",
        }
    }
}

// =============================================================================
// Contact & Account
// =============================================================================

/// A postal address.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct PostalAddress {
    pub street: String,
    pub number: String,
    pub district: String,
    pub city: String,
    pub state: String,
    pub postal_code: String,
    pub complement: Option<String>,
}

/// Contact details: a postal address plus phone and email.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    pub id: Option<i64>,
    pub address: PostalAddress,
    pub phone: String,
    pub email: String,
}

/// A backend login account, optionally attached to a customer or employee.
///
/// Read/create only — the client never edits or deletes accounts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct UserAccount {
    pub id: Option<i64>,
    pub email: String,
    pub access_level: AccessLevel,
    pub contact: Option<Contact>,
}

// =============================================================================
// Customer & Employee
// =============================================================================

/// A customer (a reseller shop or an individual buyer).
///
/// Phone and address arrive nested inside the backend's account object; the
/// normalization boundary flattens them here so views never dig through it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    /// Backend-assigned identifier; `None` until created.
    pub id: Option<i64>,

    /// Trade name shown in every view.
    pub name: String,

    /// Tax id: CNPJ for businesses, CPF for individuals.
    pub tax_id: String,

    pub email: String,

    pub phone: Option<String>,

    pub address: Option<PostalAddress>,
}

/// An employee of the jewelry business.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub id: Option<i64>,
    pub name: String,
    /// CPF.
    pub tax_id: String,
    pub role: String,
    pub email: String,
}

// =============================================================================
// Opportunity
// =============================================================================

/// A sales opportunity owned by exactly one customer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Opportunity {
    pub id: Option<i64>,
    pub name: String,
    pub estimated_value: Money,
    pub stage: FunnelStage,
    pub expected_close: NaiveDate,
    /// The owning customer. Opportunities always reference a customer.
    pub customer_id: i64,
}

// =============================================================================
// Product
// =============================================================================

/// A catalog product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: Option<i64>,
    pub name: String,
    pub description: String,
    pub category: ProductCategory,
    /// Size code (ring size, chain length, ...), as the catalog defines it.
    pub size: f64,
    pub material: String,
    /// Stone type, when the piece carries one.
    pub stone: Option<String>,
    pub unit_value: Money,
    pub stock: i64,
}

// =============================================================================
// Order
// =============================================================================

/// One line of an [`Order`].
///
/// Identity is composite (order id, product id); the order id comes from the
/// owning [`Order`], so the item itself only carries the product reference.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    pub product_id: i64,
    pub quantity: i64,
    /// Size the piece was ordered in (may differ from the catalog size).
    pub size: String,
    /// Stone option chosen for this line, if any.
    pub stone: Option<String>,
    /// Unit value frozen at order time.
    pub unit_value: Money,
}

impl OrderItem {
    /// Line total (unit value × quantity).
    pub fn line_total(&self) -> Money {
        self.unit_value * self.quantity
    }
}

/// A customer order, owned by exactly one opportunity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: Option<i64>,
    pub date: NaiveDate,
    /// Total as the backend recorded it. See [`Order::computed_total`] for
    /// the client-side sum over line items.
    pub total: Money,
    pub status: OrderStatus,
    /// The owning opportunity. Orders always reference an opportunity; the
    /// gateway synthesizes a direct-sale opportunity when none exists yet.
    pub opportunity_id: i64,
    pub items: Vec<OrderItem>,
}

impl Order {
    /// Sum of the line totals.
    pub fn computed_total(&self) -> Money {
        self.items.iter().map(OrderItem::line_total).sum()
    }
}

/// How a new order attaches to the opportunity funnel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub enum OrderSource {
    /// Attach to an existing opportunity.
    Opportunity { opportunity_id: i64 },
    /// No opportunity yet: the gateway auto-creates a synthetic, already
    /// closed "direct sale" opportunity for this customer first.
    DirectSale { customer_id: i64 },
}

/// Input for creating an [`Order`].
///
/// The total is always computed from the items, never supplied.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct OrderDraft {
    pub date: NaiveDate,
    pub status: OrderStatus,
    pub items: Vec<OrderItem>,
    pub source: OrderSource,
}

impl OrderDraft {
    /// Order total: sum of the line totals.
    pub fn total(&self) -> Money {
        self.items.iter().map(OrderItem::line_total).sum()
    }
}

// =============================================================================
// Activity Log
// =============================================================================

/// An append-only activity log entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ActivityLog {
    pub id: Option<i64>,
    pub title: String,
    pub kind: ActivityKind,
    pub subject: String,
    pub description: String,
    pub recorded_at: NaiveDateTime,
    /// Email of the acting user, when the backend sends one.
    pub user_email: Option<String>,
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_funnel_stage_wire_values() {
        assert_eq!(
            serde_json::to_value(FunnelStage::Prospecting).unwrap(),
            json!("PROSPECCAO")
        );
        assert_eq!(
            serde_json::to_value(FunnelStage::Closed).unwrap(),
            json!("FECHADA")
        );
        let parsed: FunnelStage = serde_json::from_value(json!("NEGOCIACAO")).unwrap();
        assert_eq!(parsed, FunnelStage::Negotiation);
    }

    #[test]
    fn test_funnel_stage_advisory_path() {
        let mut stage = FunnelStage::Prospecting;
        let mut hops = 0;
        while let Some(next) = stage.next() {
            stage = next;
            hops += 1;
        }
        assert_eq!(stage, FunnelStage::Closed);
        assert_eq!(hops, 4);
        assert!(stage.is_terminal());
        assert!(FunnelStage::Lost.is_terminal());
        assert_eq!(FunnelStage::Lost.next(), None);
    }

    #[test]
    fn test_order_status_wire_values() {
        assert_eq!(
            serde_json::to_value(OrderStatus::Production).unwrap(),
            json!("PRODUCAO")
        );
        let parsed: OrderStatus = serde_json::from_value(json!("ENTREGUE")).unwrap();
        assert_eq!(parsed, OrderStatus::Delivered);
    }

    #[test]
    fn test_order_status_advisory_path() {
        let mut status = OrderStatus::Pending;
        while let Some(next) = status.next() {
            status = next;
        }
        assert_eq!(status, OrderStatus::Delivered);
        assert!(OrderStatus::Cancelled.is_terminal());
        assert_eq!(OrderStatus::Cancelled.next(), None);
    }

    #[test]
    fn test_activity_kind_codes() {
        assert_eq!(ActivityKind::Meeting.code(), 1);
        assert_eq!(ActivityKind::from_code(3), ActivityKind::Email);
        // unknown codes collapse instead of failing the fetch
        assert_eq!(ActivityKind::from_code(99), ActivityKind::Other);
        assert_eq!(ActivityKind::System.label(), "Sistema");
    }

    #[test]
    fn test_product_category_codes() {
        for category in [
            ProductCategory::Ring,
            ProductCategory::Necklace,
            ProductCategory::Earring,
            ProductCategory::Bracelet,
            ProductCategory::Set,
        ] {
            assert_eq!(ProductCategory::from_code(category.code()), Some(category));
        }
        assert_eq!(ProductCategory::from_code(0), None);
        assert_eq!(ProductCategory::Necklace.label(), "Colar");
    }

    #[test]
    fn test_order_totals() {
        let draft = OrderDraft {
            date: NaiveDate::from_ymd_opt(2025, 3, 14).unwrap(),
            status: OrderStatus::Pending,
            items: vec![
                OrderItem {
                    product_id: 1,
                    quantity: 2,
                    size: "18".into(),
                    stone: None,
                    unit_value: Money::from_cents(150_00),
                },
                OrderItem {
                    product_id: 2,
                    quantity: 1,
                    size: "45cm".into(),
                    stone: Some("Esmeralda".into()),
                    unit_value: Money::from_cents(899_90),
                },
            ],
            source: OrderSource::Opportunity { opportunity_id: 9 },
        };
        assert_eq!(draft.total(), Money::from_cents(1199_90));
    }
}
