//! # aurum-core: Pure Domain Model for Aurum CRM
//!
//! This crate is the shared vocabulary of Aurum CRM. It contains the
//! canonical entity records and value types with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Aurum CRM Architecture                           │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Browser UI (external)                        │   │
//! │  │    Login ──► Dashboard ──► Entity views ──► Forms               │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ reads stores, calls gateway            │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    aurum-store                                  │   │
//! │  │    SessionStore, EntityStore, Synchronizer, MutationGateway     │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    aurum-api                                    │   │
//! │  │    HttpClient, wire DTOs, per-entity endpoint clients           │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ aurum-core (THIS CRATE) ★                       │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌──────────────────────────┐   │   │
//! │  │   │   types   │  │   money   │  │  enums with wire values  │   │   │
//! │  │   │ Customer  │  │   Money   │  │  FunnelStage             │   │   │
//! │  │   │ Order ... │  │ (centavos)│  │  OrderStatus ...         │   │   │
//! │  │   └───────────┘  └───────────┘  └──────────────────────────┘   │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO NETWORK • PURE TYPES AND FUNCTIONS               │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Entity records (Customer, Opportunity, Order, ...) and enums
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//!
//! ## Design Principles
//!
//! 1. **Backend-assigned identity**: every `id` is `Option<i64>` and stays
//!    `None` until the backend assigns it. The client never mints ids.
//! 2. **Single canonical schema**: records carry English names; the
//!    Portuguese wire contract lives exclusively in `aurum-api`'s DTO layer,
//!    except for enum wire values which are part of the domain vocabulary.
//! 3. **Integer money**: monetary values are centavos (i64) to avoid float
//!    drift; floats exist only at the wire boundary.
//! 4. **Advisory transitions**: funnel stages and order statuses expose
//!    `next()` as a convenience, never as an enforced state machine.

// =============================================================================
// Module Declarations
// =============================================================================

pub mod money;
pub mod types;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use aurum_core::Money` instead of
// `use aurum_core::money::Money`

pub use money::Money;
pub use types::*;
