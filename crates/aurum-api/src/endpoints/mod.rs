//! # Endpoint Clients
//!
//! One client per endpoint family, all sharing the same [`HttpClient`].
//!
//! ## Endpoint Surface
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  /auth/login       POST                      (auth.rs)                  │
//! │  /clientes         GET  GET/:id  POST  PUT/:id  DELETE/:id (customer.rs)│
//! │  /produtos         GET  GET/:id  POST  PUT/:id  DELETE/:id (product.rs) │
//! │  /pedidos          GET  GET/:id  POST  PUT/:id  DELETE/:id (order.rs)   │
//! │  /oportunidades    GET  GET/:id  POST  PUT/:id  DELETE/:id (opportunity)│
//! │  /funcionarios     GET  GET/:id  POST  PUT/:id  DELETE/:id (employee.rs)│
//! │  /logs             GET  POST                  (log.rs, append-only)     │
//! │  /usuarios         GET  POST                  (user.rs, read/create)    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every method returns canonical domain records; DTOs never leak upward.

pub mod auth;
pub mod customer;
pub mod employee;
pub mod log;
pub mod opportunity;
pub mod order;
pub mod product;
pub mod user;

pub use auth::AuthApi;
pub use customer::CustomerApi;
pub use employee::EmployeeApi;
pub use log::LogApi;
pub use opportunity::OpportunityApi;
pub use order::OrderApi;
pub use product::ProductApi;
pub use user::UserApi;
