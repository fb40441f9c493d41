//! # Store Error Types
//!
//! Errors surfaced by the session store and mutation gateway.
//!
//! Backend failures pass through transparently as [`ApiError`] so forms can
//! show the backend's own message; the remaining variants are client-side
//! preconditions.

use aurum_api::ApiError;
use thiserror::Error;

/// Result type alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Error returned by store and gateway operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// A backend call failed; the message is the one to show the user.
    #[error(transparent)]
    Api(#[from] ApiError),

    /// An update/delete was attempted on a record the backend has not
    /// assigned an id to yet.
    #[error("{entity} ainda não possui id atribuído")]
    MissingId { entity: &'static str },

    /// A status convenience referenced a record absent from the local
    /// collection.
    #[error("{entity} {id} não encontrado na coleção local")]
    NotFound { entity: &'static str, id: i64 },

    /// The backend answered a create without the id it must assign.
    #[error("o servidor retornou {entity} sem id atribuído")]
    IdentityMissing { entity: &'static str },

    /// Client configuration could not be resolved.
    #[error("erro de configuração: {0}")]
    Config(String),
}

impl StoreError {
    /// True when the underlying failure was an expired session.
    pub fn is_auth_expired(&self) -> bool {
        matches!(self, StoreError::Api(err) if err.is_auth_expired())
    }
}
