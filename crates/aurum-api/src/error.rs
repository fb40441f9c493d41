//! # API Error Types
//!
//! Error taxonomy for backend calls.
//!
//! ## Error Categories
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       API Error Categories                              │
//! │                                                                         │
//! │  ┌─────────────────┐  ┌─────────────────┐  ┌─────────────────────────┐ │
//! │  │  Session        │  │   Rejection     │  │     Transport           │ │
//! │  │                 │  │                 │  │                         │ │
//! │  │  Unauthorized   │  │  Forbidden      │  │  Network                │ │
//! │  │  (401, session  │  │  (403, session  │  │  Decode                 │ │
//! │  │   invalidated)  │  │   retained)     │  │  BaseUrl                │ │
//! │  └─────────────────┘  │  Rejected       │  └─────────────────────────┘ │
//! │                       │  (other non-2xx)│                              │
//! │                       └─────────────────┘                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! `Rejected` carries the backend's response body verbatim when it is
//! non-empty; forms show that text to the user unchanged.

use thiserror::Error;

/// Result type alias for backend calls.
pub type ApiResult<T> = Result<T, ApiError>;

/// Error returned by any backend call.
#[derive(Debug, Error)]
pub enum ApiError {
    /// HTTP 401. The transport has already cleared the shared token cell;
    /// callers must finish invalidating the session.
    #[error("sessão expirada, faça login novamente")]
    Unauthorized,

    /// HTTP 403. The operation is not permitted; the session stays valid.
    #[error("operação não permitida")]
    Forbidden,

    /// Any other non-2xx response. `message` is the response body verbatim
    /// when non-empty, else a generic HTTP-status message.
    #[error("{message}")]
    Rejected { status: u16, message: String },

    /// The request never produced an HTTP response (DNS, refused
    /// connection, dropped socket, ...).
    #[error("falha de conexão com o servidor: {0}")]
    Network(String),

    /// A 2xx response whose body did not match the wire contract.
    #[error("resposta inesperada do servidor: {0}")]
    Decode(String),

    /// The configured base URL could not be parsed.
    #[error("URL base inválida: {0}")]
    BaseUrl(String),
}

impl ApiError {
    /// True when the session must be invalidated (HTTP 401).
    pub fn is_auth_expired(&self) -> bool {
        matches!(self, ApiError::Unauthorized)
    }

    /// Builds the `Rejected` variant for a non-2xx response, surfacing the
    /// body verbatim when there is one.
    pub(crate) fn rejected(status: u16, body: &str) -> ApiError {
        let trimmed = body.trim();
        let message = if trimmed.is_empty() {
            format!("erro HTTP {}", status)
        } else {
            trimmed.to_string()
        };
        ApiError::Rejected { status, message }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        ApiError::Network(err.to_string())
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::Decode(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejected_uses_body_verbatim() {
        let err = ApiError::rejected(409, "Cliente possui registros vinculados\n");
        assert_eq!(err.to_string(), "Cliente possui registros vinculados");
    }

    #[test]
    fn test_rejected_falls_back_to_status() {
        let err = ApiError::rejected(500, "   ");
        assert_eq!(err.to_string(), "erro HTTP 500");
    }

    #[test]
    fn test_auth_expired_predicate() {
        assert!(ApiError::Unauthorized.is_auth_expired());
        assert!(!ApiError::Forbidden.is_auth_expired());
    }
}
