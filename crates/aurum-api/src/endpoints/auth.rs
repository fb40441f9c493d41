//! # Authentication Endpoint
//!
//! `POST /auth/login` is the only unauthenticated call in the system.
//! It exchanges credentials for the bearer token everything else attaches.

use tracing::debug;

use crate::dto::{LoginDto, LoginResponse};
use crate::error::ApiResult;
use crate::http::HttpClient;

/// Client for the authentication endpoint.
#[derive(Debug, Clone)]
pub struct AuthApi {
    http: HttpClient,
}

impl AuthApi {
    pub(crate) fn new(http: HttpClient) -> Self {
        AuthApi { http }
    }

    /// Exchanges credentials for a bearer token.
    ///
    /// Bad credentials come back as HTTP 401, i.e. `ApiError::Unauthorized`;
    /// the session store maps any failure here to a `false` login result.
    pub async fn login(&self, email: &str, secret: &str) -> ApiResult<LoginResponse> {
        debug!(user = %email, "authenticating");
        let credentials = LoginDto {
            email: email.to_string(),
            senha: secret.to_string(),
        };
        self.http.post_json("/auth/login", &credentials).await
    }
}
