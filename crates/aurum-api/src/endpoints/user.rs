//! # User Account Endpoint
//!
//! `/usuarios` is read/create only; passwords exist solely in the creation
//! payload and are never read back.

use aurum_core::{AccessLevel, UserAccount};
use tracing::debug;

use crate::dto::{UsuarioDto, UsuarioPayload};
use crate::error::ApiResult;
use crate::http::HttpClient;

/// Client for the `/usuarios` endpoint family.
#[derive(Debug, Clone)]
pub struct UserApi {
    http: HttpClient,
}

impl UserApi {
    pub(crate) fn new(http: HttpClient) -> Self {
        UserApi { http }
    }

    /// Lists all accounts.
    pub async fn list(&self) -> ApiResult<Vec<UserAccount>> {
        let rows: Vec<UsuarioDto> = self.http.get_json("/usuarios").await?;
        Ok(rows.into_iter().map(UserAccount::from).collect())
    }

    /// Creates an account; the backend assigns the id.
    pub async fn create(
        &self,
        email: &str,
        secret: &str,
        access_level: AccessLevel,
    ) -> ApiResult<UserAccount> {
        debug!(user = %email, "creating account");
        let payload = UsuarioPayload {
            email: email.to_string(),
            senha: secret.to_string(),
            nivel_acesso: access_level,
        };
        let dto: UsuarioDto = self.http.post_json("/usuarios", &payload).await?;
        Ok(dto.into())
    }
}
