//! # Opportunity Endpoint
//!
//! CRUD against `/oportunidades`.

use aurum_core::Opportunity;
use tracing::debug;

use crate::dto::{OportunidadeDto, OportunidadePayload};
use crate::error::ApiResult;
use crate::http::HttpClient;

/// Client for the `/oportunidades` endpoint family.
#[derive(Debug, Clone)]
pub struct OpportunityApi {
    http: HttpClient,
}

impl OpportunityApi {
    pub(crate) fn new(http: HttpClient) -> Self {
        OpportunityApi { http }
    }

    /// Lists all opportunities.
    pub async fn list(&self) -> ApiResult<Vec<Opportunity>> {
        let rows: Vec<OportunidadeDto> = self.http.get_json("/oportunidades").await?;
        rows.into_iter().map(Opportunity::try_from).collect()
    }

    /// Fetches a single opportunity by id.
    pub async fn get(&self, id: i64) -> ApiResult<Opportunity> {
        let dto: OportunidadeDto = self
            .http
            .get_json(&format!("/oportunidades/{}", id))
            .await?;
        dto.try_into()
    }

    /// Creates an opportunity; the backend assigns the id.
    ///
    /// Also used by the gateway to synthesize the already-closed
    /// "direct sale" opportunity when an order has no funnel history.
    pub async fn create(&self, opportunity: &Opportunity) -> ApiResult<Opportunity> {
        debug!(name = %opportunity.name, "creating opportunity");
        let dto: OportunidadeDto = self
            .http
            .post_json("/oportunidades", &OportunidadePayload::from(opportunity))
            .await?;
        dto.try_into()
    }

    /// Replaces an opportunity with the full payload.
    pub async fn update(&self, id: i64, opportunity: &Opportunity) -> ApiResult<Opportunity> {
        debug!(id, "updating opportunity");
        let dto: OportunidadeDto = self
            .http
            .put_json(
                &format!("/oportunidades/{}", id),
                &OportunidadePayload::from(opportunity),
            )
            .await?;
        dto.try_into()
    }

    /// Deletes an opportunity.
    pub async fn delete(&self, id: i64) -> ApiResult<()> {
        debug!(id, "deleting opportunity");
        self.http.delete(&format!("/oportunidades/{}", id)).await
    }
}
