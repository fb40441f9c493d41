//! # Activity Log Endpoint
//!
//! `/logs` is append-only: list and create, never update or delete.

use aurum_core::ActivityLog;
use tracing::debug;

use crate::dto::{LogDto, LogPayload};
use crate::error::ApiResult;
use crate::http::HttpClient;

/// Client for the `/logs` endpoint family.
#[derive(Debug, Clone)]
pub struct LogApi {
    http: HttpClient,
}

impl LogApi {
    pub(crate) fn new(http: HttpClient) -> Self {
        LogApi { http }
    }

    /// Lists all activity entries.
    pub async fn list(&self) -> ApiResult<Vec<ActivityLog>> {
        let rows: Vec<LogDto> = self.http.get_json("/logs").await?;
        Ok(rows.into_iter().map(ActivityLog::from).collect())
    }

    /// Appends an activity entry; the backend assigns the id.
    pub async fn create(&self, entry: &ActivityLog) -> ApiResult<ActivityLog> {
        debug!(title = %entry.title, "recording activity");
        let dto: LogDto = self.http.post_json("/logs", &LogPayload::from(entry)).await?;
        Ok(dto.into())
    }
}
