//! # Activity Recording
//!
//! Best-effort audit entries appended after session events and committed
//! mutations. A failure to record is a warning, never a reason to fail the
//! operation the user actually asked for.

use aurum_api::Api;
use aurum_core::{ActivityKind, ActivityLog};
use tracing::warn;

/// Appends a system activity entry, swallowing (but logging) any failure.
pub(crate) async fn record(api: &Api, actor: Option<String>, title: &str, description: &str) {
    let entry = ActivityLog {
        id: None,
        title: title.to_string(),
        kind: ActivityKind::System,
        subject: title.to_string(),
        description: description.to_string(),
        recorded_at: chrono::Local::now().naive_local(),
        user_email: actor,
    };

    if let Err(err) = api.logs().create(&entry).await {
        warn!(title = %title, error = %err, "failed to record activity entry");
    }
}
