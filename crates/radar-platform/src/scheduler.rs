//! Schedule listing, execution-log, and pause/resume endpoints.

use crate::client::PlatformClient;
use crate::error::PlatformError;
use crate::types::{Ack, ExecutionLogResponse, ScheduleListResponse};

impl PlatformClient {
    /// Lists every schedule visible to the API key.
    ///
    /// # Errors
    ///
    /// - [`PlatformError::Http`] on network failure or non-2xx HTTP status.
    /// - [`PlatformError::Deserialize`] if the response shape is unexpected.
    pub async fn list_schedules(&self) -> Result<ScheduleListResponse, PlatformError> {
        let url = self.build_url(&["schedules"], &[]);
        self.get_json(url).await
    }

    /// Fetches the most recent executions of a schedule, at most `limit`.
    ///
    /// # Errors
    ///
    /// - [`PlatformError::Http`] on network failure or non-2xx HTTP status.
    /// - [`PlatformError::Deserialize`] if the response shape is unexpected.
    pub async fn get_schedule_logs(
        &self,
        schedule_id: &str,
        limit: u32,
    ) -> Result<ExecutionLogResponse, PlatformError> {
        let limit = limit.to_string();
        let url = self.build_url(&["schedules", schedule_id, "logs"], &[("limit", &limit)]);
        self.get_json(url).await
    }

    /// Pauses a schedule.
    ///
    /// # Errors
    ///
    /// - [`PlatformError::Api`] if the platform rejects the request.
    /// - [`PlatformError::Http`] on network failure or non-2xx HTTP status.
    pub async fn pause_schedule(&self, schedule_id: &str) -> Result<(), PlatformError> {
        self.mutate_schedule(schedule_id, "pause").await
    }

    /// Resumes a paused schedule.
    ///
    /// # Errors
    ///
    /// - [`PlatformError::Api`] if the platform rejects the request.
    /// - [`PlatformError::Http`] on network failure or non-2xx HTTP status.
    pub async fn resume_schedule(&self, schedule_id: &str) -> Result<(), PlatformError> {
        self.mutate_schedule(schedule_id, "resume").await
    }

    async fn mutate_schedule(&self, schedule_id: &str, action: &str) -> Result<(), PlatformError> {
        let url = self.build_url(&["schedules", schedule_id, action], &[]);
        let body = self.post_text::<()>(url.clone(), None).await?;
        if body.trim().is_empty() {
            return Ok(());
        }
        let ack: Ack = Self::decode(&url, &body)?;
        if ack.success {
            tracing::info!(schedule_id, action, "schedule mutation acknowledged");
            Ok(())
        } else {
            Err(PlatformError::Api(
                ack.error
                    .unwrap_or_else(|| format!("{action} request was rejected")),
            ))
        }
    }
}
