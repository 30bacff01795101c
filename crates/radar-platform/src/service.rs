//! Collaborator seams consumed by the scan core.

use std::sync::Arc;

use async_trait::async_trait;

use crate::client::PlatformClient;
use crate::error::PlatformError;
use crate::types::{AgentEnvelope, ExecutionLogResponse, ScheduleListResponse};

/// Runs an agent with a natural-language instruction.
///
/// Implementations make a single attempt and may take arbitrarily long.
#[async_trait]
pub trait AgentInvoker: Send + Sync {
    async fn invoke(&self, message: &str, agent_id: &str) -> Result<AgentEnvelope, PlatformError>;
}

/// Remote periodic-scan scheduler.
#[async_trait]
pub trait ScheduleService: Send + Sync {
    async fn list(&self) -> Result<ScheduleListResponse, PlatformError>;

    async fn logs(
        &self,
        schedule_id: &str,
        limit: u32,
    ) -> Result<ExecutionLogResponse, PlatformError>;

    async fn pause(&self, schedule_id: &str) -> Result<(), PlatformError>;

    async fn resume(&self, schedule_id: &str) -> Result<(), PlatformError>;
}

#[async_trait]
impl AgentInvoker for PlatformClient {
    async fn invoke(&self, message: &str, agent_id: &str) -> Result<AgentEnvelope, PlatformError> {
        self.invoke_agent(message, agent_id).await
    }
}

#[async_trait]
impl ScheduleService for PlatformClient {
    async fn list(&self) -> Result<ScheduleListResponse, PlatformError> {
        self.list_schedules().await
    }

    async fn logs(
        &self,
        schedule_id: &str,
        limit: u32,
    ) -> Result<ExecutionLogResponse, PlatformError> {
        self.get_schedule_logs(schedule_id, limit).await
    }

    async fn pause(&self, schedule_id: &str) -> Result<(), PlatformError> {
        self.pause_schedule(schedule_id).await
    }

    async fn resume(&self, schedule_id: &str) -> Result<(), PlatformError> {
        self.resume_schedule(schedule_id).await
    }
}

#[async_trait]
impl<T: AgentInvoker + ?Sized> AgentInvoker for Arc<T> {
    async fn invoke(&self, message: &str, agent_id: &str) -> Result<AgentEnvelope, PlatformError> {
        (**self).invoke(message, agent_id).await
    }
}

#[async_trait]
impl<T: ScheduleService + ?Sized> ScheduleService for Arc<T> {
    async fn list(&self) -> Result<ScheduleListResponse, PlatformError> {
        (**self).list().await
    }

    async fn logs(
        &self,
        schedule_id: &str,
        limit: u32,
    ) -> Result<ExecutionLogResponse, PlatformError> {
        (**self).logs(schedule_id, limit).await
    }

    async fn pause(&self, schedule_id: &str) -> Result<(), PlatformError> {
        (**self).pause(schedule_id).await
    }

    async fn resume(&self, schedule_id: &str) -> Result<(), PlatformError> {
        (**self).resume(schedule_id).await
    }
}
