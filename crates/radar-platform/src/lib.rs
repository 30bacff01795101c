//! Client for the remote agent platform.
//!
//! The platform hosts two collaborators of a scan: the agent-invocation
//! endpoint that runs the listing scan, and the scheduler that triggers scans
//! periodically. Both are reached through [`PlatformClient`] and abstracted
//! behind [`AgentInvoker`] and [`ScheduleService`] so callers can substitute
//! in-memory fakes.

pub mod agent;
pub mod client;
pub mod error;
pub mod scheduler;
pub mod service;
pub mod types;

pub use client::PlatformClient;
pub use error::PlatformError;
pub use service::{AgentInvoker, ScheduleService};
pub use types::{AgentEnvelope, ExecutionLogResponse, ScheduleListResponse};
