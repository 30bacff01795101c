//! Agent invocation endpoint.

use crate::client::PlatformClient;
use crate::error::PlatformError;
use crate::types::{AgentEnvelope, InvokeRequest};

impl PlatformClient {
    /// Sends `message` to the agent identified by `agent_id` and returns its
    /// envelope untouched.
    ///
    /// A `"success": false` envelope is returned as `Ok`; deciding what it
    /// means is left to the scan parser.
    ///
    /// # Errors
    ///
    /// - [`PlatformError::Http`] on network failure or non-2xx HTTP status.
    /// - [`PlatformError::Deserialize`] if the body is not a JSON envelope.
    pub async fn invoke_agent(
        &self,
        message: &str,
        agent_id: &str,
    ) -> Result<AgentEnvelope, PlatformError> {
        let url = self.build_url(&["agent"], &[]);
        let request = InvokeRequest { message, agent_id };
        let body = self.post_text(url.clone(), Some(&request)).await?;
        let envelope: AgentEnvelope = Self::decode(&url, &body)?;
        tracing::debug!(
            agent_id,
            success = envelope.success,
            has_result = envelope.result().is_some(),
            "agent invocation returned"
        );
        Ok(envelope)
    }
}
