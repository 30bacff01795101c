//! Roster of the cooperating agents behind a scan.
//!
//! Only the manager is ever invoked directly; it delegates to the scanner and
//! the notification composer on the remote side.

/// Agent that orchestrates scans and notifications.
pub const MANAGER_AGENT_ID: &str = "69989a105d2326ad4d26cdce";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AgentProfile {
    pub id: &'static str,
    pub name: &'static str,
    pub role: &'static str,
}

pub static AGENTS: [AgentProfile; 3] = [
    AgentProfile {
        id: MANAGER_AGENT_ID,
        name: "Listing Monitor Manager",
        role: "Orchestrates scans and notifications",
    },
    AgentProfile {
        id: "699899ecfc075eb63c125e2f",
        name: "Web Scanner Agent",
        role: "Searches for listings online",
    },
    AgentProfile {
        id: "699899fd5c09fa7c2b5b2e70",
        name: "Notification Composer Agent",
        role: "Composes and sends email alerts",
    },
];

/// Look up a known agent by id.
#[must_use]
pub fn find_agent(id: &str) -> Option<&'static AgentProfile> {
    AGENTS.iter().find(|a| a.id == id)
}
