use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

#[derive(Clone)]
pub struct AppConfig {
    pub platform_url: String,
    pub api_key: Option<String>,
    pub env: Environment,
    pub log_level: String,
    pub data_dir: PathBuf,
    pub manager_agent_id: String,
    pub schedule_id: String,
    pub schedule_log_limit: u32,
    /// `None` leaves remote calls without a local timeout.
    pub request_timeout_secs: Option<u64>,
    pub user_agent: String,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("platform_url", &self.platform_url)
            .field("api_key", &self.api_key.as_ref().map(|_| "[redacted]"))
            .field("env", &self.env)
            .field("log_level", &self.log_level)
            .field("data_dir", &self.data_dir)
            .field("manager_agent_id", &self.manager_agent_id)
            .field("schedule_id", &self.schedule_id)
            .field("schedule_log_limit", &self.schedule_log_limit)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .field("user_agent", &self.user_agent)
            .finish()
    }
}
