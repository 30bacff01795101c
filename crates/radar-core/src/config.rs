use crate::agents::MANAGER_AGENT_ID;
use crate::app_config::{AppConfig, Environment};
use crate::ConfigError;

/// Target schedule provisioned alongside the manager agent.
pub const DEFAULT_SCHEDULE_ID: &str = "69989a17399dfadeac37d150";

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files. Use it in tests
/// or when the caller manages env setup.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Decoupled from the real environment so it can be tested with a `HashMap`.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::path::PathBuf;

    let require = |var: &str| -> Result<String, ConfigError> {
        lookup(var)
            .ok()
            .filter(|v| !v.trim().is_empty())
            .ok_or_else(|| ConfigError::MissingEnvVar(var.to_string()))
    };

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_u32 = |var: &str, default: &str| -> Result<u32, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u32>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let parse_optional_u64 = |var: &str| -> Result<Option<u64>, ConfigError> {
        match lookup(var) {
            Ok(raw) if !raw.trim().is_empty() => {
                raw.trim()
                    .parse::<u64>()
                    .map(Some)
                    .map_err(|e| ConfigError::InvalidEnvVar {
                        var: var.to_string(),
                        reason: e.to_string(),
                    })
            }
            _ => Ok(None),
        }
    };

    let platform_url = require("RADAR_PLATFORM_URL")?;
    let api_key = lookup("RADAR_API_KEY").ok().filter(|k| !k.is_empty());

    let env = parse_environment(&or_default("RADAR_ENV", "development"));
    let log_level = or_default("RADAR_LOG_LEVEL", "info");
    let data_dir = PathBuf::from(or_default("RADAR_DATA_DIR", "./.listing-radar"));

    let manager_agent_id = or_default("RADAR_MANAGER_AGENT_ID", MANAGER_AGENT_ID);
    let schedule_id = or_default("RADAR_SCHEDULE_ID", DEFAULT_SCHEDULE_ID);
    let schedule_log_limit = parse_u32("RADAR_SCHEDULE_LOG_LIMIT", "5")?;

    let request_timeout_secs = parse_optional_u64("RADAR_REQUEST_TIMEOUT_SECS")?;
    let user_agent = or_default("RADAR_USER_AGENT", "listing-radar/0.1");

    Ok(AppConfig {
        platform_url,
        api_key,
        env,
        log_level,
        data_dir,
        manager_agent_id,
        schedule_id,
        schedule_log_limit,
        request_timeout_secs,
        user_agent,
    })
}

/// Parse a string into an `Environment` variant.
///
/// Unrecognized values default to `Environment::Development`.
fn parse_environment(s: &str) -> Environment {
    match s {
        "production" => Environment::Production,
        "test" => Environment::Test,
        _ => Environment::Development,
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
