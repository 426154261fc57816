use crate::app_config::AppConfig;
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Every variable has a default, so only malformed values fail.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::path::PathBuf;

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let parse_usize = |var: &str, default: &str| -> Result<usize, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<usize>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: e.to_string(),
            })
    };

    let stores_path = PathBuf::from(or_default("STOCKCHECK_STORES_PATH", "./config/stores.yaml"));
    let log_level = or_default("STOCKCHECK_LOG_LEVEL", "info");

    let default_country = or_default("STOCKCHECK_DEFAULT_COUNTRY", "de")
        .trim()
        .to_ascii_lowercase();
    if default_country.is_empty() {
        return Err(ConfigError::InvalidEnvVar {
            var: "STOCKCHECK_DEFAULT_COUNTRY".to_string(),
            reason: "must not be empty".to_string(),
        });
    }

    let iows_base_url = or_default(
        "STOCKCHECK_IOWS_BASE_URL",
        "https://iows.ikea.com/retail/iows/",
    );
    let iows_consumer = or_default("STOCKCHECK_IOWS_CONSUMER", "MAMMUT");
    let iows_contract = or_default("STOCKCHECK_IOWS_CONTRACT", "37249");

    let request_timeout_secs = parse_u64("STOCKCHECK_REQUEST_TIMEOUT_SECS", "30")?;
    let user_agent = or_default("STOCKCHECK_USER_AGENT", "stockcheck/0.1 (availability)");
    let max_concurrent_requests = parse_usize("STOCKCHECK_MAX_CONCURRENT_REQUESTS", "0")?;

    Ok(AppConfig {
        stores_path,
        log_level,
        default_country,
        iows_base_url,
        iows_consumer,
        iows_contract,
        request_timeout_secs,
        user_agent,
        max_concurrent_requests,
    })
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
