use std::path::PathBuf;

#[derive(Clone)]
pub struct AppConfig {
    pub stores_path: PathBuf,
    pub log_level: String,
    pub default_country: String,
    pub iows_base_url: String,
    pub iows_consumer: String,
    pub iows_contract: String,
    pub request_timeout_secs: u64,
    pub user_agent: String,
    /// `0` means every request of a batch is in flight at once.
    pub max_concurrent_requests: usize,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("stores_path", &self.stores_path)
            .field("log_level", &self.log_level)
            .field("default_country", &self.default_country)
            .field("iows_base_url", &self.iows_base_url)
            .field("iows_consumer", &self.iows_consumer)
            .field("iows_contract", &"[redacted]")
            .field("request_timeout_secs", &self.request_timeout_secs)
            .field("user_agent", &self.user_agent)
            .field("max_concurrent_requests", &self.max_concurrent_requests)
            .finish()
    }
}
