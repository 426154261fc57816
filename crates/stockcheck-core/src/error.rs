use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },

    #[error("failed to read store directory {path}: {source}")]
    StoresFileIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse store directory: {0}")]
    StoresFileParse(#[from] serde_yaml::Error),

    #[error("store directory validation failed: {0}")]
    Validation(String),
}
