#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("OUR_NS environment variable not set")]
    MissingAllowList,

    #[error("OUR_NS contains no nameserver names")]
    EmptyAllowList,

    #[error("Invalid PORT value '{0}': {1}")]
    InvalidPort(String, String),

    #[error("Configuration validation error: {0}")]
    Validation(String),
}
