use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigurationError {
    #[error("{0}")]
    IOError(#[from] std::io::Error),

    #[error("{0}")]
    ParseError(#[from] toml::de::Error),

    #[error("{0}")]
    SerializeError(#[from] toml::ser::Error),

    #[error("Unknown log level encountered: '{0}'")]
    UnknownLogLevel(String),

    #[error("Invalid scope '{0}': expected a single path segment of letters, digits, '_' or '-'")]
    InvalidScope(String),

    #[error("Scope '{0}' is configured more than once")]
    DuplicateScope(String),

    #[error("Created default configuration at {0}, edit it and start again")]
    Created(String),
}
