use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("Key '{key}' not found in payload")]
    MissingKey { key: String },

    #[error("Cannot descend into non-object value with key '{key}'")]
    NotAnObject { key: String },

    #[error("API request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unexpected payload shape: {message}")]
    Payload { message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValue {
        field: String,
        value: String,
        reason: String,
    },
}

pub type Result<T> = std::result::Result<T, ClientError>;
