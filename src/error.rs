use crate::entity::EntityKind;
use crate::view::ViewMode;

/// Error type for store, form and controller operations
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Validation failed on `{field}`: {message}")]
    Validation { field: String, message: String },

    #[error("Invalid {kind} status: {value:?}")]
    InvalidStatus { kind: EntityKind, value: String },

    #[error("{kind} {id} not found")]
    NotFound { kind: EntityKind, id: u64 },

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("{kind} list does not support the {mode} view")]
    UnsupportedView { kind: EntityKind, mode: ViewMode },

    #[error("{kind} has no field `{field}`")]
    UnknownField { kind: EntityKind, field: String },

    #[error("No form is open")]
    FormClosed,

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Record decoding failed: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Config parse failed: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl StoreError {
    pub(crate) fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Result type for store, form and controller operations
pub type StoreResult<T> = Result<T, StoreError>;
