//! Error types for Skillboard.
//!
//! Lookups (categories, skills, tabs) never fail: they return `Option`.
//! Errors are reserved for construction-time validation and configuration.

use thiserror::Error;

/// Primary error type for all Skillboard operations.
#[derive(Error, Debug)]
pub enum SkillboardError {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("Invalid catalog: {0}")]
    InvalidCatalog(String),

    #[error("Invalid route table: {0}")]
    InvalidRouteTable(String),

    #[error("Unknown category: {0}")]
    UnknownCategory(String),

    #[error("Unknown tab: {0}")]
    UnknownTab(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

impl SkillboardError {
    /// Whether this error was caused by caller input rather than the environment.
    pub fn is_user_error(&self) -> bool {
        matches!(
            self,
            Self::UnknownCategory(_) | Self::UnknownTab(_) | Self::InvalidArgument(_)
        )
    }
}

/// Convenience alias.
pub type Result<T> = std::result::Result<T, SkillboardError>;
