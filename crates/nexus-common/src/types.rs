//! Common type definitions shared across the workspace.

use chrono::{DateTime, Utc};

/// Application-wide error type.
#[derive(thiserror::Error, Debug)]
pub enum NexusError {
    /// Configuration error (fatal at startup).
    #[error("Configuration error: {0}")]
    Config(String),

    /// Discord API error.
    #[error("Discord API error: {0}")]
    Discord(String),

    /// Registry storage error.
    #[error("Storage error: {0}")]
    Storage(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Common result type for the application.
pub type Result<T> = std::result::Result<T, NexusError>;

/// Immutable facts about the running process, created once at startup and
/// passed to every component that needs them.
#[derive(Debug, Clone, Copy)]
pub struct StartupContext {
    /// When the process entered the event loop.
    pub started_at: DateTime<Utc>,
}

impl StartupContext {
    /// Captures the startup context at the current instant.
    #[must_use]
    pub fn now() -> Self {
        Self {
            started_at: Utc::now(),
        }
    }

    /// Elapsed wall-clock time since startup.
    #[must_use]
    pub fn uptime(&self, now: DateTime<Utc>) -> chrono::Duration {
        now - self.started_at
    }
}
