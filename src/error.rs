//! Error types for the ticketa core
//!
//! Identity errors (not-found, already-exists, bad credentials) are surfaced
//! as distinct kinds; internal storage faults are re-signaled at the
//! repository boundary as a generic `OperationFailed` so callers only ever
//! see "Failed to X. Please retry.".

use crate::validation::ValidationErrors;
use thiserror::Error;

/// Result type alias used throughout the crate
pub type Result<T> = std::result::Result<T, TicketaError>;

/// All errors produced by the ticketa core
#[derive(Debug, Error)]
pub enum TicketaError {
    /// An operation targeted a ticket id that does not exist
    #[error("Ticket not found: {id}")]
    TicketNotFound { id: u64 },

    /// Signup attempted with an email that is already registered
    #[error("Email already exists: {email}")]
    EmailAlreadyExists { email: String },

    /// Login with an email/password pair that matches no account
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// A protected operation was attempted with no session present.
    /// The message is shown whenever the session record is absent,
    /// including on first-ever use; there is no actual expiry tracking.
    #[error("Your session has expired — please log in again.")]
    SessionExpired,

    /// A form failed one or more validation rules
    #[error("Validation failed: {0}")]
    Validation(ValidationErrors),

    /// A status string outside `open | in_progress | closed`
    #[error("Invalid status: {value}")]
    InvalidStatus { value: String },

    /// Generic repository-boundary fault, user message "Failed to {action}.
    /// Please retry." Internal distinctions are not exposed past here.
    #[error("Failed to {action}. Please retry.")]
    OperationFailed { action: String },

    /// IO error from the underlying file store
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Configuration loading error
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),
}

impl TicketaError {
    /// Create a generic operation failure for the given action,
    /// e.g. `operation_failed("load tickets")`
    pub fn operation_failed(action: impl Into<String>) -> Self {
        Self::OperationFailed {
            action: action.into(),
        }
    }

    /// User-facing message for this error
    pub fn user_message(&self) -> String {
        self.to_string()
    }

    /// Suggestions for resolving this error, if any
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::TicketNotFound { .. } => vec![
                "Check the ticket id and try again".to_string(),
                "List all tickets to see available ids".to_string(),
            ],
            Self::EmailAlreadyExists { .. } => {
                vec!["Log in with this email instead, or use a different one".to_string()]
            },
            Self::InvalidCredentials => {
                vec!["Check your email and password and try again".to_string()]
            },
            Self::SessionExpired => vec!["Log in to continue".to_string()],
            Self::OperationFailed { .. } => vec!["Retry the operation".to_string()],
            _ => Vec::new(),
        }
    }

    /// Whether retrying the same operation can plausibly succeed
    pub const fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Self::OperationFailed { .. } | Self::Io(_) | Self::InvalidCredentials
        )
    }
}
