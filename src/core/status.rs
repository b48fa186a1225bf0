use crate::error::TicketaError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Workflow state of a ticket
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    /// Newly filed, not yet picked up
    #[default]
    Open,
    /// Actively being worked on
    InProgress,
    /// Resolved and closed
    Closed,
}

impl Status {
    /// All allowed status values, in display order
    pub const ALL: [Self; 3] = [Self::Open, Self::InProgress, Self::Closed];

    /// The wire/form representation of this status
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Open => "open",
            Self::InProgress => "in_progress",
            Self::Closed => "closed",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Status {
    type Err = TicketaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "open" => Ok(Self::Open),
            "in_progress" => Ok(Self::InProgress),
            "closed" => Ok(Self::Closed),
            other => Err(TicketaError::InvalidStatus {
                value: other.to_string(),
            }),
        }
    }
}
