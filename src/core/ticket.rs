use super::Status;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique ticket identifier, assigned by the repository as
/// `max(existing ids) + 1`, or 1 for the first ticket
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(transparent)]
pub struct TicketId(u64);

impl TicketId {
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    pub const fn value(self) -> u64 {
        self.0
    }

    /// The id following this one in the allocation sequence
    pub const fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl fmt::Display for TicketId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<u64> for TicketId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

/// A persisted ticket
///
/// `id` and `created_at` are immutable once assigned. Content validity is the
/// caller's responsibility (see [`crate::validation`]); the store persists
/// whatever it is given.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ticket {
    pub id: TicketId,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub status: Status,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Fields for a ticket that does not exist yet; the repository fills in
/// `id` and the timestamps at creation
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TicketDraft {
    pub title: String,
    pub description: Option<String>,
    pub status: Status,
    pub priority: Option<String>,
}

impl TicketDraft {
    /// Create a draft with the given title and default status
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }
}

/// Partial update applied over an existing ticket; `None` fields are left
/// unchanged (shallow merge)
#[derive(Debug, Clone, Default)]
pub struct TicketPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub status: Option<Status>,
    pub priority: Option<String>,
}

impl TicketPatch {
    /// A patch that only moves the ticket to a new status
    pub const fn status(status: Status) -> Self {
        Self {
            title: None,
            description: None,
            status: Some(status),
            priority: None,
        }
    }

    /// Merge this patch over `ticket`, refreshing `updated_at`.
    /// `id` and `created_at` are never touched.
    pub fn apply(self, ticket: &mut Ticket) {
        if let Some(title) = self.title {
            ticket.title = title;
        }
        if let Some(description) = self.description {
            ticket.description = Some(description);
        }
        if let Some(status) = self.status {
            ticket.status = status;
        }
        if let Some(priority) = self.priority {
            ticket.priority = Some(priority);
        }
        ticket.updated_at = Utc::now();
    }
}
