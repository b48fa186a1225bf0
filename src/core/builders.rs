use super::{Status, TicketDraft};

/// Builder for creating [`TicketDraft`] instances
#[derive(Default)]
pub struct TicketBuilder {
    title: Option<String>,
    description: Option<String>,
    status: Option<Status>,
    priority: Option<String>,
}

impl TicketBuilder {
    /// Create a new ticket builder
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the title
    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the description
    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the status
    #[must_use]
    pub const fn status(mut self, status: Status) -> Self {
        self.status = Some(status);
        self
    }

    /// Set the priority
    #[must_use]
    pub fn priority(mut self, priority: impl Into<String>) -> Self {
        self.priority = Some(priority.into());
        self
    }

    /// Build the draft
    pub fn build(self) -> TicketDraft {
        TicketDraft {
            title: self.title.unwrap_or_default(),
            description: self.description,
            status: self.status.unwrap_or_default(),
            priority: self.priority,
        }
    }
}
