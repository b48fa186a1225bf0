//! Ticket repository: async CRUD over the file-backed record store
//!
//! Every operation reads the whole collection, mutates it in memory, and
//! rewrites it. Two overlapping calls racing on the store are
//! last-writer-wins; this layer assumes a single writer. Operations may be
//! delayed by a configured simulated latency, and any internal storage fault
//! is re-signaled as a generic [`TicketaError::OperationFailed`] so callers
//! only ever see "Failed to X. Please retry." `TicketNotFound` passes
//! through untouched.

use crate::config::LatencyConfig;
use crate::core::{Status, Ticket, TicketDraft, TicketId, TicketPatch};
use crate::error::{Result, TicketaError};
use crate::storage::FileStore;
use chrono::Utc;
use std::sync::Arc;
use std::time::Duration;

/// Store name for the ticket collection
pub const TICKETS_STORE: &str = "ticketapp_tickets";

/// Ticket counts by status, as shown on the dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TicketSummary {
    pub total: usize,
    pub open: usize,
    pub in_progress: usize,
    pub closed: usize,
}

/// CRUD operations over the ticket collection
///
/// The repository assigns ids and timestamps; it does not validate content.
/// Callers are expected to run [`crate::validation::validate_ticket`] before
/// any write.
#[derive(Debug, Clone)]
pub struct TicketRepository {
    store: Arc<FileStore>,
    latency: LatencyConfig,
    seed_sample_data: bool,
}

impl TicketRepository {
    /// Create a repository with default simulated latency and sample-data
    /// seeding enabled
    pub fn new(store: Arc<FileStore>) -> Self {
        Self {
            store,
            latency: LatencyConfig::default(),
            seed_sample_data: true,
        }
    }

    /// Override the simulated latency (tests use [`LatencyConfig::none`])
    #[must_use]
    pub fn with_latency(mut self, latency: LatencyConfig) -> Self {
        self.latency = latency;
        self
    }

    /// Enable or disable seeding of sample tickets on first access
    #[must_use]
    pub const fn with_seed(mut self, seed: bool) -> Self {
        self.seed_sample_data = seed;
        self
    }

    /// Returns the full ticket sequence in storage order: most recently
    /// created first, since creation prepends
    pub async fn list_all(&self) -> Result<Vec<Ticket>> {
        self.simulate_latency(self.latency.list()).await;
        self.read_tickets("load tickets")
    }

    /// Load a single ticket, failing with `TicketNotFound` if absent
    pub async fn get_by_id(&self, id: TicketId) -> Result<Ticket> {
        self.simulate_latency(self.latency.mutate()).await;
        let all = self.read_tickets("load ticket")?;
        all.into_iter()
            .find(|t| t.id == id)
            .ok_or(TicketaError::TicketNotFound { id: id.value() })
    }

    /// Create a ticket from a draft: assigns `id = max(existing) + 1` (1 when
    /// the collection is empty), stamps both timestamps, prepends, persists,
    /// and returns the stored record
    pub async fn create(&self, draft: TicketDraft) -> Result<Ticket> {
        self.simulate_latency(self.latency.mutate()).await;
        let mut all = self.read_tickets("create ticket")?;

        let id = all
            .iter()
            .map(|t| t.id)
            .max()
            .map_or(TicketId::new(1), TicketId::next);
        let now = Utc::now();
        let ticket = Ticket {
            id,
            title: draft.title,
            description: draft.description,
            status: draft.status,
            priority: draft.priority,
            created_at: now,
            updated_at: now,
        };

        all.insert(0, ticket.clone());
        self.write_tickets(&all, "create ticket")?;
        tracing::debug!(id = %ticket.id, "created ticket");
        Ok(ticket)
    }

    /// Merge a patch over an existing ticket, refresh `updated_at`, persist,
    /// and return the merged record. Fails with `TicketNotFound` if absent.
    pub async fn update(&self, id: TicketId, patch: TicketPatch) -> Result<Ticket> {
        self.simulate_latency(self.latency.mutate()).await;
        let mut all = self.read_tickets("update ticket")?;

        let ticket = all
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or(TicketaError::TicketNotFound { id: id.value() })?;
        patch.apply(ticket);
        let updated = ticket.clone();

        self.write_tickets(&all, "update ticket")?;
        tracing::debug!(id = %id, "updated ticket");
        Ok(updated)
    }

    /// Remove a ticket, failing with `TicketNotFound` if absent
    pub async fn delete(&self, id: TicketId) -> Result<()> {
        self.simulate_latency(self.latency.mutate()).await;
        let mut all = self.read_tickets("delete ticket")?;

        let before = all.len();
        all.retain(|t| t.id != id);
        if all.len() == before {
            return Err(TicketaError::TicketNotFound { id: id.value() });
        }

        self.write_tickets(&all, "delete ticket")?;
        tracing::debug!(id = %id, "deleted ticket");
        Ok(())
    }

    /// Ticket counts by status for the dashboard
    pub async fn summary(&self) -> Result<TicketSummary> {
        let all = self.list_all().await?;
        let mut summary = TicketSummary {
            total: all.len(),
            ..TicketSummary::default()
        };
        for ticket in &all {
            match ticket.status {
                Status::Open => summary.open += 1,
                Status::InProgress => summary.in_progress += 1,
                Status::Closed => summary.closed += 1,
            }
        }
        Ok(summary)
    }

    async fn simulate_latency(&self, delay: Duration) {
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
    }

    fn read_tickets(&self, action: &str) -> Result<Vec<Ticket>> {
        let result = if self.seed_sample_data {
            self.store.read_all_or_seed(TICKETS_STORE, sample_tickets)
        } else {
            self.store.read_all(TICKETS_STORE)
        };
        result.map_err(|e| {
            tracing::error!(error = %e, "ticket store read failed");
            TicketaError::operation_failed(action)
        })
    }

    fn write_tickets(&self, tickets: &[Ticket], action: &str) -> Result<()> {
        self.store.write_all(TICKETS_STORE, tickets).map_err(|e| {
            tracing::error!(error = %e, "ticket store write failed");
            TicketaError::operation_failed(action)
        })
    }
}

/// Default seed, persisted on first access of an empty ticket store
fn sample_tickets() -> Vec<Ticket> {
    let now = Utc::now();
    vec![
        Ticket {
            id: TicketId::new(1),
            title: "Sample ticket: Fix login bug".to_string(),
            description: Some("Users can't login with certain emails".to_string()),
            status: Status::Open,
            priority: Some("high".to_string()),
            created_at: now,
            updated_at: now,
        },
        Ticket {
            id: TicketId::new(2),
            title: "Update docs".to_string(),
            description: Some("Add usage examples".to_string()),
            status: Status::Closed,
            priority: Some("low".to_string()),
            created_at: now,
            updated_at: now,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::TicketBuilder;
    use crate::test_utils::TestEnv;

    #[tokio::test]
    async fn test_ids_strictly_increasing() {
        let env = TestEnv::new();
        let mut last = TicketId::new(0);
        for i in 0..5 {
            let ticket = env
                .repo
                .create(TicketDraft::new(format!("Ticket {i}")))
                .await
                .unwrap();
            assert!(ticket.id > last);
            last = ticket.id;
        }
    }

    #[tokio::test]
    async fn test_id_reuses_gap_free_max() {
        let env = TestEnv::new();
        let first = env.repo.create(TicketDraft::new("first")).await.unwrap();
        let second = env.repo.create(TicketDraft::new("second")).await.unwrap();

        // Deleting the max id frees it for reuse; max+1 is not a persistent counter
        env.repo.delete(second.id).await.unwrap();
        let third = env.repo.create(TicketDraft::new("third")).await.unwrap();
        assert_eq!(third.id, first.id.next());
    }

    #[tokio::test]
    async fn test_create_then_get_round_trips() {
        let env = TestEnv::new();
        let draft = TicketBuilder::new()
            .title("Payment issue")
            .description("Checkout fails")
            .status(Status::InProgress)
            .priority("high")
            .build();

        let created = env.repo.create(draft).await.unwrap();
        let loaded = env.repo.get_by_id(created.id).await.unwrap();
        assert_eq!(loaded, created);
    }

    #[tokio::test]
    async fn test_list_orders_most_recent_first() {
        let env = TestEnv::new();
        env.repo.create(TicketDraft::new("older")).await.unwrap();
        env.repo.create(TicketDraft::new("newer")).await.unwrap();

        let all = env.repo.list_all().await.unwrap();
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].title, "newer");
        assert_eq!(all[1].title, "older");
    }

    #[tokio::test]
    async fn test_update_changes_only_patched_fields() {
        let env = TestEnv::new();
        let draft = TicketBuilder::new()
            .title("Fix login bug")
            .description("Users can't login")
            .priority("high")
            .build();
        let created = env.repo.create(draft).await.unwrap();

        let updated = env
            .repo
            .update(created.id, TicketPatch::status(Status::Closed))
            .await
            .unwrap();

        assert_eq!(updated.status, Status::Closed);
        assert_eq!(updated.title, created.title);
        assert_eq!(updated.description, created.description);
        assert_eq!(updated.priority, created.priority);
        assert_eq!(updated.created_at, created.created_at);
        assert!(updated.updated_at >= created.updated_at);
    }

    #[tokio::test]
    async fn test_update_missing_is_not_found() {
        let env = TestEnv::new();
        let err = env
            .repo
            .update(TicketId::new(99), TicketPatch::status(Status::Closed))
            .await
            .unwrap_err();
        assert!(matches!(err, TicketaError::TicketNotFound { id: 99 }));
    }

    #[tokio::test]
    async fn test_delete_then_get_is_not_found() {
        let env = TestEnv::new();
        let created = env.repo.create(TicketDraft::new("ephemeral")).await.unwrap();

        env.repo.delete(created.id).await.unwrap();

        let err = env.repo.get_by_id(created.id).await.unwrap_err();
        assert!(matches!(err, TicketaError::TicketNotFound { .. }));
    }

    #[tokio::test]
    async fn test_delete_missing_is_not_found() {
        let env = TestEnv::new();
        let err = env.repo.delete(TicketId::new(404)).await.unwrap_err();
        assert!(matches!(err, TicketaError::TicketNotFound { id: 404 }));
    }

    #[tokio::test]
    async fn test_seed_on_first_access() {
        let env = TestEnv::new();
        let seeded = env.seeded_repo();

        let all = seeded.list_all().await.unwrap();
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].id, TicketId::new(1));
        assert_eq!(all[0].title, "Sample ticket: Fix login bug");
        assert_eq!(all[1].status, Status::Closed);

        // A created ticket goes on top of the seed, with the next id
        let created = seeded.create(TicketDraft::new("third")).await.unwrap();
        assert_eq!(created.id, TicketId::new(3));
    }

    #[tokio::test]
    async fn test_corrupt_store_lists_empty() {
        let env = TestEnv::new();
        env.corrupt_store(TICKETS_STORE);

        let all = env.repo.list_all().await.unwrap();
        assert!(all.is_empty());
    }

    #[tokio::test]
    async fn test_summary_counts_by_status() {
        let env = TestEnv::new();
        env.repo.create(TicketDraft::new("a")).await.unwrap();
        env.repo
            .create(TicketBuilder::new().title("b").status(Status::InProgress).build())
            .await
            .unwrap();
        env.repo
            .create(TicketBuilder::new().title("c").status(Status::Closed).build())
            .await
            .unwrap();
        env.repo
            .create(TicketBuilder::new().title("d").status(Status::Closed).build())
            .await
            .unwrap();

        let summary = env.repo.summary().await.unwrap();
        assert_eq!(
            summary,
            TicketSummary {
                total: 4,
                open: 1,
                in_progress: 1,
                closed: 2,
            }
        );
    }
}
