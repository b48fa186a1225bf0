//! Test utilities for ticketa
//!
//! Common fixtures shared by the unit tests across the crate.

#![cfg(test)]

use crate::auth::AuthService;
use crate::config::LatencyConfig;
use crate::core::Account;
use crate::storage::{FileStore, TicketRepository};
use std::sync::Arc;
use tempfile::TempDir;

/// Test fixture holding a temporary store root and the services built on it
///
/// Latency is zeroed and sample-data seeding disabled, so tests start from a
/// genuinely empty store; use [`TestEnv::seeded_repo`] when the seed matters.
pub struct TestEnv {
    pub temp_dir: TempDir,
    pub store: Arc<FileStore>,
    pub repo: TicketRepository,
    pub auth: AuthService,
}

impl TestEnv {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let store = Arc::new(FileStore::new(temp_dir.path()));
        let repo = TicketRepository::new(Arc::clone(&store))
            .with_latency(LatencyConfig::none())
            .with_seed(false);
        let auth = AuthService::new(Arc::clone(&store));

        Self {
            temp_dir,
            store,
            repo,
            auth,
        }
    }

    /// A repository over the same store with sample-data seeding enabled
    pub fn seeded_repo(&self) -> TicketRepository {
        TicketRepository::new(Arc::clone(&self.store))
            .with_latency(LatencyConfig::none())
            .with_seed(true)
    }

    /// Overwrite a store file with content that will not parse
    pub fn corrupt_store(&self, name: &str) {
        let path = self.temp_dir.path().join(format!("{name}.json"));
        std::fs::write(path, "{this is not json").expect("Failed to corrupt store");
    }
}

/// An account with fixed name and password for the given email
pub fn account(email: &str) -> Account {
    Account {
        name: "Ada".to_string(),
        email: email.to_string(),
        password: "secret1".to_string(),
    }
}
