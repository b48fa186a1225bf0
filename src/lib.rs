//! ticketa - Local-first ticket tracking core
//!
//! This crate provides the storage and domain layer behind a small
//! ticket-tracking client:
//! - A named record store persisting JSON collections to disk
//! - Async ticket CRUD with id assignment and timestamping
//! - Pure validation rules for ticket and credential forms
//! - A session/account store gating protected views
//!
//! There is no server. Every store is a flat JSON sequence (or a single
//! record, for the session) under one root directory, read and rewritten
//! wholesale per operation.

#![allow(clippy::missing_errors_doc)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

//! # Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use ticketa::storage::{FileStore, TicketRepository};
//! use ticketa::core::TicketDraft;
//!
//! let store = Arc::new(FileStore::new(".ticketa"));
//! let repo = TicketRepository::new(store);
//!
//! let ticket = repo.create(TicketDraft::new("Fix login bug")).await?;
//! let loaded = repo.get_by_id(ticket.id).await?;
//! ```

pub mod auth;
pub mod config;
pub mod core;
pub mod error;
pub mod storage;
pub mod validation;

#[cfg(test)]
pub mod test_utils;

// Re-export commonly used types
pub use error::{Result, TicketaError};
