//! Persistence layer: named record stores and the ticket repository

mod repository;
mod store;

pub use repository::{TicketRepository, TicketSummary, TICKETS_STORE};
pub use store::FileStore;
