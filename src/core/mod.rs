//! Core domain types: tickets, statuses, accounts, and sessions

mod account;
mod builders;
mod status;
mod ticket;

pub use account::{Account, Session};
pub use builders::TicketBuilder;
pub use status::Status;
pub use ticket::{Ticket, TicketDraft, TicketId, TicketPatch};
