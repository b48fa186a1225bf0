//! Account and session store
//!
//! Accounts live in their own record store, keyed by email by convention
//! only; the session is a single process-wide record whose presence is the
//! sole authorization signal for protected views. Unlike the ticket
//! repository, these operations touch the store directly with no simulated
//! latency, matching the original client.
//!
//! There is no authentication security here: passwords are stored and
//! compared in plaintext.

use crate::core::{Account, Session};
use crate::error::{Result, TicketaError};
use crate::storage::FileStore;
use std::sync::Arc;

/// Store name for the account collection
pub const ACCOUNTS_STORE: &str = "ticketapp_users";

/// Store name for the single session record
pub const SESSION_STORE: &str = "ticketapp_session";

/// Opaque session token; a placeholder, not a credential
const PLACEHOLDER_TOKEN: &str = "fake-token";

/// Signup, login, logout, and session reads over the account and session
/// stores
///
/// Like the ticket repository, this layer does not validate content; callers
/// run [`crate::validation::validate_signup`] / [`crate::validation::validate_login`]
/// first. Only identity is checked here (duplicate email, credential match).
#[derive(Debug, Clone)]
pub struct AuthService {
    store: Arc<FileStore>,
}

impl AuthService {
    pub fn new(store: Arc<FileStore>) -> Self {
        Self { store }
    }

    /// Register an account, failing with `EmailAlreadyExists` when the email
    /// is already present
    pub fn signup(&self, account: Account) -> Result<()> {
        let mut accounts = self.read_accounts("sign up")?;
        if accounts.iter().any(|a| a.email == account.email) {
            return Err(TicketaError::EmailAlreadyExists {
                email: account.email,
            });
        }

        tracing::info!(email = %account.email, "registered account");
        accounts.push(account);
        self.store
            .write_all(ACCOUNTS_STORE, &accounts)
            .map_err(|e| {
                tracing::error!(error = %e, "account store write failed");
                TicketaError::operation_failed("sign up")
            })
    }

    /// Log in with an exact email/password match, persisting a new session
    /// record on success. On mismatch the session store is left untouched.
    pub fn login(&self, email: &str, password: &str) -> Result<Session> {
        let accounts = self.read_accounts("log in")?;
        let user = accounts
            .into_iter()
            .find(|a| a.email == email && a.password == password)
            .ok_or(TicketaError::InvalidCredentials)?;

        let session = Session {
            token: PLACEHOLDER_TOKEN.to_string(),
            user,
        };
        self.store
            .write_one(SESSION_STORE, &session)
            .map_err(|e| {
                tracing::error!(error = %e, "session store write failed");
                TicketaError::operation_failed("log in")
            })?;
        tracing::info!(email = %session.user.email, "logged in");
        Ok(session)
    }

    /// Remove the session record
    pub fn logout(&self) -> Result<()> {
        self.store.clear(SESSION_STORE).map_err(|e| {
            tracing::error!(error = %e, "session store clear failed");
            TicketaError::operation_failed("log out")
        })
    }

    /// Pure read of the session record
    pub fn current_session(&self) -> Result<Option<Session>> {
        self.store.read_one(SESSION_STORE).map_err(|e| {
            tracing::error!(error = %e, "session store read failed");
            TicketaError::operation_failed("load session")
        })
    }

    /// The gate for protected views: the current session, or the
    /// `SessionExpired` error. The error is produced whenever no session
    /// exists, including on first-ever use; there is no expiry tracking.
    pub fn require_session(&self) -> Result<Session> {
        self.current_session()?
            .ok_or(TicketaError::SessionExpired)
    }

    fn read_accounts(&self, action: &str) -> Result<Vec<Account>> {
        self.store.read_all(ACCOUNTS_STORE).map_err(|e| {
            tracing::error!(error = %e, "account store read failed");
            TicketaError::operation_failed(action)
        })
    }
}
