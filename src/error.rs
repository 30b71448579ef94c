//! Domain-specific errors for the account registry.
//!
//! Both variants are expected outcomes of a well-formed request against the
//! current store state, so callers are expected to recover from them:
//! - [`Error::AlreadyExists`] when creating an id that is already taken
//! - [`Error::NotFound`] when reading, updating or deleting an absent id
//!
//! Technical failures like I/O or CSV parsing are not represented here.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("Account with id {0} already exists")]
    AlreadyExists(String),
    #[error("Account with id {0} not found")]
    NotFound(String),
}

impl Error {
    /// The account id the failure refers to.
    pub fn id(&self) -> &str {
        match self {
            Error::AlreadyExists(id) | Error::NotFound(id) => id,
        }
    }
}
