//! Storage layer for the account registry. Provides:
//! - The account record and its credential wrapper ([`UserAccount`], [`Credential`])
//! - The repository contract used by the service layer ([`AccountRepository`])
//! - A lock-guarded in-memory implementation ([`AccountsStore`])
//!
//! Current implementation keeps every record in memory for the lifetime of
//! the owning process; nothing is persisted.

mod accounts;
mod pagination;
mod repository;

pub use accounts::{AccountsStore, Credential, UserAccount};
pub use pagination::page_range;
pub use repository::AccountRepository;
