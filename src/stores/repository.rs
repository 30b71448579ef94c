use std::sync::Arc;

use crate::stores::UserAccount;
use crate::Error;

/// Storage contract for account records keyed by their id.
///
/// Implementations must make every operation atomic: the existence check and
/// the mutation of a write happen as one step, and readers never observe a
/// partially applied write.
pub trait AccountRepository: Send + Sync {
    /// Inserts a new account.
    /// Returns an error if an account with the same id already exists.
    fn create_account(&self, account: UserAccount) -> Result<UserAccount, Error>;

    /// Gets the current account stored under `id`.
    fn read_account(&self, id: &str) -> Result<UserAccount, Error>;

    /// Replaces the account stored under `account.id` in full and returns the
    /// previous value. Never creates a missing account.
    fn update_account(&self, account: UserAccount) -> Result<UserAccount, Error>;

    /// Removes the account stored under `id` and returns it.
    fn delete_account(&self, id: &str) -> Result<UserAccount, Error>;

    /// Returns one page of accounts in a stable order.
    /// `page` is 1-based; see [`page_range`](crate::stores::page_range) for
    /// how out-of-range pages are clamped.
    fn list_accounts(&self, page: usize, size: usize) -> Vec<UserAccount>;
}

impl<R: AccountRepository + ?Sized> AccountRepository for Arc<R> {
    fn create_account(&self, account: UserAccount) -> Result<UserAccount, Error> {
        (**self).create_account(account)
    }

    fn read_account(&self, id: &str) -> Result<UserAccount, Error> {
        (**self).read_account(id)
    }

    fn update_account(&self, account: UserAccount) -> Result<UserAccount, Error> {
        (**self).update_account(account)
    }

    fn delete_account(&self, id: &str) -> Result<UserAccount, Error> {
        (**self).delete_account(id)
    }

    fn list_accounts(&self, page: usize, size: usize) -> Vec<UserAccount> {
        (**self).list_accounts(page, size)
    }
}
