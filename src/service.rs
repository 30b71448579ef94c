//! Account use-case service.
//!
//! Callers talk to [`AccountService`] instead of a concrete store, so the
//! storage backend can be swapped without touching them. Every call forwards
//! to the repository and hands its result or error back unchanged.

use crate::stores::{AccountRepository, UserAccount};
use crate::Error;

pub struct AccountService<R: AccountRepository> {
    repo: R,
}

impl<R: AccountRepository> AccountService<R> {
    /// Creates a service on top of the provided repository.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    pub fn create_account(&self, account: UserAccount) -> Result<UserAccount, Error> {
        self.repo.create_account(account)
    }

    pub fn read_account(&self, id: &str) -> Result<UserAccount, Error> {
        self.repo.read_account(id)
    }

    /// Replaces an existing account, returning the value it replaced.
    pub fn update_account(&self, account: UserAccount) -> Result<UserAccount, Error> {
        self.repo.update_account(account)
    }

    pub fn delete_account(&self, id: &str) -> Result<UserAccount, Error> {
        self.repo.delete_account(id)
    }

    pub fn list_accounts(&self, page: usize, size: usize) -> Vec<UserAccount> {
        self.repo.list_accounts(page, size)
    }

    pub fn repository(&self) -> &R {
        &self.repo
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stores::AccountsStore;
    use std::sync::Arc;

    #[test]
    fn test_forwards_results() {
        let service = AccountService::new(AccountsStore::seeded());
        let account = UserAccount::new("6", "sixth@mail.com", "sixth", "sixthPassword");

        assert_eq!(service.create_account(account.clone()).unwrap(), account);
        assert_eq!(service.read_account("6").unwrap(), account);

        let replacement = UserAccount::new("6", "sixth@new.com", "sixth", "newPassword");
        assert_eq!(service.update_account(replacement.clone()).unwrap(), account);
        assert_eq!(service.delete_account("6").unwrap(), replacement);
        assert_eq!(service.list_accounts(2, 3).len(), 2);
    }

    #[test]
    fn test_forwards_errors_unchanged() {
        let service = AccountService::new(AccountsStore::seeded());
        let duplicate = UserAccount::new("1", "", "", "");

        assert_eq!(
            service.create_account(duplicate),
            Err(Error::AlreadyExists("1".to_owned()))
        );
        assert_eq!(
            service.read_account("9"),
            Err(Error::NotFound("9".to_owned()))
        );
        assert_eq!(
            service.update_account(UserAccount::new("9", "", "", "")),
            Err(Error::NotFound("9".to_owned()))
        );
        assert_eq!(
            service.delete_account("9"),
            Err(Error::NotFound("9".to_owned()))
        );
    }

    #[test]
    fn test_shared_store_is_visible_across_services() {
        let store = Arc::new(AccountsStore::new());
        let writer = AccountService::new(Arc::clone(&store));
        let reader = AccountService::new(Arc::clone(&store));

        writer
            .create_account(UserAccount::new("a", "a@mail.com", "a", "secret"))
            .unwrap();
        assert_eq!(reader.read_account("a").unwrap().email, "a@mail.com");
        assert_eq!(reader.repository().len(), 1);
    }
}
