use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::collections::btree_map::Entry;
use std::collections::BTreeMap;
use std::fmt;
use tracing::debug;

use crate::stores::{page_range, AccountRepository};
use crate::Error;

/// Seed records loaded by [`AccountsStore::seeded`]: (id, email, username, credential).
const SEED_ACCOUNTS: [(&str, &str, &str, &str); 5] = [
    ("1", "first@mail.com", "first", "firstPassword"),
    ("2", "second@mail.com", "second", "secondPassword"),
    ("3", "third@mail.com", "third", "thirdPassword"),
    ("4", "fourth@mail.com", "fourth", "fourthPassword"),
    ("5", "fifth@mail.com", "fifth", "fifthPassword"),
];

/// Account secret, stored and returned exactly as supplied.
/// Only the `Debug` output is masked so it stays out of logs.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Credential(String);

impl Credential {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Credential(***)")
    }
}

impl From<&str> for Credential {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for Credential {
    fn from(value: String) -> Self {
        Self(value)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserAccount {
    pub id: String,
    pub email: String,
    pub username: String,
    pub credential: Credential,
}

impl UserAccount {
    pub fn new(
        id: impl Into<String>,
        email: impl Into<String>,
        username: impl Into<String>,
        credential: impl Into<Credential>,
    ) -> Self {
        Self {
            id: id.into(),
            email: email.into(),
            username: username.into(),
            credential: credential.into(),
        }
    }
}

/// In-memory account store guarded by a single read-write lock.
///
/// Reads and listings share the lock; creates, updates and deletes take it
/// exclusively, so every check-and-mutate runs under one acquisition.
/// Accounts are kept in ascending id order, which is the listing order.
#[derive(Default)]
pub struct AccountsStore {
    accounts: RwLock<BTreeMap<String, UserAccount>>,
}

impl AccountsStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self {
            accounts: RwLock::new(BTreeMap::new()),
        }
    }

    /// Creates a store holding the five seed accounts with ids "1" to "5".
    pub fn seeded() -> Self {
        let accounts = SEED_ACCOUNTS
            .iter()
            .map(|&(id, email, username, credential)| {
                (
                    id.to_owned(),
                    UserAccount::new(id, email, username, credential),
                )
            })
            .collect();
        Self {
            accounts: RwLock::new(accounts),
        }
    }

    pub fn len(&self) -> usize {
        self.accounts.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.read().is_empty()
    }
}

impl AccountRepository for AccountsStore {
    fn create_account(&self, account: UserAccount) -> Result<UserAccount, Error> {
        let mut accounts = self.accounts.write();
        match accounts.entry(account.id.clone()) {
            Entry::Occupied(entry) => Err(Error::AlreadyExists(entry.key().clone())),
            Entry::Vacant(entry) => {
                debug!(id = %account.id, "creating account");
                entry.insert(account.clone());
                Ok(account)
            }
        }
    }

    fn read_account(&self, id: &str) -> Result<UserAccount, Error> {
        let accounts = self.accounts.read();
        let account = accounts
            .get(id)
            .ok_or_else(|| Error::NotFound(id.to_owned()))?;
        debug!(id, "reading account");
        Ok(account.clone())
    }

    fn update_account(&self, account: UserAccount) -> Result<UserAccount, Error> {
        let mut accounts = self.accounts.write();
        match accounts.get_mut(&account.id) {
            Some(stored) => {
                debug!(id = %account.id, "updating account");
                Ok(std::mem::replace(stored, account))
            }
            None => Err(Error::NotFound(account.id)),
        }
    }

    fn delete_account(&self, id: &str) -> Result<UserAccount, Error> {
        let removed = self
            .accounts
            .write()
            .remove(id)
            .ok_or_else(|| Error::NotFound(id.to_owned()))?;
        debug!(id, "deleting account");
        Ok(removed)
    }

    fn list_accounts(&self, page: usize, size: usize) -> Vec<UserAccount> {
        let accounts = self.accounts.read();
        let range = page_range(accounts.len(), page, size);
        debug!(page, size, start = range.start, end = range.end, "listing accounts");
        accounts
            .values()
            .skip(range.start)
            .take(range.len())
            .cloned()
            .collect()
    }
}
