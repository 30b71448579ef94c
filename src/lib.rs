mod csv_utils;
mod dto;
mod error;
pub mod handler;
pub mod logging;
mod runner;
pub mod service;
pub mod stores;

pub use dto::{Operation, RequestRow, ResponseRow};
pub use error::Error;
pub use handler::{handle, AccountPayload, Request, Response, Status};
pub use runner::{run, run_async};
pub use service::AccountService;
pub use stores::{AccountRepository, AccountsStore, Credential, UserAccount};
