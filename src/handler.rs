//! Caller-facing request handling.
//!
//! Validates what the store does not (missing ids, page bounds), calls the
//! service and maps every outcome onto an HTTP-style [`Status`]. Rejected
//! requests are logged here; the layers below never log failures.

use tracing::error;

use crate::service::AccountService;
use crate::stores::{AccountRepository, Credential, UserAccount};
use crate::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Ok,
    BadRequest,
    NotFound,
}

impl Status {
    pub fn code(self) -> u16 {
        match self {
            Status::Ok => 200,
            Status::BadRequest => 400,
            Status::NotFound => 404,
        }
    }
}

impl From<&Error> for Status {
    fn from(err: &Error) -> Self {
        match err {
            Error::AlreadyExists(_) => Status::BadRequest,
            Error::NotFound(_) => Status::NotFound,
        }
    }
}

/// Account fields as received from a caller. Only `id` is required; the
/// other fields default to empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AccountPayload {
    pub id: Option<String>,
    pub email: Option<String>,
    pub username: Option<String>,
    pub credential: Option<Credential>,
}

impl AccountPayload {
    fn into_account(self) -> Option<UserAccount> {
        Some(UserAccount {
            id: self.id?,
            email: self.email.unwrap_or_default(),
            username: self.username.unwrap_or_default(),
            credential: self.credential.unwrap_or_default(),
        })
    }
}

impl From<UserAccount> for AccountPayload {
    fn from(account: UserAccount) -> Self {
        Self {
            id: Some(account.id),
            email: Some(account.email),
            username: Some(account.username),
            credential: Some(account.credential),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Request {
    Create(AccountPayload),
    Read { id: Option<String> },
    Update(AccountPayload),
    Delete { id: Option<String> },
    List { page: Option<i64>, size: Option<i64> },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    pub status: Status,
    pub accounts: Vec<UserAccount>,
    /// Reason for a non-`Ok` status.
    pub message: Option<String>,
}

impl Response {
    fn ok(accounts: Vec<UserAccount>) -> Self {
        Self {
            status: Status::Ok,
            accounts,
            message: None,
        }
    }

    fn rejected(status: Status, message: String) -> Self {
        Self {
            status,
            accounts: Vec::new(),
            message: Some(message),
        }
    }

    fn bad_request(message: &str) -> Self {
        error!(status = Status::BadRequest.code(), "{message}");
        Self::rejected(Status::BadRequest, message.to_owned())
    }
}

impl From<Result<UserAccount, Error>> for Response {
    fn from(result: Result<UserAccount, Error>) -> Self {
        match result {
            Ok(account) => Response::ok(vec![account]),
            Err(err) => {
                let status = Status::from(&err);
                error!(status = status.code(), id = err.id(), "{err}");
                Response::rejected(status, err.to_string())
            }
        }
    }
}

const MISSING_ID: &str = "Account id can't be null";
const INVALID_PAGE: &str = "Page can't be less than 1 and size can't be less than 0";

/// Validates `request`, runs it against `service` and maps the outcome to a
/// response.
pub fn handle<R: AccountRepository>(service: &AccountService<R>, request: Request) -> Response {
    match request {
        Request::Create(payload) => match payload.into_account() {
            Some(account) => service.create_account(account).into(),
            None => Response::bad_request(MISSING_ID),
        },
        Request::Read { id: Some(id) } => service.read_account(&id).into(),
        Request::Update(payload) => match payload.into_account() {
            Some(account) => service.update_account(account).into(),
            None => Response::bad_request(MISSING_ID),
        },
        Request::Delete { id: Some(id) } => service.delete_account(&id).into(),
        Request::Read { id: None } | Request::Delete { id: None } => {
            Response::bad_request(MISSING_ID)
        }
        Request::List { page, size } => match (page, size) {
            (Some(page), Some(size)) if page >= 1 && size >= 0 => {
                let page = usize::try_from(page).unwrap_or(usize::MAX);
                let size = usize::try_from(size).unwrap_or(usize::MAX);
                Response::ok(service.list_accounts(page, size))
            }
            _ => Response::bad_request(INVALID_PAGE),
        },
    }
}
