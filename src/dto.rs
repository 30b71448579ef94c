use serde::{Deserialize, Serialize};

use crate::handler::{AccountPayload, Request, Response};
use crate::stores::Credential;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    Create,
    Read,
    Update,
    Delete,
    List,
}

/// One input row of an operations file.
/// Columns: `op,id,email,username,credential,page,size`; empty fields are absent.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct RequestRow {
    pub op: Operation,
    pub id: Option<String>,
    pub email: Option<String>,
    pub username: Option<String>,
    pub credential: Option<Credential>,
    pub page: Option<i64>,
    pub size: Option<i64>,
}

impl From<RequestRow> for Request {
    fn from(row: RequestRow) -> Self {
        match row.op {
            Operation::Create | Operation::Update => {
                let payload = AccountPayload {
                    id: row.id,
                    email: row.email,
                    username: row.username,
                    credential: row.credential,
                };
                if row.op == Operation::Create {
                    Request::Create(payload)
                } else {
                    Request::Update(payload)
                }
            }
            Operation::Read => Request::Read { id: row.id },
            Operation::Delete => Request::Delete { id: row.id },
            Operation::List => Request::List {
                page: row.page,
                size: row.size,
            },
        }
    }
}

/// One output row. A response carrying several accounts produces one row per
/// account, all sharing the same `seq`; a response without accounts produces a
/// single row with empty account fields.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ResponseRow {
    pub seq: u64,
    pub op: Operation,
    pub status: u16,
    pub id: Option<String>,
    pub email: Option<String>,
    pub username: Option<String>,
    pub credential: Option<Credential>,
    pub message: Option<String>,
}

impl ResponseRow {
    pub fn from_response(seq: u64, op: Operation, response: Response) -> Vec<ResponseRow> {
        let status = response.status.code();
        if response.accounts.is_empty() {
            return vec![ResponseRow {
                seq,
                op,
                status,
                id: None,
                email: None,
                username: None,
                credential: None,
                message: response.message,
            }];
        }
        response
            .accounts
            .into_iter()
            .map(|account| ResponseRow {
                seq,
                op,
                status,
                id: Some(account.id),
                email: Some(account.email),
                username: Some(account.username),
                credential: Some(account.credential),
                message: response.message.clone(),
            })
            .collect()
    }
}
