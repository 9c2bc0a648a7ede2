//! Remote REST mirror of the employee collection.
//!
//! # Responsibility
//! - Restore the collection from `GET {base}` at startup.
//! - Mirror each mutation as its REST call: `POST {base}` on create,
//!   `PUT {base}/{id}` on update, `DELETE {base}/{id}` on delete.
//!
//! # Invariants
//! - Response bodies are never trusted; local id assignment and splicing
//!   stay authoritative.
//! - Calls are one-shot: no retry, no cancellation. A failure is reported
//!   upward and the in-memory mutation stands.

use crate::model::employee::{Employee, EmployeeId};
use crate::store::{BackingStore, Mutation, PersistResult, PersistenceError};
use log::debug;
use reqwest::blocking::{Client, Response};
use serde::Serialize;

/// Create body sent to the remote endpoint: the record minus its id.
#[derive(Serialize)]
struct CreateBody<'a> {
    name: &'a str,
    email: &'a str,
    #[serde(skip_serializing_if = "str::is_empty")]
    role: &'a str,
}

/// REST-shaped backing store, the remote persistence variant.
pub struct RemoteHttpStore {
    client: Client,
    base_url: String,
}

impl RemoteHttpStore {
    /// Builds a mirror over a list endpoint such as `https://host/users`.
    ///
    /// # Errors
    /// - `Http` when the underlying client cannot be constructed.
    pub fn new(base_url: impl Into<String>) -> PersistResult<Self> {
        let client = Client::builder()
            .build()
            .map_err(|source| PersistenceError::Http {
                operation: "client_init",
                source,
            })?;

        let base_url = base_url.into().trim_end_matches('/').to_string();
        Ok(Self { client, base_url })
    }

    fn record_url(&self, id: EmployeeId) -> String {
        format!("{}/{id}", self.base_url)
    }

    fn check_status(operation: &'static str, response: Response) -> PersistResult<()> {
        let status = response.status();
        if !status.is_success() {
            return Err(PersistenceError::RemoteStatus {
                operation,
                status: status.as_u16(),
            });
        }
        Ok(())
    }
}

impl BackingStore for RemoteHttpStore {
    fn backend_id(&self) -> &'static str {
        "remote_http"
    }

    fn load(&self) -> PersistResult<Option<Vec<Employee>>> {
        debug!("event=remote_call module=store op=list url={}", self.base_url);

        let response = self
            .client
            .get(&self.base_url)
            .send()
            .map_err(|source| PersistenceError::Http {
                operation: "list",
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(PersistenceError::RemoteStatus {
                operation: "list",
                status: status.as_u16(),
            });
        }

        let records: Vec<Employee> =
            response
                .json()
                .map_err(|source| PersistenceError::Http {
                    operation: "list",
                    source,
                })?;
        Ok(Some(records))
    }

    fn persist(&self, mutation: Mutation<'_>, _snapshot: &[Employee]) -> PersistResult<()> {
        match mutation {
            Mutation::Created(record) => {
                debug!(
                    "event=remote_call module=store op=create url={}",
                    self.base_url
                );
                let body = CreateBody {
                    name: &record.name,
                    email: &record.email,
                    role: &record.role,
                };
                let response = self
                    .client
                    .post(&self.base_url)
                    .json(&body)
                    .send()
                    .map_err(|source| PersistenceError::Http {
                        operation: "create",
                        source,
                    })?;
                Self::check_status("create", response)
            }
            Mutation::Updated { id, patch } => {
                let url = self.record_url(id);
                debug!("event=remote_call module=store op=update url={url}");
                let response = self
                    .client
                    .put(&url)
                    .json(patch)
                    .send()
                    .map_err(|source| PersistenceError::Http {
                        operation: "update",
                        source,
                    })?;
                Self::check_status("update", response)
            }
            Mutation::Deleted(id) => {
                let url = self.record_url(id);
                debug!("event=remote_call module=store op=delete url={url}");
                let response = self
                    .client
                    .delete(&url)
                    .send()
                    .map_err(|source| PersistenceError::Http {
                        operation: "delete",
                        source,
                    })?;
                Self::check_status("delete", response)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::RemoteHttpStore;

    #[test]
    fn trims_trailing_slash_and_builds_record_urls() {
        let store = RemoteHttpStore::new("https://api.example.com/users/")
            .expect("client should build");
        assert_eq!(store.base_url, "https://api.example.com/users");
        assert_eq!(
            store.record_url(1_700_000_000_000),
            "https://api.example.com/users/1700000000000"
        );
    }
}
