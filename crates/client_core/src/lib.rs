//! HTTP client for the employees REST resource.

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use shared::domain::{Employee, EmployeeDraft, EmployeeId};
use thiserror::Error;
use tracing::debug;

pub const DEFAULT_API_BASE_URL: &str = "http://127.0.0.1:8000/api";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ApiOperation {
    List,
    Create,
    Update,
    Delete,
}

impl ApiOperation {
    pub fn label(self) -> &'static str {
        match self {
            ApiOperation::List => "list",
            ApiOperation::Create => "create",
            ApiOperation::Update => "update",
            ApiOperation::Delete => "delete",
        }
    }
}

#[derive(Debug, Error)]
pub enum FailureCause {
    #[error("server responded with status {0}")]
    Status(StatusCode),
    #[error("request failed: {0}")]
    Transport(#[source] reqwest::Error),
    #[error("invalid response body: {0}")]
    Decode(#[source] reqwest::Error),
}

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("failed to fetch employees: {0}")]
    Fetch(#[source] FailureCause),
    #[error("failed to create employee: {0}")]
    Create(#[source] FailureCause),
    #[error("failed to update employee {id}: {cause}")]
    Update {
        id: EmployeeId,
        #[source]
        cause: FailureCause,
    },
    #[error("failed to delete employee {id}: {cause}")]
    Delete {
        id: EmployeeId,
        #[source]
        cause: FailureCause,
    },
}

impl ClientError {
    pub fn operation(&self) -> ApiOperation {
        match self {
            ClientError::Fetch(_) => ApiOperation::List,
            ClientError::Create(_) => ApiOperation::Create,
            ClientError::Update { .. } => ApiOperation::Update,
            ClientError::Delete { .. } => ApiOperation::Delete,
        }
    }

    pub fn cause(&self) -> &FailureCause {
        match self {
            ClientError::Fetch(cause) | ClientError::Create(cause) => cause,
            ClientError::Update { cause, .. } | ClientError::Delete { cause, .. } => cause,
        }
    }

    /// Status code of the rejected response, if the server answered at all.
    pub fn status(&self) -> Option<StatusCode> {
        match self.cause() {
            FailureCause::Status(status) => Some(*status),
            FailureCause::Transport(_) | FailureCause::Decode(_) => None,
        }
    }
}

/// The four remote operations on the employees resource.
///
/// Any non-2xx response is a terminal failure for that call: there are no
/// retries and no timeouts.
#[async_trait]
pub trait EmployeeApi: Send + Sync {
    async fn list(&self) -> Result<Vec<Employee>, ClientError>;
    /// The created resource in the response body is not read back; callers
    /// reload the collection instead.
    async fn create(&self, draft: &EmployeeDraft) -> Result<(), ClientError>;
    async fn update(&self, id: EmployeeId, draft: &EmployeeDraft) -> Result<(), ClientError>;
    async fn delete(&self, id: EmployeeId) -> Result<(), ClientError>;
}

#[derive(Debug, Clone)]
pub struct EmployeeClient {
    http: Client,
    base_url: String,
}

impl EmployeeClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_http_client(Client::new(), base_url)
    }

    pub fn with_http_client(http: Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { http, base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn collection_url(&self) -> String {
        format!("{}/employees/", self.base_url)
    }

    fn resource_url(&self, id: EmployeeId) -> String {
        format!("{}/employees/{}/", self.base_url, id.0)
    }
}

impl Default for EmployeeClient {
    fn default() -> Self {
        Self::new(DEFAULT_API_BASE_URL)
    }
}

async fn send(request: RequestBuilder) -> Result<Response, FailureCause> {
    let response = request.send().await.map_err(FailureCause::Transport)?;
    let status = response.status();
    if !status.is_success() {
        return Err(FailureCause::Status(status));
    }
    Ok(response)
}

#[async_trait]
impl EmployeeApi for EmployeeClient {
    async fn list(&self) -> Result<Vec<Employee>, ClientError> {
        let url = self.collection_url();
        debug!(%url, "listing employees");
        let response = send(self.http.get(url)).await.map_err(ClientError::Fetch)?;
        response
            .json::<Vec<Employee>>()
            .await
            .map_err(|err| ClientError::Fetch(FailureCause::Decode(err)))
    }

    async fn create(&self, draft: &EmployeeDraft) -> Result<(), ClientError> {
        let url = self.collection_url();
        debug!(%url, "creating employee");
        send(self.http.post(url).json(draft))
            .await
            .map_err(ClientError::Create)?;
        Ok(())
    }

    async fn update(&self, id: EmployeeId, draft: &EmployeeDraft) -> Result<(), ClientError> {
        let url = self.resource_url(id);
        debug!(%url, employee_id = id.0, "updating employee");
        let body = Employee::from_draft(id, draft.clone());
        send(self.http.put(url).json(&body))
            .await
            .map_err(|cause| ClientError::Update { id, cause })?;
        Ok(())
    }

    async fn delete(&self, id: EmployeeId) -> Result<(), ClientError> {
        let url = self.resource_url(id);
        debug!(%url, employee_id = id.0, "deleting employee");
        send(self.http.delete(url))
            .await
            .map_err(|cause| ClientError::Delete { id, cause })?;
        Ok(())
    }
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
