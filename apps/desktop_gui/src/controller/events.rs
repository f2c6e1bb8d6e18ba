//! UI/backend events and error modeling for the employees controller.

use client_core::{ApiOperation, ClientError};
use shared::domain::{Employee, EmployeeDraft, EmployeeId};

use crate::backend_bridge::commands::BackendCommand;

/// User intents raised by the list and form views.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    Add,
    Edit(Employee),
    Delete(EmployeeId),
    ConfirmDelete,
    DeclineDelete,
    Submit(EmployeeDraft),
    Cancel,
}

/// Result of one backend command, reported back to the controller.
#[derive(Debug)]
pub enum CallOutcome {
    Loaded(Result<Vec<Employee>, ClientError>),
    Created(Result<(), ClientError>),
    Updated(Result<(), ClientError>),
    Deleted(Result<(), ClientError>),
}

impl CallOutcome {
    pub fn operation(&self) -> ApiOperation {
        match self {
            CallOutcome::Loaded(_) => ApiOperation::List,
            CallOutcome::Created(_) => ApiOperation::Create,
            CallOutcome::Updated(_) => ApiOperation::Update,
            CallOutcome::Deleted(_) => ApiOperation::Delete,
        }
    }
}

#[derive(Debug)]
pub enum ControllerEvent {
    Startup,
    Intent(Intent),
    Completed(CallOutcome),
    /// The command never reached the backend worker.
    DispatchFailed(BackendCommand),
}

/// Messages sent from the backend worker to the UI thread.
#[derive(Debug)]
pub enum UiEvent {
    Info(String),
    BackendStartupFailed(String),
    Completed(CallOutcome),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorBanner {
    operation: ApiOperation,
    message: &'static str,
}

impl ErrorBanner {
    pub fn for_operation(operation: ApiOperation) -> Self {
        let message = match operation {
            ApiOperation::List => "Failed to load employees",
            ApiOperation::Create => "Failed to create employee",
            ApiOperation::Update => "Failed to update employee",
            ApiOperation::Delete => "Failed to delete employee",
        };
        Self { operation, message }
    }

    pub fn operation(&self) -> ApiOperation {
        self.operation
    }

    pub fn message(&self) -> &'static str {
        self.message
    }
}
