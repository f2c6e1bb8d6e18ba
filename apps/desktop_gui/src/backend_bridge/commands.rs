//! Backend commands queued from UI to backend worker.

use client_core::ApiOperation;
use shared::domain::{EmployeeDraft, EmployeeId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BackendCommand {
    ListEmployees,
    CreateEmployee {
        draft: EmployeeDraft,
    },
    UpdateEmployee {
        id: EmployeeId,
        draft: EmployeeDraft,
    },
    DeleteEmployee {
        id: EmployeeId,
    },
}

impl BackendCommand {
    pub fn operation(&self) -> ApiOperation {
        match self {
            BackendCommand::ListEmployees => ApiOperation::List,
            BackendCommand::CreateEmployee { .. } => ApiOperation::Create,
            BackendCommand::UpdateEmployee { .. } => ApiOperation::Update,
            BackendCommand::DeleteEmployee { .. } => ApiOperation::Delete,
        }
    }
}
