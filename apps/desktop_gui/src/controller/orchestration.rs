//! Command orchestration helpers from controller output to the backend worker.

use client_core::EmployeeApi;
use crossbeam_channel::{Sender, TrySendError};

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::CallOutcome;

/// Queues `cmd` for the backend worker. On failure the command is handed
/// back so the controller can report it.
pub fn dispatch_backend_command(
    cmd_tx: &Sender<BackendCommand>,
    cmd: BackendCommand,
    status: &mut String,
) -> Result<(), BackendCommand> {
    let cmd_name = cmd.operation().label();

    match cmd_tx.try_send(cmd) {
        Ok(()) => {
            tracing::debug!(command = cmd_name, "queued ui->backend command");
            Ok(())
        }
        Err(TrySendError::Full(cmd)) => {
            *status = "UI command queue is full; please retry".to_string();
            Err(cmd)
        }
        Err(TrySendError::Disconnected(cmd)) => {
            *status = "Backend worker disconnected; restart the application".to_string();
            Err(cmd)
        }
    }
}

/// Runs one command against the API and wraps its result for the reducer.
pub async fn execute_command<A>(api: &A, cmd: BackendCommand) -> CallOutcome
where
    A: EmployeeApi + ?Sized,
{
    match cmd {
        BackendCommand::ListEmployees => CallOutcome::Loaded(api.list().await),
        BackendCommand::CreateEmployee { draft } => CallOutcome::Created(api.create(&draft).await),
        BackendCommand::UpdateEmployee { id, draft } => {
            CallOutcome::Updated(api.update(id, &draft).await)
        }
        BackendCommand::DeleteEmployee { id } => CallOutcome::Deleted(api.delete(id).await),
    }
}
