//! Pure state transitions for the employees screen.
//!
//! `reduce` never performs I/O. It mutates [`AppState`] and returns the
//! backend commands the caller must issue, in order. A mutation's reload is
//! only requested once the mutation's own outcome has been fed back, so the
//! list is never refreshed ahead of the write it depends on.

use client_core::{ApiOperation, ClientError};
use shared::domain::{Employee, EmployeeId};
use tracing::{debug, error, info, warn};

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::{CallOutcome, ControllerEvent, ErrorBanner, Intent};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Viewing,
    Editing {
        selected: Option<Employee>,
    },
}

impl Mode {
    pub fn is_editing(&self) -> bool {
        matches!(self, Mode::Editing { .. })
    }

    pub fn selected(&self) -> Option<&Employee> {
        match self {
            Mode::Editing { selected } => selected.as_ref(),
            Mode::Viewing => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum InFlight {
    Load,
    Mutation(ApiOperation),
    ReloadAfter(ApiOperation),
}

#[derive(Debug, Clone, Default)]
pub struct AppState {
    employees: Vec<Employee>,
    mode: Mode,
    error: Option<ErrorBanner>,
    pending_delete: Option<EmployeeId>,
    in_flight: Option<InFlight>,
}

impl AppState {
    pub fn employees(&self) -> &[Employee] {
        &self.employees
    }

    pub fn mode(&self) -> &Mode {
        &self.mode
    }

    pub fn error(&self) -> Option<&ErrorBanner> {
        self.error.as_ref()
    }

    pub fn pending_delete(&self) -> Option<EmployeeId> {
        self.pending_delete
    }

    /// True while a backend command is outstanding.
    pub fn is_busy(&self) -> bool {
        self.in_flight.is_some()
    }
}

pub fn reduce(state: &mut AppState, event: ControllerEvent) -> Vec<BackendCommand> {
    match event {
        ControllerEvent::Startup => {
            if state.is_busy() {
                return Vec::new();
            }
            state.in_flight = Some(InFlight::Load);
            vec![BackendCommand::ListEmployees]
        }
        ControllerEvent::Intent(intent) => reduce_intent(state, intent),
        ControllerEvent::Completed(outcome) => reduce_outcome(state, outcome),
        ControllerEvent::DispatchFailed(command) => {
            error!(
                operation = command.operation().label(),
                "backend command was not delivered"
            );
            if let Some(InFlight::ReloadAfter(mutation)) = state.in_flight.take() {
                debug!(after = mutation.label(), "mutation settled without reload");
                state.mode = Mode::Viewing;
            }
            state.error = Some(ErrorBanner::for_operation(command.operation()));
            Vec::new()
        }
    }
}

fn reduce_intent(state: &mut AppState, intent: Intent) -> Vec<BackendCommand> {
    if state.is_busy() {
        return Vec::new();
    }

    match intent {
        Intent::Add => {
            state.pending_delete = None;
            state.mode = Mode::Editing { selected: None };
            Vec::new()
        }
        Intent::Edit(employee) => {
            if state.mode.is_editing() {
                return Vec::new();
            }
            state.pending_delete = None;
            state.mode = Mode::Editing {
                selected: Some(employee),
            };
            Vec::new()
        }
        Intent::Delete(id) => {
            if !state.mode.is_editing() {
                state.pending_delete = Some(id);
            }
            Vec::new()
        }
        Intent::DeclineDelete => {
            state.pending_delete = None;
            Vec::new()
        }
        Intent::ConfirmDelete => match state.pending_delete.take() {
            Some(id) => {
                state.in_flight = Some(InFlight::Mutation(ApiOperation::Delete));
                vec![BackendCommand::DeleteEmployee { id }]
            }
            None => Vec::new(),
        },
        Intent::Submit(draft) => match &state.mode {
            Mode::Editing { selected: None } => {
                state.in_flight = Some(InFlight::Mutation(ApiOperation::Create));
                vec![BackendCommand::CreateEmployee { draft }]
            }
            Mode::Editing {
                selected: Some(employee),
            } => {
                let id = employee.id;
                state.in_flight = Some(InFlight::Mutation(ApiOperation::Update));
                vec![BackendCommand::UpdateEmployee { id, draft }]
            }
            Mode::Viewing => Vec::new(),
        },
        Intent::Cancel => {
            state.mode = Mode::Viewing;
            Vec::new()
        }
    }
}

fn reduce_outcome(state: &mut AppState, outcome: CallOutcome) -> Vec<BackendCommand> {
    let operation = outcome.operation();
    let in_flight = state.in_flight.take();
    match outcome {
        CallOutcome::Loaded(result) => {
            match result {
                Ok(employees) => {
                    info!(count = employees.len(), "employee list reloaded");
                    state.employees = employees;
                    state.error = None;
                }
                Err(err) => record_failure(state, &err),
            }
            if let Some(InFlight::ReloadAfter(mutation)) = in_flight {
                debug!(after = mutation.label(), "mutation settled");
                state.mode = Mode::Viewing;
            }
            Vec::new()
        }
        CallOutcome::Created(result)
        | CallOutcome::Updated(result)
        | CallOutcome::Deleted(result) => {
            match in_flight {
                Some(InFlight::Mutation(expected)) if expected == operation => {}
                other => warn!(
                    operation = operation.label(),
                    in_flight = ?other,
                    "unexpected mutation outcome"
                ),
            }
            match result {
                Ok(()) => {
                    state.in_flight = Some(InFlight::ReloadAfter(operation));
                    vec![BackendCommand::ListEmployees]
                }
                Err(err) => {
                    record_failure(state, &err);
                    Vec::new()
                }
            }
        }
    }
}

fn record_failure(state: &mut AppState, err: &ClientError) {
    let banner = ErrorBanner::for_operation(err.operation());
    error!(operation = err.operation().label(), error = %err, "{}", banner.message());
    state.error = Some(banner);
}

#[cfg(test)]
#[path = "../tests/reducer_tests.rs"]
mod tests;
