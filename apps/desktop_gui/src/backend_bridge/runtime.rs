//! Runtime bridge between UI command queue and backend event intake.

use std::thread;

use client_core::EmployeeClient;
use crossbeam_channel::{Receiver, Sender};

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::UiEvent;
use crate::controller::orchestration::execute_command;

/// Spawns the backend worker thread. Commands are executed one at a time,
/// in queue order, and each outcome is sent back before the next starts.
pub fn launch(cmd_rx: Receiver<BackendCommand>, ui_tx: Sender<UiEvent>, api_base_url: String) {
    thread::spawn(move || {
        let _ = ui_tx.try_send(UiEvent::Info("Backend worker starting...".to_string()));
        let runtime = match tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()
        {
            Ok(runtime) => runtime,
            Err(err) => {
                let _ = ui_tx.try_send(UiEvent::BackendStartupFailed(format!(
                    "backend worker startup failure: failed to build runtime: {err}"
                )));
                tracing::error!("failed to build backend runtime: {err}");
                return;
            }
        };

        let client = EmployeeClient::new(api_base_url);
        tracing::info!(base_url = client.base_url(), "backend worker ready");
        let _ = ui_tx.try_send(UiEvent::Info(format!("Using {}", client.base_url())));

        // Waiting for the next command happens off the runtime; only the
        // request itself runs inside `block_on`.
        while let Ok(cmd) = cmd_rx.recv() {
            let outcome = runtime.block_on(execute_command(&client, cmd));
            if ui_tx.send(UiEvent::Completed(outcome)).is_err() {
                tracing::debug!("ui event receiver dropped; stopping backend worker");
                break;
            }
        }
    });
}
