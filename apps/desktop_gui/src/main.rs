use std::path::PathBuf;

mod backend_bridge;
mod config;
mod controller;
mod ui;

use anyhow::anyhow;
use clap::Parser;
use crossbeam_channel::bounded;
use eframe::egui;
use tracing_subscriber::EnvFilter;

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::UiEvent;
use crate::ui::{app::APP_TITLE, EmployeesApp};

#[derive(Parser, Debug)]
#[command(about = "Desktop client for the employees REST service")]
struct Args {
    /// Base URL of the REST API, e.g. http://127.0.0.1:8000/api
    #[arg(long)]
    api_base_url: Option<String>,
    /// TOML settings file (defaults to ./employees.toml when present)
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();
    let args = Args::parse();

    let settings = config::load_settings(args.config.as_deref(), args.api_base_url.as_deref())?;
    tracing::info!(api_base_url = %settings.api_base_url, "starting employee records client");

    let (cmd_tx, cmd_rx) = bounded::<BackendCommand>(64);
    let (ui_tx, ui_rx) = bounded::<UiEvent>(256);
    backend_bridge::runtime::launch(cmd_rx, ui_tx, settings.api_base_url.clone());

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(APP_TITLE)
            .with_inner_size([1024.0, 640.0])
            .with_min_inner_size([720.0, 420.0]),
        ..Default::default()
    };
    eframe::run_native(
        APP_TITLE,
        options,
        Box::new(move |_cc| Ok(Box::new(EmployeesApp::bootstrap(cmd_tx, ui_rx, settings)))),
    )
    .map_err(|err| anyhow!("desktop ui exited with error: {err}"))
}
