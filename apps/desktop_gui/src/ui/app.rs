use crossbeam_channel::{Receiver, Sender};
use eframe::egui;

use crate::backend_bridge::commands::BackendCommand;
use crate::config::Settings;
use crate::controller::events::{ControllerEvent, Intent, UiEvent};
use crate::controller::orchestration::dispatch_backend_command;
use crate::controller::reducer::{reduce, AppState, Mode};
use crate::ui::form_view::{self, EmployeeForm, FormIntent};
use crate::ui::list_view::{self, ListIntent};

pub const APP_TITLE: &str = "Employee Management System";

pub struct EmployeesApp {
    cmd_tx: Sender<BackendCommand>,
    ui_rx: Receiver<UiEvent>,

    state: AppState,
    form: EmployeeForm,

    status: String,
    api_base_url: String,
}

impl EmployeesApp {
    pub fn bootstrap(
        cmd_tx: Sender<BackendCommand>,
        ui_rx: Receiver<UiEvent>,
        settings: Settings,
    ) -> Self {
        let mut app = Self {
            cmd_tx,
            ui_rx,
            state: AppState::default(),
            form: EmployeeForm::default(),
            status: "Loading employees...".to_string(),
            api_base_url: settings.api_base_url,
        };
        app.apply(ControllerEvent::Startup);
        app
    }

    /// Feeds one event through the reducer and queues whatever it asks for.
    fn apply(&mut self, event: ControllerEvent) {
        let previous_mode = self.state.mode().clone();
        let mut commands = reduce(&mut self.state, event);

        while !commands.is_empty() {
            let mut undelivered = Vec::new();
            for cmd in commands {
                if let Err(cmd) = dispatch_backend_command(&self.cmd_tx, cmd, &mut self.status) {
                    undelivered.push(cmd);
                }
            }
            commands = undelivered
                .into_iter()
                .flat_map(|cmd| reduce(&mut self.state, ControllerEvent::DispatchFailed(cmd)))
                .collect();
        }

        if self.state.mode() != &previous_mode && self.state.mode().is_editing() {
            self.form = EmployeeForm::for_selection(self.state.mode().selected());
        }
    }

    fn process_ui_events(&mut self) {
        while let Ok(event) = self.ui_rx.try_recv() {
            match event {
                UiEvent::Info(message) => {
                    self.status = message;
                }
                UiEvent::BackendStartupFailed(message) => {
                    tracing::error!("{message}");
                    self.status = message;
                }
                UiEvent::Completed(outcome) => {
                    self.apply(ControllerEvent::Completed(outcome));
                    if !self.state.is_busy() {
                        self.status = format!(
                            "{} employees from {}",
                            self.state.employees().len(),
                            self.api_base_url
                        );
                    }
                }
            }
        }
    }

    fn show_header(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            ui.add_space(6.0);
            ui.horizontal(|ui| {
                ui.heading(APP_TITLE);
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let add = egui::Button::new("Add Employee");
                    if ui.add_enabled(!self.state.is_busy(), add).clicked() {
                        self.apply(ControllerEvent::Intent(Intent::Add));
                    }
                });
            });
            ui.add_space(6.0);
        });
    }

    fn show_status_bar(&self, ctx: &egui::Context) {
        egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
            ui.horizontal(|ui| {
                if self.state.is_busy() {
                    ui.spinner();
                }
                ui.weak(&self.status);
            });
        });
    }

    fn show_error_banner(&self, ui: &mut egui::Ui) {
        let Some(banner) = self.state.error() else {
            return;
        };

        egui::Frame::NONE
            .fill(egui::Color32::from_rgb(111, 53, 53))
            .stroke(egui::Stroke::new(1.0, egui::Color32::from_rgb(175, 96, 96)))
            .corner_radius(8.0)
            .inner_margin(egui::Margin::symmetric(10, 8))
            .show(ui, |ui| {
                ui.label(egui::RichText::new(banner.message()).color(egui::Color32::WHITE));
            })
            .response
            .on_hover_text(format!("{} request failed", banner.operation().label()));
        ui.add_space(8.0);
    }

    fn show_body(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default().show(ctx, |ui| {
            self.show_error_banner(ui);

            let busy = self.state.is_busy();
            let intent = match self.state.mode().clone() {
                Mode::Editing { selected } => {
                    let title = if selected.is_some() {
                        "Edit Employee"
                    } else {
                        "Add New Employee"
                    };
                    ui.heading(title);
                    ui.add_space(8.0);
                    ui.add_enabled_ui(!busy, |ui| form_view::show(ui, &mut self.form))
                        .inner
                        .map(|intent| match intent {
                            FormIntent::Submit(draft) => Intent::Submit(draft),
                            FormIntent::Cancel => Intent::Cancel,
                        })
                }
                Mode::Viewing => ui
                    .add_enabled_ui(!busy, |ui| list_view::show(ui, self.state.employees()))
                    .inner
                    .map(|intent| match intent {
                        ListIntent::Edit(employee) => Intent::Edit(employee),
                        ListIntent::Delete(id) => Intent::Delete(id),
                    }),
            };

            if let Some(intent) = intent {
                self.apply(ControllerEvent::Intent(intent));
            }
        });
    }

    fn show_delete_confirmation(&mut self, ctx: &egui::Context) {
        let Some(id) = self.state.pending_delete() else {
            return;
        };

        let mut answer = None;
        egui::Window::new("Delete employee")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.label(format!("Are you sure you want to delete employee {id}?"));
                ui.add_space(8.0);
                ui.horizontal(|ui| {
                    if ui.button("Delete").clicked() {
                        answer = Some(Intent::ConfirmDelete);
                    }
                    if ui.button("Keep").clicked() {
                        answer = Some(Intent::DeclineDelete);
                    }
                });
            });

        if let Some(intent) = answer {
            self.apply(ControllerEvent::Intent(intent));
        }
    }
}

impl eframe::App for EmployeesApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.process_ui_events();

        self.show_header(ctx);
        self.show_status_bar(ctx);
        self.show_body(ctx);
        self.show_delete_confirmation(ctx);

        if self.state.is_busy() {
            ctx.request_repaint_after(std::time::Duration::from_millis(16));
        } else {
            ctx.request_repaint_after(std::time::Duration::from_millis(100));
        }
    }
}

#[cfg(test)]
#[path = "../tests/app_tests.rs"]
mod tests;
