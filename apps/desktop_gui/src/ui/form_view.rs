//! Create/edit form bound to a single employee or an empty template.

use eframe::egui;
use shared::{
    domain::{format_hire_date, parse_hire_date, Employee, EmployeeDraft},
    error::DomainError,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormIntent {
    Submit(EmployeeDraft),
    Cancel,
}

/// Editable text for every field except the identifier.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmployeeForm {
    pub first_name: String,
    pub last_name: String,
    pub department: String,
    pub position: String,
    pub hire_date: String,
    hire_date_error: Option<String>,
}

impl EmployeeForm {
    pub fn for_selection(selected: Option<&Employee>) -> Self {
        match selected {
            Some(employee) => Self {
                first_name: employee.first_name.clone(),
                last_name: employee.last_name.clone(),
                department: employee.department.clone(),
                position: employee.position.clone(),
                hire_date: format_hire_date(employee.hire_date),
                hire_date_error: None,
            },
            None => Self::default(),
        }
    }

    pub fn to_draft(&self) -> Result<EmployeeDraft, DomainError> {
        Ok(EmployeeDraft {
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            department: self.department.clone(),
            position: self.position.clone(),
            hire_date: parse_hire_date(&self.hire_date)?,
        })
    }

    /// Builds the submit intent, or records why the hire date was rejected.
    pub fn submit(&mut self) -> Option<FormIntent> {
        match self.to_draft() {
            Ok(draft) => {
                self.hire_date_error = None;
                Some(FormIntent::Submit(draft))
            }
            Err(err) => {
                self.hire_date_error = Some(err.to_string());
                None
            }
        }
    }

    pub fn hire_date_error(&self) -> Option<&str> {
        self.hire_date_error.as_deref()
    }
}

fn field_row(ui: &mut egui::Ui, label: &str, value: &mut String, hint: &str) {
    ui.label(label);
    ui.add(egui::TextEdit::singleline(value).hint_text(hint).desired_width(280.0));
    ui.end_row();
}

pub fn show(ui: &mut egui::Ui, form: &mut EmployeeForm) -> Option<FormIntent> {
    let mut intent = None;

    egui::Grid::new("employee_form")
        .num_columns(2)
        .spacing([16.0, 8.0])
        .show(ui, |ui| {
            field_row(ui, "First Name", &mut form.first_name, "");
            field_row(ui, "Last Name", &mut form.last_name, "");
            field_row(ui, "Department", &mut form.department, "");
            field_row(ui, "Position", &mut form.position, "");
            field_row(ui, "Hire Date", &mut form.hire_date, "YYYY-MM-DD");
        });

    if let Some(message) = form.hire_date_error() {
        ui.colored_label(egui::Color32::from_rgb(200, 80, 80), message);
    }

    ui.add_space(8.0);
    ui.horizontal(|ui| {
        if ui.button("Save").clicked() {
            intent = form.submit();
        }
        if ui.button("Cancel").clicked() {
            intent = Some(FormIntent::Cancel);
        }
    });

    intent
}

#[cfg(test)]
#[path = "../tests/form_view_tests.rs"]
mod tests;
