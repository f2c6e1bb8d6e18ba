//! Employee table: a pure projection of the current snapshot.

use std::fmt;

use eframe::egui;
use shared::domain::{format_hire_date, Employee, EmployeeId};

pub const COLUMNS: [&str; 6] = ["ID", "Name", "Department", "Position", "Hire Date", "Actions"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmployeeRow {
    pub id: EmployeeId,
    pub name: String,
    pub department: String,
    pub position: String,
    pub hire_date: String,
}

impl From<&Employee> for EmployeeRow {
    fn from(employee: &Employee) -> Self {
        Self {
            id: employee.id,
            name: employee.full_name(),
            department: employee.department.clone(),
            position: employee.position.clone(),
            hire_date: format_hire_date(employee.hire_date),
        }
    }
}

impl fmt::Display for EmployeeRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} | {} | {} | {} | {}",
            self.id, self.name, self.department, self.position, self.hire_date
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListIntent {
    Edit(Employee),
    Delete(EmployeeId),
}

pub fn employee_rows(employees: &[Employee]) -> Vec<EmployeeRow> {
    employees.iter().map(EmployeeRow::from).collect()
}

pub fn show(ui: &mut egui::Ui, employees: &[Employee]) -> Option<ListIntent> {
    let mut intent = None;

    egui::ScrollArea::both().show(ui, |ui| {
        egui::Grid::new("employee_table")
            .num_columns(COLUMNS.len())
            .striped(true)
            .spacing([24.0, 8.0])
            .show(ui, |ui| {
                for column in COLUMNS {
                    ui.strong(column.to_uppercase());
                }
                ui.end_row();

                for (employee, row) in employees.iter().zip(employee_rows(employees)) {
                    ui.label(row.id.to_string());
                    ui.label(row.name);
                    ui.label(row.department);
                    ui.label(row.position);
                    ui.label(row.hire_date);
                    ui.horizontal(|ui| {
                        if ui.button("Edit").clicked() {
                            intent = Some(ListIntent::Edit(employee.clone()));
                        }
                        if ui.button("Delete").clicked() {
                            intent = Some(ListIntent::Delete(employee.id));
                        }
                    });
                    ui.end_row();
                }
            });
    });

    if employees.is_empty() {
        ui.add_space(8.0);
        ui.weak("No employees yet.");
    }

    intent
}

#[cfg(test)]
#[path = "../tests/list_view_tests.rs"]
mod tests;
