//! UI layer: app shell, employee table, and employee form.

pub mod app;
pub mod form_view;
pub mod list_view;

pub use app::EmployeesApp;
