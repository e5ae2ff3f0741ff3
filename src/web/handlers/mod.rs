//! HTML template rendering handlers for the web dashboard.

mod dashboard;
mod employees;
mod login;

pub use dashboard::dashboard_handler;
pub use employees::{employee_handler, employees_handler, new_employee_handler};
pub use login::login_handler;
