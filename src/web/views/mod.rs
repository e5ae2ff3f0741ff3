//! View models computed from domain data before rendering.

pub mod employees;

pub use employees::{ActionButton, EmployeeColumn, EmployeesTable, TableQuery, path_of};
