//! Web dashboard layer for browser-based UI.
//!
//! Server-rendered HTML pages using Askama templates.
//!
//! # Modules
//!
//! - [`handlers`] - Template rendering handlers
//! - [`middleware`] - Cookie session authentication
//! - [`routes`] - Dashboard route configuration
//! - [`views`] - Pure view models behind the templates

pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod views;
