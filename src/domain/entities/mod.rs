//! Core domain entities of the store back-office.
//!
//! Entities are plain data structures serialized with camelCase keys, the
//! shape the dashboard client expects.
//!
//! # Entity Types
//!
//! - [`Store`] - Tenant owned by a single user
//! - [`Category`] - Grouping of services
//! - [`Service`] - Bookable offering with price, duration and images
//! - [`Image`] - Picture attached to a service
//! - [`Employee`] - Staff member of a store
//!
//! Creation and update inputs live next to their entity (`NewStore`,
//! `ServiceInput`, `NewImage`).

pub mod category;
pub mod employee;
pub mod image;
pub mod service;
pub mod store;

pub use category::Category;
pub use employee::Employee;
pub use image::{Image, NewImage};
pub use service::{Service, ServiceDetails, ServiceFilter, ServiceInput};
pub use store::{NewStore, Store, StoreScope};
