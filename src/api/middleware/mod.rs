//! HTTP middleware and extractors for request processing and protection.
//!
//! Provides caller identity, rate limiting, and observability.

pub mod rate_limit;
pub mod session;
pub mod tracing;
