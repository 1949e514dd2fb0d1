//! Loans API server library.
//!
//! Exposes config, error handling, and routes so integration tests and the
//! binary entrypoint build the exact same application.

pub mod config;
pub mod error;
pub mod extract;
pub mod handlers;
pub mod router;
pub mod routes;
