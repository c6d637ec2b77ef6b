//! Billed API server library.
//!
//! Exposes config, state, error handling, views and routes so integration
//! tests and the binary entrypoint build the same application.

pub mod config;
pub mod error;
pub mod handlers;
pub mod routes;
pub mod state;
pub mod views;
