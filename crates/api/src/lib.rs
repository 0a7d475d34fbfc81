//! Sections API server library.
//!
//! Exposes config, state, error handling, the response envelope and routes
//! so integration tests and the binary entrypoint can both access them.

pub mod app;
pub mod config;
pub mod error;
pub mod handlers;
pub mod response;
pub mod routes;
pub mod state;
