//! Granel server library.
//!
//! Everything the binary wires together, exposed as a library so the CLI
//! and the integration tests can reuse the configuration, storage layer,
//! and models.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod routes;
pub mod state;
