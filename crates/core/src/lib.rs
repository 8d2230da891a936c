//! Granel Core - Shared types library.
//!
//! This crate provides common types used across all Granel components:
//! - `server` - Storefront and admin HTTP API
//! - `cli` - Command-line tools for migrations, seeding, and catalog sync
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no database access, no HTTP
//! clients. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs, emails, price tiers, and
//!   statuses

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
