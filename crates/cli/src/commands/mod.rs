//! CLI subcommands.

pub mod migrate;
pub mod seed;
pub mod sync;
