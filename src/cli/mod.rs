//! Command implementations behind the `hopg` binary.

pub mod commands;
