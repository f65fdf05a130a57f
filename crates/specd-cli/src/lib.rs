//! # specd-cli — Command Modules
//!
//! Handler modules for the `specd` binary. Each subcommand lives in its own
//! module with a clap `Args` struct and a `run` function; `main.rs` only
//! parses and dispatches.

pub mod validate;
