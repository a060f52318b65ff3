//! Road network CLI library.
//!
//! This crate provides the subcommand handlers, terminal styling, and output
//! formatting used by the `roadnet-cli` binary.

pub mod commands;
pub mod output;
pub mod terminal;
