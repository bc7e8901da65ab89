//! laudo-cli
//!
//! Host-side harness for the engine: reads a case, classifies it and
//! prints the report. Configuration and logging live here; the library
//! crates do no I/O.

pub mod cli;
pub mod commands;
pub mod config;
