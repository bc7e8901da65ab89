//! laudo-core
//!
//! Pure domain types for structured imaging reports: scales, categories,
//! catalog options, the `Case` aggregate with its typed field updates, and
//! the derived-measurement helpers. No rendering and no I/O; this is the
//! shared vocabulary of the Laudo workspace.

pub mod category;
pub mod error;
pub mod measurements;
pub mod models;
pub mod option;
