//! laudo-export
//!
//! Narrative report generation: one pure function per report section, and
//! the assembler that joins them into plain text or a minimal HTML fragment
//! for the host editor.

pub mod assemble;
pub mod error;
pub mod render;
pub mod sections;
