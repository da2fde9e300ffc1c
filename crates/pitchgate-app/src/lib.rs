//! Use case orchestration for pitchgate.
//!
//! This crate provides the application layer: use cases that coordinate the
//! settings, domain, and rendering pieces. It is intentionally thin and
//! delegates the heavy lifting to the appropriate layers.
//!
//! The CLI crate depends on this; it only handles argument parsing and I/O.

#![forbid(unsafe_code)]

mod audit;
mod explain;
mod render;
mod validate;

pub use audit::{AuditInput, AuditOutput, run_audit, serialize_envelope};
pub use explain::{ExplainOutput, format_explanation, format_not_found, run_explain};
pub use render::render_markdown;
pub use validate::{ValidateOutput, format_validate, run_validate, validate_exit_code};
