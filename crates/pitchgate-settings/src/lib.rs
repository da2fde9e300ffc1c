//! Config parsing and table resolution.
//!
//! This crate is intentionally IO-free: it parses and resolves configuration
//! provided as strings, and owns the only path that constructs
//! [`pitchgate_domain::PolicyTables`] for production use. A table set that
//! fails validation is never handed to the query layer.

#![forbid(unsafe_code)]

mod model;
mod presets;
mod resolve;

pub use model::{HierarchyConfig, PitchgateConfigV1};
pub use presets::default_tables;
pub use resolve::{ConfigError, ConfigIssue, ResolvedTables, resolve_config};

/// Parse `pitchgate.toml` (or equivalent) into a typed model.
pub fn parse_config_toml(input: &str) -> anyhow::Result<PitchgateConfigV1> {
    let cfg: PitchgateConfigV1 = toml::from_str(input)?;
    Ok(cfg)
}
