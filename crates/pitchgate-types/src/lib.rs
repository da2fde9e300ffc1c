//! Stable DTOs and identifiers used across the pitchgate workspace.
//!
//! This crate is intentionally boring:
//! - closed identifier enums (roles, tiers, domains, access levels)
//! - the permission token newtype and its normalization rules
//! - data types for the emitted audit summary
//! - explain registry for permission documentation
//!
//! Free-text inputs are normalized here, once, at the boundary. The domain
//! crate only ever compares canonical values.

#![forbid(unsafe_code)]

pub mod catalog;
pub mod explain;
pub mod ids;
pub mod summary;
pub mod token;

pub use catalog::{
    AccessLevel, Domain, ExportDataType, OwnedResource, ResourceCategory, Role, TeamAction, Tier,
};
pub use explain::{Explanation, all_domains, all_roles, lookup_explanation};
pub use summary::{
    AccessLevelSummary, AuditEnvelope, PermissionSummary, SCHEMA_AUDIT_V1, ToolMeta,
};
pub use token::Permission;
