//! Pure authorization decisions (no IO).
//!
//! Input: immutable policy tables constructed elsewhere (see
//! `pitchgate-settings`) and per-request [`ActorContext`] values built by the
//! calling layer.
//! Output: booleans, access grades, and small collections. Every query is
//! fail-closed: unknown roles, tokens, categories, or actions answer
//! false / `AccessLevel::None` / empty.
//!
//! There is no shared mutable state: the engine is `Send + Sync` by
//! construction and any number of callers may query it concurrently. Hosts
//! that hot-reload configuration swap the whole engine value, never a table in
//! place.

#![forbid(unsafe_code)]

pub mod actor;
pub mod tables;
pub mod test_support;

mod derived;
mod engine;
mod summary;

pub use actor::{ActorContext, ResourceClaim};
pub use engine::PolicyEngine;
pub use tables::{PermissionSet, PolicyTables, RoleHierarchy};

#[cfg(test)]
mod proptests;
