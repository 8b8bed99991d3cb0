//! Networking modules for the catalog REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` holds the raw HTTP helpers, `types` the wire schema, `resource`
//! the generic per-entity paginated client, and `reports` the export
//! download flow.

pub mod api;
pub mod reports;
pub mod resource;
pub mod types;
