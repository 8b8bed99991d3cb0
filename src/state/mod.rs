//! Application state provided via Leptos context at the app root.
//!
//! SYSTEM CONTEXT
//! ==============
//! `session` owns authentication; `resource` owns the per-entity
//! paginated collections. Pages read and drive these through
//! `RwSignal` handles — there are no ambient globals.

pub mod resource;
pub mod session;
