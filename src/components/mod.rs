//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render list chrome (pagination, search, dialogs, banners)
//! and the navbar, reading shared state from Leptos context providers.

pub mod confirmation_dialog;
pub mod error_banner;
pub mod loading_spinner;
pub mod navbar;
pub mod pagination;
pub mod search_input;
