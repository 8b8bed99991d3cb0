//! Route components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every page installs a route guard before rendering and drives shared
//! state from `state::` through `spawn_local` tasks. Form pages keep
//! user input on failure and render errors inline; list pages keep the
//! last-good page visible under an error banner.

pub mod author_detail;
pub mod author_form;
pub mod author_list;
pub mod book_detail;
pub mod book_form;
pub mod book_list;
pub mod login;
pub mod register;
pub mod reports;
pub mod store_detail;
pub mod store_form;
pub mod store_list;
pub mod user_form;
pub mod user_list;
