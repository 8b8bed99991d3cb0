//! Cross-cutting helpers: credential persistence, route guards, formatting.

pub mod credentials;
pub mod format;
pub mod guard;
