//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! `session` is the plain token/profile pair; `auth` wraps it in the single
//! reactive authority every component reads through.

pub mod auth;
pub mod session;
