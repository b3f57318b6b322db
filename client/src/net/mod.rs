//! Networking modules for the REST backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! `gateway` is the only code that talks to `transport`; `api` layers typed
//! endpoints on top, `error` defines the failure taxonomy, and `types` the
//! shared wire schema.

pub mod api;
pub mod error;
pub mod gateway;
pub mod transport;
pub mod types;

#[cfg(test)]
pub(crate) mod test_support;
