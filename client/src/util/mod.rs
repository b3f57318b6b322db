//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns (storage, document
//! navigation) and the guard decision from page and component logic.

pub mod auth;
pub mod navigation;
pub mod session_store;
pub mod storage;
