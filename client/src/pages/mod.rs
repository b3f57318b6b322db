//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Public auth screens (`signin`, `signup`, `password_reset`) and protected
//! screens (`home`, `resource`) are all mounted behind the route guard.

pub mod home;
pub mod password_reset;
pub mod resource;
pub mod signin;
pub mod signup;
