//! Browser-facing helpers.
//!
//! `session_storage` owns the persisted auth-token slot so routing and pages
//! never call `web_sys` storage APIs directly.

pub mod session_storage;
