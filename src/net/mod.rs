//! Network layer for the Biblo REST backend.

pub mod api;
pub mod types;
