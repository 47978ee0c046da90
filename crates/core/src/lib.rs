//! Domain types and error kinds shared across the staffdir crates.
//!
//! Contains no I/O; everything here is consumed by the `staffdir-db`
//! repository layer and the `staffdir-api` HTTP layer.

pub mod error;
pub mod types;
