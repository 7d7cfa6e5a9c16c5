//! Test support shared by the backend's integration test binaries.
//!
//! Kept free of backend types so it can assert on the wire contract only.

pub mod logging;
pub mod problem_details;
