//! Test support for the `cah` workspace: one logging setup shared by unit
//! and integration tests.

pub mod logging;
