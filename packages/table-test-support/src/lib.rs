//! Test support for the table workspace: one-time logging setup shared by
//! unit tests and integration tests.

pub mod logging;
