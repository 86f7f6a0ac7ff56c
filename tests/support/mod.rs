//! Shared helpers for integration tests.
//!
//! Each test crate pulls in this module and uses a subset of it.
#![allow(dead_code, reason = "each test crate uses a subset of the helpers")]

pub mod env;
pub mod project;
