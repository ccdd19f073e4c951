//! Integration test utilities for Atrium
//!
//! In-process helpers drive the router against in-memory adapters; the live
//! server helpers talk to a real PostgreSQL database over HTTP.

pub mod fixtures;
pub mod helpers;

pub use fixtures::*;
pub use helpers::*;
