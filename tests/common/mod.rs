//! Shared test utilities for astrocal integration harnesses.
//!
//! Import what you need via `mod common; use common::…;` at the top of each
//! harness file. The fake HTTP server binds ephemeral loopback ports, so
//! harnesses can run in parallel without colliding.
#![allow(dead_code)]

pub mod assertions;
pub mod builders;
pub mod fake_server;
pub mod fixtures;

pub use assertions::*;
pub use builders::*;
pub use fake_server::*;
pub use fixtures::*;
