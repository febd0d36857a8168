//! Unisource command-line library.
//!
//! The `unisource` binary is a thin argument dispatcher over
//! [`commands`]; everything it does is reachable from here for tests.

pub mod commands;
mod tracing_setup;

pub use tracing_setup::init_tracing;
