//! Volunteer Hub server library: configuration, logging, exit codes, and the
//! HTTP serve loop.
//!
//! The binary in `main.rs` is a thin clap layer over these modules; keeping
//! them in a library makes the serve loop reachable from integration tests.

pub mod config;
pub mod exit_codes;
pub mod http;
pub mod logging;
