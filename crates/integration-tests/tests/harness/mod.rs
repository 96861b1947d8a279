//! Shared harness for integration tests
//!
//! Each test binary pulls in the pieces it needs, so some items are
//! unused from any single binary's point of view.
#![allow(dead_code)]

pub mod config;
pub mod mock_whisper;
pub mod server;
