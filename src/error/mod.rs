//! Error handling
//!
//! Defines error types and handling for the VFS shell.

pub mod types;

pub use types::*;
