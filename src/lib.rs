//! SecurePass: a password generator with a JSON-backed history of saved passwords.
//!
//! This library crate exposes all modules for use by the binaries and integration tests.

pub mod app;
pub mod rpc_handler;
pub mod services;
pub mod types;
