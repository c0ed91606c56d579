//! Shared configuration and utilities for the eGov login backend.
//!
//! This crate holds the pieces that every layer needs but that belong to
//! none of them: environment-driven configuration structs, the configuration
//! error type, and small helpers such as secret masking.

pub mod config;
pub mod errors;
pub mod utils;
