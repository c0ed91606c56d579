//! # eGov Login Core
//!
//! Core business logic and domain layer for the eGov citizen-login backend.
//!
//! This crate is infrastructure-free: the upstream eGov service and the
//! profile store appear only as traits ([`clients::EgovClient`] and
//! [`repositories::ProfileRepository`]), implemented by the `eg_infra`
//! crate for production and by in-crate mocks for tests.

pub mod clients;
pub mod domain;
pub mod errors;
pub mod extract;
pub mod repositories;
pub mod services;
