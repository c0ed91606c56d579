//! Login orchestration service.

mod config;
mod service;

pub use config::LoginServiceConfig;
pub use service::LoginService;

#[cfg(test)]
mod tests;
