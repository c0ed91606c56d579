//! Business services.

pub mod login;

pub use login::{LoginService, LoginServiceConfig};
