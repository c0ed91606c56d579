//! Upstream eGov client abstraction.

pub mod egov;
pub mod mock;

pub use egov::{EgovClient, StepResult};
pub use mock::MockEgovClient;
