//! Value objects shared across the orchestration flow.

pub mod login;
pub mod mode;
pub mod step;

pub use login::{LoginOutcome, LoginRequest, NotificationStatus};
pub use mode::Mode;
pub use step::Step;
