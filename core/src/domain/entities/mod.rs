//! Domain entities.

pub mod citizen;
pub mod profile;

pub use citizen::CitizenRecord;
pub use profile::{Profile, ProfileSummary};
