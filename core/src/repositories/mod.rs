//! Repository traits and mock implementations.

pub mod profile;

pub use profile::{MockProfileRepository, ProfileRepository};
