//! Tolerant extraction of business data from upstream payloads.
//!
//! The eGov responses are not contractually stable: key casing varies
//! between environments and the citizen record has been observed at
//! different nesting depths. These modules centralize every accepted
//! spelling in one alias table and keep the traversal bounded, so the
//! tolerance policy is data rather than scattered conditionals.

pub mod aliases;
pub mod citizen;
pub mod token;

pub use citizen::extract_citizen;
pub use token::extract_token;
